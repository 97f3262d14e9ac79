use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::{FinishedQuiz, SubmitReason};
use crate::session::review;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, finished: &FinishedQuiz) {
    let percentage = finished.result.percentage();
    let grade_color = get_grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], finished, percentage, grade_color);
    render_question_breakdown(frame, chunks[2], finished);
    render_controls(frame, chunks[3]);
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    finished: &FinishedQuiz,
    percentage: f64,
    grade_color: Color,
) {
    let notice = match finished.reason {
        SubmitReason::TimeUp => Line::from(Span::styled(
            "Time is up!",
            Style::default().fg(Color::Red).bold(),
        )),
        SubmitReason::Manual => Line::from(""),
    };

    let content = vec![
        Line::from(Span::styled(
            finished.title.as_str(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        notice,
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Your score: {} of {}  ({:.0}%)",
                finished.result.correct_count, finished.result.total, percentage
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, finished: &FinishedQuiz) {
    let lines: Vec<Line> = review(&finished.session)
        .into_iter()
        .enumerate()
        .flat_map(|(index, row)| {
            let (symbol, color) = if row.is_correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            let heading = Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(truncate_question(&row.question.text), Style::default().fg(Color::Gray)),
            ]);

            let mut detail = vec![
                Span::raw("      "),
                Span::styled(
                    format!("your answer: {}", row.answer.unwrap_or("(none)")),
                    Style::default().fg(color),
                ),
            ];
            if !row.is_correct {
                detail.push(Span::styled(
                    format!("  ·  correct: {}", row.question.correct_answer),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            [heading, Line::from(detail)]
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll(((finished.scroll * 2) as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
