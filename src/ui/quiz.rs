use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::ActiveQuiz;

const OPTION_LABELS: [char; 4] = ['1', '2', '3', '4'];
const LOW_TIME_SECONDS: u32 = 10;

pub fn render(frame: &mut Frame, area: Rect, quiz: &ActiveQuiz) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], quiz);
    render_progress(frame, chunks[1], quiz);
    render_question_text(frame, chunks[2], &quiz.session.current_question().text);
    render_options(frame, chunks[3], quiz);
    render_controls(frame, chunks[4], quiz);
}

fn render_header(frame: &mut Frame, area: Rect, quiz: &ActiveQuiz) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).split(area);

    let title = Paragraph::new(quiz.title.as_str()).fg(Color::Cyan).bold();
    frame.render_widget(title, halves[0]);

    let remaining = quiz.session.remaining_seconds();
    let color = if remaining <= LOW_TIME_SECONDS {
        Color::Red
    } else {
        Color::Yellow
    };
    let clock = Paragraph::new(format!("⏱ {}", quiz.session.timer().display()))
        .alignment(Alignment::Right)
        .fg(color);
    frame.render_widget(clock, halves[1]);
}

fn render_progress(frame: &mut Frame, area: Rect, quiz: &ActiveQuiz) {
    let progress = format!(
        "Question {} of {}",
        quiz.session.current_question_number(),
        quiz.session.total_questions()
    );
    let widget = Paragraph::new(progress).fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, quiz: &ActiveQuiz) {
    let question = quiz.session.current_question();
    let answer = quiz.session.current_answer();
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_cursor = index == quiz.cursor;
        let is_chosen = answer == Some(option.as_str());
        let style = match (is_cursor, is_chosen) {
            (true, _) => Style::default().fg(Color::Cyan).bold(),
            (false, true) => Style::default().fg(Color::Green),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let marker = if is_cursor { ">" } else { " " };
        let check = if is_chosen { "(•)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} {}. ", check, OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect, quiz: &ActiveQuiz) {
    let mut hints = vec!["j/k move", "enter/1-4 answer"];
    if !quiz.session.is_first() {
        hints.push("h previous");
    }
    if quiz.session.is_last() {
        hints.push("s submit");
    } else {
        hints.push("l next");
    }
    hints.push("q quit");

    let widget = Paragraph::new(hints.join("  ·  "))
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
