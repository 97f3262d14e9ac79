mod quiz;
mod result;
mod setup;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::{App, AppState};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &app.state {
        AppState::Setup => setup::render(frame, area, app.form()),
        AppState::Loading { title } => render_loading(frame, area, title),
        AppState::Quiz(quiz) => quiz::render(frame, area, quiz),
        AppState::Result(finished) => result::render(frame, area, finished),
    }
}

fn render_loading(frame: &mut Frame, area: Rect, title: &str) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(7),
        Constraint::Percentage(40),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Generating your quiz, please wait...",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from("esc quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}
