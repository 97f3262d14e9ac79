use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::{SetupField, SetupForm};

const LABEL_WIDTH: usize = 14;

pub fn render(frame: &mut Frame, area: Rect, form: &SetupForm) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(17),
        Constraint::Fill(1),
    ])
    .split(area);
    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(72),
        Constraint::Fill(1),
    ])
    .split(chunks[1]);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "BUILD YOUR QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        field_line(form, SetupField::ApiKey, &mask(&form.api_key), true),
        field_line(form, SetupField::Topic, &form.topic, true),
        field_line(form, SetupField::Difficulty, &format!("< {} >", form.difficulty), false),
        field_line(form, SetupField::Count, &format!("< {} >", form.count), false),
        field_line(
            form,
            SetupField::Sample,
            if form.use_sample { "[x] no API call" } else { "[ ] no API call" },
            false,
        ),
        Line::from(""),
    ];

    match &form.error {
        Some(error) => content.push(
            Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)))
                .alignment(Alignment::Center),
        ),
        None => content.push(Line::from("")),
    }

    content.push(Line::from(""));
    content.push(
        Line::from("tab/arrows move  ·  ←/→ change  ·  enter generate  ·  esc quit".fg(Color::DarkGray))
            .alignment(Alignment::Center),
    );

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(widget, columns[1]);
}

fn field_line<'a>(form: &SetupForm, field: SetupField, value: &str, editable: bool) -> Line<'a> {
    let focused = form.focus == field;
    let label_style = if focused {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::styled(if focused { "> " } else { "  " }, label_style),
        Span::styled(format!("{:<width$}", label(field), width = LABEL_WIDTH), label_style),
        Span::styled(value.to_string(), value_style),
    ];
    if focused && editable {
        spans.push(Span::styled("_", value_style));
    }
    Line::from(spans)
}

fn label(field: SetupField) -> &'static str {
    match field {
        SetupField::ApiKey => "API key",
        SetupField::Topic => "Topic",
        SetupField::Difficulty => "Difficulty",
        SetupField::Count => "Questions",
        SetupField::Sample => "Sample quiz",
    }
}

fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_hides_every_character() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("abc123"), "******");
    }
}
