//! Rendering for the chat client

use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Sender;
use crate::ui::app::App;

pub fn render(app: &mut App, frame: &mut Frame) {
    // First paint is a static placeholder so the initial frame never differs
    // from what the interactive layout would show mid-draw
    if !app.mounted {
        render_placeholder(frame);
        app.mounted = true;
        return;
    }

    let area = frame.area();

    let [header_area, chat_area, input_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area);
    render_chat(app, frame, chat_area);
    render_input(app, frame, input_area);
    render_footer(frame, footer_area);
}

fn render_placeholder(frame: &mut Frame) {
    let area = frame.area();

    let [header_area, body_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    render_header(frame, header_area);

    let loading = Paragraph::new("Loading...")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(loading, body_area);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "🌿 Health & Wellness Assistant",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(Span::styled(
            "Ask me anything about fitness, nutrition, or general health!",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn render_chat(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::NONE);
    let inner = block.inner(area);

    // Record viewport size for wrap-aware auto-scroll
    app.chat_height = inner.height;
    app.chat_width = inner.width;

    if app.history.is_empty() && !app.loading {
        render_welcome(frame, inner);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();

    for message in app.history.iter() {
        match message.sender {
            Sender::User => {
                lines.push(Line::from(Span::styled(
                    "You:",
                    Style::default().fg(Color::Cyan).bold(),
                )));
            }
            Sender::Bot => {
                lines.push(Line::from(Span::styled(
                    "🤖 Bot:",
                    Style::default().fg(Color::Green).bold(),
                )));
            }
        }

        for text_line in message.text.lines() {
            lines.push(Line::from(text_line.to_string()));
        }

        // Source tag and token badge, bot answers only
        if let Some(source) = message.source {
            let mut spans = vec![Span::styled(
                format!("[{}]", source.label()),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::ITALIC),
            )];
            if let Some(tokens) = message.tokens_used {
                spans.push(Span::styled(
                    format!(" {} tokens", tokens),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
    }

    if app.loading {
        lines.push(Line::from(Span::styled(
            "🤖 Bot:",
            Style::default().fg(Color::Green).bold(),
        )));
        lines.push(Line::from(Span::styled(
            typing_indicator(app.animation_frame),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let chat = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(chat, inner);
}

fn render_welcome(frame: &mut Frame, area: Rect) {
    let welcome = Paragraph::new(vec![
        Line::default(),
        Line::from("Hi there! I can help with:"),
        Line::from("  • Weight loss plans"),
        Line::from("  • Exercise techniques"),
        Line::from("  • Healthy recipes"),
        Line::from("  • General wellness tips"),
    ])
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(welcome, area);
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let (title, style) = if app.loading {
        (
            " Sending... ",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (" Ask about health... ", Style::default())
    };

    let input = Paragraph::new(app.input.as_str()).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(if app.loading {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Green)
            }),
    );
    frame.render_widget(input, area);

    if !app.loading {
        frame.set_cursor_position(Position::new(
            area.x + 1 + app.cursor as u16,
            area.y + 1,
        ));
    }
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().fg(Color::White);

    let hints = Line::from(vec![
        Span::styled(" Enter ", key_style),
        Span::styled(" send ", label_style),
        Span::styled(" Esc ", key_style),
        Span::styled(" quit ", label_style),
    ]);

    frame.render_widget(Paragraph::new(hints), area);
}

/// Ellipsis animation for the typing indicator
fn typing_indicator(frame: u8) -> &'static str {
    match frame % 3 {
        0 => "•",
        1 => "• •",
        _ => "• • •",
    }
}
