//! TUI rendering with ratatui
//!
//! Form, actions and results for the assistant interface.

use super::app::App;
use crate::config::ThemeMode;
use crate::core::Field;
use crate::output::formatters::{constraint_tiles, display_words};
use crate::session::{NO_MATCHES_MESSAGE, RequestOutcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Colours derived from the theme mode
#[derive(Debug, Clone, Copy)]
struct Palette {
    text: Color,
    muted: Color,
    accent: Color,
    success: Color,
    warning: Color,
    error: Color,
}

impl Palette {
    const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::System => Self {
                text: Color::Reset,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
            },
            ThemeMode::Light => Self {
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                success: Color::Rgb(83, 141, 78),
                warning: Color::Rgb(181, 159, 59),
                error: Color::Rgb(190, 30, 45),
            },
            ThemeMode::Dark => Self {
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::LightCyan,
                success: Color::LightGreen,
                warning: Color::LightYellow,
                error: Color::LightRed,
            },
        }
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let palette = Palette::for_mode(app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Letters
            Constraint::Length(4), // Exclude
            Constraint::Length(4), // Include
            Constraint::Length(3), // Actions
            Constraint::Min(5),    // Results
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, &palette, chunks[0]);
    for (field, area) in Field::FORM_ORDER.into_iter().zip(&chunks[1..4]) {
        render_field(f, app, &palette, field, *area);
    }
    render_actions(f, app, &palette, chunks[4]);
    render_results(f, app, &palette, chunks[5]);
    render_status(f, app, &palette, chunks[6]);
}

fn render_header(f: &mut Frame, palette: &Palette, area: Rect) {
    let header = Paragraph::new("WORDLE ASSIST")
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(palette.accent)),
        );
    f.render_widget(header, area);
}

fn field_hint(field: Field) -> &'static str {
    match field {
        Field::Pattern => {
            "Green letters by position, '_' elsewhere. For BOARD with a green O, enter _O___"
        }
        Field::Exclude => "Grey letters, no underscores needed. For BOARD, enter AD",
        Field::Include => {
            "Yellow letters by position, '_' elsewhere. For BOARD with yellow B and R, enter B__R_"
        }
    }
}

fn field_placeholder(field: Field) -> &'static str {
    match field {
        Field::Pattern => "Enter letters",
        Field::Exclude => "Enter letters to exclude",
        Field::Include => "Enter letters to include",
    }
}

fn render_field(f: &mut Frame, app: &App, palette: &Palette, field: Field, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let focused = app.focus == field;
    let color = match field {
        Field::Pattern => palette.success,
        Field::Include => palette.warning,
        Field::Exclude => palette.muted,
    };
    let border_style = if focused {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };

    let value = app.session.fields().get(field);
    let content = if value.is_empty() && !focused {
        Span::styled(
            field_placeholder(field),
            Style::default().fg(palette.muted),
        )
    } else {
        Span::styled(
            if focused { format!("{value}▏") } else { value.to_string() },
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )
    };

    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_type(if focused {
                BorderType::Double
            } else {
                BorderType::Rounded
            })
            .style(border_style),
    );
    f.render_widget(input, chunks[0]);

    let hint = Paragraph::new(field_hint(field))
        .style(Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC));
    f.render_widget(hint, chunks[1]);
}

fn render_actions(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let pending = app.session.outcome().is_pending();
    let submit_label = if pending { "SEARCHING..." } else { "FIND WORDS" };
    let submit_color = if app.session.can_submit() {
        palette.accent
    } else {
        palette.muted
    };
    let submit = Paragraph::new(format!("{submit_label}  (Enter)"))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(submit_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .style(Style::default().fg(submit_color)),
        );
    f.render_widget(submit, chunks[0]);

    let clear = Paragraph::new("CLEAR  (Ctrl-L)")
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(palette.muted)),
        );
    f.render_widget(clear, chunks[1]);
}

fn render_results(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let outcome = app.session.outcome();
    let tiles = constraint_tiles(app.session.fields());

    let mut lines = Vec::new();
    if !tiles.is_empty() {
        lines.push(Line::from(tiles).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    match outcome {
        RequestOutcome::Idle => lines.push(
            Line::from("Fill in what you know and press Enter")
                .style(Style::default().fg(palette.muted)),
        ),
        RequestOutcome::Pending => lines.push(
            Line::from("SEARCHING...").style(
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ),
        RequestOutcome::Failure(message) => lines.push(
            Line::from(message.as_str()).style(
                Style::default()
                    .fg(palette.error)
                    .add_modifier(Modifier::BOLD),
            ),
        ),
        RequestOutcome::Success(words) if words.is_empty() => {
            lines.push(Line::from(NO_MATCHES_MESSAGE).style(Style::default().fg(palette.text)));
        }
        RequestOutcome::Success(words) => {
            let spans: Vec<Span> = display_words(words)
                .into_iter()
                .flat_map(|word| {
                    [
                        Span::styled(
                            word,
                            Style::default()
                                .fg(palette.text)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("   "),
                    ]
                })
                .collect();
            lines.push(Line::from(spans));
        }
    }

    let title = match outcome {
        RequestOutcome::Success(words) if !words.is_empty() => {
            format!(" Results ({}) ", words.len())
        }
        _ => " Results ".to_string(),
    };

    let results = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(palette.accent)),
        );
    f.render_widget(results, area);
}

fn render_status(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(15),
            Constraint::Percentage(45),
        ])
        .split(area);

    let route = Paragraph::new(format!("Route: {}", app.session.route()))
        .style(Style::default().fg(palette.text));
    f.render_widget(route, chunks[0]);

    let theme = Paragraph::new(format!("Theme: {}", app.theme))
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.muted));
    f.render_widget(theme, chunks[1]);

    let help = Paragraph::new("Tab: Next | Enter: Find | Ctrl-L: Clear | Ctrl-T: Theme | Esc: Quit")
        .alignment(Alignment::Right)
        .style(Style::default().fg(palette.muted));
    f.render_widget(help, chunks[2]);
}
