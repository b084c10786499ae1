//! Splash screen

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

const BANNER: [&str; 5] = [
    "  ___          _          _   ___           ",
    " | _ )_  _  __| |__ _ ___| |_| _ \\_ _ ___  ",
    " | _ \\ || |/ _` / _` / -_)  _|  _/ '_/ _ \\ ",
    " |___/\\_,_|\\__,_\\__, \\___|\\__|_| |_| \\___/ ",
    "                |___/                      ",
];

/// Share of the splash delay that has passed, in `[0, 1]`
pub fn splash_progress(app: &App) -> f64 {
    let delay = app.settings.splash_duration();
    let Some(timer) = app.navigator.splash_timer() else {
        return 1.0;
    };
    if delay.is_zero() {
        return 1.0;
    }
    let remaining = timer.remaining(app.last_tick);
    (1.0 - remaining.as_secs_f64() / delay.as_secs_f64()).clamp(0.0, 1.0)
}

/// Render the splash banner with a progress bar for the auto-advance delay
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let panel = centered_rect_fixed(50, 11, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Banner
            Constraint::Length(1), // Tagline
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Progress
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hint
            Constraint::Min(0),
        ])
        .split(panel);

    let banner: Vec<Line> = BANNER
        .iter()
        .map(|l| {
            Line::from(Span::styled(
                *l,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(banner).alignment(Alignment::Center), chunks[0]);

    frame.render_widget(
        Paragraph::new("Smart budgeting and investing, right in your terminal")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        chunks[1],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(splash_progress(app))
        .label("");
    frame.render_widget(gauge, chunks[3]);

    frame.render_widget(
        Paragraph::new("Press Enter to continue")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[5],
    );
}
