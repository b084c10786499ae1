//! Help dialog
//!
//! Shows keyboard shortcuts for the current screen

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::services::Screen;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.screen()))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Help lines for a screen
fn help_lines(screen: Screen) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("Ctrl+c", "Quit application"),
        key_line("?", "Show/hide help (outside text fields)"),
        key_line("Esc", "Close dialog / go back"),
        Line::from(""),
        section(screen.title()),
        Line::from(""),
    ];

    match screen {
        Screen::Splash => {
            lines.push(key_line("Enter", "Skip to sign in"));
            lines.push(key_line("q", "Quit"));
        }
        Screen::Login => {
            lines.push(key_line("Tab", "Next field"));
            lines.push(key_line("Enter", "Sign in"));
            lines.push(key_line("Ctrl+n", "Create an account"));
            lines.push(key_line("Ctrl+f", "Forgot password"));
        }
        Screen::Signup | Screen::ForgotPassword | Screen::ResetPassword => {
            lines.push(key_line("Tab", "Next field"));
            lines.push(key_line("Enter", "Submit"));
            lines.push(key_line("Esc", "Back to sign in"));
        }
        Screen::Dashboard => {
            lines.push(key_line("a", "Add expense"));
            lines.push(key_line("p", "Pay credit card bill"));
            lines.push(key_line("j/k", "Move investment selection"));
            lines.push(key_line("Enter", "Open investment"));
            lines.push(key_line("L", "Log out"));
            lines.push(key_line("Esc", "Dismiss notification"));
            lines.push(key_line("q", "Quit"));
        }
        Screen::InvestmentDetails => {
            lines.push(key_line("i/Enter", "Invest in this product"));
            lines.push(key_line("Esc/b", "Back to dashboard"));
        }
        Screen::InvestmentPurchase => {
            lines.push(key_line("Enter", "Confirm amount"));
            lines.push(key_line("Esc", "Back to dashboard"));
        }
        Screen::InvestmentResult => {
            lines.push(key_line("Enter/Esc", "Back to dashboard"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
