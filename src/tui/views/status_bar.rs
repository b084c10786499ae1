//! Status bar view
//!
//! Shows remaining salary, available credit, the low-funds flag and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::services::Screen;
use crate::tui::app::App;

fn hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Splash => " Enter:Continue  q:Quit ",
        Screen::Login => " Enter:Sign in  Tab:Next  F1:Help  Ctrl+c:Quit ",
        Screen::Signup | Screen::ForgotPassword | Screen::ResetPassword => {
            " Enter:Submit  Esc:Back  F1:Help "
        }
        Screen::Dashboard => " a:Expense  p:Pay bill  Enter:Open  ?:Help  q:Quit ",
        Screen::InvestmentDetails => " i:Invest  Esc:Back  ?:Help ",
        Screen::InvestmentPurchase => " Enter:Confirm  Esc:Back ",
        Screen::InvestmentResult => " Enter:Dashboard ",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let screen = app.screen();
    let mut spans = vec![];

    if screen == Screen::Dashboard || screen.is_investment() {
        let metrics = app.metrics();

        let salary_color = if metrics.remaining_salary.is_negative() {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::styled(" Salary: ", Style::default().fg(Color::White)));
        spans.push(Span::styled(
            app.settings.format_money(metrics.remaining_salary),
            Style::default()
                .fg(salary_color)
                .add_modifier(Modifier::BOLD),
        ));

        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("Credit: ", Style::default().fg(Color::White)));
        spans.push(Span::styled(
            app.settings.format_money(metrics.available_credit),
            Style::default().fg(Color::Cyan),
        ));

        if metrics.is_low_funds {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(
                "LOW FUNDS",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    } else {
        spans.push(Span::styled(
            format!(" {}", screen.title()),
            Style::default().fg(Color::Cyan),
        ));
    }

    let hints = hints(screen);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black)),
        area,
    );
}
