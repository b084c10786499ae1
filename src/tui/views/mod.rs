//! TUI Views module
//!
//! One view per screen plus the header and status bar.

pub mod auth;
pub mod dashboard;
pub mod investment;
pub mod splash;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::notification::NotificationWidget;
use crate::services::Screen;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match app.screen() {
        Screen::Splash => splash::render(frame, app, layout.main),
        Screen::Login | Screen::Signup | Screen::ForgotPassword | Screen::ResetPassword => {
            auth::render(frame, app, layout.main)
        }
        Screen::Dashboard => dashboard::render(frame, app, layout.main),
        Screen::InvestmentDetails => investment::render_details(frame, app, layout.main),
        Screen::InvestmentPurchase => investment::render_purchase(frame, app, layout.main),
        Screen::InvestmentResult => investment::render_result(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::PayCreditBill => dialogs::payment::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }

    render_notification(frame, app);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            " BudgetPro ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", app.screen().title()),
            Style::default().fg(Color::White),
        ),
    ];
    if let Some(ref email) = app.user_email {
        spans.push(Span::styled(
            format!("  ·  {}", email),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Left),
        area,
    );
}

/// Toast in the top-right corner
fn render_notification(frame: &mut Frame, app: &App) {
    let Some(notification) = app.notifications.current() else {
        return;
    };
    let area = frame.area();
    let width = 44u16.min(area.width);
    let height = 4u16.min(area.height);
    let rect = Rect::new(area.x + area.width - width, area.y + 1, width, height).intersection(area);
    frame.render_widget(NotificationWidget::new(notification), rect);
}
