//! Pay credit bill dialog

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// State for the payment dialog
#[derive(Debug, Clone)]
pub struct PaymentFormState {
    pub amount_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for PaymentFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentFormState {
    pub fn new() -> Self {
        let mut amount_input = TextInput::new().label("Amount").placeholder("0.00");
        amount_input.focused = true;
        Self {
            amount_input,
            error_message: None,
        }
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the payment dialog
pub fn render(frame: &mut Frame, app: &App) {
    let form = &app.payment_form;
    let outstanding = app.ledger.state().outstanding_credit();

    let area = centered_rect_fixed(52, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Pay Credit Card Bill ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Outstanding
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let outstanding_line = Line::from(vec![
        Span::styled("Outstanding: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            app.settings.format_money(outstanding),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(outstanding_line), chunks[0]);
    frame.render_widget(form.amount_input.clone(), chunks[1]);

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            chunks[3],
        );
    }

    let hints = Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::raw(" pay  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}
