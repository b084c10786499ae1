//! Add expense dialog
//!
//! Modal form with a category, an amount and a payment method toggle.
//! Validation happens in the ledger; a rejected submission keeps the typed
//! values so the user can correct them.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::PaymentMethod;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Category,
    Amount,
    Method,
}

impl ExpenseField {
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Method,
            Self::Method => Self::Category,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Category => Self::Method,
            Self::Amount => Self::Category,
            Self::Method => Self::Amount,
        }
    }
}

/// State for the add expense dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub category_input: TextInput,
    pub amount_input: TextInput,
    pub payment_method: PaymentMethod,
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: ExpenseField::Category,
            category_input: TextInput::new()
                .label("Category")
                .placeholder("e.g. Groceries"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            payment_method: PaymentMethod::default(),
            error_message: None,
        };
        state.update_focus();
        state
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    pub fn set_focus(&mut self, field: ExpenseField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.category_input.focused = self.focused_field == ExpenseField::Category;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
    }

    /// The focused text input, if the focused field is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Category => Some(&mut self.category_input),
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Method => None,
        }
    }

    pub fn toggle_method(&mut self) {
        self.payment_method = self.payment_method.toggled();
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the add expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let form = &app.expense_form;
    let area = centered_rect_fixed(56, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
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
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Method
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(form.category_input.clone(), chunks[0]);
    frame.render_widget(form.amount_input.clone(), chunks[1]);
    render_method_toggle(frame, chunks[2], form);

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            chunks[4],
        );
    }

    let hints = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" next  "),
        Span::styled("Space", Style::default().fg(Color::Cyan)),
        Span::raw(" toggle  "),
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::raw(" save  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[5]);
}

fn render_method_toggle(frame: &mut Frame, area: Rect, form: &ExpenseFormState) {
    let focused = form.focused_field == ExpenseField::Method;

    let option = |method: PaymentMethod| {
        let selected = form.payment_method == method;
        let marker = if selected { "(•) " } else { "( ) " };
        let mut style = Style::default().fg(if selected { Color::White } else { Color::DarkGray });
        if selected && focused {
            style = style.bg(Color::Cyan).fg(Color::Black);
        }
        Span::styled(format!("{}{}", marker, method), style)
    };

    let line = Line::from(vec![
        Span::styled("Pay with", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        option(PaymentMethod::Salary),
        Span::raw("  "),
        option(PaymentMethod::Credit),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle() {
        let mut form = ExpenseFormState::new();
        assert!(form.category_input.focused);

        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Amount);
        assert!(form.amount_input.focused);
        assert!(!form.category_input.focused);

        form.next_field();
        assert!(form.focused_input().is_none());

        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Category);

        form.prev_field();
        assert_eq!(form.focused_field, ExpenseField::Method);
    }

    #[test]
    fn test_toggle_method() {
        let mut form = ExpenseFormState::new();
        assert_eq!(form.payment_method, PaymentMethod::Salary);
        form.toggle_method();
        assert_eq!(form.payment_method, PaymentMethod::Credit);
        form.toggle_method();
        assert_eq!(form.payment_method, PaymentMethod::Salary);
    }
}
