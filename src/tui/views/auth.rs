//! Sign-in, sign-up and password recovery forms
//!
//! All four screens share one form state; the fields come from the screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::error::ValidationError;
use crate::services::Screen;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// (label, masked) for each field of a screen's form
fn fields_for(screen: Screen) -> &'static [(&'static str, bool)] {
    match screen {
        Screen::Login => &[("Email", false), ("Password", true)],
        Screen::Signup => &[
            ("Full name", false),
            ("Email", false),
            ("Password", true),
            ("Confirm password", true),
        ],
        Screen::ForgotPassword => &[("Email", false)],
        Screen::ResetPassword => &[("New password", true), ("Confirm password", true)],
        _ => &[],
    }
}

/// Form state for the authentication screens
#[derive(Debug, Clone)]
pub struct AuthForm {
    pub screen: Screen,
    pub inputs: Vec<TextInput>,
    pub focus: usize,
    pub error_message: Option<String>,
}

impl AuthForm {
    /// Empty form with the fields of `screen`
    pub fn for_screen(screen: Screen) -> Self {
        let inputs = fields_for(screen)
            .iter()
            .map(|&(label, masked)| {
                let input = TextInput::new().label(label);
                if masked {
                    input.masked()
                } else {
                    input
                }
            })
            .collect();

        let mut form = Self {
            screen,
            inputs,
            focus: 0,
            error_message: None,
        };
        form.update_focus();
        form
    }

    fn update_focus(&mut self) {
        for (i, input) in self.inputs.iter_mut().enumerate() {
            input.focused = i == self.focus;
        }
    }

    pub fn next_field(&mut self) {
        if !self.inputs.is_empty() {
            self.focus = (self.focus + 1) % self.inputs.len();
            self.update_focus();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.inputs.is_empty() {
            self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
            self.update_focus();
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        self.inputs.get_mut(self.focus)
    }

    /// Value of the field with `label`, or "" if the form has no such field
    pub fn value(&self, label: &str) -> &str {
        self.inputs
            .iter()
            .find(|i| i.label == label)
            .map(|i| i.value())
            .unwrap_or("")
    }

    /// Required fields and matching password confirmation
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (input, &(label, masked)) in self.inputs.iter().zip(fields_for(self.screen)) {
            let empty = if masked {
                input.value().is_empty()
            } else {
                input.value().trim().is_empty()
            };
            if empty {
                return Err(ValidationError::MissingField(label));
            }
        }

        if let [.., password, confirm] = self.inputs.as_slice() {
            if confirm.label == "Confirm password" && password.value() != confirm.value() {
                return Err(ValidationError::PasswordMismatch);
            }
        }

        Ok(())
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

fn subtitle(screen: Screen) -> &'static str {
    match screen {
        Screen::Login => "Welcome back. Sign in to manage your budget.",
        Screen::Signup => "Create an account to start tracking expenses.",
        Screen::ForgotPassword => "Enter your email and we'll send a reset link.",
        Screen::ResetPassword => "Choose a new password for your account.",
        _ => "",
    }
}

fn footer(screen: Screen) -> Line<'static> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    match screen {
        Screen::Login => Line::from(vec![
            key("Enter"),
            Span::raw(" sign in  "),
            key("Ctrl+n"),
            Span::raw(" sign up  "),
            key("Ctrl+f"),
            Span::raw(" forgot password"),
        ]),
        _ => Line::from(vec![
            key("Enter"),
            Span::raw(" submit  "),
            key("Esc"),
            Span::raw(" back to sign in"),
        ]),
    }
}

/// Render the form for the current authentication screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.auth_form;
    let height = form.inputs.len() as u16 + 9;
    let panel = centered_rect_fixed(60, height, area);

    let block = Block::default()
        .title(format!(" {} ", form.screen.title()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, panel);

    let inner = Rect {
        x: panel.x + 2,
        y: panel.y + 1,
        width: panel.width.saturating_sub(4),
        height: panel.height.saturating_sub(2),
    };

    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    constraints.extend(form.inputs.iter().map(|_| Constraint::Length(1)));
    constraints.extend([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(
        Paragraph::new(subtitle(form.screen)).style(Style::default().fg(Color::Gray)),
        chunks[0],
    );

    let first_field = 2;
    for (i, input) in form.inputs.iter().enumerate() {
        frame.render_widget(input.clone(), chunks[first_field + i]);
    }

    let after = first_field + form.inputs.len();
    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            chunks[after + 1],
        );
    }
    frame.render_widget(Paragraph::new(footer(form.screen)), chunks[after + 2]);
}
