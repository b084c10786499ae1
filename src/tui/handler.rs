//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or the current screen. All
//! state changes go through `App` methods.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::dialogs::expense::ExpenseField;
use super::event::Event;
use super::widgets::input::TextInput;
use super::widgets::notification::Notification;
use crate::services::Screen;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event, now: Instant) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key, now),
        Event::Tick => {
            app.tick(now);
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if key.code == KeyCode::F(1) {
        app.open_dialog(ActiveDialog::Help);
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    match app.screen() {
        Screen::Splash => handle_splash_key(app, key, now),
        Screen::Login | Screen::Signup | Screen::ForgotPassword | Screen::ResetPassword => {
            handle_auth_key(app, key, now)
        }
        Screen::Dashboard => handle_dashboard_key(app, key, now),
        Screen::InvestmentDetails => handle_details_key(app, key, now),
        Screen::InvestmentPurchase => handle_purchase_key(app, key, now),
        Screen::InvestmentResult => handle_result_key(app, key, now),
    }

    Ok(())
}

/// Apply an editing key to a text input. Returns false if the key was not
/// an editing key.
fn edit_input(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            input.insert(c)
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::AddExpense => handle_expense_dialog_key(app, key),
        ActiveDialog::PayCreditBill => handle_payment_dialog_key(app, key),
        ActiveDialog::None => {}
    }
}

fn handle_expense_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            // Errors are shown in the form
            let _ = app.submit_expense();
        }
        KeyCode::Tab | KeyCode::Down => app.expense_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.expense_form.prev_field(),
        _ if app.expense_form.focused_field == ExpenseField::Method => {
            if matches!(
                key.code,
                KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
            ) {
                app.expense_form.toggle_method();
            }
        }
        _ => {
            if let Some(input) = app.expense_form.focused_input() {
                if edit_input(input, key) {
                    app.expense_form.clear_error();
                }
            }
        }
    }
}

fn handle_payment_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            let _ = app.submit_payment();
        }
        _ => {
            if edit_input(&mut app.payment_form.amount_input, key) {
                app.payment_form.clear_error();
            }
        }
    }
}

fn handle_splash_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.skip_splash(now),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        _ => {}
    }
}

fn handle_auth_key(app: &mut App, key: KeyEvent, now: Instant) {
    let screen = app.screen();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Enter => app.submit_auth(now),
        KeyCode::Tab | KeyCode::Down => app.auth_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.auth_form.prev_field(),
        KeyCode::Esc if screen != Screen::Login => {
            let _ = app.go_to(Screen::Login, now);
        }
        KeyCode::Char('n') if ctrl && screen == Screen::Login => {
            let _ = app.go_to(Screen::Signup, now);
        }
        KeyCode::Char('f') if ctrl && screen == Screen::Login => {
            let _ = app.go_to(Screen::ForgotPassword, now);
        }
        _ => {
            if let Some(input) = app.auth_form.focused_input() {
                if edit_input(input, key) {
                    app.auth_form.clear_error();
                }
            }
        }
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('p') => app.open_dialog(ActiveDialog::PayCreditBill),
        KeyCode::Char('j') | KeyCode::Down => app.select_next_investment(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev_investment(),
        KeyCode::Enter => {
            if let Err(e) = app.open_highlighted_investment(now) {
                app.notify(Notification::error(e.to_string()));
            }
        }
        KeyCode::Char('L') => app.logout(now),
        KeyCode::Esc => app.notifications.dismiss(),
        _ => {}
    }
}

fn handle_details_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('i') | KeyCode::Enter => app.start_purchase(now),
        KeyCode::Esc | KeyCode::Char('b') => app.back_to_dashboard(now),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        _ => {}
    }
}

fn handle_purchase_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Enter => {
            // Errors are shown under the input
            let _ = app.confirm_purchase(now);
        }
        KeyCode::Esc => app.back_to_dashboard(now),
        _ => {
            if edit_input(&mut app.purchase_input, key) {
                app.purchase_error = None;
            }
        }
    }
}

fn handle_result_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b') => app.back_to_dashboard(now),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{LedgerState, Money, PaymentMethod};
    use crate::services::{CyclingIconPicker, DemoAuthenticator, LedgerService};

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE), now).unwrap();
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    fn new_app(settings: &Settings) -> App<'_> {
        let ledger = LedgerService::with_picker(
            LedgerState::new(Money::from_dollars(5000), Money::from_dollars(8000)),
            CyclingIconPicker::default(),
        );
        App::new(settings, ledger, Box::new(DemoAuthenticator), Instant::now())
    }

    fn to_dashboard(app: &mut App, now: Instant) {
        press(app, KeyCode::Enter, now);
        type_text(app, "ana@example.com", now);
        press(app, KeyCode::Tab, now);
        type_text(app, "pw", now);
        press(app, KeyCode::Enter, now);
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_keyboard_expense_entry() {
        let settings = Settings::default();
        let mut app = new_app(&settings);
        let now = Instant::now();
        to_dashboard(&mut app, now);

        press(&mut app, KeyCode::Char('a'), now);
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        type_text(&mut app, "Fuel", now);
        press(&mut app, KeyCode::Tab, now);
        type_text(&mut app, "60.50", now);
        press(&mut app, KeyCode::Tab, now);
        press(&mut app, KeyCode::Char(' '), now);
        press(&mut app, KeyCode::Enter, now);

        assert!(!app.has_dialog());
        let expense = &app.ledger.state().expenses()[0];
        assert_eq!(expense.category, "Fuel");
        assert_eq!(expense.amount, Money::from_cents(6050));
        assert_eq!(expense.payment_method, PaymentMethod::Credit);
    }

    #[test]
    fn test_letters_in_dialog_do_not_trigger_shortcuts() {
        let settings = Settings::default();
        let mut app = new_app(&settings);
        let now = Instant::now();
        to_dashboard(&mut app, now);

        press(&mut app, KeyCode::Char('a'), now);
        type_text(&mut app, "qpL", now);
        assert!(!app.should_quit);
        assert_eq!(app.screen(), Screen::Dashboard);
        assert_eq!(app.expense_form.category_input.value(), "qpL");
    }

    #[test]
    fn test_ctrl_shortcuts_on_login() {
        let settings = Settings::default();
        let mut app = new_app(&settings);
        let now = Instant::now();
        press(&mut app, KeyCode::Enter, now);

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL),
            now,
        )
        .unwrap();
        assert_eq!(app.screen(), Screen::Signup);

        press(&mut app, KeyCode::Esc, now);
        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn test_investment_keys() {
        let settings = Settings::default();
        let mut app = new_app(&settings);
        let now = Instant::now();
        to_dashboard(&mut app, now);

        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.screen(), Screen::InvestmentDetails);
        press(&mut app, KeyCode::Char('i'), now);
        assert_eq!(app.screen(), Screen::InvestmentPurchase);
        type_text(&mut app, "500", now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.screen(), Screen::InvestmentResult);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_esc_dismisses_notification() {
        let settings = Settings::default();
        let mut app = new_app(&settings);
        let now = Instant::now();
        to_dashboard(&mut app, now);

        app.notify(Notification::info("Welcome back"));
        press(&mut app, KeyCode::Esc, now);
        assert!(app.notifications.is_empty());
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let settings = Settings::default();
        let mut app = new_app(&settings);
        let now = Instant::now();
        to_dashboard(&mut app, now);

        press(&mut app, KeyCode::Char('?'), now);
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('x'), now);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let settings = Settings::default();
        let mut app = new_app(&settings);
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        )
        .unwrap();
        assert!(app.should_quit);
    }
}
