//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Every state change goes through a method here so the handler stays a thin
//! key-to-method mapping and the flows can be tested without a terminal.

use std::time::Instant;

use crate::audit::{AuditEntry, AuditLogger, EntityType, Operation};
use crate::config::settings::Settings;
use crate::error::{BudgetProError, InvalidStateError, ValidationError};
use crate::models::{Investment, InvestmentId, Money, PurchaseQuote};
use crate::services::{
    Authenticator, Credentials, DerivedMetrics, InvestmentCatalog, LedgerService, NavEvent,
    Navigator, Screen, StaticCatalog,
};

use super::dialogs::expense::ExpenseFormState;
use super::dialogs::payment::PaymentFormState;
use super::views::auth::AuthForm;
use super::widgets::input::TextInput;
use super::widgets::notification::{Notification, NotificationQueue};

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    PayCreditBill,
    Help,
}

/// Main application state
pub struct App<'a> {
    pub settings: &'a Settings,

    pub navigator: Navigator,

    pub ledger: LedgerService,

    catalog: Box<dyn InvestmentCatalog>,

    authenticator: Box<dyn Authenticator>,

    audit: Option<AuditLogger>,

    pub should_quit: bool,

    pub active_dialog: ActiveDialog,

    /// Form of the current authentication screen
    pub auth_form: AuthForm,

    pub expense_form: ExpenseFormState,

    pub payment_form: PaymentFormState,

    /// Amount typed on the purchase screen
    pub purchase_input: TextInput,

    pub purchase_error: Option<String>,

    /// Outcome shown on the result screen
    pub last_quote: Option<PurchaseQuote>,

    /// Highlighted row of the dashboard investment list
    pub selected_investment_index: usize,

    /// Email of the signed-in user
    pub user_email: Option<String>,

    pub notifications: NotificationQueue,

    /// Time of the most recent tick, used by time-dependent views
    pub last_tick: Instant,
}

impl<'a> App<'a> {
    /// Create the app on the splash screen with the built-in catalog
    pub fn new(
        settings: &'a Settings,
        ledger: LedgerService,
        authenticator: Box<dyn Authenticator>,
        now: Instant,
    ) -> Self {
        Self {
            settings,
            navigator: Navigator::new(now, settings.splash_duration()),
            ledger,
            catalog: Box::new(StaticCatalog::builtin()),
            authenticator,
            audit: None,
            should_quit: false,
            active_dialog: ActiveDialog::None,
            auth_form: AuthForm::for_screen(Screen::Login),
            expense_form: ExpenseFormState::new(),
            payment_form: PaymentFormState::new(),
            purchase_input: new_purchase_input(),
            purchase_error: None,
            last_quote: None,
            selected_investment_index: 0,
            user_email: None,
            notifications: NotificationQueue::new(),
            last_tick: now,
        }
    }

    /// Replace the investment catalog
    pub fn with_catalog(mut self, catalog: impl InvestmentCatalog + 'static) -> Self {
        self.catalog = Box::new(catalog);
        self
    }

    /// Record ledger changes and sessions in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn screen(&self) -> Screen {
        self.navigator.screen()
    }

    pub fn catalog(&self) -> &dyn InvestmentCatalog {
        self.catalog.as_ref()
    }

    pub fn metrics(&self) -> DerivedMetrics {
        self.ledger.metrics()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Advance time: fire the splash timer and expire notifications
    pub fn tick(&mut self, now: Instant) {
        self.last_tick = now;
        if let Some(screen) = self.navigator.tick(now) {
            self.on_enter(screen);
        }
        self.notifications.remove_expired(now);
    }

    /// Feed an event to the navigator and reset per-screen state on change
    fn apply(&mut self, event: NavEvent, now: Instant) -> Result<Screen, InvalidStateError> {
        let before = self.screen();
        let after = self.navigator.transition(event, now)?;
        if after != before {
            self.on_enter(after);
        }
        Ok(after)
    }

    fn on_enter(&mut self, screen: Screen) {
        self.active_dialog = ActiveDialog::None;
        if screen.is_auth() {
            self.auth_form = AuthForm::for_screen(screen);
        }
        if screen == Screen::InvestmentPurchase {
            self.purchase_input = new_purchase_input();
            self.purchase_error = None;
        }
        if screen == Screen::Dashboard {
            self.last_quote = None;
        }
    }

    /// Show a screen directly. Investment screens need a selection.
    pub fn go_to(&mut self, screen: Screen, now: Instant) -> Result<Screen, InvalidStateError> {
        self.apply(NavEvent::Navigate(screen), now)
    }

    /// Leave the splash screen before its timer fires
    pub fn skip_splash(&mut self, now: Instant) {
        let _ = self.apply(NavEvent::SplashElapsed, now);
    }

    /// Submit the form of the current authentication screen
    pub fn submit_auth(&mut self, now: Instant) {
        if let Err(e) = self.auth_form.validate() {
            self.auth_form.set_error(e.to_string());
            return;
        }
        self.auth_form.clear_error();

        match self.screen() {
            Screen::Login => self.submit_login(now),
            Screen::Signup => {
                let email = self.auth_form.value("Email").trim().to_string();
                let _ = self.apply(NavEvent::SignupSubmitted, now);
                self.auth_form.inputs[0] = self.auth_form.inputs[0].clone().content(email);
                self.notify(Notification::success("Account created. Please sign in."));
            }
            Screen::ForgotPassword => {
                let _ = self.apply(NavEvent::ResetLinkRequested, now);
                self.notify(Notification::info("Reset link sent. Choose a new password."));
            }
            Screen::ResetPassword => {
                let _ = self.apply(NavEvent::PasswordReset, now);
                self.notify(Notification::success("Password updated. Please sign in."));
            }
            _ => {}
        }
    }

    fn submit_login(&mut self, now: Instant) {
        let credentials = Credentials::new(
            self.auth_form.value("Email"),
            self.auth_form.value("Password"),
        );
        let authenticated = self.authenticator.authenticate(&credentials);

        if authenticated {
            self.record(AuditEntry::session(Operation::SignIn, credentials.email.clone()));
            self.user_email = Some(credentials.email);
        } else {
            self.record(AuditEntry::session(
                Operation::SignInFailed,
                credentials.email.clone(),
            ));
            self.auth_form.set_error("Invalid email or password");
        }

        let _ = self.apply(NavEvent::LoginSubmitted { authenticated }, now);
    }

    /// Sign out and return to the login screen
    pub fn logout(&mut self, now: Instant) {
        if self.screen() != Screen::Dashboard {
            return;
        }
        let email = self.user_email.take().unwrap_or_default();
        self.record(AuditEntry::session(Operation::SignOut, email));
        let _ = self.apply(NavEvent::Logout, now);
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddExpense => self.expense_form.clear_error(),
            ActiveDialog::PayCreditBill => self.payment_form.clear_error(),
            ActiveDialog::Help | ActiveDialog::None => {}
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Submit the add expense form. On success the form is reset and closed;
    /// on failure it stays open with its input and the ledger is unchanged.
    pub fn submit_expense(&mut self) -> Result<(), ValidationError> {
        let form = &self.expense_form;
        let result = self
            .ledger
            .add_expense(
                form.category_input.value(),
                form.amount_input.value(),
                form.payment_method,
            )
            .cloned();

        match result {
            Ok(expense) => {
                let message = format!(
                    "Added {} {} ({})",
                    expense.category,
                    self.settings.format_money(expense.amount),
                    expense.payment_method
                );
                self.record(AuditEntry::create(
                    EntityType::Expense,
                    expense.id.to_string(),
                    Some(expense.category.clone()),
                    &expense,
                ));
                self.expense_form = ExpenseFormState::new();
                self.close_dialog();
                self.notify(Notification::success(message));
                Ok(())
            }
            Err(e) => {
                self.expense_form.set_error(e.to_string());
                self.notify(Notification::error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Submit the payment form. Same reset rules as `submit_expense`.
    pub fn submit_payment(&mut self) -> Result<Money, ValidationError> {
        let before = self.ledger.state().credit_bill_paid();

        match self.ledger.pay_credit_bill(self.payment_form.amount_input.value()) {
            Ok(amount) => {
                let after = self.ledger.state().credit_bill_paid();
                self.record(AuditEntry::update(
                    EntityType::CreditBill,
                    "credit-bill",
                    &before,
                    &after,
                    Some(format!(
                        "paid: {} -> {}",
                        self.settings.format_money(before),
                        self.settings.format_money(after)
                    )),
                ));
                self.payment_form = PaymentFormState::new();
                self.close_dialog();
                self.notify(Notification::success(format!(
                    "Paid {} towards the credit card bill",
                    self.settings.format_money(amount)
                )));
                Ok(amount)
            }
            Err(e) => {
                self.payment_form.set_error(e.to_string());
                self.notify(Notification::error(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn select_next_investment(&mut self) {
        if self.selected_investment_index + 1 < self.catalog.len() {
            self.selected_investment_index += 1;
        }
    }

    pub fn select_prev_investment(&mut self) {
        self.selected_investment_index = self.selected_investment_index.saturating_sub(1);
    }

    /// Open the highlighted investment from the dashboard
    pub fn open_highlighted_investment(&mut self, now: Instant) -> Result<(), InvalidStateError> {
        let id = self
            .catalog
            .at(self.selected_investment_index)
            .map(|i| i.id)
            .ok_or(InvalidStateError::NoInvestmentSelected {
                screen: Screen::InvestmentDetails.title(),
            })?;
        self.select_investment(id, now)
    }

    /// Select a catalog product and show its details
    pub fn select_investment(
        &mut self,
        id: InvestmentId,
        now: Instant,
    ) -> Result<(), InvalidStateError> {
        if self.catalog.get(id).is_none() {
            return Err(InvalidStateError::InvestmentNotFound(id));
        }
        self.apply(NavEvent::SelectInvestment(id), now)?;
        Ok(())
    }

    /// The product the investment screens render from
    pub fn current_investment(&self) -> Result<&Investment, InvalidStateError> {
        let id = self
            .navigator
            .selected_investment()
            .ok_or(InvalidStateError::NoInvestmentSelected {
                screen: self.screen().title(),
            })?;
        self.catalog
            .get(id)
            .ok_or(InvalidStateError::InvestmentNotFound(id))
    }

    pub fn start_purchase(&mut self, now: Instant) {
        if self.current_investment().is_ok() {
            let _ = self.apply(NavEvent::StartPurchase, now);
        }
    }

    /// Validate the typed amount and show the projected outcome
    pub fn confirm_purchase(&mut self, now: Instant) -> Result<(), BudgetProError> {
        let quote = PurchaseQuote::new(self.current_investment()?, self.purchase_input.value());

        match quote {
            Ok(quote) => {
                self.last_quote = Some(quote);
                self.purchase_error = None;
                self.apply(NavEvent::ConfirmPurchase, now)?;
                Ok(())
            }
            Err(e) => {
                self.purchase_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    pub fn back_to_dashboard(&mut self, now: Instant) {
        let _ = self.apply(NavEvent::BackToDashboard, now);
    }

    /// Append to the audit log. A failed write is reported, never fatal.
    fn record(&mut self, entry: AuditEntry) {
        if !self.settings.audit_enabled {
            return;
        }
        let result = match &self.audit {
            Some(logger) => logger.log(&entry),
            None => return,
        };
        if let Err(e) = result {
            self.notify(Notification::warning(format!("Audit log not written: {}", e)));
        }
    }
}

fn new_purchase_input() -> TextInput {
    let mut input = TextInput::new().label("Amount").placeholder("0.00");
    input.focused = true;
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LedgerState, PaymentMethod};
    use crate::services::{CyclingIconPicker, DemoAuthenticator};
    use std::time::Duration;
    use tempfile::TempDir;

    fn ledger() -> LedgerService {
        LedgerService::with_picker(
            LedgerState::new(Money::from_dollars(5000), Money::from_dollars(8000)),
            CyclingIconPicker::default(),
        )
    }

    fn app(settings: &Settings) -> (App<'_>, Instant) {
        let t0 = Instant::now();
        (App::new(settings, ledger(), Box::new(DemoAuthenticator), t0), t0)
    }

    fn type_into(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.insert(c);
        }
    }

    fn sign_in(app: &mut App<'_>, now: Instant) {
        app.skip_splash(now);
        type_into(&mut app.auth_form.inputs[0], "ana@example.com");
        type_into(&mut app.auth_form.inputs[1], "secret");
        app.submit_auth(now);
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_splash_to_login_on_tick() {
        let settings = Settings::default();
        let (mut app, t0) = app(&settings);
        app.tick(t0 + Duration::from_millis(1000));
        assert_eq!(app.screen(), Screen::Splash);

        app.tick(t0 + settings.splash_duration());
        assert_eq!(app.screen(), Screen::Login);
        assert_eq!(app.auth_form.screen, Screen::Login);
    }

    #[test]
    fn test_login_requires_fields() {
        let settings = Settings::default();
        let (mut app, t0) = app(&settings);
        app.skip_splash(t0);

        app.submit_auth(t0);
        assert_eq!(app.screen(), Screen::Login);
        assert_eq!(app.auth_form.error_message.as_deref(), Some("Email is required"));
    }

    #[test]
    fn test_rejected_login_stays_on_login() {
        let settings = Settings::default();
        let (mut app, t0) = app(&settings);
        app.skip_splash(t0);
        type_into(&mut app.auth_form.inputs[0], "not-an-email");
        type_into(&mut app.auth_form.inputs[1], "secret");

        app.submit_auth(t0);
        assert_eq!(app.screen(), Screen::Login);
        assert!(app.user_email.is_none());
        assert!(app.auth_form.error_message.is_some());
    }

    #[test]
    fn test_login_and_logout() {
        let settings = Settings::default();
        let (mut app, t0) = app(&settings);
        sign_in(&mut app, t0);
        assert_eq!(app.user_email.as_deref(), Some("ana@example.com"));

        app.logout(t0);
        assert_eq!(app.screen(), Screen::Login);
        assert!(app.user_email.is_none());
        assert!(app.auth_form.inputs.iter().all(|i| i.value().is_empty()));
    }

    #[test]
    fn test_signup_returns_to_login_with_email() {
        let settings = Settings::default();
        let (mut app, t0) = app(&settings);
        app.skip_splash(t0);
        app.go_to(Screen::Signup, t0).unwrap();

        for (input, value) in app
            .auth_form
            .inputs
            .iter_mut()
            .zip(["Ana", "ana@example.com", "pw", "pw"])
        {
            type_into(input, value);
        }
        app.submit_auth(t0);

        assert_eq!(app.screen(), Screen::Login);
        assert_eq!(app.auth_form.value("Email"), "ana@example.com");
    }

    #[test]
    fn test_password_recovery_flow() {
        let settings = Settings::default();
        let (mut app, t0) = app(&settings);
        app.skip_splash(t0);
        app.go_to(Screen::ForgotPassword, t0).unwrap();
        type_into(&mut app.auth_form.inputs[0], "ana@example.com");
        app.submit_auth(t0);
        assert_eq!(app.screen(), Screen::ResetPassword);

        type_into(&mut app.auth_form.inputs[0], "new-pass");
        type_into(&mut app.auth_form.inputs[1], "new-pasz");
        app.submit_auth(t0);
        assert_eq!(app.screen(), Screen::ResetPassword);
        assert_eq!(
            app.auth_form.error_message.as_deref(),
            Some("Passwords do not match")
        );

        app.auth_form.inputs[1].backspace();
        app.auth_form.inputs[1].insert('s');
        app.submit_auth(t0);
        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn test_expense_success_resets_form() {
        let settings = Settings::default();
        let (mut app, t0) = app(&settings);
        sign_in(&mut app, t0);

        app.open_dialog(ActiveDialog::AddExpense);
        type_into(&mut app.expense_form.category_input, "Rent");
        type_into(&mut app.expense_form.amount_input, "1000");
        app.submit_expense().unwrap();

        assert!(!app.has_dialog());
        assert!(app.expense_form.category_input.value().is_empty());
        assert_eq!(app.metrics().remaining_salary, Money::from_dollars(4000));
    }

    #[test]
    fn test_expense_failure_keeps_input() {
        let settings = Settings::default();
        let (mut app, t0) = app(&settings);
        sign_in(&mut app, t0);

        app.open_dialog(ActiveDialog::AddExpense);
        type_into(&mut app.expense_form.category_input, "Rent");
        type_into(&mut app.expense_form.amount_input, "abc");
        app.expense_form.toggle_method();

        let err = app.submit_expense().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidAmount(_)));
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert_eq!(app.expense_form.category_input.value(), "Rent");
        assert_eq!(app.expense_form.amount_input.value(), "abc");
        assert_eq!(app.expense_form.payment_method, PaymentMethod::Credit);
        assert!(app.expense_form.error_message.is_some());
        assert!(app.ledger.state().expenses().is_empty());
    }

    #[test]
    fn test_payment_flow() {
        let settings = Settings::default();
        let (mut app, t0) = app(&settings);
        sign_in(&mut app, t0);

        app.expense_form.toggle_method();
        type_into(&mut app.expense_form.category_input, "Laptop");
        type_into(&mut app.expense_form.amount_input, "2000");
        app.submit_expense().unwrap();

        app.open_dialog(ActiveDialog::PayCreditBill);
        type_into(&mut app.payment_form.amount_input, "2500");
        assert!(app.submit_payment().is_err());
        assert_eq!(app.payment_form.amount_input.value(), "2500");

        app.payment_form = PaymentFormState::new();
        type_into(&mut app.payment_form.amount_input, "500");
        assert_eq!(app.submit_payment().unwrap(), Money::from_dollars(500));
        assert_eq!(app.ledger.state().outstanding_credit(), Money::from_dollars(1500));
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_investment_flow() {
        let settings = Settings::default();
        let (mut app, t0) = app(&settings);
        sign_in(&mut app, t0);

        app.select_next_investment();
        app.open_highlighted_investment(t0).unwrap();
        assert_eq!(app.screen(), Screen::InvestmentDetails);
        assert_eq!(app.current_investment().unwrap().id, InvestmentId::new(2));

        app.start_purchase(t0);
        assert_eq!(app.screen(), Screen::InvestmentPurchase);

        type_into(&mut app.purchase_input, "100");
        assert!(app.confirm_purchase(t0).is_err());
        assert_eq!(app.screen(), Screen::InvestmentPurchase);
        assert!(app.purchase_error.is_some());

        app.purchase_input = app.purchase_input.clone().content("1000");
        app.confirm_purchase(t0).unwrap();
        assert_eq!(app.screen(), Screen::InvestmentResult);
        assert_eq!(app.last_quote.as_ref().unwrap().amount, Money::from_dollars(1000));

        app.back_to_dashboard(t0);
        assert_eq!(app.screen(), Screen::Dashboard);
        assert!(app.navigator.selected_investment().is_none());
        assert!(app.last_quote.is_none());
    }

    #[test]
    fn test_unknown_investment_rejected() {
        let settings = Settings::default();
        let (mut app, t0) = app(&settings);
        sign_in(&mut app, t0);

        let err = app.select_investment(InvestmentId::new(99), t0).unwrap_err();
        assert_eq!(err, InvalidStateError::InvestmentNotFound(InvestmentId::new(99)));
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_empty_catalog_has_nothing_to_open() {
        let settings = Settings::default();
        let t0 = Instant::now();
        let mut app = App::new(&settings, ledger(), Box::new(DemoAuthenticator), t0)
            .with_catalog(StaticCatalog::new(Vec::new()));
        sign_in(&mut app, t0);

        assert!(app.open_highlighted_investment(t0).is_err());
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_current_investment_without_selection() {
        let settings = Settings::default();
        let (app, _) = app(&settings);
        assert!(matches!(
            app.current_investment(),
            Err(InvalidStateError::NoInvestmentSelected { .. })
        ));
    }

    #[test]
    fn test_investment_list_bounds() {
        let settings = Settings::default();
        let (mut app, _) = app(&settings);
        app.select_prev_investment();
        assert_eq!(app.selected_investment_index, 0);
        for _ in 0..10 {
            app.select_next_investment();
        }
        assert_eq!(app.selected_investment_index, app.catalog().len() - 1);
    }

    #[test]
    fn test_audit_records_ledger_and_sessions() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp.path().join("audit.log"));
        let settings = Settings::default();
        let t0 = Instant::now();
        let mut app = App::new(&settings, ledger(), Box::new(DemoAuthenticator), t0)
            .with_audit(logger.clone());

        sign_in(&mut app, t0);
        type_into(&mut app.expense_form.category_input, "Rent");
        type_into(&mut app.expense_form.amount_input, "10");
        app.submit_expense().unwrap();
        app.logout(t0);

        let ops: Vec<_> = logger
            .read_all()
            .unwrap()
            .iter()
            .map(|e| (e.operation, e.entity_type))
            .collect();
        assert_eq!(
            ops,
            [
                (Operation::SignIn, EntityType::Session),
                (Operation::Create, EntityType::Expense),
                (Operation::SignOut, EntityType::Session),
            ]
        );
    }

    #[test]
    fn test_audit_disabled_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp.path().join("audit.log"));
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let t0 = Instant::now();
        let mut app = App::new(&settings, ledger(), Box::new(DemoAuthenticator), t0)
            .with_audit(logger.clone());

        sign_in(&mut app, t0);
        assert!(!logger.exists());
    }

    #[test]
    fn test_notifications_expire_on_tick() {
        let settings = Settings::default();
        let (mut app, _) = app(&settings);
        app.notify(Notification::info("hello"));
        let created = app.notifications.current().unwrap().created_at;

        app.tick(created + Duration::from_secs(5));
        assert!(app.notifications.is_empty());
    }
}
