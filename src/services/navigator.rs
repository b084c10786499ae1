//! Screen navigation state machine
//!
//! Holds the active screen, the selected investment and the one-shot splash
//! timer. Transitions are synchronous; the timer is checked against the
//! `Instant` passed to `tick`, so tests can advance time explicitly.

use std::fmt;
use std::time::{Duration, Instant};

use crate::error::InvalidStateError;
use crate::models::InvestmentId;

/// Default time the splash screen stays up before moving to login
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_millis(3000);

/// Every screen the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Splash,
    Login,
    Signup,
    ForgotPassword,
    ResetPassword,
    Dashboard,
    InvestmentDetails,
    InvestmentPurchase,
    InvestmentResult,
}

impl Screen {
    pub const ALL: [Screen; 9] = [
        Self::Splash,
        Self::Login,
        Self::Signup,
        Self::ForgotPassword,
        Self::ResetPassword,
        Self::Dashboard,
        Self::InvestmentDetails,
        Self::InvestmentPurchase,
        Self::InvestmentResult,
    ];

    /// Screens that render from the selected investment
    pub fn is_investment(&self) -> bool {
        matches!(
            self,
            Self::InvestmentDetails | Self::InvestmentPurchase | Self::InvestmentResult
        )
    }

    /// Screens shown before the user is signed in
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::Login | Self::Signup | Self::ForgotPassword | Self::ResetPassword
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Splash => "Welcome",
            Self::Login => "Sign In",
            Self::Signup => "Create Account",
            Self::ForgotPassword => "Forgot Password",
            Self::ResetPassword => "Reset Password",
            Self::Dashboard => "Dashboard",
            Self::InvestmentDetails => "Investment Details",
            Self::InvestmentPurchase => "Invest",
            Self::InvestmentResult => "Investment Summary",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Something that can move the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The splash delay ran out
    SplashElapsed,
    /// Explicit request to show a screen
    Navigate(Screen),
    /// Login form submitted; the outcome is decided by the caller
    LoginSubmitted { authenticated: bool },
    SignupSubmitted,
    ResetLinkRequested,
    PasswordReset,
    /// Open an investment from the dashboard list
    SelectInvestment(InvestmentId),
    StartPurchase,
    ConfirmPurchase,
    BackToDashboard,
    Logout,
}

/// Fire-once deadline for leaving the splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTimer {
    armed_at: Instant,
    delay: Duration,
}

impl SplashTimer {
    pub fn new(armed_at: Instant, delay: Duration) -> Self {
        Self { armed_at, delay }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.armed_at) >= self.delay
    }

    /// Time left before the timer fires
    pub fn remaining(&self, now: Instant) -> Duration {
        self.delay
            .saturating_sub(now.saturating_duration_since(self.armed_at))
    }
}

/// The navigation state machine
#[derive(Debug, Clone)]
pub struct Navigator {
    screen: Screen,
    selected: Option<InvestmentId>,
    splash_timer: Option<SplashTimer>,
    splash_delay: Duration,
}

impl Navigator {
    /// Start on the splash screen with its timer armed at `now`
    pub fn new(now: Instant, splash_delay: Duration) -> Self {
        Self {
            screen: Screen::Splash,
            selected: None,
            splash_timer: Some(SplashTimer::new(now, splash_delay)),
            splash_delay,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected_investment(&self) -> Option<InvestmentId> {
        self.selected
    }

    pub fn splash_timer(&self) -> Option<&SplashTimer> {
        self.splash_timer.as_ref()
    }

    /// Fire the splash timer if it is due. Returns the new screen if it fired.
    pub fn tick(&mut self, now: Instant) -> Option<Screen> {
        let due = self
            .splash_timer
            .map(|timer| timer.is_due(now))
            .unwrap_or(false);

        if due && self.screen == Screen::Splash {
            self.splash_timer = None;
            self.enter(Screen::Login, now);
            return Some(self.screen);
        }
        None
    }

    /// Apply an event. Events that do not apply to the current screen are
    /// ignored and the current screen is returned.
    pub fn transition(&mut self, event: NavEvent, now: Instant) -> Result<Screen, InvalidStateError> {
        let target = match (self.screen, event) {
            (Screen::Splash, NavEvent::SplashElapsed) => Some(Screen::Login),

            // Re-entering the current screen is a no-op; the splash deadline stays put
            (current, NavEvent::Navigate(screen)) if current == screen => None,
            (_, NavEvent::Navigate(screen)) => {
                if screen.is_investment() && self.selected.is_none() {
                    return Err(InvalidStateError::NoInvestmentSelected {
                        screen: screen.title(),
                    });
                }
                Some(screen)
            }

            (Screen::Login, NavEvent::LoginSubmitted { authenticated }) => {
                authenticated.then_some(Screen::Dashboard)
            }
            (Screen::Signup, NavEvent::SignupSubmitted) => Some(Screen::Login),
            (Screen::ForgotPassword, NavEvent::ResetLinkRequested) => Some(Screen::ResetPassword),
            (Screen::ResetPassword, NavEvent::PasswordReset) => Some(Screen::Login),

            (Screen::Dashboard, NavEvent::SelectInvestment(id)) => {
                self.selected = Some(id);
                Some(Screen::InvestmentDetails)
            }
            (Screen::InvestmentDetails, NavEvent::StartPurchase) => Some(Screen::InvestmentPurchase),
            (Screen::InvestmentPurchase, NavEvent::ConfirmPurchase) => Some(Screen::InvestmentResult),
            (screen, NavEvent::BackToDashboard) if screen.is_investment() => Some(Screen::Dashboard),

            (Screen::Dashboard, NavEvent::Logout) => Some(Screen::Login),

            _ => None,
        };

        if let Some(target) = target {
            self.enter(target, now);
        }
        Ok(self.screen)
    }

    fn enter(&mut self, target: Screen, now: Instant) {
        if !target.is_investment() {
            self.selected = None;
        }

        if target == Screen::Splash {
            self.splash_timer = Some(SplashTimer::new(now, self.splash_delay));
        } else {
            self.splash_timer = None;
        }

        self.screen = target;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Instant::now(), DEFAULT_SPLASH_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn start() -> (Navigator, Instant) {
        let t0 = Instant::now();
        (Navigator::new(t0, DEFAULT_SPLASH_DELAY), t0)
    }

    fn logged_in() -> (Navigator, Instant) {
        let (mut nav, t0) = start();
        nav.transition(NavEvent::SplashElapsed, t0).unwrap();
        nav.transition(NavEvent::LoginSubmitted { authenticated: true }, t0)
            .unwrap();
        assert_eq!(nav.screen(), Screen::Dashboard);
        (nav, t0)
    }

    #[test]
    fn test_starts_on_splash() {
        let (nav, _) = start();
        assert_eq!(nav.screen(), Screen::Splash);
        assert!(nav.splash_timer().is_some());
        assert!(nav.selected_investment().is_none());
    }

    #[test]
    fn test_splash_timer_fires_after_delay() {
        let (mut nav, t0) = start();
        assert_eq!(nav.tick(t0 + ms(2999)), None);
        assert_eq!(nav.screen(), Screen::Splash);

        assert_eq!(nav.tick(t0 + ms(3000)), Some(Screen::Login));
        assert_eq!(nav.screen(), Screen::Login);
        assert!(nav.splash_timer().is_none());
    }

    #[test]
    fn test_splash_timer_fires_once() {
        let (mut nav, t0) = start();
        nav.tick(t0 + ms(3000));
        nav.transition(NavEvent::Navigate(Screen::Signup), t0 + ms(3100))
            .unwrap();
        assert_eq!(nav.tick(t0 + ms(10_000)), None);
        assert_eq!(nav.screen(), Screen::Signup);
    }

    #[test]
    fn test_leaving_splash_cancels_timer() {
        let (mut nav, t0) = start();
        nav.transition(NavEvent::Navigate(Screen::Signup), t0 + ms(500))
            .unwrap();
        assert!(nav.splash_timer().is_none());

        assert_eq!(nav.tick(t0 + ms(5000)), None);
        assert_eq!(nav.screen(), Screen::Signup);
    }

    #[test]
    fn test_reentering_splash_rearms_timer() {
        let (mut nav, t0) = start();
        nav.transition(NavEvent::Navigate(Screen::Login), t0).unwrap();
        nav.transition(NavEvent::Navigate(Screen::Splash), t0 + ms(1000))
            .unwrap();

        assert_eq!(nav.tick(t0 + ms(3500)), None);
        assert_eq!(nav.tick(t0 + ms(4000)), Some(Screen::Login));
    }

    #[test]
    fn test_navigate_to_current_screen_keeps_splash_deadline() {
        let (mut nav, t0) = start();
        assert_eq!(
            nav.transition(NavEvent::Navigate(Screen::Splash), t0 + ms(2000))
                .unwrap(),
            Screen::Splash
        );

        assert_eq!(nav.tick(t0 + ms(3000)), Some(Screen::Login));
    }

    #[test]
    fn test_navigate_to_current_investment_screen_keeps_selection() {
        let (mut nav, t0) = logged_in();
        nav.transition(NavEvent::SelectInvestment(InvestmentId::new(2)), t0)
            .unwrap();
        nav.transition(NavEvent::Navigate(Screen::InvestmentDetails), t0)
            .unwrap();

        assert_eq!(nav.screen(), Screen::InvestmentDetails);
        assert_eq!(nav.selected_investment(), Some(InvestmentId::new(2)));
    }

    #[test]
    fn test_splash_elapsed_ignored_elsewhere() {
        let (mut nav, t0) = logged_in();
        assert_eq!(
            nav.transition(NavEvent::SplashElapsed, t0).unwrap(),
            Screen::Dashboard
        );
    }

    #[test]
    fn test_login_outcome_is_external() {
        let (mut nav, t0) = start();
        nav.transition(NavEvent::SplashElapsed, t0).unwrap();

        let screen = nav
            .transition(NavEvent::LoginSubmitted { authenticated: false }, t0)
            .unwrap();
        assert_eq!(screen, Screen::Login);

        let screen = nav
            .transition(NavEvent::LoginSubmitted { authenticated: true }, t0)
            .unwrap();
        assert_eq!(screen, Screen::Dashboard);
    }

    #[test]
    fn test_auth_flows() {
        let (mut nav, t0) = start();
        nav.transition(NavEvent::SplashElapsed, t0).unwrap();

        nav.transition(NavEvent::Navigate(Screen::Signup), t0).unwrap();
        assert_eq!(nav.transition(NavEvent::SignupSubmitted, t0).unwrap(), Screen::Login);

        nav.transition(NavEvent::Navigate(Screen::ForgotPassword), t0)
            .unwrap();
        assert_eq!(
            nav.transition(NavEvent::ResetLinkRequested, t0).unwrap(),
            Screen::ResetPassword
        );
        assert_eq!(nav.transition(NavEvent::PasswordReset, t0).unwrap(), Screen::Login);
    }

    #[test]
    fn test_select_investment_sets_selection_and_screen() {
        let (mut nav, t0) = logged_in();
        let id = InvestmentId::new(2);

        let screen = nav.transition(NavEvent::SelectInvestment(id), t0).unwrap();
        assert_eq!(screen, Screen::InvestmentDetails);
        assert_eq!(nav.selected_investment(), Some(id));
    }

    #[test]
    fn test_select_investment_only_from_dashboard() {
        let (mut nav, t0) = start();
        nav.transition(NavEvent::SplashElapsed, t0).unwrap();

        let screen = nav
            .transition(NavEvent::SelectInvestment(InvestmentId::new(1)), t0)
            .unwrap();
        assert_eq!(screen, Screen::Login);
        assert!(nav.selected_investment().is_none());
    }

    #[test]
    fn test_purchase_flow_keeps_selection() {
        let (mut nav, t0) = logged_in();
        let id = InvestmentId::new(3);
        nav.transition(NavEvent::SelectInvestment(id), t0).unwrap();
        nav.transition(NavEvent::StartPurchase, t0).unwrap();
        assert_eq!(nav.screen(), Screen::InvestmentPurchase);
        nav.transition(NavEvent::ConfirmPurchase, t0).unwrap();
        assert_eq!(nav.screen(), Screen::InvestmentResult);
        assert_eq!(nav.selected_investment(), Some(id));
    }

    #[test]
    fn test_back_to_dashboard_clears_selection() {
        let (mut nav, t0) = logged_in();
        nav.transition(NavEvent::SelectInvestment(InvestmentId::new(1)), t0)
            .unwrap();
        nav.transition(NavEvent::BackToDashboard, t0).unwrap();

        assert_eq!(nav.screen(), Screen::Dashboard);
        assert!(nav.selected_investment().is_none());
    }

    #[test]
    fn test_navigate_away_clears_selection() {
        let (mut nav, t0) = logged_in();
        nav.transition(NavEvent::SelectInvestment(InvestmentId::new(1)), t0)
            .unwrap();
        nav.transition(NavEvent::Navigate(Screen::Login), t0).unwrap();
        assert!(nav.selected_investment().is_none());
    }

    #[test]
    fn test_investment_screen_requires_selection() {
        let (mut nav, t0) = logged_in();
        for screen in Screen::ALL.into_iter().filter(Screen::is_investment) {
            let err = nav.transition(NavEvent::Navigate(screen), t0).unwrap_err();
            assert_eq!(
                err,
                InvalidStateError::NoInvestmentSelected {
                    screen: screen.title()
                }
            );
            assert_eq!(nav.screen(), Screen::Dashboard);
        }
    }

    #[test]
    fn test_back_to_dashboard_ignored_outside_investments() {
        let (mut nav, t0) = start();
        nav.transition(NavEvent::SplashElapsed, t0).unwrap();
        assert_eq!(nav.transition(NavEvent::BackToDashboard, t0).unwrap(), Screen::Login);
    }

    #[test]
    fn test_logout() {
        let (mut nav, t0) = logged_in();
        assert_eq!(nav.transition(NavEvent::Logout, t0).unwrap(), Screen::Login);
    }

    #[test]
    fn test_timer_remaining() {
        let t0 = Instant::now();
        let timer = SplashTimer::new(t0, ms(3000));
        assert_eq!(timer.remaining(t0 + ms(1000)), ms(2000));
        assert_eq!(timer.remaining(t0 + ms(4000)), Duration::ZERO);
    }
}
