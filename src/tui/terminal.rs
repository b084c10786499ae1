//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Instant;

use crate::audit::AuditLogger;
use crate::config::paths::BudgetProPaths;
use crate::config::settings::Settings;
use crate::error::BudgetProError;
use crate::models::Money;
use crate::services::{authenticator_from_settings, LedgerService};

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application with the given starting balances
pub fn run_tui(
    settings: &Settings,
    paths: &BudgetProPaths,
    salary: Money,
    credit_limit: Money,
) -> Result<()> {
    // Resolve everything that can fail before taking over the terminal
    let authenticator = authenticator_from_settings(&settings.auth)?;

    let mut app = App::new(
        settings,
        LedgerService::new(salary, credit_limit),
        authenticator,
        Instant::now(),
    );
    if settings.audit_enabled {
        app = app.with_audit(AuditLogger::new(paths.audit_log()));
    }

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app, settings);
    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, settings: &Settings) -> Result<()> {
    let events = EventHandler::new(settings.tick_rate());

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        let event = events
            .next()
            .map_err(|e| BudgetProError::Tui(format!("Event channel closed: {}", e)))?;
        handle_event(app, event, Instant::now())?;
    }

    Ok(())
}
