//! Audit log CLI command

use crate::audit::AuditLogger;
use crate::error::BudgetProResult;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(logger: &AuditLogger, limit: usize) -> BudgetProResult<()> {
    if !logger.exists() {
        println!("No audit entries recorded.");
        return Ok(());
    }

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No audit entries recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    println!();
    println!(
        "Showing {} entr{} from {}",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" },
        logger.path().display()
    );

    Ok(())
}
