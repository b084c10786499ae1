//! Audit entry data structures
//!
//! Defines the structure of audit log entries including operation types,
//! entity types, and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Entity was created
    Create,
    /// Entity was updated
    Update,
    /// A user signed in
    SignIn,
    /// A sign-in attempt was rejected
    SignInFailed,
    /// A user signed out
    SignOut,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::SignIn => write!(f, "SIGN-IN"),
            Operation::SignInFailed => write!(f, "SIGN-IN-FAILED"),
            Operation::SignOut => write!(f, "SIGN-OUT"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Expense,
    CreditBill,
    Session,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::CreditBill => write!(f, "CreditBill"),
            EntityType::Session => write!(f, "Session"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// ID of the affected entity
    pub entity_id: String,

    /// Human-readable label (expense category, user email)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON representation before the operation (updates only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON representation after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable change summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: serde_json::to_value(entity).ok(),
            summary: None,
        }
    }

    /// Create a new audit entry for an update operation
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity_type,
            entity_id: entity_id.into(),
            entity_name: None,
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            summary,
        }
    }

    /// Create a session entry (sign-in, failed sign-in, sign-out)
    pub fn session(operation: Operation, email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type: EntityType::Session,
            entity_id: "session".to_string(),
            entity_name: (!email.is_empty()).then_some(email),
            before: None,
            after: None,
            summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(summary) = &self.summary {
            output.push_str(&format!("\n  Changes: {}", summary));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::SignInFailed.to_string(), "SIGN-IN-FAILED");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"category": "Café", "amount": 5000});
        let entry = AuditEntry::create(
            EntityType::Expense,
            "exp-12345678",
            Some("Café".to_string()),
            &data,
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Expense);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(data));
    }

    #[test]
    fn test_update_entry() {
        let entry = AuditEntry::update(
            EntityType::CreditBill,
            "credit-bill",
            &json!({"paid": 0}),
            &json!({"paid": 100000}),
            Some("paid: $0.00 -> $1000.00".to_string()),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert_eq!(entry.summary.as_deref(), Some("paid: $0.00 -> $1000.00"));
    }

    #[test]
    fn test_session_entry() {
        let entry = AuditEntry::session(Operation::SignIn, "ana@example.com");
        assert_eq!(entry.entity_type, EntityType::Session);
        assert_eq!(entry.entity_name.as_deref(), Some("ana@example.com"));

        let anonymous = AuditEntry::session(Operation::SignOut, "");
        assert!(anonymous.entity_name.is_none());
    }

    #[test]
    fn test_serialized_names() {
        let entry = AuditEntry::session(Operation::SignInFailed, "x@y.z");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["operation"], "sign_in_failed");
        assert_eq!(json["entity_type"], "session");
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::create(
            EntityType::Expense,
            "exp-12345678",
            Some("Rent".to_string()),
            &json!({}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE"));
        assert!(formatted.contains("Expense"));
        assert!(formatted.contains("exp-12345678"));
        assert!(formatted.contains("(Rent)"));
    }
}
