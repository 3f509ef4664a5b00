//! Worker-to-UI events and the user-facing alert vocabulary.

use shared::protocol::TreeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn verb(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Failure,
}

/// One blocking user-visible message. Every settled write operation produces
/// at most one of these; list failures never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub kind: AlertKind,
    pub text: String,
}

pub fn success_alert(operation: Operation) -> AlertMessage {
    let text = match operation {
        Operation::Create => "Congratulations! A new tree has been planted.",
        Operation::Update => "Tree updated successfully.",
        Operation::Delete => "Tree deleted successfully.",
    };
    AlertMessage {
        kind: AlertKind::Success,
        text: text.to_string(),
    }
}

pub fn failure_alert(operation: Operation) -> AlertMessage {
    AlertMessage {
        kind: AlertKind::Failure,
        text: format!(
            "Could not {} the tree. Try again later.",
            operation.verb()
        ),
    }
}

pub enum UiEvent {
    WorkerReady,
    /// Full list as returned by the server, replacing whatever was rendered.
    ListLoaded(Vec<TreeRecord>),
    /// A write operation settled. `alert` is `None` when the request never
    /// reached the server (logged by the worker, not surfaced).
    MutationSettled {
        operation: Operation,
        alert: Option<AlertMessage>,
    },
    WorkerFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_alerts_name_the_operation_in_general_terms() {
        for (operation, verb) in [
            (Operation::Create, "create"),
            (Operation::Update, "update"),
            (Operation::Delete, "delete"),
        ] {
            let alert = failure_alert(operation);
            assert_eq!(alert.kind, AlertKind::Failure);
            assert!(alert.text.contains(verb), "missing verb in {}", alert.text);
        }
    }

    #[test]
    fn success_alerts_are_distinct_per_operation() {
        let texts = [
            success_alert(Operation::Create).text,
            success_alert(Operation::Update).text,
            success_alert(Operation::Delete).text,
        ];
        assert_ne!(texts[0], texts[1]);
        assert_ne!(texts[1], texts[2]);
    }
}
