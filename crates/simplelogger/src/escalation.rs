//! Control-flow signals returned by the panic and fatal tiers

use std::fmt;

/// Exit status used when a fatal escalation is raised
pub const FATAL_EXIT_CODE: i32 = 1;

/// What the caller must do after a panic- or fatal-level line was recorded
///
/// The logging call only records the line. Acting on it is left to the caller,
/// usually by calling [`Escalation::raise`] at the entry point.
#[must_use = "the message was logged but the escalation was neither raised nor handled"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Escalation {
    /// Unwind the current thread
    Panic { message: String },
    /// Terminate the process
    Fatal { message: String },
}

impl Escalation {
    /// The rendered message that was logged
    pub fn message(&self) -> &str {
        match self {
            Escalation::Panic { message } | Escalation::Fatal { message } => message,
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Escalation::Fatal { .. })
    }

    /// Act on the escalation: panic, or exit with [`FATAL_EXIT_CODE`]
    pub fn raise(self) -> ! {
        match self {
            Escalation::Panic { message } => panic!("{}", message),
            Escalation::Fatal { .. } => std::process::exit(FATAL_EXIT_CODE),
        }
    }
}

impl fmt::Display for Escalation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Escalation::Panic { message } => write!(f, "panic: {}", message),
            Escalation::Fatal { message } => write!(f, "fatal: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_and_kind() {
        let panic = Escalation::Panic {
            message: "bad state".to_string(),
        };
        let fatal = Escalation::Fatal {
            message: "no disk".to_string(),
        };

        assert_eq!(panic.message(), "bad state");
        assert!(!panic.is_fatal());
        assert!(fatal.is_fatal());
        assert_eq!(fatal.to_string(), "fatal: no disk");
    }

    #[test]
    #[should_panic(expected = "bad state")]
    fn test_raise_panic_unwinds() {
        Escalation::Panic {
            message: "bad state".to_string(),
        }
        .raise();
    }
}
