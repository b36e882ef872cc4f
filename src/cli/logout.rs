//! Logout command for Saffron.
//!
//! Clears the active-session pointer. Progress is untouched.

use serde::Serialize;

use crate::error::Result;
use crate::storage::SessionPointer;

/// Output format for the logout command.
#[derive(Debug, Clone, Serialize)]
pub struct LogoutOutput {
    /// The account id that was active, if any.
    pub was_active: Option<String>,
}

/// The logout command implementation.
pub struct LogoutCommand {
    pointer: SessionPointer,
}

impl LogoutCommand {
    /// Create a new logout command.
    pub fn new(pointer: SessionPointer) -> Self {
        Self { pointer }
    }

    /// Run the logout command.
    pub fn run(&self) -> Result<LogoutOutput> {
        let was_active = self.pointer.current()?;
        self.pointer.clear()?;
        Ok(LogoutOutput { was_active })
    }

    /// Format output for display.
    pub fn format_output(&self, output: &LogoutOutput, json: bool) -> String {
        if json {
            serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
        } else if output.was_active.is_some() {
            "Logged out. خداحافظ!\n".to_string()
        } else {
            "No active session.\n".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (LogoutCommand, SessionPointer, TempDir) {
        let dir = TempDir::new().unwrap();
        let pointer = SessionPointer::with_path(dir.path().join("session"));
        (LogoutCommand::new(pointer.clone()), pointer, dir)
    }

    #[test]
    fn test_logout_clears_session() {
        let (cmd, pointer, _dir) = setup();
        pointer.set("acct-1").unwrap();

        let output = cmd.run().unwrap();

        assert_eq!(output.was_active, Some("acct-1".to_string()));
        assert!(pointer.current().unwrap().is_none());
    }

    #[test]
    fn test_logout_without_session_is_fine() {
        let (cmd, _pointer, _dir) = setup();

        let output = cmd.run().unwrap();

        assert!(output.was_active.is_none());
        assert!(cmd.format_output(&output, false).contains("No active session"));
    }
}
