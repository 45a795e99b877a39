//! Credential gate for the generation surface.

use crate::error::{GenAiError, GenAiResult};

/// Gate indicating a usable backend credential is selected.
///
/// The session disables generation until `ready` reports true; on an
/// authorization-class failure it re-prompts through this gate.
pub trait CredentialGate {
    /// Whether a usable credential is currently selected.
    fn ready(&self) -> bool;

    /// Ask the embedding environment to (re-)select a credential.
    fn prompt(&self) -> GenAiResult<()>;
}

/// Credential gate backed by an environment variable.
pub struct EnvKeyGate {
    var: String,
}

impl EnvKeyGate {
    /// Gate over the default `GEMINI_API_KEY` variable.
    pub fn new() -> Self {
        Self::with_var("GEMINI_API_KEY")
    }

    /// Gate over a custom variable.
    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvKeyGate {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialGate for EnvKeyGate {
    fn ready(&self) -> bool {
        std::env::var(&self.var)
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false)
    }

    fn prompt(&self) -> GenAiResult<()> {
        if self.ready() {
            Ok(())
        } else {
            Err(GenAiError::credential(format!("{} not set", self.var)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_gate_reflects_variable() {
        let gate = EnvKeyGate::with_var("REEL_TEST_CREDENTIAL_GATE");
        std::env::remove_var("REEL_TEST_CREDENTIAL_GATE");
        assert!(!gate.ready());
        assert!(gate.prompt().is_err());

        std::env::set_var("REEL_TEST_CREDENTIAL_GATE", "key-123");
        assert!(gate.ready());
        assert!(gate.prompt().is_ok());
        std::env::remove_var("REEL_TEST_CREDENTIAL_GATE");
    }
}
