use log::{info, warn};
use shared::GateState;
use std::fmt;

use super::errors::{PanelError, PanelResult};

/// Result of a single unlock attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Unlocked,
    Rejected,
}

impl GateOutcome {
    /// Message shown to the operator after the attempt
    pub fn message(&self) -> &'static str {
        match self {
            GateOutcome::Unlocked => "Acesso liberado.",
            GateOutcome::Rejected => "Senha incorreta. Tente novamente.",
        }
    }

    pub fn into_result(self) -> PanelResult<()> {
        match self {
            GateOutcome::Unlocked => Ok(()),
            GateOutcome::Rejected => Err(PanelError::AuthenticationRejected),
        }
    }
}

/// Shared-secret gate guarding the whole dashboard.
///
/// Starts locked. A correct attempt unlocks it for the rest of the session;
/// there is no way back to `Locked`. Every attempt, right or wrong, clears
/// the input buffer.
pub struct AccessGate {
    reference_secret: String,
    state: GateState,
    input: String,
}

impl AccessGate {
    pub fn new(reference_secret: impl Into<String>) -> Self {
        Self {
            reference_secret: reference_secret.into(),
            state: GateState::Locked,
            input: String::new(),
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    /// Current contents of the secret input buffer
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
    }

    /// Submit whatever is in the input buffer
    pub fn submit(&mut self) -> GateOutcome {
        let attempted = std::mem::take(&mut self.input);
        let attempted = attempted.trim();
        info!("Validating access secret (length: {})", attempted.len());

        if attempted == self.reference_secret {
            if self.state == GateState::Locked {
                info!("Access gate unlocked");
            }
            self.state = GateState::Unlocked;
            GateOutcome::Unlocked
        } else {
            warn!("Access secret rejected");
            GateOutcome::Rejected
        }
    }

    /// Type `secret` into the buffer and submit it
    pub fn attempt(&mut self, secret: &str) -> GateOutcome {
        self.set_input(secret);
        self.submit()
    }

    pub fn ensure_unlocked(&self) -> PanelResult<()> {
        if self.is_unlocked() {
            Ok(())
        } else {
            Err(PanelError::Locked)
        }
    }
}

impl fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessGate")
            .field("state", &self.state)
            .field("input_len", &self.input.len())
            .finish_non_exhaustive()
    }
}
