use std::error;
use std::fmt;

// Missing-prerequisite exit codes, part of the contract with the host
// installer framework.
pub const EXIT_CONDA_EXE_MISSING: i32 = 10;
pub const EXIT_PAYLOAD_MISSING: i32 = 11;
pub const EXIT_BASE_MISSING: i32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencerFailure {
    pub exit_code: i32,
    message: String,
}

impl SequencerFailure {
    pub fn new(exit_code: i32, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SequencerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (exit code {})", self.message, self.exit_code)
    }
}

impl error::Error for SequencerFailure {}

pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SequencerFailure>()
        .map(|failure| failure.exit_code)
        .unwrap_or(1)
}
