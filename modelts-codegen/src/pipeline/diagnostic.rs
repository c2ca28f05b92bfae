//! Non-fatal findings collected while the pipeline runs.

use std::fmt;

/// A warning raised by a pipeline phase.
///
/// Fatal problems abort the run with an [`InspectError`](crate::InspectError)
/// instead, so every diagnostic is a warning and generation still succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the phase that raised it.
    pub phase: &'static str,
    pub message: String,
    /// The model class the warning is about, if any.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn warning(phase: &'static str, message: impl Into<String>) -> Self {
        Self {
            phase,
            message: message.into(),
            location: None,
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {}", self.message)?;
        match &self.location {
            Some(model) => write!(f, " (at {})", model),
            None => Ok(()),
        }
    }
}
