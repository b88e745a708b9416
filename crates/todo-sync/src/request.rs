//! Request State
//!
//! Lifecycle of a single action site (the add form, one delete button).

/// `Idle -> InFlight -> {Succeeded, Failed}`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl RequestState {
    /// Move to `InFlight`. Returns `false` and leaves the state alone if a
    /// request is already running at this site.
    pub fn begin(&mut self) -> bool {
        if self.is_in_flight() {
            return false;
        }
        *self = RequestState::InFlight;
        true
    }

    /// Record the outcome of the running request.
    pub fn finish<T, E: std::fmt::Display>(&mut self, outcome: &Result<T, E>) {
        *self = match outcome {
            Ok(_) => RequestState::Succeeded,
            Err(e) => RequestState::Failed(e.to_string()),
        };
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
