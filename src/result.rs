/// What the dispatch layer should do after the filter ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorsDecision {
    /// Hand the request to the next handler; CORS headers are already attached.
    Continue,
    /// Respond immediately with the given status and skip downstream handlers.
    Terminate(u16),
}

impl CorsDecision {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminate(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Continue => None,
            Self::Terminate(status) => Some(*status),
        }
    }
}
