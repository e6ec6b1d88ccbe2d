//! Status line and spinner state shown above every view.

/// Current user-facing message plus the busy flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackState {
    message: String,
    in_flight: usize,
}

impl FeedbackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True while at least one request is outstanding
    pub fn busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn clear_message(&mut self) {
        self.message.clear();
    }

    /// Called immediately before a request is issued
    pub fn begin(&mut self) {
        self.in_flight += 1;
    }

    /// Called when a request settles, whatever the outcome
    pub fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}
