/// Re-request gate for verification codes. In memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationSession {
    phone: Option<String>,
    remaining_secs: u32,
}

impl VerificationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful send and restart the countdown.
    pub fn start(&mut self, phone: &str, countdown_secs: u32) {
        self.phone = Some(phone.to_string());
        self.remaining_secs = countdown_secs;
    }

    /// Advance one second. Returns the seconds still remaining.
    pub fn tick(&mut self) -> u32 {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.remaining_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn can_request(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Phone the last code was sent to.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn reset(&mut self) {
        self.remaining_secs = 0;
    }
}
