/// Generation of a validation request
///
/// Captured when lookups are issued and compared against the live [`Epoch`]
/// when they resume. A mismatch means the user has typed since.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Monotonic request counter for one send session
#[derive(Debug, Default)]
pub struct Epoch {
    current: u64,
}

impl Epoch {
    /// Start a new request; every token issued before becomes stale.
    pub fn advance(&mut self) -> RequestToken {
        self.current += 1;
        RequestToken(self.current)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.current
    }
}
