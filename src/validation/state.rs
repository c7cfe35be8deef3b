use serde::Serialize;

use super::severity::{Advisory, Severity};

/// Advisory currently shown next to the receiver field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ValidationState {
    pub severity: Severity,
    pub advisory: Option<Advisory>,
}

impl ValidationState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Max-wins merge: `advisory` replaces the current one only when it is
    /// strictly more severe. Returns whether the state changed.
    pub fn raise(&mut self, advisory: Advisory) -> bool {
        if advisory.severity() > self.severity {
            self.severity = advisory.severity();
            self.advisory = Some(advisory);
            true
        } else {
            false
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        self.advisory.map(|a| a.message())
    }

    pub fn is_clear(&self) -> bool {
        self.severity == Severity::None
    }
}
