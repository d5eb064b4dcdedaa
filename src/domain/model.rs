use serde::{Deserialize, Serialize};

/// The one piece of domain state: a single mutable signed integer.
///
/// Increment and decrement adjust by exactly 1 and wrap at the type bounds;
/// there is no validation and no range constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value = self.value.wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.wrapping_sub(1);
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(0)
    }
}
