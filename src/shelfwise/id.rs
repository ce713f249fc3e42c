//! Identifier registry.
//!
//! Every record of every kind draws its ID from one counter, so an ID alone
//! is enough to find the record again (see [`crate::dispatch`]). The counter
//! itself is never persisted: after a load it is re-derived from the highest
//! ID found in the data, which keeps hand-edited files workable as long as
//! the record IDs are intact.

use crate::error::{Result, ShelfwiseError};

/// Monotonic source of record IDs. `0` is never issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdRegistry {
    last: u32,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter and returns the new value. Fails once `u32::MAX`
    /// has been issued rather than wrapping around to `0`.
    pub fn next_id(&mut self) -> Result<u32> {
        self.last = self
            .last
            .checked_add(1)
            .ok_or(ShelfwiseError::IdsExhausted)?;
        Ok(self.last)
    }

    /// Installs `last` as the most recently issued ID.
    pub fn reset(&mut self, last: u32) {
        self.last = last;
    }

    pub fn last(&self) -> u32 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_issued_id_is_one() {
        let mut ids = IdRegistry::new();
        assert_eq!(ids.next_id().unwrap(), 1);
        assert_eq!(ids.next_id().unwrap(), 2);
    }

    #[test]
    fn reset_continues_after_given_id() {
        let mut ids = IdRegistry::new();
        ids.reset(41);
        assert_eq!(ids.next_id().unwrap(), 42);
        assert_eq!(ids.last(), 42);
    }

    #[test]
    fn exhausted_counter_never_wraps_to_zero() {
        let mut ids = IdRegistry::new();
        ids.reset(u32::MAX - 1);
        assert_eq!(ids.next_id().unwrap(), u32::MAX);
        assert!(matches!(ids.next_id(), Err(ShelfwiseError::IdsExhausted)));
        assert_eq!(ids.last(), u32::MAX);
    }
}
