//! Persistence boundary for user preferences.

use std::cell::{Cell, RefCell};
use thiserror::Error;

/// Failure to persist a preference.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// The backing storage rejected the write.
    #[error("failed to write preference {key}: {detail}")]
    Write {
        /// Storage key that failed.
        key: String,
        /// Backend-reported detail.
        detail: String,
    },
}

/// Read/write store for the dark-mode preference.
pub trait PreferenceStore {
    /// Stored dark-mode value, if one exists.
    fn load_dark_mode(&self) -> Option<bool>;

    /// Persist the dark-mode value.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::Write`] when the backend rejects the value.
    fn save_dark_mode(&self, dark_mode: bool) -> Result<(), PreferenceError>;
}

/// In-memory preference store used off-browser and when storage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    dark_mode: Cell<Option<bool>>,
    writes: Cell<usize>,
    fail_with: RefCell<Option<String>>,
}

impl MemoryPreferences {
    /// Store seeded with a value.
    #[must_use]
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        let store = Self::default();
        store.dark_mode.set(Some(dark_mode));
        store
    }

    /// Make every subsequent write fail with `detail`.
    pub fn fail_writes(&self, detail: impl Into<String>) {
        *self.fail_with.borrow_mut() = Some(detail.into());
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load_dark_mode(&self) -> Option<bool> {
        self.dark_mode.get()
    }

    fn save_dark_mode(&self, dark_mode: bool) -> Result<(), PreferenceError> {
        if let Some(detail) = self.fail_with.borrow().as_ref() {
            return Err(PreferenceError::Write {
                key: "memory".to_string(),
                detail: detail.clone(),
            });
        }
        self.dark_mode.set(Some(dark_mode));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_value() -> Result<(), PreferenceError> {
        let store = MemoryPreferences::default();
        assert_eq!(store.load_dark_mode(), None);
        store.save_dark_mode(true)?;
        assert_eq!(store.load_dark_mode(), Some(true));
        assert_eq!(store.writes(), 1);
        Ok(())
    }

    #[test]
    fn failing_store_keeps_previous_value() {
        let store = MemoryPreferences::with_dark_mode(false);
        store.fail_writes("quota exceeded");
        let err = store.save_dark_mode(true);
        assert_eq!(
            err,
            Err(PreferenceError::Write {
                key: "memory".to_string(),
                detail: "quota exceeded".to_string(),
            })
        );
        assert_eq!(store.load_dark_mode(), Some(false));
        assert_eq!(store.writes(), 0);
    }
}
