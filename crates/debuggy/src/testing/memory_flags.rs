//! In-memory flag source

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::flags::FlagSource;

/// A flag map that can be toggled while a logger is using it.
///
/// Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryFlags {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryFlags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&self, name: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(name.to_string(), value.to_string());
        }
    }

    /// Sets `name` to `"1"`.
    pub fn enable(&self, name: &str) {
        self.set(name, "1");
    }

    pub fn unset(&self, name: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(name);
        }
    }
}

impl FlagSource for MemoryFlags {
    fn lookup(&self, name: &str) -> Option<String> {
        self.values.lock().ok()?.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_enable_unset() {
        let flags = MemoryFlags::new();
        assert!(!flags.is_set("DEBUG"));

        flags.enable("DEBUG");
        assert_eq!(flags.lookup("DEBUG").as_deref(), Some("1"));

        flags.set("DEBUG", "");
        assert!(!flags.is_set("DEBUG"));

        flags.set("DEBUG", "yes");
        flags.unset("DEBUG");
        assert_eq!(flags.lookup("DEBUG"), None);
    }

    #[test]
    fn clones_share_values() {
        let flags = MemoryFlags::new();
        let view = flags.clone();
        flags.enable("TEST");
        assert!(view.is_set("TEST"));
    }
}
