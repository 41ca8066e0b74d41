//! Flag sources: where a logger looks up its on/off switch.

/// Name-to-value lookup consulted on every emission.
///
/// A flag counts as set when its value is present and non-empty.
pub trait FlagSource: Send + Sync {
    /// Returns the raw value stored under `name`, if any.
    fn lookup(&self, name: &str) -> Option<String>;

    /// Returns true if `name` holds a non-empty value.
    fn is_set(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(|value| !value.is_empty())
    }
}

/// Reads flags from the process environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvFlags;

impl FlagSource for EnvFlags {
    fn lookup(&self, name: &str) -> Option<String> {
        // Not a valid variable name on any platform
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}
