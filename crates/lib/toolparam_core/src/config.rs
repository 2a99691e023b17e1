//! Mapper configuration.

/// Default bound on schema nesting below the root property set.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Environment variable overriding [`MapperConfig::max_depth`].
pub const MAX_DEPTH_ENV: &str = "TOOLPARAM_MAX_DEPTH";

/// Configuration for [`crate::SchemaMapper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapperConfig {
    /// How many levels of object fields / list items are expanded below the
    /// root properties. Deeper subtrees are truncated.
    pub max_depth: usize,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl MapperConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable              | Default |
    /// |-----------------------|---------|
    /// | `TOOLPARAM_MAX_DEPTH` | `64`    |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_depth = match lookup(MAX_DEPTH_ENV) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "Ignoring invalid {MAX_DEPTH_ENV}={raw:?}, using {DEFAULT_MAX_DEPTH}"
                );
                DEFAULT_MAX_DEPTH
            }),
            None => DEFAULT_MAX_DEPTH,
        };
        Self { max_depth }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
