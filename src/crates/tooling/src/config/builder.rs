//! Layered configuration trait

use crate::Result;

/// Configuration structures that can be validated, loaded from the
/// environment and merged over another source
///
/// Layering order used by the binaries is: defaults, then file, then
/// environment. `merge` lets the caller overlay one layer onto another.
pub trait ConfigBuilder: Default + Clone {
    /// Check field ranges and cross-field constraints
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Build a configuration containing only the values found in the
    /// environment (`{prefix}{FIELD}`); everything else stays at default
    fn from_env(prefix: &str) -> Result<Self>;

    /// Overlay the values that `other` explicitly sets onto `self`
    fn merge(&mut self, other: Self) -> &mut Self;

    /// Apply environment overrides on top of `self` and validate
    fn with_env_overrides(mut self, prefix: &str) -> Result<Self> {
        let env = Self::from_env(prefix)?;
        self.merge(env);
        self.validate()?;
        Ok(self)
    }

    /// Defaults overlaid with the environment, validated
    fn from_env_with_defaults(prefix: &str) -> Result<Self> {
        Self::default().with_env_overrides(prefix)
    }
}
