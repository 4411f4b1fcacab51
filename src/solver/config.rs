//! Engine configuration and presets

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{PoisonError, RwLock};

/// Tunables for guess selection
///
/// Missing fields in a serialized configuration take their default-preset
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Set by the reference preset; informational only
    pub reference_mode: bool,
    /// Add `PROBE_WORDS` to the candidate pool
    pub include_probe_words: bool,
    /// Maximum number of words evaluated per selection (must be > 0)
    pub candidate_cap: usize,
    /// Stop scoring once a candidate reaches `early_termination_threshold`
    pub early_termination_enabled: bool,
    /// Entropy in bits that ends evaluation early (finite, >= 0)
    pub early_termination_threshold: f64,
    /// Rank by entropy alone, ignoring letter frequency
    pub entropy_only_scoring: bool,
}

impl Configuration {
    /// Fast preset: capped pool, early exit, combined scoring
    pub const DEFAULT: Self = Self {
        reference_mode: false,
        include_probe_words: false,
        candidate_cap: 200,
        early_termination_enabled: true,
        early_termination_threshold: 5.0,
        entropy_only_scoring: false,
    };

    /// Exhaustive preset: uncapped pool with probe words, entropy-only
    pub const REFERENCE: Self = Self {
        reference_mode: true,
        include_probe_words: true,
        candidate_cap: usize::MAX,
        early_termination_enabled: false,
        early_termination_threshold: 5.0,
        entropy_only_scoring: true,
    };

    /// Check the numeric fields
    ///
    /// # Errors
    /// Returns `InputError::Configuration` if `candidate_cap` is zero or the
    /// threshold is negative or not finite.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.candidate_cap == 0 {
            return Err(InputError::Configuration(
                "candidate_cap must be greater than 0".to_string(),
            ));
        }
        if !self.early_termination_threshold.is_finite() || self.early_termination_threshold < 0.0
        {
            return Err(InputError::Configuration(format!(
                "early_termination_threshold must be a finite non-negative number, got {}",
                self.early_termination_threshold
            )));
        }
        Ok(())
    }

    /// Which preset this configuration matches, if any
    #[must_use]
    pub fn preset(&self) -> Preset {
        if *self == Self::DEFAULT {
            Preset::Default
        } else if *self == Self::REFERENCE {
            Preset::Reference
        } else {
            Preset::Custom
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Named configuration presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Default,
    Reference,
    Custom,
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::Reference => "reference",
            Self::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Shared, replaceable configuration
///
/// Readers always see a whole `Configuration`; writers replace it in one step.
#[derive(Debug, Default)]
pub struct ConfigStore {
    current: RwLock<Configuration>,
}

impl ConfigStore {
    #[must_use]
    pub const fn new(config: Configuration) -> Self {
        Self {
            current: RwLock::new(config),
        }
    }

    /// Current configuration (a copy)
    #[must_use]
    pub fn get(&self) -> Configuration {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate and install a new configuration
    ///
    /// # Errors
    /// Returns `InputError::Configuration` and leaves the current value
    /// untouched if validation fails.
    pub fn set(&self, config: Configuration) -> Result<(), InputError> {
        config.validate()?;
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn apply_reference_preset(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Configuration::REFERENCE;
    }

    pub fn reset(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Configuration::DEFAULT;
    }
}
