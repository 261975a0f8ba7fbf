use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    data::MAX_UPLOAD_BYTES,
    error::{LabErr, Result},
    training::{EPOCHS, Hyperparams, LEARNING_RATE},
};

/// Immutable bounds and knobs for a lab session.
///
/// Every field is optional in JSON; missing ones take the defaults
/// (2 MiB uploads, learning rate 0.001, 2000 epochs).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabConfig {
    pub max_upload_bytes: usize,
    pub learning_rate: f64,
    pub epochs: usize,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: MAX_UPLOAD_BYTES,
            learning_rate: LEARNING_RATE,
            epochs: EPOCHS,
        }
    }
}

impl LabConfig {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    /// `LabErr::Config` if the JSON is malformed, `LabErr::InvalidConfig` if
    /// a value is out of range.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    ///
    /// # Errors
    /// `LabErr::Io` if the file cannot be read, otherwise as `from_json`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks the values the trainer and ingestion rely on.
    pub fn validate(&self) -> Result<()> {
        if self.max_upload_bytes == 0 {
            return Err(LabErr::InvalidConfig("max_upload_bytes must be non-zero"));
        }

        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(LabErr::InvalidConfig(
                "learning_rate must be finite and positive",
            ));
        }

        Ok(())
    }

    /// Returns the training hyperparameters.
    pub fn hyperparams(&self) -> Hyperparams {
        Hyperparams::new(self.learning_rate, self.epochs)
    }
}
