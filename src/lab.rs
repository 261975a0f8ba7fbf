use std::path::Path;

use log::{info, warn};

use crate::{
    config::LabConfig,
    data::{self, Dataset},
    error::{LabErr, Result},
    model::Model,
    training,
};

/// Fewest samples an upload must keep to replace the active dataset.
pub const MIN_SAMPLES: usize = 2;

/// The lab session: the active dataset and the model fit on it.
///
/// Starts from the built-in dataset. Uploads either replace both the dataset
/// and the model, or leave both untouched.
#[derive(Debug, Clone)]
pub struct Lab {
    config: LabConfig,
    dataset: Dataset,
    model: Model,
}

impl Lab {
    /// Creates a session on the default dataset, already fit.
    pub fn new(config: LabConfig) -> Self {
        let dataset = Dataset::default();
        let model = training::fit(&dataset, &config.hyperparams());

        Self {
            config,
            dataset,
            model,
        }
    }

    #[inline]
    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    #[inline]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[inline]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Rows in the active dataset.
    #[inline]
    pub fn rows(&self) -> usize {
        self.dataset.len()
    }

    /// Parses `text` and, if enough rows survive, installs it and refits.
    ///
    /// # Errors
    /// `LabErr::SizeLimitExceeded` or `LabErr::InsufficientData`. The active
    /// dataset and model are unchanged on error.
    pub fn upload(&mut self, text: &str) -> Result<&Model> {
        let parsed = data::ingest(text, self.config.max_upload_bytes);
        self.install(parsed)
    }

    /// Like `upload`, reading the text from a file.
    ///
    /// # Errors
    /// As `upload`, plus `LabErr::Io` if the file cannot be read.
    pub fn upload_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&Model> {
        let parsed = data::ingest_file(path, self.config.max_upload_bytes);
        self.install(parsed)
    }

    fn install(&mut self, parsed: Result<Dataset>) -> Result<&Model> {
        let dataset = parsed.and_then(check_len).inspect_err(|e| {
            warn!(rows = self.dataset.len(); "upload rejected, keeping current data: {e}");
        })?;

        let model = training::fit(&dataset, &self.config.hyperparams());
        info!(rows = dataset.len(); "installed new dataset: {model}");

        self.dataset = dataset;
        self.model = model;
        Ok(&self.model)
    }
}

impl Default for Lab {
    fn default() -> Self {
        Self::new(LabConfig::default())
    }
}

fn check_len(dataset: Dataset) -> Result<Dataset> {
    if dataset.len() < MIN_SAMPLES {
        return Err(LabErr::InsufficientData {
            got: dataset.len(),
            required: MIN_SAMPLES,
        });
    }

    Ok(dataset)
}
