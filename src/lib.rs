//! Fits a line to uploaded `x,y` pairs by full-batch gradient descent.
//!
//! Text goes through [`data::ingest`] into a [`Dataset`], [`training::fit`]
//! turns that into a [`Model`], and [`chart::Plot`] lays both out for
//! drawing. [`Lab`] keeps the active pair and swaps it atomically on upload.
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod lab;
pub mod loss;
pub mod model;
pub mod optimization;
pub mod training;

pub use config::LabConfig;
pub use data::{Dataset, Sample};
pub use error::{LabErr, Result};
pub use lab::Lab;
pub use model::Model;
pub use training::{Hyperparams, fit};
