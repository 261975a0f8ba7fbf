pub mod dataset;
pub mod ingest;

pub use dataset::{Dataset, Sample};
pub use ingest::{MAX_UPLOAD_BYTES, ingest, ingest_file, parse_csv};
