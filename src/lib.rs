pub mod config;
pub mod error;
pub mod framing;
pub mod geometry;
pub mod host;
pub mod math;
pub mod operations;
pub mod pipeline;

pub use config::FramingConfig;
pub use error::{FramingError, Result};
pub use host::{FrameHost, FramingModel};
pub use pipeline::{FramingRun, RunSummary};
