//! Configuration, paths, and logging setup for friend system embedders.
//!
//! The engine itself takes an already-opened pool; everything the embedding
//! front end needs to build that pool (file locations, pool sizing, log
//! setup) lives here. This crate deliberately has no dependency on the
//! database crate: the embedder converts [`Config`] values into pool
//! settings itself.

mod config;
mod error;
mod logging;
mod paths;

pub use config::Config;
pub use error::{ConfigError, ConfigResult};
pub use logging::init_logging;
pub use paths::Paths;
