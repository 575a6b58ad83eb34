//! wakfu-data library: resolves the live game-data version and refreshes the local dataset.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod refresh;

pub use config::RefreshConfig;
pub use error::RefreshError;
pub use refresh::{RefreshOutcome, Refresher, refresh};
