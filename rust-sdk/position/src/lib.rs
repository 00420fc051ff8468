mod config;
mod display;
mod error;
mod fetch;
mod report;
mod snapshot;

pub use config::*;
pub use display::*;
pub use error::*;
pub use fetch::*;
pub use report::*;
pub use snapshot::*;
