mod error;
mod fees;
mod tick;

pub use error::*;
pub use fees::*;
pub use tick::*;
