mod fees;
mod report;
mod reserves;

pub use fees::*;
pub use report::*;
pub use reserves::*;
