mod fees;
mod pool;
mod position;
mod report;
mod reserves;
mod tick;
mod token;

pub use fees::*;
pub use pool::*;
pub use position::*;
pub use report::*;
pub use reserves::*;
pub use tick::*;
pub use token::*;
