mod fixed_point;
mod position;
mod price;
mod tick;
mod token;

pub use fixed_point::*;
pub use position::*;
pub use price::*;
pub use tick::*;
pub use token::*;
