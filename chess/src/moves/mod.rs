mod base;
mod make;

pub use base::*;
pub use make::*;
