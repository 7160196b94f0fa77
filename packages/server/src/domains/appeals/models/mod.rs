pub mod appeal;
pub mod direction;

pub use appeal::*;
pub use direction::*;
