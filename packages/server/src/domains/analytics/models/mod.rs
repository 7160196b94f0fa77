pub mod breakdown;
pub mod reports;

pub use breakdown::*;
pub use reports::*;
