// HTTP routes
pub mod analytics;
pub mod health;
pub mod schools;

pub use analytics::*;
pub use health::*;
pub use schools::*;
