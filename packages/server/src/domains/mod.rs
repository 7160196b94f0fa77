// Business domains
pub mod analytics;
pub mod appeals;
pub mod content;
pub mod schools;
