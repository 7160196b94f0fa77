//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod report_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use report_store::PostgresReportStore;
pub use test_dependencies::InMemoryReportStore;
pub use traits::BaseReportStore;
