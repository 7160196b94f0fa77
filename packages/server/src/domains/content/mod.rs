//! Published content (news, guides, FAQ).

pub mod models;

pub use models::{Content, ContentFilter, ContentGroupKey, ContentStatus, ContentType};
