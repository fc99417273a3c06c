//! Data models for Link Haven

mod link;
mod session;

pub use link::{normalize_category, Link, LinkId, Source, ALL_CATEGORIES, UNCATEGORIZED};
pub use session::{Session, SessionUser};
