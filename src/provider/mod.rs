//! Story sources.
//!
//! The controller only sees [`StoryProvider`]. Two sources ship with the
//! crate: an in-memory fixture source and the Hacker News search API.

mod error;
mod hacker_news;
mod static_source;
mod traits;

pub use error::ProviderError;
pub use hacker_news::{HackerNewsProvider, DEFAULT_BASE_URL};
pub use static_source::StaticProvider;
pub use traits::StoryProvider;
