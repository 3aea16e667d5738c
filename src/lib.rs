//! Client-side state engine for a list of Hacker News style stories.
//!
//! - [`ui::stories`]: the story collection and its reducer
//! - [`ui::status`]: loading/error flags
//! - [`loader`]: asynchronous population from a [`provider::StoryProvider`]
//! - [`storage`]: the persisted search query
//! - [`filter`]: the derived, filtered view
//! - [`ui::app::App`]: the controller that ties them together

pub mod config;
pub mod filter;
pub mod loader;
pub mod logging;
pub mod provider;
pub mod storage;
pub mod story;
pub mod ui;
