//! State engine exposed to a presentation layer.
//!
//! Rendering lives outside this crate. What is here is the state it reads
//! and the entry points it calls: [`app::App`] composes the feature modules.

pub mod app;
pub mod mvi;
pub mod status;
pub mod stories;
