//! foodgram-ui - Shared UI components for foodgram
//!
//! Contains pure view components and the attribute helpers they are built on.
//! Nothing here owns state; hosts pick the renderer (web, desktop, SSR).

pub mod attributes;
pub mod components;

pub use attributes::merge_attributes;
pub use components::*;
