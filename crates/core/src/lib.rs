//! Pure domain logic for the scene generation service.
//!
//! Everything in this crate is synchronous and side-effect free: prompt
//! normalization into a [`scene::SceneDescriptor`], upstream prompt
//! assembly, topic classification for demo image pools, and input
//! validation. IO lives in the sibling crates.

pub mod classify;
pub mod error;
pub mod prompt;
pub mod scene;
