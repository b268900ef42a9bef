//! Guessing Game Domain Layer
//!
//! This crate contains the domain model for a "20 questions" style game.
//! It has no external dependencies and defines the prompt tree, its key
//! scheme, and the trait that storage layers implement.
//!
//! ## Key Concepts
//!
//! - **Prompt**: a node in the tree, either a question or an answer
//! - **Key**: the node's position; children are the parent key plus `1` (yes) or `0` (no)
//! - **Inject**: turning an answer leaf into a question when the game guessed wrong
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure domain logic only
//! - Storage implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod key;
pub mod prompt;
pub mod traits;

// Re-exports for convenience
pub use key::{derive_no_key, derive_yes_key, PromptKey, ROOT_KEY};
pub use prompt::{Prompt, PromptKind};
pub use traits::PromptStore;
