//! Guessing Game Storage Layer
//!
//! Implements the PromptStore trait over an in-memory map.
//!
//! # Architecture
//!
//! - One `HashMap` from key to prompt, owned by the store and never exposed
//! - One `RwLock` around the whole map: every mutation holds the write lock
//!   for its full duration, so readers see a tree either before or after an
//!   inject, never in between
//! - Lookups hand out clones, so callers cannot alias store state
//!
//! The store is volatile: its contents are lost when the process exits.
//!
//! # Examples
//!
//! ```
//! use guessing_domain::PromptStore;
//! use guessing_store::MemoryStore;
//!
//! let store = MemoryStore::new();
//! store.seed_default().unwrap();
//! assert_eq!(store.lookup("0").unwrap().value, "Is it an animal?");
//! ```

#![warn(missing_docs)]

use guessing_domain::traits::seed_prompts;
use guessing_domain::{Prompt, PromptStore};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during storage operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No prompt stored at the key
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// Inject targeted a prompt that is already a question
    #[error("Prompt is not an answer: {0}")]
    NotAnAnswer(String),
}

/// In-memory implementation of PromptStore
///
/// # Thread Safety
///
/// `MemoryStore` is `Send + Sync`; share it behind an `Arc` between request
/// handlers. Mutations are serialized by a single write lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    prompts: RwLock<HashMap<String, Prompt>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored prompts
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the store holds no prompts
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Critical sections only ever insert whole prompts, so a panic while
    // holding the lock cannot leave a half-written entry behind.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Prompt>> {
        self.prompts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Prompt>> {
        self.prompts.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert under an already-held write lock
    fn put(prompts: &mut HashMap<String, Prompt>, prompt: Prompt) {
        prompts.insert(prompt.key.as_str().to_string(), prompt);
    }
}

impl PromptStore for MemoryStore {
    type Error = StoreError;

    fn lookup(&self, key: &str) -> Result<Prompt, Self::Error> {
        self.read()
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn upsert(&self, prompt: Prompt) -> Result<(), Self::Error> {
        let mut prompts = self.write();
        debug!(key = %prompt.key, kind = prompt.kind.as_str(), "upsert prompt");
        Self::put(&mut prompts, prompt);
        Ok(())
    }

    fn inject(&self, prompt: Prompt, answer: &str) -> Result<(), Self::Error> {
        let mut prompts = self.write();

        let old = prompts
            .get(prompt.key.as_str())
            .ok_or_else(|| StoreError::NotFound(prompt.key.to_string()))?;
        if old.is_question() {
            return Err(StoreError::NotAnAnswer(prompt.key.to_string()));
        }

        let question = prompt.into_question();
        let no = Prompt::answer(question.key.no(), old.value.clone());
        let yes = Prompt::answer(question.key.yes(), answer);

        debug!(
            key = %question.key,
            depth = question.key.depth(),
            "inject question above answer"
        );

        Self::put(&mut prompts, question);
        Self::put(&mut prompts, no);
        Self::put(&mut prompts, yes);
        Ok(())
    }

    fn all_prompts(&self) -> Vec<Prompt> {
        self.read().values().cloned().collect()
    }

    fn seed(&self, root_question: &str, yes_answer: &str, no_answer: &str) -> Result<(), Self::Error> {
        let mut prompts = self.write();
        for prompt in seed_prompts(root_question, yes_answer, no_answer) {
            Self::put(&mut prompts, prompt);
        }
        debug!(prompts = prompts.len(), "seeded prompt tree");
        Ok(())
    }
}
