//! Trait definitions for external interactions
//!
//! These traits define the boundary between the game and its storage.
//! Implementations live in other crates (guessing-store).

use crate::key::PromptKey;
use crate::prompt::Prompt;

/// Question asked at the root of a freshly seeded tree
pub const DEFAULT_ROOT_QUESTION: &str = "Is it an animal?";

/// Answer seeded on the root's "yes" branch
pub const DEFAULT_YES_ANSWER: &str = "You are thinking of a dog!";

/// Answer seeded on the root's "no" branch
pub const DEFAULT_NO_ANSWER: &str = "You are thinking of a computer!";

/// Trait for storing and growing the question tree
///
/// Implemented by the infrastructure layer (guessing-store). Every method
/// takes `&self`: implementations own their synchronization so they can be
/// shared between request handlers.
pub trait PromptStore {
    /// Error type for store operations
    type Error;

    /// Get a copy of the prompt stored at `key`
    ///
    /// Fails when nothing is stored at `key`.
    fn lookup(&self, key: &str) -> Result<Prompt, Self::Error>;

    /// Insert or overwrite the prompt at `prompt.key`
    fn upsert(&self, prompt: Prompt) -> Result<(), Self::Error>;

    /// Split the answer stored at `prompt.key` with a new question
    ///
    /// `prompt.value` becomes the question text at `prompt.key`, the old
    /// answer moves to the "no" child and `answer` is stored on the "yes"
    /// child. All three writes must become visible together.
    fn inject(&self, prompt: Prompt, answer: &str) -> Result<(), Self::Error>;

    /// Snapshot of every stored prompt, in no particular order
    fn all_prompts(&self) -> Vec<Prompt>;

    /// Bootstrap a tree of one question and two answers
    ///
    /// The default goes through [`PromptStore::upsert`] one prompt at a time;
    /// implementations with a lock should override it to write all three in
    /// one critical section.
    fn seed(&self, root_question: &str, yes_answer: &str, no_answer: &str) -> Result<(), Self::Error> {
        for prompt in seed_prompts(root_question, yes_answer, no_answer) {
            self.upsert(prompt)?;
        }
        Ok(())
    }

    /// Seed the tree with the default animal/computer starter
    fn seed_default(&self) -> Result<(), Self::Error> {
        self.seed(DEFAULT_ROOT_QUESTION, DEFAULT_YES_ANSWER, DEFAULT_NO_ANSWER)
    }
}

/// Build the three prompts of a seeded tree: root, "no" leaf, "yes" leaf
pub fn seed_prompts(root_question: &str, yes_answer: &str, no_answer: &str) -> [Prompt; 3] {
    let root = Prompt::question(PromptKey::root(), root_question);
    let no = Prompt::answer(root.key.no(), no_answer);
    let yes = Prompt::answer(root.key.yes(), yes_answer);
    [root, no, yes]
}
