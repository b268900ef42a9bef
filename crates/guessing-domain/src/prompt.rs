//! Prompt module - the nodes of the decision tree

use crate::key::PromptKey;

/// Whether a prompt ends the game or asks another question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PromptKind {
    /// Terminal guess ("You are thinking of a dog!")
    #[default]
    Answer,

    /// Yes/no question with two children in the tree
    Question,
}

impl PromptKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKind::Answer => "answer",
            PromptKind::Question => "question",
        }
    }
}

/// A question or answer stored at a position in the tree
///
/// Child keys are not stored: they are recomputed from `key` on demand and
/// only exist for [`PromptKind::Question`] prompts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prompt {
    /// Position in the tree
    pub key: PromptKey,

    /// Question text or answer text
    pub value: String,

    /// Question or answer
    pub kind: PromptKind,
}

impl Prompt {
    /// Create an answer leaf
    ///
    /// # Examples
    ///
    /// ```
    /// use guessing_domain::Prompt;
    ///
    /// let leaf = Prompt::answer("00", "You are thinking of a computer!");
    /// assert!(leaf.is_answer());
    /// assert_eq!(leaf.yes_key(), None);
    /// ```
    pub fn answer(key: impl Into<PromptKey>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            kind: PromptKind::Answer,
        }
    }

    /// Create a question node
    ///
    /// # Examples
    ///
    /// ```
    /// use guessing_domain::Prompt;
    ///
    /// let root = Prompt::question("0", "Is it an animal?");
    /// assert_eq!(root.yes_key().unwrap().as_str(), "01");
    /// assert_eq!(root.no_key().unwrap().as_str(), "00");
    /// ```
    pub fn question(key: impl Into<PromptKey>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            kind: PromptKind::Question,
        }
    }

    /// Turn this prompt into a question at the same key
    pub fn into_question(self) -> Self {
        Self {
            kind: PromptKind::Question,
            ..self
        }
    }

    /// Key of the "yes" child, if this is a question
    pub fn yes_key(&self) -> Option<PromptKey> {
        self.is_question().then(|| self.key.yes())
    }

    /// Key of the "no" child, if this is a question
    pub fn no_key(&self) -> Option<PromptKey> {
        self.is_question().then(|| self.key.no())
    }

    /// Check whether this prompt is a question
    pub fn is_question(&self) -> bool {
        self.kind == PromptKind::Question
    }

    /// Check whether this prompt is an answer leaf
    pub fn is_answer(&self) -> bool {
        self.kind == PromptKind::Answer
    }
}
