//! Canned players and an in-memory table.
//!
//! `ScriptedInput` answers position prompts from a fixed list and
//! `Transcript` records everything shown. Together they drive a `Match`
//! without a terminal:
//!
//! ```
//! use memoarr::core::GameConfig;
//! use memoarr::play::{Match, ScriptedInput, Transcript};
//!
//! let mut game = Match::from_config(&GameConfig::new(["Ana", "Ben"]).with_seed(3)).unwrap();
//! let mut input = ScriptedInput::new(["A1", "A2", "A3"]);
//! let mut out = Transcript::default();
//!
//! // Three reveals may or may not end the round; either way the script
//! // runs out and the driver reports closed input.
//! let _ = game.play_round(&mut input, &mut out);
//! assert!(out.contains("ROUND 1"));
//! ```

use std::collections::VecDeque;

use crate::core::Position;
use crate::effects::{InputError, PositionSource, Prompt};
use crate::render::Renderer;

/// Answers prompts from a list of strings, in order.
///
/// Answers are parsed like terminal input, so malformed entries exercise
/// the same paths a typo would. Once the list is used up every request
/// reports `InputError::Closed`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<Prompt>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Queue more answers.
    pub fn extend<S: Into<String>>(&mut self, answers: impl IntoIterator<Item = S>) {
        self.answers.extend(answers.into_iter().map(Into::into));
    }

    /// Answers not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Every position prompt received, in order.
    #[must_use]
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }
}

impl PositionSource for ScriptedInput {
    fn request_position(&mut self, prompt: Prompt) -> Result<Position, InputError> {
        self.prompts.push(prompt);
        let answer = self.answers.pop_front().ok_or(InputError::Closed)?;
        Ok(answer.parse()?)
    }
}

/// Collects rendered text.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    entries: Vec<String>,
}

impl Transcript {
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Was `needle` part of anything shown?
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|entry| entry.contains(needle))
    }
}

impl Renderer for Transcript {
    fn show(&mut self, text: &str) {
        self.entries.push(text.to_string());
    }
}
