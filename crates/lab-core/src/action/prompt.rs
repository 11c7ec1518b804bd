//! Player input seam
//!
//! Puzzle and treasure flows block for an answer. The front end supplies it
//! through [`Prompt`]; returning `None` signals an interrupt, which the
//! resolvers treat exactly like the `quit` command.

use std::collections::VecDeque;

pub trait Prompt {
    /// Show `question` and wait for one line of input
    fn ask(&mut self, question: &str) -> Option<String>;
}

/// Prompt that answers from a fixed queue
///
/// Runs dry as an interrupt. Every question asked is recorded.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompt that interrupts on the first question
    pub fn interrupted() -> Self {
        Self::default()
    }

    /// Questions asked so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Option<String> {
        self.asked.push(question.to_string());
        self.answers.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_answers_in_order() {
        let mut prompt = ScriptedPrompt::new(["yes", "7"]);
        assert_eq!(prompt.ask("Enter a code?").as_deref(), Some("yes"));
        assert_eq!(prompt.ask("Code:").as_deref(), Some("7"));
        assert_eq!(prompt.ask("Again?"), None);
        assert_eq!(prompt.asked().len(), 3);
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn test_interrupted_prompt() {
        let mut prompt = ScriptedPrompt::interrupted();
        assert_eq!(prompt.ask("Your answer:"), None);
    }
}
