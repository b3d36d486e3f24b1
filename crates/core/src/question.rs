use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Minimum number of options a question must offer.
const MIN_OPTIONS: usize = 2;

/// A multiple-choice question.
///
/// Field order is the wire order: `question`, `options`, `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizQuestion {
  /// Prompt text
  pub question: String,
  /// Candidate answers, `answer` indexes into these
  pub options: Vec<String>,
  /// Zero-based index of the correct option
  pub answer: usize,
}

impl QuizQuestion {
  pub fn new<Q, O>(question: Q, options: O, answer: usize) -> Self
  where
    Q: Into<String>,
    O: IntoIterator,
    O::Item: Into<String>,
  {
    Self {
      question: question.into(),
      options: options.into_iter().map(Into::into).collect(),
      answer,
    }
  }

  /// The text of the correct option.
  ///
  /// `None` only for a question that would fail [`QuizQuestion::validate`].
  #[must_use]
  pub fn correct_option(&self) -> Option<&str> {
    self.options.get(self.answer).map(String::as_str)
  }

  /// Check the record invariants: non-blank prompt, at least two options,
  /// `answer < options.len()`.
  pub fn validate(&self) -> anyhow::Result<()> {
    if self.question.trim().is_empty() {
      bail!("question text cannot be empty");
    }

    if self.options.len() < MIN_OPTIONS {
      bail!(
        "expected at least {MIN_OPTIONS} options, found {}",
        self.options.len()
      );
    }

    if self.answer >= self.options.len() {
      bail!(
        "answer index {} is out of range for {} options",
        self.answer,
        self.options.len()
      );
    }

    Ok(())
  }
}
