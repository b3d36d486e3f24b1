use std::{fs, path::Path, slice};

use anyhow::{Context, bail};
use serde::Serialize;

use crate::QuizQuestion;

/// The default question set, compiled into the binary.
pub const EMBEDDED_QUESTIONS: &str = include_str!("../data/questions.json");

/// An ordered, validated, read-only list of quiz questions.
///
/// Serializes as a bare JSON array in the order the questions were loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionSet(Vec<QuizQuestion>);

impl QuestionSet {
  /// Build a set, validating every question.
  ///
  /// Fails on an empty set or on the first invalid question, reporting its position.
  pub fn new(questions: Vec<QuizQuestion>) -> anyhow::Result<Self> {
    if questions.is_empty() {
      bail!("question set must contain at least one question");
    }

    for (index, question) in questions.iter().enumerate() {
      question
        .validate()
        .with_context(|| format!("invalid question at index {index}"))?;
    }

    Ok(Self(questions))
  }

  /// Parse and validate a JSON array of questions.
  pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
    let questions: Vec<QuizQuestion> =
      serde_json::from_str(json).context("failed to parse question set")?;
    Self::new(questions)
  }

  /// The question set compiled into the binary.
  pub fn embedded() -> anyhow::Result<Self> {
    Self::from_json_str(EMBEDDED_QUESTIONS).context("embedded question set is invalid")
  }

  /// Read a question set from a JSON file.
  pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let path = path.as_ref();

    let json = fs::read_to_string(path)
      .with_context(|| format!("failed to read question set from {}", path.display()))?;

    Self::from_json_str(&json).with_context(|| format!("failed to load {}", path.display()))
  }

  /// Load from `path` when given, otherwise fall back to the embedded set.
  pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
    let set = match path {
      Some(path) => Self::from_path(path)?,
      None => Self::embedded()?,
    };

    tracing::info!(
      source = %path.map_or_else(|| "embedded".to_owned(), |p| p.display().to_string()),
      count = set.len(),
      "question set loaded"
    );

    Ok(set)
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Always `false` for a constructed set; kept for the `len` convention.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  #[must_use]
  pub fn as_slice(&self) -> &[QuizQuestion] {
    &self.0
  }

  pub fn iter(&self) -> slice::Iter<'_, QuizQuestion> {
    self.0.iter()
  }
}

impl<'a> IntoIterator for &'a QuestionSet {
  type Item = &'a QuizQuestion;
  type IntoIter = slice::Iter<'a, QuizQuestion>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
