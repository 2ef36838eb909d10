use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while building a question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("a question needs at least one answer option")]
    NoOptions,

    #[error("correct answer index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },

    #[error("{translations} option translations do not match {options} options")]
    OptionTranslationMismatch { options: usize, translations: usize },
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single multiple-choice exam item.
///
/// Questions are immutable and positional: they carry no id and are
/// addressed by their index in the exam sequence. The German-facing fields
/// are required; the English translations, pronunciation hint and
/// explanation are optional display extras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    prompt_translation: Option<String>,
    question_type: Option<String>,
    question_type_translation: Option<String>,
    pronunciation: Option<String>,
    options: Vec<String>,
    option_translations: Option<Vec<String>>,
    correct_index: usize,
    explanation: Option<String>,
    explanation_translation: Option<String>,
}

impl Question {
    /// Create a question from its required parts.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::NoOptions` if `options` is empty.
    /// Returns `QuestionError::CorrectIndexOutOfRange` if `correct_index`
    /// does not address one of `options`.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }

        Ok(Self {
            prompt: prompt.into(),
            prompt_translation: None,
            question_type: None,
            question_type_translation: None,
            pronunciation: None,
            options,
            option_translations: None,
            correct_index,
            explanation: None,
            explanation_translation: None,
        })
    }

    #[must_use]
    pub fn with_prompt_translation(mut self, translation: impl Into<String>) -> Self {
        self.prompt_translation = Some(translation.into());
        self
    }

    #[must_use]
    pub fn with_question_type(
        mut self,
        label: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.question_type = Some(label.into());
        self.question_type_translation = Some(translation.into());
        self
    }

    #[must_use]
    pub fn with_pronunciation(mut self, hint: impl Into<String>) -> Self {
        self.pronunciation = Some(hint.into());
        self
    }

    /// Attach per-option translations.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::OptionTranslationMismatch` if the list does
    /// not align 1:1 with the options.
    pub fn with_option_translations(
        mut self,
        translations: Vec<String>,
    ) -> Result<Self, QuestionError> {
        if translations.len() != self.options.len() {
            return Err(QuestionError::OptionTranslationMismatch {
                options: self.options.len(),
                translations: translations.len(),
            });
        }
        self.option_translations = Some(translations);
        Ok(self)
    }

    #[must_use]
    pub fn with_explanation(
        mut self,
        text: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.explanation = Some(text.into());
        self.explanation_translation = Some(translation.into());
        self
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn prompt_translation(&self) -> Option<&str> {
        self.prompt_translation.as_deref()
    }

    #[must_use]
    pub fn question_type(&self) -> Option<&str> {
        self.question_type.as_deref()
    }

    #[must_use]
    pub fn question_type_translation(&self) -> Option<&str> {
        self.question_type_translation.as_deref()
    }

    #[must_use]
    pub fn pronunciation(&self) -> Option<&str> {
        self.pronunciation.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Translation for the option at `index`, when one is attached.
    #[must_use]
    pub fn option_translation(&self, index: usize) -> Option<&str> {
        self.option_translations
            .as_ref()
            .and_then(|translations| translations.get(index))
            .map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Whether the option at `index` is the correct answer.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn explanation_translation(&self) -> Option<&str> {
        self.explanation_translation.as_deref()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
