//! Question sources for exam sessions.

use quiz_core::model::Question;

use crate::error::ExamError;

/// Supplies the ordered, fixed question list for one exam session.
///
/// Sources are read-only collaborators: the session owns the returned
/// questions for its whole lifetime and never mutates the source.
pub trait QuestionSource: Send + Sync {
    /// Load the question sequence in exam order.
    ///
    /// # Errors
    ///
    /// Propagates question construction failures; an empty list surfaces
    /// later as `ExamError::Empty` when the session starts.
    fn load(&self) -> Result<Vec<Question>, ExamError>;
}

/// The built-in ten-question German quiz.
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanQuestionBank;

impl GermanQuestionBank {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn texts(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

impl QuestionSource for GermanQuestionBank {
    fn load(&self) -> Result<Vec<Question>, ExamError> {
        Ok(vec![
            Question::new(
                "Wie sagt man 'hello' auf Deutsch?",
                texts(&["Hallo", "Tschüss", "Danke", "Bitte"]),
                0,
            )?
            .with_prompt_translation("How do you say 'hello' in German?")
            .with_question_type("Begrüßung", "Greeting")
            .with_pronunciation("HAH-loh")
            .with_option_translations(texts(&["Hello", "Goodbye", "Thank you", "Please"]))?
            .with_explanation(
                "'Hallo' ist die gebräuchlichste Begrüßung.",
                "'Hallo' is the most common greeting.",
            ),
            Question::new(
                "Welcher Artikel gehört zu 'Haus'?",
                texts(&["der", "die", "das"]),
                2,
            )?
            .with_prompt_translation("Which article goes with 'Haus' (house)?")
            .with_question_type("Grammatik", "Grammar")
            .with_option_translations(texts(&[
                "the (masculine)",
                "the (feminine)",
                "the (neuter)",
            ]))?
            .with_explanation(
                "'Haus' ist sächlich: das Haus.",
                "'Haus' is neuter: das Haus.",
            ),
            Question::new(
                "Was bedeutet 'Danke'?",
                texts(&["Please", "Sorry", "Thank you", "Excuse me"]),
                2,
            )?
            .with_prompt_translation("What does 'Danke' mean?")
            .with_question_type("Wortschatz", "Vocabulary")
            .with_pronunciation("DAHN-kuh"),
            Question::new(
                "Wie heißt die Zahl 'sieben' auf Englisch?",
                texts(&["six", "seven", "eight", "nine"]),
                1,
            )?
            .with_prompt_translation("What is the number 'sieben' in English?")
            .with_question_type("Zahlen", "Numbers")
            .with_pronunciation("ZEE-ben"),
            Question::new(
                "Wie konjugiert man 'sein' für 'ich'?",
                texts(&["ich bin", "ich bist", "ich ist", "ich sind"]),
                0,
            )?
            .with_prompt_translation("How do you conjugate 'sein' (to be) for 'I'?")
            .with_question_type("Grammatik", "Grammar")
            .with_option_translations(texts(&["I am", "I are", "I is", "we are"]))?
            .with_explanation(
                "'Sein' ist unregelmäßig: ich bin, du bist, er ist.",
                "'Sein' is irregular: ich bin, du bist, er ist.",
            ),
            Question::new(
                "Was ist das Gegenteil von 'groß'?",
                texts(&["alt", "klein", "lang", "neu"]),
                1,
            )?
            .with_prompt_translation("What is the opposite of 'groß' (big)?")
            .with_question_type("Wortschatz", "Vocabulary")
            .with_option_translations(texts(&["old", "small", "long", "new"]))?,
            Question::new(
                "Wie fragt man nach dem Namen?",
                texts(&[
                    "Wie alt bist du?",
                    "Woher kommst du?",
                    "Wie heißt du?",
                    "Wo wohnst du?",
                ]),
                2,
            )?
            .with_prompt_translation("How do you ask for someone's name?")
            .with_question_type("Konversation", "Conversation")
            .with_option_translations(texts(&[
                "How old are you?",
                "Where are you from?",
                "What is your name?",
                "Where do you live?",
            ]))?,
            Question::new(
                "Welches Wort ist ein Wochentag?",
                texts(&["Montag", "Januar", "Sommer", "Morgen"]),
                0,
            )?
            .with_prompt_translation("Which word is a day of the week?")
            .with_question_type("Wortschatz", "Vocabulary")
            .with_option_translations(texts(&["Monday", "January", "summer", "morning"]))?
            .with_explanation(
                "Die Wochentage enden auf '-tag', außer Mittwoch.",
                "Weekdays end in '-tag', except Mittwoch (Wednesday).",
            ),
            Question::new(
                "Was ist der Plural von 'Kind'?",
                texts(&["Kinds", "Kinden", "Kinder", "Kindes"]),
                2,
            )?
            .with_prompt_translation("What is the plural of 'Kind' (child)?")
            .with_question_type("Grammatik", "Grammar")
            .with_pronunciation("KIN-der"),
            Question::new(
                "Wie sagt man 'goodbye' auf Deutsch?",
                texts(&["Guten Morgen", "Auf Wiedersehen", "Gute Nacht", "Willkommen"]),
                1,
            )?
            .with_prompt_translation("How do you say 'goodbye' in German?")
            .with_question_type("Begrüßung", "Greeting")
            .with_pronunciation("owf VEE-der-zay-en")
            .with_option_translations(texts(&[
                "Good morning",
                "Goodbye",
                "Good night",
                "Welcome",
            ]))?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_loads_ten_valid_questions() {
        let questions = GermanQuestionBank::new().load().unwrap();
        assert_eq!(questions.len(), 10);

        for question in &questions {
            assert!(!question.options().is_empty());
            assert!(question.correct_index() < question.options().len());
            assert!(question.prompt_translation().is_some());
        }
    }

    #[test]
    fn first_question_greets_in_german() {
        let questions = GermanQuestionBank::new().load().unwrap();
        let first = &questions[0];
        assert_eq!(first.options()[first.correct_index()], "Hallo");
    }
}
