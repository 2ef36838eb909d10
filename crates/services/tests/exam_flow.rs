use std::sync::Arc;

use quiz_core::grading::GradeLetter;
use quiz_core::time::fixed_clock;
use services::{ExamService, GermanQuestionBank, QuestionSource};

#[test]
fn perfect_run_through_the_builtin_bank_grades_a_plus() {
    let bank = GermanQuestionBank::new();
    let answers: Vec<usize> = bank
        .load()
        .unwrap()
        .iter()
        .map(quiz_core::model::Question::correct_index)
        .collect();

    let service = ExamService::new(fixed_clock(), Arc::new(bank));
    let mut session = service.start_exam().unwrap();

    let mut result = None;
    for answer in answers {
        session.select_option(answer);
        session.submit_answer();
        result = service.advance(&mut session);
    }

    let result = result.expect("last advance completes the exam");
    assert!(session.is_complete());
    assert_eq!(result.score(), result.total());
    assert_eq!(result.total(), 10);

    let report = service.grade_result(&result).unwrap();
    assert_eq!(report.percentage(), 100);
    assert_eq!(report.letter(), GradeLetter::APlus);
}

#[test]
fn all_wrong_run_grades_f() {
    let bank = GermanQuestionBank::new();
    let wrong_answers: Vec<usize> = bank
        .load()
        .unwrap()
        .iter()
        .map(|question| {
            // Any index other than the correct one.
            (question.correct_index() + 1) % question.options().len()
        })
        .collect();

    let service = ExamService::new(fixed_clock(), Arc::new(bank));
    let mut session = service.start_exam().unwrap();

    let mut result = None;
    for answer in wrong_answers {
        session.select_option(answer);
        session.submit_answer();
        assert_eq!(session.last_answer_correct(), Some(false));
        result = service.advance(&mut session);
    }

    let result = result.expect("last advance completes the exam");
    assert_eq!(result.score(), 0);

    let report = service.grade_result(&result).unwrap();
    assert_eq!(report.percentage(), 0);
    assert_eq!(report.letter(), GradeLetter::F);
}
