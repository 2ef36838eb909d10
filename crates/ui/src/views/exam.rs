use dioxus::dioxus_core::Task;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::{ExamPhase, FEEDBACK_DELAY};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{ExamIntent, ExamOutcome, ExamVm, start_exam};

/// Derived display state for one answer option.
#[derive(Clone, Debug, PartialEq)]
struct OptionRow {
    index: usize,
    letter: char,
    text: String,
    translation: Option<String>,
    class: &'static str,
}

/// Everything the exam screen renders, pulled out of the view model so the
/// markup below stays a pure function of this snapshot.
#[derive(Clone, Debug, PartialEq)]
struct ExamDisplay {
    greeting: String,
    counter_de: String,
    counter_en: String,
    progress_percent: u32,
    question_type: Option<String>,
    question_type_translation: Option<String>,
    prompt: String,
    prompt_translation: Option<String>,
    pronunciation: Option<String>,
    options: Vec<OptionRow>,
    feedback: Option<FeedbackDisplay>,
    show_translations: bool,
    submit_enabled: bool,
    submit_de: &'static str,
    submit_en: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
struct FeedbackDisplay {
    correct: bool,
    headline_de: &'static str,
    headline_en: &'static str,
    explanation: Option<String>,
    explanation_translation: Option<String>,
}

fn option_class(
    index: usize,
    selected: Option<usize>,
    correct_index: usize,
    in_feedback: bool,
) -> &'static str {
    let is_selected = selected == Some(index);
    if in_feedback && index == correct_index {
        "option option--correct"
    } else if in_feedback && is_selected {
        "option option--wrong"
    } else if is_selected {
        "option option--selected"
    } else {
        "option"
    }
}

fn build_display(vm: &ExamVm, student_name: &str) -> Option<ExamDisplay> {
    let question = vm.question()?;
    let show_translations = vm.show_translations();
    let in_feedback = vm.phase() == ExamPhase::Feedback;
    let selected = vm.selected();
    let number = vm.position() + 1;
    let total = vm.total();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, text)| OptionRow {
            index,
            letter: char::from(b'A' + u8::try_from(index % 26).unwrap_or(0)),
            text: text.clone(),
            translation: question.option_translation(index).map(ToString::to_string),
            class: option_class(index, selected, question.correct_index(), in_feedback),
        })
        .collect();

    let feedback = vm.last_answer_correct().map(|correct| FeedbackDisplay {
        correct,
        headline_de: if correct {
            "✓ Richtig! Sehr gut!"
        } else {
            "✗ Falsch! Nicht aufgeben!"
        },
        headline_en: if correct {
            "Correct! Very good!"
        } else {
            "Wrong! Don't give up!"
        },
        explanation: question.explanation().map(ToString::to_string),
        explanation_translation: question
            .explanation_translation()
            .map(ToString::to_string),
    });

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let progress_percent = (vm.progress_fraction() * 100.0).round() as u32;

    Some(ExamDisplay {
        greeting: format!("🇩🇪 Hallo, {student_name}!"),
        counter_de: format!("Frage {number} von {total}"),
        counter_en: format!("Question {number} of {total}"),
        progress_percent,
        question_type: question.question_type().map(ToString::to_string),
        question_type_translation: question
            .question_type_translation()
            .map(ToString::to_string),
        prompt: question.prompt().to_string(),
        prompt_translation: question.prompt_translation().map(ToString::to_string),
        pronunciation: question.pronunciation().map(ToString::to_string),
        options,
        feedback,
        show_translations,
        submit_enabled: selected.is_some() && !in_feedback,
        submit_de: if vm.is_last_question() {
            "Quiz beenden"
        } else {
            "Antwort bestätigen"
        },
        submit_en: if vm.is_last_question() {
            "Finish Quiz"
        } else {
            "Confirm Answer"
        },
    })
}

#[component]
pub fn ExamView(name: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let exam_service = ctx.exam_service();

    let mut vm = use_signal({
        let exam_service = exam_service.clone();
        move || start_exam(&exam_service)
    });
    let mut timer = use_signal(|| None::<Task>);

    let dispatch = {
        let exam_service = exam_service.clone();
        let name = name.clone();
        use_callback(move |intent: ExamIntent| {
            let outcome = vm.with_mut(|started| match started {
                Ok(vm) => vm.apply(&exam_service, intent),
                Err(_) => ExamOutcome::Continue,
            });
            if let ExamOutcome::Completed(result) = outcome {
                let _ = navigator.push(Route::Result {
                    name: name.clone(),
                    score: result.score(),
                    total: result.total(),
                });
            }
        })
    };

    // One-shot auto-advance: armed fresh each time feedback appears, torn
    // down with the screen so a discarded session is never touched.
    use_effect(move || {
        let phase = vm.read().as_ref().ok().map(ExamVm::phase);
        if let Some(task) = timer.write().take() {
            task.cancel();
        }
        if phase == Some(ExamPhase::Feedback) {
            let task = spawn(async move {
                tokio::time::sleep(FEEDBACK_DELAY).await;
                dispatch.call(ExamIntent::Advance);
            });
            timer.set(Some(task));
        }
    });
    use_drop(move || {
        if let Some(task) = timer.write().take() {
            task.cancel();
        }
    });

    let on_key = use_callback(move |evt: KeyboardEvent| match evt.data.key() {
        Key::Enter => {
            evt.prevent_default();
            dispatch.call(ExamIntent::Submit);
        }
        Key::Character(value) => {
            if value == "t" {
                dispatch.call(ExamIntent::ToggleTranslations);
            } else if let Ok(number) = value.parse::<usize>() {
                if number >= 1 {
                    dispatch.call(ExamIntent::Select(number - 1));
                }
            }
        }
        _ => {}
    });

    let display = match &*vm.read() {
        Ok(vm) => Ok(build_display(vm, &name)),
        Err(err) => Err(*err),
    };

    rsx! {
        div { class: "page exam-page", tabindex: "0", onkeydown: on_key,
            match display {
                Err(err) => rsx! {
                    ExamError { err }
                },
                // Only visible for the frame between completion and the
                // navigation to the result screen.
                Ok(None) => rsx! {},
                Ok(Some(display)) => rsx! {
                    ExamHeader {
                        greeting: display.greeting.clone(),
                        counter_de: display.counter_de.clone(),
                        counter_en: display.counter_en.clone(),
                        show_translations: display.show_translations,
                        on_toggle: move |()| dispatch.call(ExamIntent::ToggleTranslations),
                    }

                    div { class: "progress-track",
                        div {
                            class: "progress-fill",
                            style: "width: {display.progress_percent}%",
                        }
                    }

                    div { class: "card question-card",
                        if let Some(question_type) = display.question_type.clone() {
                            p { class: "question-type", "{question_type}" }
                            if display.show_translations {
                                if let Some(translation) = display.question_type_translation.clone() {
                                    p { class: "question-type-translation", "{translation}" }
                                }
                            }
                        }

                        h2 { class: "question-prompt", "{display.prompt}" }
                        if display.show_translations {
                            if let Some(translation) = display.prompt_translation.clone() {
                                p { class: "question-translation", "📝 {translation}" }
                            }
                        }
                        if let Some(pronunciation) = display.pronunciation.clone() {
                            p { class: "question-pronunciation", "🔊 {pronunciation}" }
                        }

                        div { class: "options",
                            for option in display.options.clone() {
                                OptionButton {
                                    key: "{option.index}",
                                    option,
                                    show_translations: display.show_translations,
                                    on_select: move |index| dispatch.call(ExamIntent::Select(index)),
                                }
                            }
                        }
                    }

                    if let Some(feedback) = display.feedback.clone() {
                        FeedbackCard { feedback, show_translations: display.show_translations }
                    }

                    button {
                        class: "btn btn-primary submit-btn",
                        disabled: !display.submit_enabled,
                        onclick: move |_| dispatch.call(ExamIntent::Submit),
                        span { class: "submit-de", "{display.submit_de}" }
                        if display.show_translations {
                            span { class: "submit-en", "{display.submit_en}" }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ExamHeader(
    greeting: String,
    counter_de: String,
    counter_en: String,
    show_translations: bool,
    on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        header { class: "card exam-header",
            div { class: "exam-header__text",
                p { class: "exam-greeting", "{greeting}" }
                p { class: "exam-title", "Deutsch-Quiz (German Quiz)" }
                p { class: "exam-counter", "{counter_de}" }
                if show_translations {
                    p { class: "exam-counter-translation", "{counter_en}" }
                }
            }
            button {
                class: "btn btn-ghost toggle-translations",
                onclick: move |_| on_toggle.call(()),
                if show_translations { "DE" } else { "DE/EN" }
            }
        }
    }
}

#[component]
fn OptionButton(
    option: OptionRow,
    show_translations: bool,
    on_select: EventHandler<usize>,
) -> Element {
    let index = option.index;

    rsx! {
        button {
            class: "{option.class}",
            onclick: move |_| on_select.call(index),
            span { class: "option-text", "{option.letter}) {option.text}" }
            if show_translations {
                if let Some(translation) = option.translation.clone() {
                    span { class: "option-translation", "→ {translation}" }
                }
            }
        }
    }
}

#[component]
fn FeedbackCard(feedback: FeedbackDisplay, show_translations: bool) -> Element {
    let class = if feedback.correct {
        "card feedback feedback--correct"
    } else {
        "card feedback feedback--wrong"
    };

    rsx! {
        div { class: "{class}",
            p { class: "feedback-headline", "{feedback.headline_de}" }
            if show_translations {
                p { class: "feedback-translation", "{feedback.headline_en}" }
            }
            if let Some(explanation) = feedback.explanation.clone() {
                p { class: "feedback-explanation", "{explanation}" }
                if show_translations {
                    if let Some(translation) = feedback.explanation_translation.clone() {
                        p { class: "feedback-explanation-translation", "📖 {translation}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ExamError(err: ViewError) -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "card",
            p { "{err.message()}" }
            button {
                class: "btn btn-secondary",
                onclick: move |_| {
                    let _ = navigator.push(Route::Welcome {});
                },
                "Back to Home"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::option_class;

    #[test]
    fn option_classes_follow_feedback_state() {
        // While answering, only the selection is highlighted.
        assert_eq!(option_class(0, Some(0), 1, false), "option option--selected");
        assert_eq!(option_class(1, Some(0), 1, false), "option");

        // During feedback the correct option always shows green and a wrong
        // selection shows red.
        assert_eq!(option_class(1, Some(0), 1, true), "option option--correct");
        assert_eq!(option_class(0, Some(0), 1, true), "option option--wrong");
        assert_eq!(option_class(2, Some(0), 1, true), "option");
    }
}
