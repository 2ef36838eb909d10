use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn WelcomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut name = use_signal(String::new);

    let placeholder = ctx.student_name().to_string();
    let on_start = {
        let fallback = placeholder.clone();
        move |_| {
            let trimmed = name.read().trim().to_string();
            let student = if trimmed.is_empty() { fallback.clone() } else { trimmed };
            let _ = navigator.push(Route::Exam { name: student });
        }
    };

    rsx! {
        div { class: "page welcome-page",
            div { class: "welcome-logo", "📚" }

            h1 { class: "welcome-title", "Deutsch-Quiz" }
            p { class: "welcome-subtitle", "German Language Exam" }

            p { class: "welcome-description",
                "Test your German skills with a short exam: 10 multiple-choice "
                "questions covering greetings, grammar, vocabulary and numbers."
            }

            label { class: "welcome-name",
                span { "Dein Name (your name)" }
                input {
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }

            button { class: "btn btn-primary welcome-start", onclick: on_start,
                "Quiz starten"
            }

            div { class: "card welcome-info",
                h2 { "Exam Information" }
                ul {
                    li { "10 Multiple Choice Questions" }
                    li { "Immediate feedback after every answer" }
                    li { "English translations can be toggled" }
                    li { "Score and grade at the end" }
                }
            }
        }
    }
}
