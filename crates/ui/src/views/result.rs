use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use crate::vm::{ResultVm, map_result};

#[component]
pub fn ResultView(name: String, score: u32, total: u32) -> Element {
    let navigator = use_navigator();
    let retake_name = name.clone();

    let on_retake = move |_| {
        let _ = navigator.push(Route::Exam {
            name: retake_name.clone(),
        });
    };
    let on_home = move |_| {
        let _ = navigator.push(Route::Welcome {});
    };

    rsx! {
        div { class: "page result-page",
            h1 { class: "result-title", "Exam Results" }

            match map_result(score, total) {
                Ok(vm) => rsx! {
                    div { class: "card student-card",
                        h2 { "Student Information" }
                        dl { class: "student-info",
                            dt { "Name" }
                            dd { "{name}" }
                        }
                    }

                    GradeCard { vm: vm.clone() }

                    div { class: "card message-card",
                        p { "{vm.message}" }
                    }
                },
                Err(err) => rsx! {
                    div { class: "card",
                        p { "{err.message()}" }
                    }
                },
            }

            button { class: "btn btn-primary", onclick: on_retake,
                "Nochmal versuchen (Retake Exam)"
            }
            button { class: "btn btn-secondary", onclick: on_home,
                "Back to Home"
            }
        }
    }
}

#[component]
fn GradeCard(vm: ResultVm) -> Element {
    rsx! {
        div { class: "card grade-card",
            p { class: "grade-heading", "Your Grade" }
            p { class: "{vm.grade_class}", "{vm.grade_label}" }
            p { class: "grade-percentage", "{vm.percentage}%" }
            p { class: "grade-score", "{vm.score} out of {vm.total} correct" }
        }
    }
}
