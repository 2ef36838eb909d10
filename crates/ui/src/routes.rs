use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{ExamView, ResultView, WelcomeView};

// Score and total travel as opaque route payloads from the exam screen to
// the result screen; only grading interprets them.
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", WelcomeView)] Welcome {},
        #[route("/exam/:name", ExamView)] Exam { name: String },
        #[route("/result/:name/:score/:total", ResultView)] Result { name: String, score: u32, total: u32 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
