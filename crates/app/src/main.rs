use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::Clock;
use services::{ExamService, GermanQuestionBank};
use ui::{App, UiApp, build_app_context};

/// Placeholder shown when no student name is supplied anywhere.
const DEFAULT_STUDENT_NAME: &str = "Schüler";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyName,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyName => write!(f, "--name must not be blank"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    student_name: String,
    exam_service: Arc<ExamService>,
}

impl UiApp for DesktopApp {
    fn student_name(&self) -> String {
        self.student_name.clone()
    }

    fn exam_service(&self) -> Arc<ExamService> {
        Arc::clone(&self.exam_service)
    }
}

struct Args {
    student_name: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--name <student name>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --name {DEFAULT_STUDENT_NAME}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_STUDENT_NAME");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut student_name = std::env::var("QUIZ_STUDENT_NAME")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STUDENT_NAME.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--name" => {
                    let value = require_value(args, "--name")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyName);
                    }
                    student_name = value.trim().to_string();
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { student_name })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let exam_service = Arc::new(ExamService::new(
        Clock::default_clock(),
        Arc::new(GermanQuestionBank::new()),
    ));

    let app = DesktopApp {
        student_name: parsed.student_name,
        exam_service,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Deutsch-Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
