mod exam;
mod result;
mod state;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use exam::ExamView;
pub use result::ResultView;
pub use state::ViewError;
pub use welcome::WelcomeView;
