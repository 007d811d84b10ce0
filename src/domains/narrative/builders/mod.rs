//! User prompt builders.
//!
//! Pure functions that render a payload into the Japanese-labeled text block
//! sent as the user prompt. They never fail: fields the client omitted render
//! as their defaults.

mod ending;
mod event;
mod feedback;

pub use ending::build_ending_prompt;
pub use event::build_event_prompt;
pub use feedback::build_feedback_prompt;

/// Format a parameter list as `[2.1, 3.4]`.
pub(crate) fn format_params(values: &[f64]) -> String {
    let inner = values
        .iter()
        .map(|v| format!("{v:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}

/// Format a skill list as `[歌がうまい, サッカーが得意]`.
pub(crate) fn format_skills(skills: &[String]) -> String {
    format!("[{}]", skills.join(", "))
}
