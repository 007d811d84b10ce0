//! Event prompt builder.

use super::{format_params, format_skills};
use crate::domains::narrative::payload::ChildState;

/// Render the child snapshot into the event-generation user prompt.
pub fn build_event_prompt(state: &ChildState) -> String {
    format!(
        "
名前: {name}
年齢: {age}
夢: {dream}

性格パラメータ（対応順: 創造性, 外向性, 協調性, 勤勉性, 情動性）: {p}
能力パラメータ（対応順: 認知能力, 運動能力, 好奇心, 自己肯定感, 外見）: {a}
スキル: {skills}
",
        name = state.name,
        age = state.age,
        dream = state.dream,
        p = format_params(&state.p),
        a = format_params(&state.a),
        skills = format_skills(&state.skills),
    )
}
