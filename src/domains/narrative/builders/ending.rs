//! Ending prompt builder.

use super::{format_params, format_skills};
use crate::domains::narrative::payload::EndingState;

/// Render the final child state into the life-story user prompt.
pub fn build_ending_prompt(state: &EndingState) -> String {
    format!(
        "
名前: {name}
夢: {dream}
年齢: {age}

性格パラメータ（対応順: 創造性, 外向性, 協調性, 勤勉性, 情動性）: {p}
能力パラメータ（対応順: 認知能力, 運動能力, 好奇心, 自己肯定感, 外見）: {a}
スキル: {skills}
愛ゲージ: {love_gauge:?}
夢の実現スコア: {dream_realization:?}
",
        name = state.name,
        dream = state.dream,
        age = state.age,
        p = format_params(&state.p),
        a = format_params(&state.a),
        skills = format_skills(&state.skills),
        love_gauge = state.love_gauge,
        dream_realization = state.dream_realization,
    )
}
