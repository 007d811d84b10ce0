//! Feedback prompt builder.

use super::{format_params, format_skills};
use crate::domains::narrative::payload::FeedbackEvent;

/// Render the child snapshot, the event, and the parent's comment into the
/// feedback-analysis user prompt.
pub fn build_feedback_prompt(event: &FeedbackEvent) -> String {
    format!(
        "
名前: {name}
年齢: {age}
夢: {dream}

性格パラメータ（対応する順に: 創造性, 外向性, 協調性, 勤勉性, 情動性）: {p}
能力パラメータ（対応する順に: 認知能力, 運動能力, 好奇心, 自己肯定感, 外見）: {a}
スキル: {skills}

イベントタイトル: {event_title}
イベント内容: {event_content}
子供の発言: {child_utterance}

親の声かけ: 「{parent_comment}」
",
        name = event.child.name,
        age = event.child.age,
        dream = event.child.dream,
        p = format_params(&event.child.p),
        a = format_params(&event.child.a),
        skills = format_skills(&event.child.skills),
        event_title = event.event_title,
        event_content = event.event_content,
        child_utterance = event.child_utterance,
        parent_comment = event.parent_comment,
    )
}
