//! Request payloads submitted by the game client.
//!
//! Every field is optional on the wire. Missing keys fall back to the
//! declared defaults instead of rejecting the request, so the defaulting
//! policy lives here rather than being scattered across the builders.

use serde::{Deserialize, Serialize};

/// The ending endpoint narrates life from age 20 onward.
const DEFAULT_ENDING_AGE: u32 = 20;

/// Snapshot of a simulated child's traits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildState {
    pub name: String,
    pub age: u32,
    pub dream: String,

    /// Personality parameters, in order: creativity, extroversion,
    /// agreeableness, conscientiousness, emotionality.
    pub p: Vec<f64>,

    /// Ability parameters, in order: cognition, motor skill, curiosity,
    /// self-esteem, appearance.
    pub a: Vec<f64>,

    pub skills: Vec<String>,
}

/// Child state plus the event and parent comment driving a feedback round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedbackEvent {
    #[serde(flatten)]
    pub child: ChildState,

    pub event_title: String,
    pub event_content: String,
    pub child_utterance: String,
    pub parent_comment: String,
}

/// Child state at the end of the game, aged into adulthood.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EndingState {
    pub name: String,
    pub dream: String,
    pub age: u32,
    pub p: Vec<f64>,
    pub a: Vec<f64>,
    pub skills: Vec<String>,
    pub love_gauge: f64,
    pub dream_realization: f64,
}

impl Default for EndingState {
    fn default() -> Self {
        Self {
            name: String::new(),
            dream: String::new(),
            age: DEFAULT_ENDING_AGE,
            p: Vec::new(),
            a: Vec::new(),
            skills: Vec::new(),
            love_gauge: 0.0,
            dream_realization: 0.0,
        }
    }
}
