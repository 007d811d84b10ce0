//! System instruction registry.
//!
//! Fixed Japanese instruction strings, one per narrative task, that pin the
//! output contract for the completion call. Static lookup, no failure mode.
//! The relay never checks the model's answer against these contracts; the
//! text is returned to the client as-is.

/// The three narrative tasks the relay serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeTask {
    /// 3-line nurturing event: title, description, child's spoken line.
    Event,
    /// Strict 7-line stat/narrative block after a parent's comment.
    Feedback,
    /// Single-paragraph life story from age 20 onward.
    Ending,
}

impl NarrativeTask {
    /// Task identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Feedback => "feedback",
            Self::Ending => "ending",
        }
    }

    /// The fixed system instruction sent with every request for this task.
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Event => EVENT_INSTRUCTION,
            Self::Feedback => FEEDBACK_INSTRUCTION,
            Self::Ending => ENDING_INSTRUCTION,
        }
    }
}

const EVENT_INSTRUCTION: &str = "\
以下の情報を元に、3行の育成イベントを出力してください。年齢に沿った出力を行ってください。
【出力形式】
1行目: イベントタイトル
2行目: イベント内容（その子に起きたできごと）
3行目: 子供のセリフ

【例】
誕生日のお祝い
今日は3歳の誕生日。家族とケーキを囲んだ。
「ふーってしたよ！」";

const FEEDBACK_INSTRUCTION: &str = "\
以下の子供の情報と出来事をもとに、プレイヤーの声かけによる影響を分析しなさい。
必ず出力は7行、次の形式に従ってください（ラベルなし、改行で区切る）：
1行目: 性格パラメータ5つ（float）
2行目: 能力パラメータ5つ（float）
3行目: パラメータの変化理由（どのパラメータがどういう理由で変化したかを記述）
4行目: スキル（パラメータやイベントに応じて獲得しそうなスキルを記載、例：歌がうまい、サッカーが得意）
5行目: スキルが獲得できる確率（float, 0.0〜1.0, パラメータやイベントに応じて評価）
6行目: 夢の実現スコア（float, 0.0〜1.0, 夢に対して実現の可能性を評価）
7行目: 愛ゲージスコア（float, 0.0〜1.0, 得ている愛情を評価）
【出力例】
2.1 3.4 1.8 4.0 2.7
1.0 4.2 3.3 2.9 3.1
「すごいね！」という声かけで自信が高まりました。
絵が上手
0.3
0.4
0.7";

const ENDING_INSTRUCTION: &str =
    "以下の育成情報をもとに、その子の20歳以降の人生を感動的な物語として1段落で出力してください。";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_names() {
        assert_eq!(NarrativeTask::Event.name(), "event");
        assert_eq!(NarrativeTask::Feedback.name(), "feedback");
        assert_eq!(NarrativeTask::Ending.name(), "ending");
    }

    #[test]
    fn test_event_instruction_requests_three_lines() {
        let instruction = NarrativeTask::Event.instruction();
        assert!(instruction.contains("3行"));
        assert!(instruction.contains("イベントタイトル"));
        assert!(instruction.contains("子供のセリフ"));
    }

    #[test]
    fn test_feedback_instruction_requests_seven_lines() {
        let instruction = NarrativeTask::Feedback.instruction();
        assert!(instruction.contains("7行"));
        assert!(instruction.contains("性格パラメータ"));
        assert!(instruction.contains("愛ゲージスコア"));
        // The worked example at the end is itself seven lines.
        let example: Vec<_> = instruction.split("【出力例】\n").collect();
        assert_eq!(example.len(), 2);
        assert_eq!(example[1].lines().count(), 7);
    }

    #[test]
    fn test_ending_instruction_requests_one_paragraph() {
        let instruction = NarrativeTask::Ending.instruction();
        assert!(instruction.contains("1段落"));
        assert!(instruction.contains("20歳以降"));
    }
}
