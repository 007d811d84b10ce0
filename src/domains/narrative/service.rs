//! Narrative service implementation.
//!
//! Pairs each user-prompt builder with its system instruction and issues the
//! single completion call for that task. Stateless: every request stands
//! alone, and the response text is relayed without parsing or validation.

use std::sync::Arc;
use tracing::info;

use super::builders::{build_ending_prompt, build_event_prompt, build_feedback_prompt};
use super::error::NarrativeError;
use super::instructions::NarrativeTask;
use super::payload::{ChildState, EndingState, FeedbackEvent};
use crate::domains::completion::CompletionBackend;

/// Service generating narrative text for the three relay tasks.
#[derive(Clone)]
pub struct NarrativeService {
    backend: Arc<dyn CompletionBackend>,
}

impl NarrativeService {
    /// Create a service backed by the given completion backend.
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        info!("Initializing NarrativeService");
        Self { backend }
    }

    /// Generate a 3-line nurturing event for the given child.
    pub async fn generate_event(&self, state: &ChildState) -> Result<String, NarrativeError> {
        self.generate(NarrativeTask::Event, build_event_prompt(state))
            .await
    }

    /// Analyze the parent's comment and generate the 7-line stat block.
    pub async fn generate_feedback(
        &self,
        event: &FeedbackEvent,
    ) -> Result<String, NarrativeError> {
        self.generate(NarrativeTask::Feedback, build_feedback_prompt(event))
            .await
    }

    /// Generate the one-paragraph life story for the finished game.
    pub async fn generate_ending(&self, state: &EndingState) -> Result<String, NarrativeError> {
        self.generate(NarrativeTask::Ending, build_ending_prompt(state))
            .await
    }

    async fn generate(
        &self,
        task: NarrativeTask,
        user_prompt: String,
    ) -> Result<String, NarrativeError> {
        info!("Generating {} narrative", task.name());
        let text = self
            .backend
            .complete(task.instruction(), &user_prompt)
            .await?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::completion::CompletionError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Backend that records the prompts it was handed and echoes a reply.
    struct RecordingBackend {
        calls: Mutex<Vec<(String, String)>>,
    }

    impl RecordingBackend {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
            })
        }

        fn last_call(&self) -> (String, String) {
            self.calls.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl CompletionBackend for RecordingBackend {
        async fn complete(
            &self,
            system_prompt: &str,
            user_prompt: &str,
        ) -> Result<String, CompletionError> {
            self.calls
                .lock()
                .unwrap()
                .push((system_prompt.to_string(), user_prompt.to_string()));
            Ok("ok".to_string())
        }
    }

    #[tokio::test]
    async fn test_event_uses_event_instruction() {
        let backend = RecordingBackend::new();
        let service = NarrativeService::new(backend.clone());

        let state = ChildState {
            name: "はな".to_string(),
            ..Default::default()
        };
        let text = service.generate_event(&state).await.unwrap();
        assert_eq!(text, "ok");

        let (system, user) = backend.last_call();
        assert_eq!(system, NarrativeTask::Event.instruction());
        assert!(user.contains("名前: はな"));
    }

    #[tokio::test]
    async fn test_feedback_uses_feedback_instruction() {
        let backend = RecordingBackend::new();
        let service = NarrativeService::new(backend.clone());

        let event = FeedbackEvent {
            parent_comment: "すごいね！".to_string(),
            ..Default::default()
        };
        service.generate_feedback(&event).await.unwrap();

        let (system, user) = backend.last_call();
        assert_eq!(system, NarrativeTask::Feedback.instruction());
        assert!(user.contains("すごいね！"));
    }

    #[tokio::test]
    async fn test_ending_uses_ending_instruction() {
        let backend = RecordingBackend::new();
        let service = NarrativeService::new(backend.clone());

        service
            .generate_ending(&EndingState::default())
            .await
            .unwrap();

        let (system, user) = backend.last_call();
        assert_eq!(system, NarrativeTask::Ending.instruction());
        assert!(user.contains("年齢: 20"));
    }

    #[test]
    fn test_backend_failure_propagates() {
        struct FailingBackend;

        #[async_trait]
        impl CompletionBackend for FailingBackend {
            async fn complete(&self, _: &str, _: &str) -> Result<String, CompletionError> {
                Err(CompletionError::network("connection refused"))
            }
        }

        let service = NarrativeService::new(Arc::new(FailingBackend));
        let result = tokio_test::block_on(service.generate_event(&ChildState::default()));
        assert!(matches!(
            result,
            Err(NarrativeError::Completion(CompletionError::Network(_)))
        ));
    }
}
