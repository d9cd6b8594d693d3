//! 单次调用策略

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::clients::{ChatBackend, ChatRequest};
use crate::models::{Profile, Question};
use crate::services::answer_provider::{AnswerProvider, AnswerResult};
use crate::services::prompts::{direct_prompt, SAFETY_INSTRUCTION};

/// 一道题只发一次请求，带固定的安全系统指令
pub struct DirectProvider {
    backend: Arc<dyn ChatBackend>,
    profile: Profile,
    temperature: f32,
}

impl DirectProvider {
    pub fn new(backend: Arc<dyn ChatBackend>, profile: Profile, temperature: f32) -> Self {
        Self {
            backend,
            profile,
            temperature,
        }
    }

    fn request_for(&self, question: &Question) -> ChatRequest {
        ChatRequest::new(direct_prompt(self.profile, question), self.temperature)
            .with_system(SAFETY_INSTRUCTION)
    }
}

#[async_trait]
impl AnswerProvider for DirectProvider {
    async fn answer(&self, question: &Question) -> AnswerResult {
        debug!("直接调用模型 {}", self.backend.model_name());
        match self.backend.complete(&self.request_for(question)).await {
            Ok(text) => AnswerResult::Success(text),
            Err(e) => AnswerResult::Failure(e.to_string()),
        }
    }

    fn label(&self) -> &'static str {
        "direct"
    }
}
