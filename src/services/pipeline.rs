//! 多阶段策略
//!
//! 三个角色依次调用同一个模型，每一阶段的输出作为下一阶段的上下文。

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::clients::{ChatBackend, ChatRequest};
use crate::error::LlmError;
use crate::models::Question;
use crate::services::answer_provider::{AnswerProvider, AnswerResult};
use crate::services::prompts::{StageSpec, PIPELINE_STAGES};

pub struct PipelineProvider {
    backend: Arc<dyn ChatBackend>,
    stages: &'static [StageSpec],
    temperature: f32,
}

impl PipelineProvider {
    pub fn new(backend: Arc<dyn ChatBackend>, temperature: f32) -> Self {
        Self {
            backend,
            stages: &PIPELINE_STAGES,
            temperature,
        }
    }

    async fn run_stages(&self, question: &Question) -> Result<String, LlmError> {
        let mut context: Option<String> = None;

        for stage in self.stages {
            debug!("阶段 {} 开始", stage.role);
            let request = ChatRequest::new(
                stage.user_message(question, context.as_deref()),
                self.temperature,
            )
            .with_system(stage.system_message());

            let output = self
                .backend
                .complete(&request)
                .await
                .map_err(|e| e.in_stage(stage.role))?;
            context = Some(output);
        }

        context.ok_or_else(|| LlmError::InvalidRequest("流程中没有任何阶段".to_string()))
    }
}

#[async_trait]
impl AnswerProvider for PipelineProvider {
    async fn answer(&self, question: &Question) -> AnswerResult {
        match self.run_stages(question).await {
            Ok(text) => AnswerResult::Success(text),
            Err(e) => AnswerResult::Failure(e.to_string()),
        }
    }

    fn label(&self) -> &'static str {
        "multi-agent"
    }
}
