//! 题目处理流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整处理流程
//!
//! 流程顺序：
//! 1. 调用回答策略（可选超时）
//! 2. 排版答案
//! 3. 任何意外（包括 panic）都收敛成这一题的失败，不影响后续题目

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use tracing::{error, info, warn};

use crate::models::{Block, Question};
use crate::services::{AnswerProvider, AnswerResult};
use crate::utils::logging::truncate_text;
use crate::workflow::answer_format::format_answer;
use crate::workflow::question_ctx::QuestionCtx;

/// 失败原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 模型或网络错误
    Provider,
    /// 单次调用超时
    Timeout,
    /// 答案无法排版
    Formatting,
    /// 处理过程中出现意外（panic 等）
    Critical,
}

/// 单道题的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// 排版后的答案正文
    Answered(Vec<Block>),
    Failed { kind: FailureKind, message: String },
}

impl ItemOutcome {
    fn failed(kind: FailureKind, message: impl Into<String>) -> Self {
        ItemOutcome::Failed {
            kind,
            message: message.into(),
        }
    }

    /// 写入文档和失败列表的错误描述
    pub fn failure_message(&self) -> Option<String> {
        match self {
            ItemOutcome::Answered(_) => None,
            ItemOutcome::Failed {
                kind: FailureKind::Critical,
                message,
            } => Some(format!("Critical error: {}", message)),
            ItemOutcome::Failed { message, .. } => Some(message.clone()),
        }
    }
}

/// 题目处理流程
///
/// - 不持有回答策略，只借用
/// - 不关心文档结构和统计
pub struct QuestionFlow<'a> {
    provider: &'a dyn AnswerProvider,
    timeout: Option<Duration>,
}

impl<'a> QuestionFlow<'a> {
    pub fn new(provider: &'a dyn AnswerProvider, timeout: Option<Duration>) -> Self {
        Self { provider, timeout }
    }

    pub async fn run(&self, question: &Question, ctx: &QuestionCtx) -> ItemOutcome {
        info!("{} 题目: {}", ctx, truncate_text(question.text(), 80));

        let outcome = match AssertUnwindSafe(self.answer_and_format(question))
            .catch_unwind()
            .await
        {
            Ok(outcome) => outcome,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!("{} ❌ 处理过程中发生严重错误: {}", ctx, message);
                ItemOutcome::failed(FailureKind::Critical, message)
            }
        };

        match &outcome {
            ItemOutcome::Answered(_) => {
                info!("{} ✅ 完成 ({})", ctx, self.provider.label())
            }
            ItemOutcome::Failed { kind, message } => {
                warn!("{} ❌ 失败 ({:?}): {}", ctx, kind, message)
            }
        }
        outcome
    }

    async fn answer_and_format(&self, question: &Question) -> ItemOutcome {
        let result = match self.timeout {
            Some(limit) => {
                match tokio::time::timeout(limit, self.provider.answer(question)).await {
                    Ok(result) => result,
                    Err(_) => {
                        return ItemOutcome::failed(
                            FailureKind::Timeout,
                            format!("请求超时 ({} 秒)", limit.as_secs()),
                        )
                    }
                }
            }
            None => self.provider.answer(question).await,
        };

        match result {
            AnswerResult::Success(text) => match format_answer(&text) {
                Ok(body) => ItemOutcome::Answered(body),
                Err(e) => ItemOutcome::failed(FailureKind::Formatting, e.to_string()),
            },
            AnswerResult::Failure(message) => ItemOutcome::failed(FailureKind::Provider, message),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "未知错误".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Fixed(AnswerResult);

    #[async_trait]
    impl AnswerProvider for Fixed {
        async fn answer(&self, _question: &Question) -> AnswerResult {
            self.0.clone()
        }

        fn label(&self) -> &'static str {
            "fixed"
        }
    }

    struct Panicking;

    #[async_trait]
    impl AnswerProvider for Panicking {
        async fn answer(&self, _question: &Question) -> AnswerResult {
            panic!("provider exploded")
        }

        fn label(&self) -> &'static str {
            "panicking"
        }
    }

    struct Slow;

    #[async_trait]
    impl AnswerProvider for Slow {
        async fn answer(&self, _question: &Question) -> AnswerResult {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            AnswerResult::Success("too late".to_string())
        }

        fn label(&self) -> &'static str {
            "slow"
        }
    }

    fn question() -> Question {
        Question::new("What is an atom?").unwrap()
    }

    #[tokio::test]
    async fn test_success_is_formatted() {
        let provider = Fixed(AnswerResult::Success("## Definition\n**Atoms** are small.".into()));
        let flow = QuestionFlow::new(&provider, None);

        let outcome = flow.run(&question(), &QuestionCtx::new(1, 1)).await;

        assert_eq!(
            outcome,
            ItemOutcome::Answered(vec![
                Block::section_header("Definition"),
                Block::paragraph("Atoms are small."),
            ])
        );
        assert_eq!(outcome.failure_message(), None);
    }

    #[tokio::test]
    async fn test_empty_answer_is_formatting_failure() {
        let provider = Fixed(AnswerResult::Success("   ".into()));
        let flow = QuestionFlow::new(&provider, None);

        let outcome = flow.run(&question(), &QuestionCtx::new(1, 1)).await;

        assert!(matches!(
            outcome,
            ItemOutcome::Failed {
                kind: FailureKind::Formatting,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_panic_is_contained() {
        let flow = QuestionFlow::new(&Panicking, None);

        let outcome = flow.run(&question(), &QuestionCtx::new(2, 3)).await;

        assert_eq!(
            outcome.failure_message().as_deref(),
            Some("Critical error: provider exploded")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_becomes_failure() {
        let flow = QuestionFlow::new(&Slow, Some(Duration::from_secs(5)));

        let outcome = flow.run(&question(), &QuestionCtx::new(1, 1)).await;

        assert_eq!(
            outcome,
            ItemOutcome::Failed {
                kind: FailureKind::Timeout,
                message: "请求超时 (5 秒)".to_string(),
            }
        );
    }
}
