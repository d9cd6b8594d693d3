//! 回答能力 - 业务能力层
//!
//! 只负责"给一道题拿到答案"，不关心文档和统计。

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::clients::ChatBackend;
use crate::config::Config;
use crate::error::ConfigError;
use crate::models::Question;
use crate::services::{DirectProvider, PipelineProvider};

/// 单道题的回答结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerResult {
    Success(String),
    Failure(String),
}

impl AnswerResult {
    pub fn is_success(&self) -> bool {
        matches!(self, AnswerResult::Success(_))
    }
}

/// 回答策略
///
/// 实现必须是全函数：任何错误都转换成 [`AnswerResult::Failure`]，不向外传播。
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    async fn answer(&self, question: &Question) -> AnswerResult;

    /// 日志中显示的策略名称
    fn label(&self) -> &'static str;
}

/// 策略选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// 单次调用
    Direct,
    /// research → write → review 三阶段
    #[default]
    Pipeline,
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" | "single" => Ok(ProviderKind::Direct),
            "pipeline" | "multi-agent" | "multi_agent" => Ok(ProviderKind::Pipeline),
            other => Err(ConfigError::unknown_value("strategy", other)),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Direct => f.write_str("direct"),
            ProviderKind::Pipeline => f.write_str("pipeline"),
        }
    }
}

/// 按配置创建回答策略
pub fn build_provider(
    kind: ProviderKind,
    backend: Arc<dyn ChatBackend>,
    config: &Config,
) -> Box<dyn AnswerProvider> {
    match kind {
        ProviderKind::Direct => Box::new(DirectProvider::new(
            backend,
            config.profile,
            config.temperature,
        )),
        ProviderKind::Pipeline => Box::new(PipelineProvider::new(backend, config.temperature)),
    }
}
