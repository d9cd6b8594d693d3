//! # Study Notes
//!
//! 把一组题目交给大模型逐个回答，并汇总成 Word 文档
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - 持有 LLM 客户端，只暴露 `ChatBackend` 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个 Question
//! - `DirectProvider` - 单次调用
//! - `PipelineProvider` - research → write → review 三阶段
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整处理流程
//! - `QuestionFlow` - 调用策略 → 超时 → 排版 → 失败收敛
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/report_builder` - 顺序遍历题目，累计文档块和统计
//! - `orchestrator/batch_processor` - 一次运行：加载输入、选择策略、写出文档
//!
//! ## 模块结构

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod render;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{ChatBackend, ChatRequest, LlmClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Question, QuestionBatch, RunSummary};
pub use orchestrator::{App, Report, ReportBuilder, RunInput, RunOutcome};
pub use services::{AnswerProvider, AnswerResult, ProviderKind};
pub use workflow::{ItemOutcome, QuestionCtx, QuestionFlow};
