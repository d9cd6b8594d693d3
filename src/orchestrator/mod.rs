//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 一次运行
//! - 管理应用生命周期（初始化、运行）
//! - 加载并归一化题目
//! - 选择回答策略、渲染并写出文档
//!
//! ### `report_builder` - 题目列表
//! - 按顺序遍历 `QuestionBatch`
//! - 复用 QuestionFlow 处理每道题
//! - 累计文档块和统计
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (一次运行)
//!     ↓
//! report_builder (处理 QuestionBatch)
//!     ↓
//! workflow::QuestionFlow (处理单个 Question)
//!     ↓
//! services (能力层：direct / pipeline)
//!     ↓
//! clients (基础设施：LLM 客户端)
//! ```

pub mod batch_processor;
pub mod report_builder;

pub use batch_processor::{App, RunInput, RunOutcome};
pub use report_builder::{Report, ReportAccumulator, ReportBuilder};
