//! 批量题目处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次运行的输入、生成和输出。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：校验配置、创建 LLM 客户端
//! 2. **题目加载**：读取文本和表格，归一化成题目列表
//! 3. **策略选择**：按配置创建回答策略
//! 4. **报告生成**：委托 report_builder 逐题处理
//! 5. **文档输出**：渲染并写入 `<Prefix>_<时间戳>.<ext>`
//!
//! ## 设计特点
//!
//! - **资源所有者**：唯一持有 LLM 客户端的模块，生命周期限定在一次运行
//! - **向下委托**：不处理单道题的细节

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tokio::fs;
use tracing::{info, warn};

use crate::clients::{ChatBackend, ChatRequest, LlmClient};
use crate::config::Config;
use crate::error::{AppResult, SourceError};
use crate::models::{normalize, RunSummary};
use crate::orchestrator::report_builder::ReportBuilder;
use crate::render::{artifact_file_name, renderer_for};
use crate::services::build_provider;
use crate::utils::logging::{log_questions_loaded, log_startup, print_final_stats};

/// 一次运行的输入
#[derive(Debug, Clone, Default)]
pub struct RunInput {
    /// 文本框内容，每行一个题目
    pub text: Option<String>,
    /// 表格文件路径
    pub spreadsheet: Option<PathBuf>,
    /// 是否额外写出 JSON 统计
    pub summary_json: bool,
}

/// 一次运行的结果
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub output_path: PathBuf,
    pub summary_path: Option<PathBuf>,
    pub summary: RunSummary,
}

/// 应用主结构
pub struct App {
    config: Config,
    backend: Arc<dyn ChatBackend>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        config.validate().context("配置校验失败")?;
        let backend = Arc::new(LlmClient::new(&config));
        Ok(Self::with_backend(config, backend))
    }

    /// 使用指定的 LLM 后端
    pub fn with_backend(config: Config, backend: Arc<dyn ChatBackend>) -> Self {
        log_startup(&config);
        Self { config, backend }
    }

    /// 连接测试
    pub async fn ping(&self) -> AppResult<String> {
        info!("🔍 测试连接: {}", self.backend.model_name());
        let reply = self.backend.complete(&ChatRequest::new("Say 'OK'", 0.0)).await?;
        Ok(reply)
    }

    /// 运行应用主逻辑
    pub async fn run(&self, input: RunInput) -> Result<RunOutcome> {
        // 打不开的表格文件和损坏的表格一样处理
        let (table_bytes, read_error) = match &input.spreadsheet {
            Some(path) => match fs::read(path).await {
                Ok(bytes) => (Some(bytes), None),
                Err(e) => (
                    None,
                    Some(SourceError::FileRead {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    }),
                ),
            },
            None => (None, None),
        };

        let mut normalized = normalize(input.text.as_deref(), table_bytes.as_deref());
        if read_error.is_some() {
            normalized.table_error = read_error;
        }
        if let Some(e) = &normalized.table_error {
            warn!("⚠️ 表格错误: {}", e);
        }
        if normalized.batch.is_empty() {
            if let Some(e) = normalized.table_error {
                return Err(e).context("表格无法读取，且没有其它题目");
            }
            bail!("没有题目：请输入或上传至少一个题目");
        }
        log_questions_loaded(
            normalized.text_count,
            normalized.table_count,
            normalized.batch.len(),
        );

        let provider = build_provider(self.config.strategy, self.backend.clone(), &self.config);
        let builder =
            ReportBuilder::new(self.config.profile).with_timeout(self.config.request_timeout());

        let report = builder.build(&normalized.batch, provider.as_ref()).await;

        let renderer = renderer_for(self.config.output_format, self.config.theme.palette());
        let bytes = report.render(renderer.as_ref())?;

        let output_dir = Path::new(&self.config.output_dir);
        fs::create_dir_all(output_dir)
            .await
            .with_context(|| format!("无法创建输出目录: {}", output_dir.display()))?;

        let file_name = artifact_file_name(
            self.config.profile.file_prefix(),
            renderer.extension(),
            &builder.generated_at(),
        );
        let output_path = output_dir.join(&file_name);
        fs::write(&output_path, &bytes)
            .await
            .with_context(|| format!("无法写入文档: {}", output_path.display()))?;
        info!(
            "📥 文档已生成: {} ({}, {} 字节)",
            output_path.display(),
            renderer.mime_type(),
            bytes.len()
        );

        let summary_path = if input.summary_json {
            let path = output_path.with_extension("summary.json");
            let json = serde_json::to_vec_pretty(report.summary())?;
            fs::write(&path, json)
                .await
                .with_context(|| format!("无法写入统计文件: {}", path.display()))?;
            Some(path)
        } else {
            None
        };

        print_final_stats(report.summary(), &output_path.display().to_string());

        Ok(RunOutcome {
            output_path,
            summary_path,
            summary: report.summary().clone(),
        })
    }
}
