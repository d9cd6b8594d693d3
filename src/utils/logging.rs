/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::info;

use crate::config::Config;
use crate::models::RunSummary;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 学习笔记生成模式");
    info!("🤖 回答策略: {}", config.strategy);
    info!("📄 文档类型: {} | 主题: {}", config.profile, config.theme);
    info!("🧠 模型: {}", config.llm_model_name);
    info!("{}", "=".repeat(60));
}

/// 记录题目加载信息
///
/// # 参数
/// - `text_count`: 文本框题目数
/// - `table_count`: 表格题目数
/// - `batch_len`: 实际处理数量
pub fn log_questions_loaded(text_count: usize, table_count: usize, batch_len: usize) {
    info!("✓ 文本框题目 {} 个，表格题目 {} 个", text_count, table_count);
    info!("📋 本次处理 {} 个题目，按顺序逐个生成\n", batch_len);
}

/// 打印最终统计信息
///
/// # 参数
/// - `summary`: 运行统计
/// - `output_path`: 生成的文档路径
pub fn print_final_stats(summary: &RunSummary, output_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", summary.succeeded(), summary.total());
    info!("❌ 失败: {}", summary.failed());
    info!("{}", "=".repeat(60));
    info!("\n文档已保存至: {}", output_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        truncate_chars(text, max_len) + "..."
    } else {
        text.to_string()
    }
}

/// 按字符截断，不加省略号
pub fn truncate_chars(text: &str, max_len: usize) -> String {
    text.chars().take(max_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("短文本", 10), "短文本");
        assert_eq!(truncate_text("abcdefgh", 3), "abc...");
    }

    #[test]
    fn test_truncate_chars_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("光合作用是什么", 4), "光合作用");
    }
}
