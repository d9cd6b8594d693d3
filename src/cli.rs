//! 命令行参数

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::models::{Profile, Theme};
use crate::orchestrator::RunInput;
use crate::render::OutputFormat;
use crate::services::ProviderKind;

#[derive(Debug, Parser)]
#[command(name = "study-notes")]
#[command(about = "Answer a list of questions with an LLM and collect them into a Word document", long_about = None)]
pub struct Cli {
    /// TOML 配置文件
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 输出 debug 日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the answer document
    Generate(GenerateArgs),

    /// Send a short prompt to check the API key and endpoint
    Ping,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// A question (repeatable)
    #[arg(short = 'q', long = "question")]
    pub questions: Vec<String>,

    /// Text file with one question per line
    #[arg(long)]
    pub questions_file: Option<PathBuf>,

    /// Spreadsheet with questions in column A, starting at row 2
    #[arg(short, long)]
    pub spreadsheet: Option<PathBuf>,

    /// direct | pipeline
    #[arg(long)]
    pub strategy: Option<ProviderKind>,

    /// study_notes | qa
    #[arg(long)]
    pub profile: Option<Profile>,

    /// blue | green | red
    #[arg(long)]
    pub theme: Option<Theme>,

    /// docx | txt
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Directory for the generated document
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Per-question timeout in seconds (0 disables)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Also write the run summary as JSON
    #[arg(long)]
    pub summary_json: bool,
}

impl GenerateArgs {
    /// 命令行参数覆盖配置
    pub fn apply(&self, config: Config) -> Config {
        Config {
            strategy: self.strategy.unwrap_or(config.strategy),
            profile: self.profile.unwrap_or(config.profile),
            theme: self.theme.unwrap_or(config.theme),
            output_format: self.format.unwrap_or(config.output_format),
            output_dir: self.output_dir.clone().unwrap_or(config.output_dir),
            request_timeout_secs: self.timeout.unwrap_or(config.request_timeout_secs),
            ..config
        }
    }

    /// 合并 `--question` 和 `--questions-file` 成文本框内容
    pub fn run_input(&self) -> Result<RunInput> {
        let mut lines = self.questions.clone();
        if let Some(path) = &self.questions_file {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("无法读取题目文件: {}", path.display()))?;
            lines.push(content);
        }

        Ok(RunInput {
            text: (!lines.is_empty()).then(|| lines.join("\n")),
            spreadsheet: self.spreadsheet.clone(),
            summary_json: self.summary_json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "study-notes",
            "generate",
            "-q",
            "What is photosynthesis?",
            "-q",
            "Describe the water cycle",
            "--strategy",
            "direct",
            "--theme",
            "red",
            "--timeout",
            "0",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("应该解析为 generate");
        };
        let config = args.apply(Config::default());
        assert_eq!(config.strategy, ProviderKind::Direct);
        assert_eq!(config.theme, Theme::Red);
        assert!(config.request_timeout().is_none());
        assert_eq!(config.profile, Profile::StudyNotes);

        let input = args.run_input().unwrap();
        assert_eq!(
            input.text.as_deref(),
            Some("What is photosynthesis?\nDescribe the water cycle")
        );
        assert!(input.spreadsheet.is_none());
    }

    #[test]
    fn test_questions_file_is_appended() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "What is an atom?\n\nExplain gravity\n").unwrap();

        let cli = Cli::try_parse_from([
            "study-notes",
            "generate",
            "-q",
            "first",
            "--questions-file",
            file.path().to_str().unwrap(),
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("应该解析为 generate");
        };

        let input = args.run_input().unwrap();
        let batch = crate::models::normalize(input.text.as_deref(), None).batch;
        assert_eq!(batch.len(), 3);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let result = Cli::try_parse_from(["study-notes", "generate", "--strategy", "crew"]);
        assert!(result.is_err());
    }
}
