use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::{Profile, Theme};
use crate::render::OutputFormat;
use crate::services::ProviderKind;

/// 程序配置
///
/// 优先级：命令行 > 环境变量 > 配置文件 > 默认值
#[derive(Clone, Debug)]
pub struct Config {
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 采样温度
    pub temperature: f32,
    /// 单次调用超时（秒），0 表示不限制
    pub request_timeout_secs: u64,
    /// 回答策略
    pub strategy: ProviderKind,
    // --- 文档配置 ---
    pub profile: Profile,
    pub theme: Theme,
    /// 输出目录
    pub output_dir: String,
    pub output_format: OutputFormat,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: String::new(),
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            llm_model_name: "gemini-2.5-flash".to_string(),
            temperature: 0.1,
            request_timeout_secs: 180,
            strategy: ProviderKind::Pipeline,
            profile: Profile::StudyNotes,
            theme: Theme::Blue,
            output_dir: ".".to_string(),
            output_format: OutputFormat::Docx,
            verbose_logging: false,
        }
    }
}

/// 配置文件中的字段，全部可选
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    llm_api_key: Option<String>,
    llm_api_base_url: Option<String>,
    llm_model_name: Option<String>,
    temperature: Option<f32>,
    request_timeout_secs: Option<u64>,
    strategy: Option<ProviderKind>,
    profile: Option<Profile>,
    theme: Option<Theme>,
    output_dir: Option<String>,
    output_format: Option<OutputFormat>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// 默认值 + 环境变量
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env()
    }

    /// 默认值 + 配置文件（可选）+ 环境变量
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::default().apply_file(path)?,
            None => Self::default(),
        };
        config.apply_env()
    }

    /// 从 TOML 文本合并配置
    pub fn merge_toml(self, content: &str, origin: &str) -> Result<Self, ConfigError> {
        let file: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::TomlParseFailed {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            llm_api_key: file.llm_api_key.unwrap_or(self.llm_api_key),
            llm_api_base_url: file.llm_api_base_url.unwrap_or(self.llm_api_base_url),
            llm_model_name: file.llm_model_name.unwrap_or(self.llm_model_name),
            temperature: file.temperature.unwrap_or(self.temperature),
            request_timeout_secs: file
                .request_timeout_secs
                .unwrap_or(self.request_timeout_secs),
            strategy: file.strategy.unwrap_or(self.strategy),
            profile: file.profile.unwrap_or(self.profile),
            theme: file.theme.unwrap_or(self.theme),
            output_dir: file.output_dir.unwrap_or(self.output_dir),
            output_format: file.output_format.unwrap_or(self.output_format),
            verbose_logging: file.verbose_logging.unwrap_or(self.verbose_logging),
        })
    }

    fn apply_file(self, path: &Path) -> Result<Self, ConfigError> {
        let origin = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadFailed {
                path: origin.clone(),
                message: e.to_string(),
            })?;
        self.merge_toml(&content, &origin)
    }

    fn apply_env(self) -> Result<Self, ConfigError> {
        Ok(Self {
            llm_api_key: env_string("LLM_API_KEY")
                .or_else(|| env_string("GOOGLE_API_KEY"))
                .unwrap_or(self.llm_api_key),
            llm_api_base_url: env_string("LLM_API_BASE_URL").unwrap_or(self.llm_api_base_url),
            llm_model_name: env_string("LLM_MODEL_NAME").unwrap_or(self.llm_model_name),
            temperature: env_parse("LLM_TEMPERATURE", "f32")?.unwrap_or(self.temperature),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", "u64")?
                .unwrap_or(self.request_timeout_secs),
            strategy: env_parse("ANSWER_STRATEGY", "direct|pipeline")?.unwrap_or(self.strategy),
            profile: env_parse("REPORT_PROFILE", "study_notes|qa")?.unwrap_or(self.profile),
            theme: env_parse("REPORT_THEME", "blue|green|red")?.unwrap_or(self.theme),
            output_dir: env_string("OUTPUT_DIR").unwrap_or(self.output_dir),
            output_format: env_parse("OUTPUT_FORMAT", "docx|txt")?
                .unwrap_or(self.output_format),
            verbose_logging: env_parse("VERBOSE_LOGGING", "bool")?
                .unwrap_or(self.verbose_logging),
        })
    }

    /// 运行前校验
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm_api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::TemperatureOutOfRange(self.temperature));
        }
        Ok(())
    }

    /// 单次调用超时
    pub fn request_timeout(&self) -> Option<std::time::Duration> {
        (self.request_timeout_secs > 0)
            .then(|| std::time::Duration::from_secs(self.request_timeout_secs))
    }
}

fn env_string(var_name: &str) -> Option<String> {
    std::env::var(var_name).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: FromStr>(var_name: &str, expected_type: &str) -> Result<Option<T>, ConfigError> {
    match env_string(var_name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
    }
}
