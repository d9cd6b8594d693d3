use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 题目输入解析错误
    #[error("输入错误: {0}")]
    Source(#[from] SourceError),
    /// LLM 服务错误
    #[error("LLM错误: {0}")]
    Llm(#[from] LlmError),
    /// 答案排版错误
    #[error("排版错误: {0}")]
    Format(#[from] FormatError),
    /// 文档生成错误
    #[error("文档错误: {0}")]
    Render(#[from] RenderError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 题目输入解析错误
///
/// 只有表格路径会失败；文本输入永远可以解析（最多得到空列表）。
#[derive(Debug, Error)]
pub enum SourceError {
    /// 表格文件打不开（不存在、无权限等）
    #[error("无法打开表格文件 ({path}): {message}")]
    FileRead { path: String, message: String },
    /// 表格文件无法识别或已损坏
    #[error("无法读取表格文件: {0}")]
    Unreadable(String),
    /// 工作簿中没有任何工作表
    #[error("表格文件中没有工作表")]
    NoWorksheet,
    /// 读取工作表内容失败
    #[error("读取工作表失败: {0}")]
    Worksheet(String),
}

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// 构建请求失败
    #[error("构建 LLM 请求失败: {0}")]
    InvalidRequest(String),
    /// API 调用失败
    #[error("LLM API调用失败 (模型: {model}): {message}")]
    ApiCallFailed { model: String, message: String },
    /// 返回结果为空
    #[error("LLM返回结果为空 (模型: {model})")]
    EmptyResponse { model: String },
    /// 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
    /// 多阶段流程中某一阶段失败
    #[error("{stage} 阶段失败: {source}")]
    StageFailed {
        stage: String,
        #[source]
        source: Box<LlmError>,
    },
}

/// 答案排版错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// 答案没有任何可写入文档的内容
    #[error("答案内容为空")]
    EmptyAnswer,
    /// 答案包含文档无法保存的控制字符
    #[error("答案第 {line} 行包含非法控制字符 U+{code:04X}")]
    IllegalCharacter { line: usize, code: u32 },
}

/// 文档生成错误
#[derive(Debug, Error)]
pub enum RenderError {
    /// 打包 docx 失败
    #[error("生成 docx 失败: {0}")]
    Docx(String),
    /// 文本写入失败
    #[error("写入文本失败: {0}")]
    Io(#[from] std::io::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 缺少 API Key
    #[error("未配置 LLM API Key (请设置 LLM_API_KEY)")]
    MissingApiKey,
    /// 采样温度超出范围
    #[error("temperature 必须在 [0, 2] 范围内, 当前值: {0}")]
    TemperatureOutOfRange(f32),
    /// 未知的枚举取值
    #[error("{field} 不支持取值 '{value}'")]
    UnknownValue { field: String, value: String },
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {message}")]
    FileReadFailed { path: String, message: String },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {message}")]
    TomlParseFailed { path: String, message: String },
}

// ========== 便捷构造函数 ==========

impl LlmError {
    /// 创建LLM API调用错误
    pub fn api_failed(model: impl Into<String>, source: impl std::fmt::Display) -> Self {
        LlmError::ApiCallFailed {
            model: model.into(),
            message: source.to_string(),
        }
    }

    /// 给错误标注所属阶段
    pub fn in_stage(self, stage: impl Into<String>) -> Self {
        LlmError::StageFailed {
            stage: stage.into(),
            source: Box::new(self),
        }
    }
}

impl ConfigError {
    pub fn unknown_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        ConfigError::UnknownValue {
            field: field.into(),
            value: value.into(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
