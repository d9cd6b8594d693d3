use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// 文档类型
///
/// 决定标题、文件名前缀和直接回答策略使用的提示词。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// 学习笔记：带标题、生成时间和分节答案
    #[default]
    StudyNotes,
    /// 问答：纯文本答案，不带标题
    Qa,
}

impl Profile {
    /// 输出文件名前缀
    pub fn file_prefix(self) -> &'static str {
        match self {
            Profile::StudyNotes => "Study_Notes",
            Profile::Qa => "QA_Output",
        }
    }

    /// 文档标题
    pub fn title(self) -> Option<&'static str> {
        match self {
            Profile::StudyNotes => Some("Study Notes - AI Study Buddy"),
            Profile::Qa => None,
        }
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "study_notes" | "study-notes" | "notes" => Ok(Profile::StudyNotes),
            "qa" => Ok(Profile::Qa),
            other => Err(ConfigError::unknown_value("profile", other)),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::StudyNotes => f.write_str("study_notes"),
            Profile::Qa => f.write_str("qa"),
        }
    }
}
