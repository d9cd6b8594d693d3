//! 题目处理上下文
//!
//! 封装"我正在处理第几题、一共几题"这一信息

use std::fmt::Display;

/// 题目处理上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionCtx {
    /// 题目位置（从1开始）
    pub position: usize,

    /// 本次运行的题目总数
    pub total: usize,
}

impl QuestionCtx {
    pub fn new(position: usize, total: usize) -> Self {
        Self { position, total }
    }
}

impl Display for QuestionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Q{}/{}]", self.position, self.total)
    }
}
