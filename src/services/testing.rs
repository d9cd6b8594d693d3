//! 测试替身

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::clients::{ChatBackend, ChatRequest};
use crate::error::LlmError;

enum Script {
    Always(Result<String, String>),
    Sequence(Mutex<VecDeque<Result<String, String>>>),
}

/// 按脚本返回结果，并记录收到的请求
pub struct ScriptedBackend {
    script: Script,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedBackend {
    pub fn always(reply: &str) -> Self {
        Self::new(Script::Always(Ok(reply.to_string())))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Script::Always(Err(message.to_string())))
    }

    pub fn sequence(replies: Vec<Result<String, String>>) -> Self {
        Self::new(Script::Sequence(Mutex::new(replies.into())))
    }

    fn new(script: Script) -> Self {
        Self {
            script,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = match &self.script {
            Script::Always(reply) => reply.clone(),
            Script::Sequence(queue) => queue
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err("脚本已用完".to_string())),
        };
        reply.map_err(|message| LlmError::api_failed("scripted", message))
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
