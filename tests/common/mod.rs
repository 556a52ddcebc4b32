#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use textsum::ai::{ProviderReply, TextGenerator};
use textsum::core::config::AppConfig;
use textsum::core::state::AppState;
use textsum::errors::ProviderError;
use textsum::features::Summarizer;

/// Canned provider outcome for a [`StubGenerator`].
#[derive(Clone)]
pub enum Canned {
    Reply(ProviderReply),
    Fail(String),
}

/// Records every prompt it receives and answers with a fixed outcome.
pub struct StubGenerator {
    canned: Canned,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn replying(reply: ProviderReply) -> Arc<Self> {
        Arc::new(Self {
            canned: Canned::Reply(reply),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn content(text: &str) -> Arc<Self> {
        Self::replying(ProviderReply::Content(text.to_string()))
    }

    pub fn failing(detail: &str) -> Arc<Self> {
        Arc::new(Self {
            canned: Canned::Fail(detail.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<ProviderReply, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.canned {
            Canned::Reply(reply) => Ok(reply.clone()),
            Canned::Fail(detail) => Err(ProviderError::HttpError(detail.clone())),
        }
    }
}

pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|_| None).unwrap()
}

pub fn state_with(stub: &Arc<StubGenerator>) -> AppState {
    let generator: Arc<dyn TextGenerator> = stub.clone();
    AppState::new(test_config(), Summarizer::new(generator))
}

/// API Gateway HTTP API (v2) proxy event.
pub fn http_event(method: &str, path: &str, body: &str) -> Value {
    json!({
        "version": "2.0",
        "rawPath": path,
        "headers": { "content-type": "application/json" },
        "requestContext": {
            "http": { "method": method, "path": path },
            "stage": "$default"
        },
        "body": body,
        "isBase64Encoded": false
    })
}

pub fn status(response: &Value) -> u64 {
    response["statusCode"].as_u64().unwrap()
}

pub fn body(response: &Value) -> String {
    response["body"].as_str().unwrap().to_string()
}

pub fn json_body(response: &Value) -> Value {
    serde_json::from_str(&body(response)).unwrap()
}
