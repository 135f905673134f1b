//! End-to-end resolution through cache, remote models and the offline
//! phrasebook, with the remote side replaced by a scripted service.

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use prosay_llm::{LLMClient, LLMService};
use prosay_lib::{
    prompts::text_transformer_prompt::PromptStyle,
    services::text_transformation_service::{ModelAttempt, SourceKind, TextTransformationService},
    text::fallback_transformer::FallbackTransformer,
};
use std::collections::HashMap;
use std::sync::Arc;

const PRIMARY: &str = "gemini-2.0-flash";
const SECONDARY: &str = "gemini-pro";

#[derive(Clone)]
enum Reply {
    Text(&'static str),
    Empty,
    Fail,
}

#[derive(Clone, Default)]
struct ScriptedService {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl ScriptedService {
    fn reply(&self, model: &str, reply: Reply) -> &Self {
        self.replies.lock().insert(model.to_string(), reply);
        self
    }

    fn models_called(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(m, _)| m.clone()).collect()
    }

    fn prompts(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(_, p)| p.clone()).collect()
    }

    fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl LLMService for ScriptedService {
    async fn execute_prompt(&self, model: &str, prompt: &str) -> Result<String> {
        self.calls
            .lock()
            .push((model.to_string(), prompt.to_string()));
        let reply = self.replies.lock().get(model).cloned().unwrap_or(Reply::Fail);
        match reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Empty => Ok(String::new()),
            Reply::Fail => anyhow::bail!("{} unavailable", model),
        }
    }
}

fn service_with(remote: &ScriptedService) -> TextTransformationService {
    let client = LLMClient::from_service(Box::new(remote.clone()), None);
    TextTransformationService::new(Some(client), PRIMARY, SECONDARY)
        .with_fallback(FallbackTransformer::with_seed(3))
}

#[tokio::test]
async fn primary_success_is_cached() {
    let remote = ScriptedService::default();
    remote.reply(PRIMARY, Reply::Text("  I have some concerns about this approach.\n"));
    let service = service_with(&remote);

    let first = service.resolve("this is stupid").await;
    assert_eq!(first.text, "I have some concerns about this approach.");
    assert_eq!(first.source, SourceKind::Primary);
    assert_eq!(remote.models_called(), vec![PRIMARY]);

    let second = service.resolve("this is stupid").await;
    assert_eq!(second.text, first.text);
    assert_eq!(second.source, SourceKind::Cache);
    assert_eq!(remote.call_count(), 1);
}

#[tokio::test]
async fn primary_error_then_secondary_success() {
    let remote = ScriptedService::default();
    remote.reply(PRIMARY, Reply::Fail).reply(SECONDARY, Reply::Text("X"));
    let service = service_with(&remote);

    let resolution = service.resolve("ship it").await;
    assert_eq!(resolution.text, "X");
    assert_eq!(resolution.source, SourceKind::Secondary);
    assert_eq!(resolution.failures.len(), 1);
    assert_eq!(resolution.failures[0].model, PRIMARY);
    assert!(resolution.failures[0].reason.contains("unavailable"));

    let again = service.resolve("ship it").await;
    assert_eq!(again.text, "X");
    assert_eq!(again.source, SourceKind::Cache);
    assert_eq!(remote.models_called(), vec![PRIMARY, SECONDARY]);
}

#[tokio::test]
async fn empty_primary_reply_falls_through() {
    let remote = ScriptedService::default();
    remote
        .reply(PRIMARY, Reply::Empty)
        .reply(SECONDARY, Reply::Text("\"Thank you for the update.\""));
    let service = service_with(&remote);

    let resolution = service.resolve("ok whatever").await;
    assert_eq!(resolution.text, "Thank you for the update.");
    assert_eq!(resolution.source, SourceKind::Secondary);
    assert_eq!(resolution.failures[0].reason, "empty response");
}

#[tokio::test]
async fn prompts_differ_per_tier() {
    let remote = ScriptedService::default();
    let service = service_with(&remote);
    service.resolve("i quit").await;

    let prompts = remote.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("Solution-oriented"));
    assert!(prompts[0].contains("'i quit'"));
    assert!(!prompts[1].contains("Solution-oriented"));
    assert!(prompts[1].contains("'i quit'"));
}

#[tokio::test]
async fn exhausted_remote_uses_phrasebook_without_caching() {
    let remote = ScriptedService::default();
    let service = service_with(&remote);

    let resolution = service.resolve("i quit").await;
    assert_eq!(resolution.source, SourceKind::Fallback);
    assert!([
        "I would like to tender my resignation.",
        "I've decided to pursue opportunities elsewhere.",
        "I am giving my notice of resignation.",
    ]
    .contains(&resolution.text.as_str()));
    assert_eq!(resolution.failures.len(), 2);
    assert!(service.cache().is_empty());

    // not cached, so the next call goes remote again
    service.resolve("i quit").await;
    assert_eq!(remote.call_count(), 4);
}

#[tokio::test]
async fn fallback_scenarios() {
    let remote = ScriptedService::default();
    let service = service_with(&remote);

    let cases = [
        ("what is the project status", "I'm inquiring about the project status."),
        ("I need more time", "I would like to request more time."),
        ("Is this approved?", "I would appreciate your insights on Is this approved?"),
    ];
    for (input, expected) in cases {
        let resolution = service.resolve(input).await;
        assert_eq!(resolution.text, expected);
        assert_eq!(resolution.source, SourceKind::Fallback);
    }
}

#[tokio::test]
async fn normalized_variants_share_cache_entry() {
    let remote = ScriptedService::default();
    remote.reply(PRIMARY, Reply::Text("I am giving my notice of resignation."));
    let service = service_with(&remote);

    service.resolve("I QUIT").await;
    for variant in ["i quit", "  i quit  "] {
        let resolution = service.resolve(variant).await;
        assert_eq!(resolution.source, SourceKind::Cache);
        assert_eq!(resolution.text, "I am giving my notice of resignation.");
    }
    assert_eq!(remote.call_count(), 1);
}

#[tokio::test]
async fn custom_chain_tries_every_tier_in_order() {
    let remote = ScriptedService::default();
    remote.reply("tier-3", Reply::Text("Third time lucky."));
    let service = service_with(&remote).with_attempts(vec![
        ModelAttempt::new("tier-1", PromptStyle::Structured),
        ModelAttempt::new("tier-2", PromptStyle::Simple),
        ModelAttempt::new("tier-3", PromptStyle::Simple),
    ]);

    let resolution = service.resolve("hello").await;
    assert_eq!(resolution.text, "Third time lucky.");
    assert_eq!(resolution.source, SourceKind::Secondary);
    assert_eq!(remote.models_called(), vec!["tier-1", "tier-2", "tier-3"]);
}
