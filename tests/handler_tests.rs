mod common;

use common::{StubGenerator, body, http_event, json_body, state_with, status, test_config};
use serde_json::json;
use textsum::ai::ProviderReply;
use textsum::api::handler::{NOT_CONFIGURED_MESSAGE, WELCOME_MESSAGE};
use textsum::api::route;
use textsum::core::state::AppState;

#[tokio::test]
async fn test_summarize_success() {
    let stub = StubGenerator::content("A short summary.");
    let state = state_with(&stub);
    let request = json!({ "text": "The quick brown fox...", "target_word_count": 50 }).to_string();

    let response = route(&state, &http_event("POST", "/summarize", &request)).await;

    assert_eq!(status(&response), 200);
    assert_eq!(
        json_body(&response),
        json!({ "original_text": "The quick brown fox...", "summary": "A short summary." })
    );
    assert!(stub.last_prompt().unwrap().contains("approximately 50 words"));
}

#[tokio::test]
async fn test_summarize_uses_default_word_count() {
    let stub = StubGenerator::content("ok");
    let state = state_with(&stub);
    let request = json!({ "text": "Some text" }).to_string();

    let response = route(&state, &http_event("POST", "/summarize", &request)).await;

    assert_eq!(status(&response), 200);
    assert!(stub.last_prompt().unwrap().contains("approximately 75 words"));
}

#[tokio::test]
async fn test_empty_text_never_reaches_provider() {
    let stub = StubGenerator::content("should not be used");
    let state = state_with(&stub);

    for text in ["", "   \n\t"] {
        let request = json!({ "text": text, "target_word_count": 50 }).to_string();
        let response = route(&state, &http_event("POST", "/summarize", &request)).await;
        assert_eq!(status(&response), 422);
        assert!(json_body(&response)["error"].is_string());
    }

    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_out_of_range_word_count_is_rejected() {
    let stub = StubGenerator::content("unused");
    let state = state_with(&stub);

    for count in [0, -1, 9, 501] {
        let request = json!({ "text": "hello", "target_word_count": count }).to_string();
        let response = route(&state, &http_event("POST", "/summarize", &request)).await;
        assert_eq!(status(&response), 422, "count {count}");
        assert!(json_body(&response)["error"]
            .as_str()
            .unwrap()
            .contains("between 10 and 500"));
    }
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let stub = StubGenerator::content("unused");
    let state = state_with(&stub);

    for raw in ["", "not json", "{\"target_word_count\": 50}"] {
        let response = route(&state, &http_event("POST", "/summarize", raw)).await;
        assert_eq!(status(&response), 422, "body {raw:?}");
    }
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_provider_exception_is_500_without_detail() {
    let detail = "tls handshake eof: upstream 142.250.0.1";
    let stub = StubGenerator::failing(detail);
    let state = state_with(&stub);
    let request = json!({ "text": "hello world", "target_word_count": 50 }).to_string();

    let response = route(&state, &http_event("POST", "/summarize", &request)).await;

    assert_eq!(status(&response), 500);
    assert!(!body(&response).contains(detail));
    assert!(!body(&response).contains("142.250.0.1"));
}

#[tokio::test]
async fn test_blocked_is_400_with_reason() {
    let stub = StubGenerator::replying(ProviderReply::Blocked("SAFETY".to_string()));
    let state = state_with(&stub);
    let request = json!({ "text": "hello world" }).to_string();

    let response = route(&state, &http_event("POST", "/summarize", &request)).await;

    assert_eq!(status(&response), 400);
    assert!(json_body(&response)["error"].as_str().unwrap().contains("SAFETY"));
}

#[tokio::test]
async fn test_empty_and_unexpected_replies_are_500() {
    for reply in [
        ProviderReply::Content("   ".to_string()),
        ProviderReply::Unexpected,
    ] {
        let stub = StubGenerator::replying(reply);
        let state = state_with(&stub);
        let request = json!({ "text": "hello world" }).to_string();
        let response = route(&state, &http_event("POST", "/summarize", &request)).await;
        assert_eq!(status(&response), 500);
    }
}

#[tokio::test]
async fn test_unconfigured_state_is_500() {
    let state = AppState::unconfigured(test_config());
    let request = json!({ "text": "hello world" }).to_string();

    let response = route(&state, &http_event("POST", "/summarize", &request)).await;

    assert_eq!(status(&response), 500);
    assert_eq!(json_body(&response)["error"], NOT_CONFIGURED_MESSAGE);
}

#[tokio::test]
async fn test_root_returns_welcome() {
    let state = AppState::unconfigured(test_config());
    let response = route(&state, &http_event("GET", "/", "")).await;

    assert_eq!(status(&response), 200);
    assert_eq!(json_body(&response)["message"], WELCOME_MESSAGE);
}

#[tokio::test]
async fn test_docs_describe_summarize_endpoint() {
    let state = AppState::unconfigured(test_config());
    let response = route(&state, &http_event("GET", "/docs", "")).await;

    assert_eq!(status(&response), 200);
    let doc = json_body(&response);
    assert!(doc["paths"]["/summarize"]["post"].is_object());
    assert!(doc["components"]["schemas"]["SummarizeRequestBody"].is_object());
}

#[tokio::test]
async fn test_unknown_route_and_wrong_method() {
    let state = AppState::unconfigured(test_config());

    let response = route(&state, &http_event("GET", "/nope", "")).await;
    assert_eq!(status(&response), 404);

    let response = route(&state, &http_event("GET", "/summarize", "")).await;
    assert_eq!(status(&response), 405);

    let response = route(&state, &http_event("DELETE", "/app", "")).await;
    assert_eq!(status(&response), 405);
}

#[tokio::test]
async fn test_rest_api_stage_prefix_is_routed() {
    let stub = StubGenerator::content("Staged.");
    let state = state_with(&stub);
    let event = json!({
        "path": "/prod/summarize",
        "httpMethod": "POST",
        "requestContext": { "stage": "prod" },
        "body": json!({ "text": "hello" }).to_string()
    });

    let response = route(&state, &event).await;

    assert_eq!(status(&response), 200);
    assert_eq!(json_body(&response)["summary"], "Staged.");
}

// ---------------------------------------------------------------------------
// HTML form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_form_get_renders_page() {
    let state = AppState::unconfigured(test_config());
    let response = route(&state, &http_event("GET", "/app", "")).await;

    assert_eq!(status(&response), 200);
    assert_eq!(
        response["headers"]["Content-Type"],
        "text/html; charset=utf-8"
    );
    let html = body(&response);
    assert!(html.contains("<form method=\"post\""));
    assert!(html.contains("name=\"target_words\""));
}

#[tokio::test]
async fn test_form_submit_success_shows_summary_and_counts() {
    let stub = StubGenerator::content("Foxes jump.");
    let state = state_with(&stub);
    let form = "text=The+quick+brown+fox+jumps+over+the+lazy+dog&target_words=30";

    let response = route(&state, &http_event("POST", "/app", form)).await;

    assert_eq!(status(&response), 200);
    let html = body(&response);
    assert!(html.contains("Foxes jump."));
    assert!(html.contains("(Original word count: ~9 | Summary word count: ~2)"));
    assert!(html.contains("value=\"30\""));
    assert!(stub.last_prompt().unwrap().contains("approximately 30 words"));
}

#[tokio::test]
async fn test_form_blank_text_warns_without_calling_provider() {
    let stub = StubGenerator::content("unused");
    let state = state_with(&stub);

    let response = route(&state, &http_event("POST", "/app", "text=+++&target_words=75")).await;

    let html = body(&response);
    assert!(html.contains("alert warning"));
    assert!(html.contains("Please enter some text to summarize."));
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_form_unconfigured_shows_config_error() {
    let state = AppState::unconfigured(test_config());

    let response = route(&state, &http_event("POST", "/app", "text=hello")).await;

    let html = body(&response);
    assert!(html.contains("alert error"));
    assert!(html.contains("Gemini API is not configured correctly"));
}

#[tokio::test]
async fn test_form_unconfigured_undecodable_body_shows_config_error() {
    let state = AppState::unconfigured(test_config());

    let response = route(&state, &http_event("POST", "/app", "text=%FF")).await;

    let html = body(&response);
    assert!(html.contains("Gemini API is not configured correctly"));
    assert!(!html.contains("could not be read"));
}

#[tokio::test]
async fn test_form_undecodable_body_warns_without_calling_provider() {
    let stub = StubGenerator::content("unused");
    let state = state_with(&stub);

    let response = route(&state, &http_event("POST", "/app", "text=%FF")).await;

    assert!(body(&response).contains("could not be read"));
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_form_failure_shows_message() {
    let stub = StubGenerator::replying(ProviderReply::Blocked("SAFETY".to_string()));
    let state = state_with(&stub);

    let response = route(&state, &http_event("POST", "/app", "text=hello")).await;

    let html = body(&response);
    assert!(html.contains("alert error"));
    assert!(html.contains("Content blocked by Gemini due to: SAFETY."));
}

#[tokio::test]
async fn test_form_escapes_submitted_text() {
    let stub = StubGenerator::content("<i>safe</i>");
    let state = state_with(&stub);

    let response = route(
        &state,
        &http_event("POST", "/app", "text=%3Cscript%3Ealert(1)%3C%2Fscript%3E"),
    )
    .await;

    let html = body(&response);
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("&lt;i&gt;safe&lt;/i&gt;"));
}

#[tokio::test]
async fn test_form_slider_out_of_range_is_clamped() {
    let stub = StubGenerator::content("ok");
    let state = state_with(&stub);

    route(&state, &http_event("POST", "/app", "text=hello&target_words=999")).await;

    assert!(stub.last_prompt().unwrap().contains("approximately 250 words"));
}
