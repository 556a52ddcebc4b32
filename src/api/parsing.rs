use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::percent_decode_str;
use serde_json::Value;
use tracing::error;

use super::helpers;

/// The parts of an API Gateway proxy event the router needs.
///
/// Accepts both HTTP API (v2, `rawPath` + `requestContext.http.method`) and
/// REST API (v1, `path` + `httpMethod`) payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

impl HttpRequest {
    /// # Errors
    ///
    /// Returns a ready-to-send 400 response if the body is flagged as base64
    /// but does not decode to UTF-8 text.
    pub fn from_event(payload: &Value) -> Result<Self, Value> {
        let method = v_str(payload, &["requestContext", "http", "method"])
            .or_else(|| v_str(payload, &["httpMethod"]))
            .unwrap_or("GET")
            .to_ascii_uppercase();

        let raw_path = v_str(payload, &["rawPath"])
            .or_else(|| v_str(payload, &["path"]))
            .unwrap_or("/");
        let stage = v_str(payload, &["requestContext", "stage"]);
        let path = normalize_path(raw_path, stage);

        let body = extract_body(payload)?;

        Ok(Self { method, path, body })
    }
}

/// Strips a non-default stage prefix and any trailing slash.
#[must_use]
pub fn normalize_path(raw_path: &str, stage: Option<&str>) -> String {
    let mut path = raw_path;
    if let Some(stage) = stage.filter(|s| !s.is_empty() && *s != "$default") {
        let prefix = format!("/{stage}");
        if let Some(rest) = path.strip_prefix(prefix.as_str()) {
            if rest.is_empty() || rest.starts_with('/') {
                path = rest;
            }
        }
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn extract_body(payload: &Value) -> Result<String, Value> {
    let Some(body) = payload.get("body").and_then(|b| b.as_str()) else {
        return Ok(String::new());
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !is_base64 {
        return Ok(body.to_string());
    }

    let bytes = STANDARD.decode(body).map_err(|e| {
        error!("Request body is not valid base64: {}", e);
        helpers::err_response(400, "Invalid body encoding")
    })?;
    String::from_utf8(bytes).map_err(|e| {
        error!("Request body is not valid UTF-8: {}", e);
        helpers::err_response(400, "Invalid body encoding")
    })
}

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Decodes one `application/x-www-form-urlencoded` component.
///
/// ```
/// use textsum::api::parsing::decode_url_component;
///
/// assert_eq!(decode_url_component("hello%20world").unwrap(), "hello world");
/// assert_eq!(decode_url_component("hello+world").unwrap(), "hello world");
/// ```
pub fn decode_url_component(input: &str) -> Result<String, String> {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.to_string())
        .map_err(|e| format!("Failed to decode URL component: {e}"))
}

/// Parses a form-urlencoded body. Later duplicates overwrite earlier keys.
///
/// # Errors
///
/// Returns a message naming the first key or value that is not valid
/// percent-encoded UTF-8.
pub fn parse_form_data(form_data: &str) -> Result<HashMap<String, String>, String> {
    let mut map = HashMap::new();

    for pair in form_data.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key =
            decode_url_component(raw_key).map_err(|e| format!("Failed to decode key: {e}"))?;
        let value =
            decode_url_component(raw_value).map_err(|e| format!("Failed to decode value: {e}"))?;
        map.insert(key, value);
    }

    Ok(map)
}
