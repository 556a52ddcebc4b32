//! Server-rendered summarization form served at `/app`.
//!
//! `GET` renders an empty form; `POST` (form-urlencoded `text` and
//! `target_words`) runs the summarizer and renders the outcome inline.

use std::fmt::Write as _;

use tracing::warn;

use super::parsing::parse_form_data;
use crate::core::models::{
    DEFAULT_TARGET_WORDS, SummarizationRequest, SummarizationResult, word_count,
};
use crate::core::state::AppState;
use crate::features::summarize::Summarizer;

pub const FORM_MIN_WORDS: u32 = 20;
pub const FORM_MAX_WORDS: u32 = 250;
pub const FORM_STEP_WORDS: u32 = 5;

pub const NOT_CONFIGURED_MESSAGE: &str =
    "Cannot summarize: Gemini API is not configured correctly.";

/// What to show under the form after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    ConfigError(String),
    Warning(String),
    Summary {
        summary: String,
        original_words: usize,
        summary_words: usize,
    },
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub text: String,
    pub target_words: u32,
    pub outcome: Option<FormOutcome>,
}

impl FormView {
    #[must_use]
    pub fn initial() -> Self {
        Self {
            text: String::new(),
            target_words: DEFAULT_TARGET_WORDS,
            outcome: None,
        }
    }
}

/// Clamps a slider value into the control's range and snaps it to the step.
#[must_use]
pub fn snap_target_words(raw: i64) -> u32 {
    let min = i64::from(FORM_MIN_WORDS);
    let max = i64::from(FORM_MAX_WORDS);
    let step = i64::from(FORM_STEP_WORDS);

    let clamped = raw.clamp(min, max);
    let snapped = (min + (clamped - min + step / 2) / step * step).min(max);
    u32::try_from(snapped).unwrap_or(DEFAULT_TARGET_WORDS)
}

/// Reads `text` and `target_words` from a submitted form body.
///
/// A missing or non-numeric slider value falls back to the default.
///
/// # Errors
///
/// Returns the decoding error message if the body is not valid form data.
pub fn parse_submission(body: &str) -> Result<(String, u32), String> {
    let mut form = parse_form_data(body)?;
    let text = form.remove("text").unwrap_or_default();
    let target_words = form
        .get("target_words")
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .map_or(DEFAULT_TARGET_WORDS, snap_target_words);
    Ok((text, target_words))
}

/// Handles one form submission.
pub async fn submit(state: &AppState, body: &str) -> FormView {
    let Some(summarizer) = state.summarizer() else {
        let mut view = FormView::initial();
        if let Ok((text, target_words)) = parse_submission(body) {
            view.text = text;
            view.target_words = target_words;
        }
        view.outcome = Some(FormOutcome::ConfigError(NOT_CONFIGURED_MESSAGE.to_string()));
        return view;
    };

    let (text, target_words) = match parse_submission(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Form body could not be decoded: {}", e);
            let mut view = FormView::initial();
            view.outcome = Some(FormOutcome::Warning(
                "The form submission could not be read. Please try again.".to_string(),
            ));
            return view;
        }
    };

    let outcome = run_summary(summarizer, &text, target_words).await;
    FormView {
        text,
        target_words,
        outcome: Some(outcome),
    }
}

async fn run_summary(summarizer: &Summarizer, text: &str, target_words: u32) -> FormOutcome {
    let request = match SummarizationRequest::new(text, i64::from(target_words)) {
        Ok(request) => request,
        Err(e) => return FormOutcome::Warning(e.to_string()),
    };

    match summarizer.summarize(&request).await {
        SummarizationResult::Success { summary } => FormOutcome::Summary {
            original_words: word_count(text),
            summary_words: word_count(&summary),
            summary,
        },
        SummarizationResult::Failure { message, .. } => FormOutcome::Error(message),
    }
}

#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn render_outcome(outcome: &FormOutcome) -> String {
    match outcome {
        FormOutcome::ConfigError(message) => format!(
            "<div class=\"alert error\" role=\"alert\">{}</div>\n",
            escape_html(message)
        ),
        FormOutcome::Error(message) => format!(
            "<h2>Summary:</h2>\n<div class=\"alert error\" role=\"alert\">{}</div>\n",
            escape_html(message)
        ),
        FormOutcome::Warning(message) => format!(
            "<div class=\"alert warning\" role=\"alert\">{}</div>\n",
            escape_html(message)
        ),
        FormOutcome::Summary {
            summary,
            original_words,
            summary_words,
        } => format!(
            "<h2>Summary:</h2>\n<div class=\"alert success\">{}</div>\n\
             <p class=\"counts\"><em>(Original word count: ~{original_words} | Summary word count: ~{summary_words})</em></p>\n",
            escape_html(summary)
        ),
    }
}

const STYLE: &str = "body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem}\
textarea{width:100%;height:15rem}\
.alert{padding:.75rem 1rem;border-radius:.4rem;margin:.5rem 0;white-space:pre-wrap}\
.success{background:#e6f4ea}.error{background:#fde7e9}.warning{background:#fff4d6}\
.counts{color:#555}";

/// Renders the full page for a form state.
#[must_use]
pub fn render_page(view: &FormView, model_name: &str) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Gemini Text Summarizer</title>\n");
    let _ = writeln!(html, "<style>{STYLE}</style>");
    html.push_str("</head>\n<body>\n<h1>📝 Gemini Text Summarizer</h1>\n");
    html.push_str(
        "<p>Enter some text below and get a concise summary using Google Gemini!</p>\n",
    );

    html.push_str(
        "<form method=\"post\" onsubmit=\"this.querySelector('button').disabled=true;\
         document.getElementById('busy').hidden=false;\">\n",
    );
    html.push_str("<label for=\"text\">Paste your text here:</label>\n");
    let _ = writeln!(
        html,
        "<textarea id=\"text\" name=\"text\" placeholder=\"Enter a long article, paragraph, or any text you want to summarize...\">{}</textarea>",
        escape_html(&view.text)
    );
    html.push_str(
        "<label for=\"target_words\">Approximate target word count for summary:</label>\n",
    );
    let _ = writeln!(
        html,
        "<input type=\"range\" id=\"target_words\" name=\"target_words\" min=\"{FORM_MIN_WORDS}\" max=\"{FORM_MAX_WORDS}\" step=\"{FORM_STEP_WORDS}\" value=\"{}\" oninput=\"this.nextElementSibling.value=this.value\">\
         <output>{}</output>",
        view.target_words, view.target_words
    );
    html.push_str("<p><button type=\"submit\">✨ Summarize Text</button></p>\n");
    html.push_str("<p id=\"busy\" hidden>🤖 Gemini is thinking... Please wait.</p>\n");
    html.push_str("</form>\n");

    if let Some(outcome) = &view.outcome {
        html.push_str(&render_outcome(outcome));
    }

    let _ = writeln!(
        html,
        "<hr>\n<p>Powered by <a href=\"https://ai.google.dev/\">Google Gemini</a> ({})</p>",
        escape_html(model_name)
    );
    html.push_str("</body>\n</html>\n");
    html
}
