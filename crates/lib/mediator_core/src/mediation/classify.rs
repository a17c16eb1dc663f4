//! Reply classification.
//!
//! A completed reply is run through an ordered chain of classifiers; the
//! first one that recognises the text decides the outcome. The sentinel
//! check always runs before any JSON extraction.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use super::prompt::NO_MEDIATION_SENTINEL;
use crate::models::chat::{DEFAULT_MEDIATION_RESPONSE, MediationOutcome};

/// Returns `Some` when the classifier applies to the (trimmed) reply.
type Classifier = fn(&str) -> Option<MediationOutcome>;

const CLASSIFIERS: [(&str, Classifier); 3] = [
    ("sentinel", no_mediation_sentinel),
    ("structured", structured_reply),
    ("raw", raw_reply),
];

/// Keys of the four NVC fields, in outcome order.
const NVC_KEYS: [&str; 4] = ["observations", "feelings", "needs", "requests"];

/// Reasons a parsed JSON object cannot become a mediation outcome.
#[derive(Debug, Error)]
enum FieldError {
    #[error("field `{0}` is null")]
    Null(&'static str),

    #[error("field `{0}` is not a string")]
    NotString(&'static str),
}

/// Reads an optional string field; `null` is absent when `allow_null`.
fn string_field(
    object: &Map<String, Value>,
    key: &'static str,
    allow_null: bool,
) -> Result<Option<String>, FieldError> {
    match object.get(key) {
        None => Ok(None),
        Some(Value::Null) if allow_null => Ok(None),
        Some(Value::Null) => Err(FieldError::Null(key)),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(FieldError::NotString(key)),
    }
}

/// Builds a triggered outcome from the model's JSON object.
///
/// A missing `response` gets the default text; a present but unusable one
/// (null or non-string), like any non-string NVC field, is an error.
fn structured_outcome(object: &Map<String, Value>) -> Result<MediationOutcome, FieldError> {
    let response = string_field(object, "response", false)?
        .unwrap_or_else(|| DEFAULT_MEDIATION_RESPONSE.to_string());
    let [observations, feelings, needs, requests] =
        NVC_KEYS.map(|key| string_field(object, key, true));

    Ok(MediationOutcome {
        response,
        mediation_triggered: true,
        observations: observations?,
        feelings: feelings?,
        needs: needs?,
        requests: requests?,
    })
}

/// Classifies a completed reply into a mediation outcome.
pub fn classify(reply: &str) -> MediationOutcome {
    let text = reply.trim();
    for (name, classifier) in CLASSIFIERS {
        if let Some(outcome) = classifier(text) {
            debug!(
                classifier = name,
                triggered = outcome.mediation_triggered,
                "classified reply"
            );
            return outcome;
        }
    }
    MediationOutcome::raw(text)
}

fn no_mediation_sentinel(text: &str) -> Option<MediationOutcome> {
    text.contains(NO_MEDIATION_SENTINEL)
        .then(MediationOutcome::listening)
}

/// Valid JSON with unusable field types falls back to [`MediationOutcome::step_back`];
/// text that is not JSON at all is left to the raw classifier.
fn structured_reply(text: &str) -> Option<MediationOutcome> {
    let candidate = json_candidate(text)?;
    let object = match serde_json::from_str::<Map<String, Value>>(candidate) {
        Ok(object) => object,
        Err(e) => {
            warn!(error = %e, "reply braces did not contain valid JSON");
            return None;
        }
    };

    match structured_outcome(&object) {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            warn!(error = %e, "mediation object has unusable fields");
            Some(MediationOutcome::step_back())
        }
    }
}

fn raw_reply(text: &str) -> Option<MediationOutcome> {
    Some(MediationOutcome::raw(text))
}

/// Slice from the first `{` through the last `}`, if they are in order.
fn json_candidate(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
