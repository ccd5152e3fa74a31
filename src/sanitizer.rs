use serde_json::Value;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Result of cleaning and parsing a model response.
#[derive(Debug, Clone, PartialEq)]
pub enum Sanitized {
    Parsed(Value),
    Invalid {
        raw: String,
        cleaned: String,
        error: String,
    },
}

/// Strips a leading ```` ```json ```` (or bare ```` ``` ````) marker and a trailing
/// ```` ``` ```` marker, trimming whitespace around both.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut cleaned = raw.trim();
    if let Some(rest) = cleaned.strip_prefix(JSON_FENCE) {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix(FENCE) {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix(FENCE) {
        cleaned = rest;
    }
    cleaned.trim()
}

/// Cleans the completion text and parses it as JSON, returning the value
/// unmodified. Never fails; invalid input is reported as [`Sanitized::Invalid`].
pub fn sanitize(raw: &str) -> Sanitized {
    let cleaned = strip_code_fence(raw);

    if !cleaned.starts_with('[') {
        tracing::warn!("model response does not start with '['");
    }
    if !cleaned.ends_with(']') {
        tracing::warn!("model response does not end with ']'");
    }

    match serde_json::from_str::<Value>(cleaned) {
        Ok(value) => Sanitized::Parsed(value),
        Err(e) => {
            tracing::error!(
                raw = ?raw,
                cleaned = ?cleaned,
                error = %e,
                "model response is not valid JSON"
            );
            Sanitized::Invalid {
                raw: raw.to_string(),
                cleaned: cleaned.to_string(),
                error: e.to_string(),
            }
        }
    }
}

/// Parses the completion text, degrading to an empty list on failure.
pub fn parse_response(raw: &str) -> Value {
    match sanitize(raw) {
        Sanitized::Parsed(value) => value,
        Sanitized::Invalid { .. } => Value::Array(Vec::new()),
    }
}

/// Coerces a parsed response into at most `limit` candidates.
///
/// Arrays are truncated. A bare object is the deprecated single-rental shape and
/// becomes a one-element list. Anything else yields no candidates.
pub fn into_candidates(value: Value, limit: usize) -> Vec<Value> {
    match value {
        Value::Array(mut items) => {
            if items.len() > limit {
                tracing::warn!(
                    returned = items.len(),
                    limit,
                    "model returned too many rentals, truncating"
                );
                items.truncate(limit);
            }
            items
        }
        Value::Object(_) if limit > 0 => {
            tracing::warn!("model returned a bare object, wrapping in a list");
            vec![value]
        }
        other => {
            tracing::warn!(kind = ?other, "model returned neither a list nor an object");
            Vec::new()
        }
    }
}
