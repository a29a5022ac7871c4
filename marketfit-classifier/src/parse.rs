//! Strict parsing of classifier replies.

use marketfit_core::errors::ClassificationError;
use marketfit_core::Sector;
use tracing::debug;

/// Parse an LLM reply into sectors.
///
/// The reply must be a JSON array of strings, optionally wrapped in a
/// Markdown code fence. Unknown labels and `general` are dropped, duplicates
/// removed preserving order, and the result truncated to `max_results`. An
/// array with no usable labels yields `[General]`. Anything that is not a
/// JSON array of strings is an error.
pub fn parse_sector_reply(
    reply: &str,
    max_results: usize,
) -> Result<Vec<Sector>, ClassificationError> {
    let body = strip_code_fence(reply.trim());
    let labels: Vec<String> =
        serde_json::from_str(body).map_err(|e| ClassificationError::UnparseableReply {
            reason: e.to_string(),
        })?;

    let mut sectors = Vec::new();
    for label in &labels {
        match label.parse::<Sector>() {
            Ok(Sector::General) => {}
            Ok(sector) if !sectors.contains(&sector) => sectors.push(sector),
            Ok(_) => {}
            Err(e) => debug!(error = %e, "dropping label"),
        }
    }
    sectors.truncate(max_results.max(1));

    if sectors.is_empty() {
        return Ok(vec![Sector::General]);
    }
    Ok(sectors)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    // Drop an info string such as `json` on the opening fence line.
    match rest.find('\n') {
        Some(newline) if !rest[..newline].trim_start().starts_with('[') => {
            rest[newline + 1..].trim()
        }
        _ => rest.trim(),
    }
}
