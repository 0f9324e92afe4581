//! Suffix rewriting for values flagged by an audit.

use osm_model::{AuditResult, Correction, CorrectionTable, Vocabulary};

use crate::error::AuditError;
use crate::pattern::ExtractPattern;
use crate::spec::AuditSpec;

/// Rewrite the extracted token of `value` through `corrections`.
///
/// Only the located token span is replaced, so an identical substring earlier
/// in the value is left alone. Values whose token conforms or has no
/// correction come back unchanged.
///
/// # Errors
///
/// Returns [`AuditError::ExtractionFailed`] when no token can be extracted;
/// callers are expected to pass only values the classifier flagged.
pub fn normalize(
    value: &str,
    pattern: ExtractPattern,
    vocabulary: &Vocabulary,
    corrections: &CorrectionTable,
) -> Result<String, AuditError> {
    let token = pattern
        .extract(value)
        .ok_or_else(|| AuditError::ExtractionFailed {
            value: value.to_string(),
        })?;
    if vocabulary.contains(token.text) {
        return Ok(value.to_string());
    }
    let Some(replacement) = corrections.get(token.text) else {
        return Ok(value.to_string());
    };
    let mut corrected =
        String::with_capacity(value.len() - token.span.len() + replacement.len());
    corrected.push_str(&value[..token.span.start]);
    corrected.push_str(replacement);
    corrected.push_str(&value[token.span.end..]);
    Ok(corrected)
}

/// Lazily normalize every value of an audit result, in result order.
pub fn normalize_stream<'a>(
    result: &'a AuditResult,
    spec: &'a AuditSpec,
) -> impl Iterator<Item = Result<Correction, AuditError>> + 'a {
    result.values().map(move |value| {
        spec.normalize(value)
            .map(|corrected| Correction::new(value, corrected))
    })
}

/// Normalize every value of an audit result, stopping at the first failure.
pub fn normalize_result(
    result: &AuditResult,
    spec: &AuditSpec,
) -> Result<Vec<Correction>, AuditError> {
    normalize_stream(result, spec).collect()
}
