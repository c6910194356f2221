//! Inline string encoding of numeric arrays.
//!
//! Some stores keep the `r` and `gr` arrays as the text of a list literal,
//! e.g. `"[1.0, 2.0, 3.0]"`, rather than as native JSON arrays. The encoding
//! is not self-describing; which form a file uses is the writer's choice.
//! Readers must accept both, so the decoder here is the counterpart every
//! consumer goes through.

use crate::error::{Result, TypeError};

/// Encode a float slice as the text of a list literal: `[1.0, 2.0, 3.0]`.
///
/// Each value is formatted with its shortest round-trip representation and
/// always carries a decimal point or exponent, so [`decode_inline`] on the
/// result reproduces the input exactly.
pub fn encode_inline(values: &[f64]) -> String {
    let mut out = String::from("[");
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format!("{v:?}"));
    }
    out.push(']');
    out
}

/// Decode the text of a list literal back into a float vector.
///
/// Accepts surrounding whitespace and arbitrary spacing around commas.
/// The empty list `[]` is valid.
pub fn decode_inline(text: &str) -> Result<Vec<f64>> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| TypeError::MalformedInlineArray(format!("missing brackets in {trimmed:?}")))?
        .trim();

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<f64>()
                .map_err(|e| TypeError::MalformedInlineArray(format!("{token:?}: {e}")))
        })
        .collect()
}
