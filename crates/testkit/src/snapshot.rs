//! Deterministic JSON snapshots.
//!
//! Snapshots are serialized as canonical pretty JSON with object keys sorted,
//! so two snapshots of identical state always produce identical text. Floats
//! are written with their shortest round-trip form, which makes a text
//! comparison bit-exact.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// Serialize `value` as canonical pretty JSON (sorted keys, trailing newline).
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value).context("Failed to serialize snapshot value")?;
    let value = canonicalize_value(value);
    let mut s = serde_json::to_string_pretty(&value).context("Failed to format snapshot JSON")?;
    s.push('\n');
    Ok(s)
}

/// Assert that two values produce the same canonical JSON.
pub fn assert_same_snapshot<A: Serialize, B: Serialize>(expected: &A, actual: &B) -> Result<()> {
    let expected = canonical_json(expected)?;
    let actual = canonical_json(actual)?;
    if expected != actual {
        anyhow::bail!("Snapshot mismatch:\n--- expected\n{expected}--- actual\n{actual}");
    }
    Ok(())
}

fn canonicalize_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut out = serde_json::Map::with_capacity(entries.len());
            for (k, v) in entries {
                out.insert(k, canonicalize_value(v));
            }
            Value::Object(out)
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize_value).collect()),
        other => other,
    }
}
