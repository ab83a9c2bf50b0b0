//! Payload chunking against a transport byte limit.

use serde_json::{Map, Value as Json};

use feeder_core::error::DeliveryError;

/// Serialize records into JSON-array payloads, each at most `limit`
/// bytes.
///
/// Boundaries are computed from the actual cumulative encoded size of
/// every record, so a payload can never exceed the limit regardless of
/// how record sizes vary across the table. A single record larger than
/// the limit is unsendable and reported as such.
pub fn chunk_payloads(
    records: &[Map<String, Json>],
    limit: usize,
) -> Result<Vec<String>, DeliveryError> {
    let mut payloads = Vec::new();
    let mut current: Vec<String> = Vec::new();
    // Running size including the enclosing brackets and commas
    let mut current_size = 2;

    for record in records {
        let encoded = serde_json::to_string(record)?;
        if encoded.len() + 2 > limit {
            return Err(DeliveryError::RecordTooLarge {
                bytes: encoded.len(),
                limit,
            });
        }
        let separator = if current.is_empty() { 0 } else { 1 };
        if current_size + separator + encoded.len() > limit {
            payloads.push(assemble(&current));
            current.clear();
            current_size = 2;
        }
        current_size += if current.is_empty() { 0 } else { 1 } + encoded.len();
        current.push(encoded);
    }
    if !current.is_empty() {
        payloads.push(assemble(&current));
    }
    Ok(payloads)
}

fn assemble(encoded: &[String]) -> String {
    format!("[{}]", encoded.join(","))
}
