//! Decoding raw request bodies into the loosely-typed payload map.

use serde_json::Value;

use super::errors::NoteError;
use super::validator::Payload;

/// Decode a request body.
///
/// Empty bodies and `null` mean "no payload". A JSON object yields its map; any
/// other JSON value carries no named fields. Bytes that are not JSON are an
/// encoding failure and surface as `Internal`.
pub fn decode(body: &[u8]) -> Result<Payload, NoteError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| NoteError::Internal(format!("Malformed JSON in request body: {}", e)))?;

    Ok(match value {
        Value::Null => None,
        Value::Object(map) => Some(map),
        _ => Some(Default::default()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_null_bodies_are_absent() {
        assert_eq!(decode(b"").unwrap(), None);
        assert_eq!(decode(b"  \n").unwrap(), None);
        assert_eq!(decode(b"null").unwrap(), None);
    }

    #[test]
    fn test_object_body() {
        let payload = decode(br#"{"title":"t","extra":1}"#).unwrap().unwrap();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload["title"], "t");
    }

    #[test]
    fn test_non_object_json_has_no_fields() {
        assert_eq!(decode(b"[1,2]").unwrap().map(|m| m.len()), Some(0));
        assert_eq!(decode(b"\"hello\"").unwrap().map(|m| m.len()), Some(0));
    }

    #[test]
    fn test_malformed_json_is_internal() {
        match decode(b"{\"title\": ") {
            Err(NoteError::Internal(msg)) => assert!(msg.contains("Malformed JSON")),
            other => panic!("expected internal error, got {:?}", other),
        }
    }
}
