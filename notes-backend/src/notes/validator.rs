//! Payload checks for the two write paths.
//!
//! Both entry points take the loosely-typed request body and either return a
//! trimmed, strongly-typed request or the first failing check. Nothing here
//! touches the store.

use serde_json::{Map, Value};

use super::errors::NoteError;
use crate::models::{CreateNote, UpdateNote};

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_CONTENT_CHARS: usize = 5000;

/// Raw request body: `None` when no body was sent.
pub type Payload = Option<Map<String, Value>>;

/// Validate a creation payload.
///
/// Check order is fixed: empty body, title, content, title length, content length.
pub fn validate_create(payload: &Payload) -> Result<CreateNote, NoteError> {
    let fields = match payload {
        Some(map) if !map.is_empty() => map,
        _ => return Err(NoteError::EmptyBody),
    };

    let title = required_text(fields.get("title")).ok_or(NoteError::InvalidTitle)?;
    let content = required_text(fields.get("content")).ok_or(NoteError::InvalidContent)?;

    check_title_len(title)?;
    check_content_len(content)?;

    Ok(CreateNote {
        title: title.to_string(),
        content: content.to_string(),
    })
}

/// Validate an update payload. Absent fields stay `None`; present ones obey the
/// same rules as on creation.
pub fn validate_update(payload: &Payload) -> Result<UpdateNote, NoteError> {
    let raw_title = payload.as_ref().and_then(|m| m.get("title"));
    let raw_content = payload.as_ref().and_then(|m| m.get("content"));

    if raw_title.is_none() && raw_content.is_none() {
        return Err(NoteError::NoFieldsProvided);
    }

    let title = match raw_title {
        Some(value) => Some(required_text(Some(value)).ok_or(NoteError::InvalidTitle)?),
        None => None,
    };
    let content = match raw_content {
        Some(value) => Some(required_text(Some(value)).ok_or(NoteError::InvalidContent)?),
        None => None,
    };

    if let Some(title) = title {
        check_title_len(title)?;
    }
    if let Some(content) = content {
        check_content_len(content)?;
    }

    Ok(UpdateNote {
        title: title.map(str::to_string),
        content: content.map(str::to_string),
    })
}

/// Trimmed string value, or `None` if missing, not a string, or blank
fn required_text(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() { None } else { Some(trimmed) }
        }
        _ => None,
    }
}

fn check_title_len(title: &str) -> Result<(), NoteError> {
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(NoteError::TitleTooLong);
    }
    Ok(())
}

fn check_content_len(content: &str) -> Result<(), NoteError> {
    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(NoteError::ContentTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => Some(map),
            _ => panic!("test payloads must be objects"),
        }
    }

    #[test]
    fn test_create_trims_fields() {
        let req = validate_create(&payload(json!({
            "title": "  Meeting Notes  ",
            "content": "\n\tDiscuss project timeline "
        })))
        .unwrap();

        assert_eq!(req.title, "Meeting Notes");
        assert_eq!(req.content, "Discuss project timeline");
    }

    #[test]
    fn test_create_empty_body() {
        assert_eq!(validate_create(&None), Err(NoteError::EmptyBody));
        assert_eq!(validate_create(&payload(json!({}))), Err(NoteError::EmptyBody));
    }

    #[test]
    fn test_create_title_checks() {
        assert_eq!(
            validate_create(&payload(json!({"content": "body"}))),
            Err(NoteError::InvalidTitle)
        );
        assert_eq!(
            validate_create(&payload(json!({"title": 42, "content": "body"}))),
            Err(NoteError::InvalidTitle)
        );
        assert_eq!(
            validate_create(&payload(json!({"title": "   ", "content": "body"}))),
            Err(NoteError::InvalidTitle)
        );
        assert_eq!(
            validate_create(&payload(json!({"title": null, "content": "body"}))),
            Err(NoteError::InvalidTitle)
        );
    }

    #[test]
    fn test_create_content_checks() {
        assert_eq!(
            validate_create(&payload(json!({"title": "t"}))),
            Err(NoteError::InvalidContent)
        );
        assert_eq!(
            validate_create(&payload(json!({"title": "t", "content": ["x"]}))),
            Err(NoteError::InvalidContent)
        );
        assert_eq!(
            validate_create(&payload(json!({"title": "t", "content": " \n "}))),
            Err(NoteError::InvalidContent)
        );
    }

    #[test]
    fn test_create_check_order() {
        // Bad title wins over bad content
        assert_eq!(
            validate_create(&payload(json!({"title": "", "content": ""}))),
            Err(NoteError::InvalidTitle)
        );
        // Presence checks run before length checks
        assert_eq!(
            validate_create(&payload(json!({"title": "x".repeat(500), "content": ""}))),
            Err(NoteError::InvalidContent)
        );
        // Title length before content length
        assert_eq!(
            validate_create(&payload(json!({
                "title": "x".repeat(201),
                "content": "y".repeat(5001)
            }))),
            Err(NoteError::TitleTooLong)
        );
    }

    #[test]
    fn test_create_unrelated_keys_only() {
        assert_eq!(
            validate_create(&payload(json!({"tags": ["a"]}))),
            Err(NoteError::InvalidTitle)
        );
    }

    #[test]
    fn test_title_length_boundary() {
        let ok = validate_create(&payload(json!({"title": "a".repeat(200), "content": "c"})));
        assert!(ok.is_ok());

        let too_long = validate_create(&payload(json!({"title": "a".repeat(201), "content": "c"})));
        assert_eq!(too_long, Err(NoteError::TitleTooLong));

        // Surrounding whitespace does not count
        let padded = validate_create(&payload(json!({
            "title": format!("   {}   ", "a".repeat(200)),
            "content": "c"
        })));
        assert_eq!(padded.unwrap().title.len(), 200);
    }

    #[test]
    fn test_content_length_boundary() {
        let ok = validate_create(&payload(json!({"title": "t", "content": "b".repeat(5000)})));
        assert!(ok.is_ok());

        let too_long = validate_create(&payload(json!({"title": "t", "content": "b".repeat(5001)})));
        assert_eq!(too_long, Err(NoteError::ContentTooLong));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let title = "é".repeat(200);
        assert!(title.len() > 200);
        assert!(validate_create(&payload(json!({"title": title, "content": "c"}))).is_ok());
    }

    #[test]
    fn test_length_counts_astral_characters_once() {
        // Each emoji is one scalar value, four UTF-8 bytes and two UTF-16 units
        let ok = "😀".repeat(200);
        assert_eq!(ok.encode_utf16().count(), 400);
        let req = validate_create(&payload(json!({"title": ok, "content": "c"}))).unwrap();
        assert_eq!(req.title.chars().count(), 200);

        let too_long = "😀".repeat(201);
        assert_eq!(
            validate_create(&payload(json!({"title": too_long, "content": "c"}))),
            Err(NoteError::TitleTooLong)
        );
        assert_eq!(
            validate_update(&payload(json!({"title": too_long}))),
            Err(NoteError::TitleTooLong)
        );
    }

    #[test]
    fn test_update_single_field() {
        let req = validate_update(&payload(json!({"title": "  Updated "}))).unwrap();
        assert_eq!(req.title.as_deref(), Some("Updated"));
        assert_eq!(req.content, None);

        let req = validate_update(&payload(json!({"content": "new body"}))).unwrap();
        assert_eq!(req.title, None);
        assert_eq!(req.content.as_deref(), Some("new body"));
    }

    #[test]
    fn test_update_no_fields() {
        assert_eq!(validate_update(&None), Err(NoteError::NoFieldsProvided));
        assert_eq!(validate_update(&payload(json!({}))), Err(NoteError::NoFieldsProvided));
        assert_eq!(
            validate_update(&payload(json!({"pinned": true}))),
            Err(NoteError::NoFieldsProvided)
        );
    }

    #[test]
    fn test_update_present_fields_follow_create_rules() {
        assert_eq!(
            validate_update(&payload(json!({"title": "   "}))),
            Err(NoteError::InvalidTitle)
        );
        assert_eq!(
            validate_update(&payload(json!({"title": null}))),
            Err(NoteError::InvalidTitle)
        );
        assert_eq!(
            validate_update(&payload(json!({"content": 7}))),
            Err(NoteError::InvalidContent)
        );
        assert_eq!(
            validate_update(&payload(json!({"title": "a".repeat(201)}))),
            Err(NoteError::TitleTooLong)
        );
        assert_eq!(
            validate_update(&payload(json!({"content": "b".repeat(5001)}))),
            Err(NoteError::ContentTooLong)
        );
        assert!(validate_update(&payload(json!({"title": "a".repeat(200)}))).is_ok());
    }

    #[test]
    fn test_update_check_order() {
        // Type and blank checks on both fields run before any length check
        assert_eq!(
            validate_update(&payload(json!({"title": "a".repeat(201), "content": 5}))),
            Err(NoteError::InvalidContent)
        );
        assert_eq!(
            validate_update(&payload(json!({"title": "", "content": ""}))),
            Err(NoteError::InvalidTitle)
        );
        assert_eq!(
            validate_update(&payload(json!({
                "title": "a".repeat(201),
                "content": "b".repeat(5001)
            }))),
            Err(NoteError::TitleTooLong)
        );
        // Unrelated keys do not count as fields, but do not mask a bad one
        assert_eq!(
            validate_update(&payload(json!({"pinned": true, "content": "  "}))),
            Err(NoteError::InvalidContent)
        );
    }
}
