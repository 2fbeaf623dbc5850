//! Integration tests for common Verity workflows.
//!
//! These tests exercise validation of request payloads end to end, from a
//! typed struct to the JSON body of a 422 response.

use serde::Serialize;
use serde_json::json;
use verity::prelude::*;

#[derive(Serialize)]
struct CreatePost {
    title: String,
    tags: Vec<String>,
    author: Author,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

#[derive(Serialize)]
struct Author {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

fn post_verifications() -> Vec<Verification> {
    vec![
        verify!("title", Required),
        verify!("tags", Slice),
        verify!("author.name", Required),
        verify!("author.email", Present),
        verify!("summary", Required),
    ]
}

fn valid_post() -> CreatePost {
    CreatePost {
        title: "Horses".to_string(),
        tags: vec!["animals".to_string()],
        author: Author {
            name: "Ada".to_string(),
            email: Some("ada@example.com".to_string()),
        },
        summary: Some("All about horses".to_string()),
    }
}

// =============================================================================
// Payload Validation
// =============================================================================

#[test]
fn test_valid_payload_passes() {
    let value = Value::from_serialize(&valid_post()).unwrap();
    let errors: ValidationErrors = validate(value, &post_verifications()).into();

    assert!(errors.is_empty());
    assert!(errors.into_result().is_ok());
}

#[test]
fn test_invalid_payload_reports_every_field() {
    let mut post = valid_post();
    post.title = String::new();
    post.author.email = None;
    post.summary = None;

    let value = Value::from_serialize(&post).unwrap();
    let errors: ValidationErrors = validate(value, &post_verifications()).into();

    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "field title is required",
            "field author.email must be present",
            "field summary must be present",
        ]
    );
    assert_eq!(errors.get_field_errors("summary").len(), 1);
}

#[test]
fn test_error_body_for_response() {
    let mut post = valid_post();
    post.author.name = String::new();

    let value = Value::from_serialize(&post).unwrap();
    let errors: ValidationErrors = validate(value, &post_verifications()).into();

    assert_eq!(u16::from(errors.status()), 422);
    assert_eq!(
        errors.to_json(),
        json!({
            "status": 422,
            "errors": [{
                "field": "author.name",
                "message": "field author.name is required",
                "constraint": "required",
            }]
        })
    );
}

// =============================================================================
// Error Decorations
// =============================================================================

#[test]
fn test_violation_decorations_are_discoverable() {
    let errors = validate(json!({}), &[verify!("title", Present)]);
    let error = &errors[0];

    assert_eq!(find_status(error), Some(HttpStatus::UnprocessableEntity));
    assert_eq!(find_level(error), Some(Level::Info));

    let stack = find_stack(error).unwrap();
    assert!(stack.file().ends_with("common_workflows.rs"));
}

#[test]
fn test_validation_errors_propagate_with_question_mark() {
    fn handle(payload: serde_json::Value) -> Result<String, ValidationErrors> {
        ValidationErrors::from(validate(&payload, &[verify!("title", Required)]))
            .into_result()?;
        Ok(payload["title"].to_string())
    }

    assert_eq!(handle(json!({"title": "Horse"})).unwrap(), "\"Horse\"");

    let err = handle(json!({"title": ""})).unwrap_err();
    assert_eq!(err.to_string(), "field title is required\n");
}

// =============================================================================
// Custom Rules
// =============================================================================

#[test]
fn test_closure_rule_in_workflow() {
    let short_title = |value: &Value| match value.raw().and_then(|raw| raw.as_str()) {
        Some(title) if title.chars().count() > 10 => Err(RuleError::custom("is too long")),
        _ => Ok(()),
    };

    let errors = validate(
        json!({"title": "A very long title"}),
        &[verify!("title", Required, short_title)],
    );

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "field title is too long");
}

#[test]
fn test_logging_level_is_configurable() {
    verity::verity_log::set_level(Level::Error);
    assert!(verity::verity_log::is_level_enabled(Level::Error));
    assert!(!verity::verity_log::is_level_enabled(Level::Off));
}
