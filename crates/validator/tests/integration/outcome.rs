use pretty_assertions::assert_eq;
use reportingcloud_validator::prelude::*;
use serde_json::json;

// ============================================================================
// STATEFUL OUTCOME
// ============================================================================

#[test]
fn fresh_validator_has_no_outcome() {
    let validator = Validator::new(ImageFormats);
    assert!(validator.messages().is_empty());
    assert_eq!(validator.value(), None);
}

#[test]
fn failure_replaces_previous_failure() {
    let mut validator = Validator::new(DateTime);

    assert!(!validator.is_valid(1));
    assert!(!validator.is_valid("2016-06-02T15:49:57+02:00"));

    assert_eq!(
        validator.messages(),
        &Messages::from([(
            ErrorCode::InvalidOffset,
            "'2016-06-02T15:49:57+02:00' must have a UTC offset of +00:00".to_owned(),
        )])
    );
    assert_eq!(validator.value(), Some(&json!("2016-06-02T15:49:57+02:00")));
}

#[test]
fn success_clears_previous_failure() {
    let mut validator = Validator::new(TemplateExtension);

    assert!(!validator.is_valid("template.doc"));
    assert!(validator.is_valid("template.tx"));
    assert_eq!(validator.messages(), &Messages::new());
}

#[test]
fn repeated_checks_are_idempotent() {
    let mut validator = zoom_factor().into_validator();

    let first = (validator.is_valid(0), validator.messages().clone());
    let second = (validator.is_valid(0), validator.messages().clone());
    assert_eq!(first, second);
}

// ============================================================================
// ENSURE
// ============================================================================

#[test]
fn ensure_converts_failure_into_invalid_argument() {
    let error = Validator::new(ImageFormats).ensure("doc").unwrap_err();

    assert_eq!(error.code(), Some(ErrorCode::NotInArray));
    assert_eq!(
        error.to_string(),
        "invalid argument (notInArray): 'doc' is not a supported image format"
    );
}

#[test]
fn ensure_passes_valid_values() {
    let mut validator = Validator::new(DocumentExtension);
    assert!(validator.ensure("/reports/q3.pdf").is_ok());
    assert!(validator.messages().is_empty());
}

// ============================================================================
// CONFIGURED BETWEEN
// ============================================================================

#[test]
fn between_from_options_document() {
    let between = Between::from_value(json!({ "min": 10, "max": 20, "inclusive": false })).unwrap();
    let mut validator = between.into_validator();

    assert!(validator.is_valid(15));
    assert!(!validator.is_valid(20));
    assert_eq!(
        validator.messages()[&ErrorCode::NotBetween],
        "'20' is not between '10' and '20' (exclusive)"
    );
}

#[test]
fn between_rejects_unusable_options() {
    assert!(matches!(
        Between::from_value(json!({ "min": 20, "max": 10 })),
        Err(Error::InvalidOptions(_))
    ));
    assert!(matches!(
        Between::from_value(json!({ "max": 10 })),
        Err(Error::Options(_))
    ));
}

// ============================================================================
// THREAD SAFETY
// ============================================================================

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn rules_can_be_shared_across_threads() {
    assert_send_sync::<TypeInteger>();
    assert_send_sync::<Between>();
    assert_send_sync::<ZoomFactor>();
    assert_send_sync::<DateTime>();
    assert_send_sync::<DocumentExtension>();
    assert_send_sync::<TemplateExtension>();
    assert_send_sync::<ImageFormats>();
    assert_send_sync::<Validator<ZoomFactor>>();
}
