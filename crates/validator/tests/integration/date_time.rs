use reportingcloud_validator::prelude::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("2016-06-02T15:49:57+00:00")]
#[case("1980-06-02T15:49:57+00:00")]
#[case("2000-01-01T00:00:00+00:00")]
#[case("1999-12-31T23:59:59+00:00")]
fn accepts_utc_timestamps(#[case] value: &str) {
    assert!(date_time().validate_any(value).is_ok());
}

#[rstest]
#[case::integer(json!(1), ErrorCode::InvalidType)]
#[case::float(json!(1.1), ErrorCode::InvalidType)]
#[case::boolean(json!(true), ErrorCode::InvalidType)]
#[case::null(json!(null), ErrorCode::InvalidType)]
#[case::seconds_offset(json!("2016-06-02T15:49:57+00:00:00"), ErrorCode::InvalidLength)]
#[case::date_only(json!("2016-06-02"), ErrorCode::InvalidLength)]
#[case::letters(json!("xxxx-06-02T15:49:57+00:00"), ErrorCode::InvalidSyntax)]
#[case::month_13(json!("2016-13-02T15:49:57+00:00"), ErrorCode::InvalidSyntax)]
#[case::no_such_day(json!("2016-02-30T15:49:57+00:00"), ErrorCode::InvalidSyntax)]
#[case::minute_60(json!("2016-06-02T15:60:57+00:00"), ErrorCode::InvalidSyntax)]
#[case::second_60(json!("2016-06-02T15:49:60+00:00"), ErrorCode::InvalidSyntax)]
#[case::space_separator(json!("2016-06-02 15:49:57+00:00"), ErrorCode::InvalidSyntax)]
#[case::plus_two(json!("2016-06-02T15:49:57+02:00"), ErrorCode::InvalidOffset)]
#[case::minus_five(json!("2016-06-02T15:49:57-05:00"), ErrorCode::InvalidOffset)]
fn reports_first_failed_stage(#[case] value: Value, #[case] expected: ErrorCode) {
    let error = date_time().validate(&value).unwrap_err();
    assert_eq!(error.code, expected);
}

#[rstest]
fn offset_message_names_the_value() {
    let mut validator = date_time().into_validator();

    assert!(!validator.is_valid("2016-06-02T15:49:57+02:00"));
    assert_eq!(
        validator.messages()[&ErrorCode::InvalidOffset],
        "'2016-06-02T15:49:57+02:00' must have a UTC offset of +00:00"
    );
}
