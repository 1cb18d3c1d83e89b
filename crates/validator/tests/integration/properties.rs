use proptest::prelude::*;
use reportingcloud_validator::prelude::*;

// ============================================================================
// ZOOM FACTOR
// ============================================================================

proptest! {
    #[test]
    fn zoom_in_range_is_valid(zoom in 1i64..=400) {
        prop_assert!(zoom_factor().validate_any(zoom).is_ok());
    }

    #[test]
    fn zoom_out_of_range_is_not_between(
        zoom in prop_oneof![i64::MIN..1i64, 401i64..=i64::MAX]
    ) {
        let error = zoom_factor().validate_any(zoom).unwrap_err();
        prop_assert_eq!(error.code, ErrorCode::NotBetween);
    }

    #[test]
    fn fractional_zoom_is_invalid_type(zoom in 1.0f64..400.0) {
        prop_assume!(zoom.fract() != 0.0);
        let error = zoom_factor().validate_any(zoom).unwrap_err();
        prop_assert_eq!(error.code, ErrorCode::InvalidType);
    }
}

// ============================================================================
// DATE TIME
// ============================================================================

proptest! {
    #[test]
    fn generated_utc_timestamps_are_valid(
        year in 1000u32..=9999,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..=23,
        minute in 0u32..=59,
        second in 0u32..=59,
    ) {
        let value =
            format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}+00:00");
        prop_assert!(date_time().validate_any(value).is_ok());
    }

    #[test]
    fn non_zero_offsets_are_invalid_offset(hours in 1u32..=14, negative in any::<bool>()) {
        let sign = if negative { '-' } else { '+' };
        let value = format!("2016-06-02T15:49:57{sign}{hours:02}:00");
        let error = date_time().validate_any(value).unwrap_err();
        prop_assert_eq!(error.code, ErrorCode::InvalidOffset);
    }

    #[test]
    fn date_time_never_panics(s in ".{0,40}") {
        let _ = date_time().validate_any(s);
    }
}

// ============================================================================
// EXTENSIONS AND FORMATS
// ============================================================================

proptest! {
    #[test]
    fn template_extension_ignores_case_and_directory(
        dir in "[a-z/\\\\.]{0,12}",
        stem in "[a-z0-9]{0,8}",
        upper in any::<bool>(),
    ) {
        let ext = if upper { "TX" } else { "tx" };
        let path = format!("{dir}/{stem}.{ext}");
        prop_assert!(template_extension().validate_any(path).is_ok());
    }

    #[test]
    fn image_format_case_does_not_matter(index in 0usize..5, upper in any::<bool>()) {
        let format = ["bmp", "gif", "jpg", "png", "tif"][index];
        let format = if upper { format.to_uppercase() } else { format.to_owned() };
        prop_assert!(image_formats().validate_any(format).is_ok());
    }

    #[test]
    fn outcome_is_idempotent(s in ".{0,30}") {
        let mut validator = document_extension().into_validator();
        let first = (validator.is_valid(s.as_str()), validator.messages().clone());
        let second = (validator.is_valid(s.as_str()), validator.messages().clone());
        prop_assert_eq!(first, second);
    }
}
