use reportingcloud_validator::prelude::*;
use rstest::rstest;

#[rstest]
#[case("bmp")]
#[case("gif")]
#[case("jpg")]
#[case("png")]
#[case("tif")]
#[case("PNG")]
#[case("Gif")]
fn supported_formats(#[case] format: &str) {
    assert!(image_formats().validate_any(format).is_ok());
}

#[rstest]
#[case("doc")]
#[case("DOC")]
#[case("jpeg")]
#[case("tiff")]
#[case("")]
fn unsupported_formats(#[case] format: &str) {
    let error = image_formats().validate_any(format).unwrap_err();
    assert_eq!(error.code, ErrorCode::NotInArray);
}
