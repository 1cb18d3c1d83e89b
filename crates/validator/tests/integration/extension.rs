use reportingcloud_validator::prelude::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("./template.tx")]
#[case("../template.tx")]
#[case("/../template.tx")]
#[case("/path/to/template.tx")]
#[case(r"c:\path\to\template.tx")]
#[case("./TEMPLATE.TX")]
#[case("../TEMPLATE.TX")]
#[case("/PATH/TO/TEMPLATE.TX")]
#[case(r"C:\PATH\TO\TEMPLATE.TX")]
#[case(".tx")]
#[case(".TX")]
#[case("1.tx")]
#[case("a.tx")]
fn template_paths_are_accepted(#[case] path: &str) {
    assert!(template_extension().validate_any(path).is_ok());
}

#[rstest]
#[case::unknown(json!(".xxx"))]
#[case::trailing_dot(json!("template."))]
#[case::no_extension(json!("template"))]
#[case::trailing_separator(json!("template/"))]
#[case::bare_token(json!("tx"))]
#[case::bare_token_upper(json!("TX"))]
#[case::zero_string(json!("0"))]
#[case::zero(json!(0))]
#[case::one(json!(1))]
#[case::null(json!(null))]
#[case::boolean(json!(false))]
fn template_paths_are_rejected(#[case] value: Value) {
    let error = template_extension().validate(&value).unwrap_err();
    assert_eq!(error.code, ErrorCode::UnsupportedExtension);
}

#[rstest]
#[case("./document.doc")]
#[case("../document.docx")]
#[case("/path/to/document.htm")]
#[case("/path/to/document.HTML")]
#[case(r"c:\path\to\document.pdf")]
#[case("document.RTF")]
#[case("document.tx")]
fn document_paths_are_accepted(#[case] path: &str) {
    assert!(document_extension().validate_any(path).is_ok());
}

#[rstest]
#[case(".xxx")]
#[case("document.")]
#[case("document")]
#[case("document.xlsx")]
#[case("/path/to.pdf/")]
fn document_paths_are_rejected(#[case] path: &str) {
    let error = document_extension().validate_any(path).unwrap_err();
    assert_eq!(error.code, ErrorCode::UnsupportedExtension);
    assert_eq!(
        error.message,
        format!("'{path}' contains an unsupported file extension")
    );
}
