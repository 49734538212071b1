use super::*;

#[test]
fn missing_method_defaults_to_get() {
    assert_eq!(resolve_method(None).unwrap(), Method::Get);
    assert_eq!(resolve_method(Some("put")).unwrap(), Method::Put);
}

#[test]
fn unknown_method_is_rejected_with_its_name() {
    let err = resolve_method(Some("TRACE")).unwrap_err();
    assert!(matches!(err, ApiError::Method(ref name) if name == "TRACE"));
    assert_eq!(err.to_string(), "unsupported HTTP method: TRACE");
}

#[test]
fn toast_kind_defaults_to_success() {
    assert_eq!(toast_kind(None), ToastKind::Success);
    assert_eq!(toast_kind(Some("success")), ToastKind::Success);
    assert_eq!(toast_kind(Some("info")), ToastKind::Error);
}

#[test]
fn missing_minute_reads_as_zero() {
    let hour = Arg::Number(14.0);
    assert_eq!(time_args(&hour, &Arg::Missing), "2:00 PM");
    assert_eq!(time_args(&hour, &Arg::Text("7".to_owned())), "2:07 PM");
}

#[test]
fn non_numeric_time_parts_truncate_to_zero() {
    let hour = Arg::Text("9.8".to_owned());
    assert_eq!(time_args(&hour, &Arg::Other), "9:00 AM");
}

#[test]
fn validate_bounds_default_to_non_negative() {
    let value = Arg::Text("1e9".to_owned());
    assert!(validate_args(&value, &Arg::Missing, &Arg::Missing));
    let negative = Arg::Number(-1.0);
    assert!(!validate_args(&negative, &Arg::Missing, &Arg::Missing));
}

#[test]
fn explicit_bounds_replace_the_defaults() {
    let value = Arg::Number(-5.0);
    let min = Arg::Number(-10.0);
    assert!(validate_args(&value, &min, &Arg::Missing));
    let max = Arg::Text("-6".to_owned());
    assert!(!validate_args(&value, &min, &max));
}

#[test]
fn present_but_unreadable_bound_rejects_everything() {
    let value = Arg::Number(5.0);
    assert!(!validate_args(&value, &Arg::Other, &Arg::Missing));
    assert!(!validate_args(&Arg::Missing, &Arg::Missing, &Arg::Missing));
}

#[test]
fn numbers_read_like_parse_float() {
    assert_eq!(Arg::Text("12.5kWh".to_owned()).number(), 12.5);
    assert!(Arg::Missing.number().is_nan());
    assert_eq!(Arg::Missing.number_or(3.0), 3.0);
    assert_eq!(Arg::Number(7.9).int_or(0), 7);
}
