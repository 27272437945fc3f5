//! Conformance of FatalError, plus the call-site attribution only it has.

use faultline_conformance::{argument_matrix, KindSpec};
use faultline_core::{fatal, AnyError, ErrorClass, ErrorCode, ErrorKind, FatalError};
use proptest::prelude::*;

fn spec() -> KindSpec<FatalError> {
    KindSpec {
        name: "FatalError",
        build: FatalError::from_parts,
        kind: ErrorKind::Fatal,
        class: ErrorClass::Runtime,
    }
}

#[test]
fn test_default_construction() {
    let err = spec().check_default().unwrap();
    assert_eq!(err.code(), ErrorCode::INTERNAL_ERROR);
}

#[test]
fn test_argument_matrix() {
    let mismatches = spec().check_all();
    assert!(mismatches.is_empty(), "{:#?}", mismatches);
}

#[test]
fn test_every_case_records_an_origin() {
    for case in argument_matrix() {
        let err = spec().check_case(&case).unwrap();
        assert!(err.origin().is_some(), "no origin for {:?}", case);
    }
}

#[test]
fn test_origin_is_the_calling_line() {
    let line = line!() + 1;
    let err = FatalError::new("lost connection");
    assert!(err.file().ends_with("fatal.rs"));
    assert!(err.file().contains("tests"));
    assert_eq!(err.line(), line);

    let line = line!() + 1;
    let err = fatal("lost connection");
    assert_eq!(err.line(), line);
}

#[inline(never)]
fn raise_from_helper() -> FatalError {
    FatalError::from_parts(Some("from helper".to_string()), None, None)
}

#[test]
fn test_origin_points_into_the_helper() {
    let err = raise_from_helper();
    let origin = err.origin().unwrap();
    assert!(origin.line < line!());
    assert!(origin.file.ends_with("fatal.rs"));
}

#[test]
fn test_trace_starts_outside_the_constructor() {
    let err = raise_from_helper();
    assert!(
        !err.trace().is_empty(),
        "no frames captured; is FAULTLINE_TRACE disabling capture?"
    );

    let first = &err.trace().frames()[0];
    assert!(
        first.symbol.contains("raise_from_helper"),
        "trace starts at {} instead of the raising function",
        first
    );
    assert!(err
        .trace()
        .frames()
        .iter()
        .all(|frame| !frame.symbol.contains("faultline_core::fatal")));
    assert_eq!(err.trace_as_string(), err.trace().to_string());
}

proptest! {
    #[test]
    fn prop_any_code_round_trips(value in any::<i64>()) {
        let err = FatalError::from_parts(None, Some(ErrorCode::new(value)), None);
        prop_assert_eq!(err.code().value(), value);
    }
}
