use idxsort::range::{RangeError, RangeErrorKind, ensure_from_to, ensure_offset_length};

#[test]
fn test_from_to_scenarios() {
    assert_eq!(
        ensure_from_to(10, 3, 2),
        Err(RangeError::StartAfterEnd { from: 3, to: 2 })
    );
    assert_eq!(ensure_from_to(10, -1, 5), Err(RangeError::NegativeStart(-1)));
    assert_eq!(
        ensure_from_to(10, 2, 11),
        Err(RangeError::EndPastLength { to: 11, length: 10 })
    );
    assert_eq!(ensure_from_to(10, 2, 10), Ok(()));
}

#[test]
fn test_from_to_kinds() {
    let kind = |r: Result<(), RangeError>| r.unwrap_err().kind();

    assert_eq!(kind(ensure_from_to(10, 3, 2)), RangeErrorKind::InvalidArgument);
    assert_eq!(kind(ensure_from_to(10, -1, 5)), RangeErrorKind::OutOfBounds);
    assert_eq!(kind(ensure_from_to(10, 2, 11)), RangeErrorKind::OutOfBounds);
}

#[test]
fn test_from_to_edges() {
    assert!(ensure_from_to(0, 0, 0).is_ok());
    assert!(ensure_from_to(10, 10, 10).is_ok());
    assert!(ensure_from_to(10, 0, 10).is_ok());
    // Negative start wins over start-after-end.
    assert_eq!(ensure_from_to(10, -3, -5), Err(RangeError::NegativeStart(-3)));
    // Start-after-end wins over end-past-length.
    assert_eq!(
        ensure_from_to(10, 12, 11),
        Err(RangeError::StartAfterEnd { from: 12, to: 11 })
    );
}

#[test]
fn test_offset_length() {
    assert!(ensure_offset_length(10, 0, 10).is_ok());
    assert!(ensure_offset_length(10, 10, 0).is_ok());
    assert!(ensure_offset_length(10, 4, 3).is_ok());

    let err = ensure_offset_length(10, 2, -1).unwrap_err();
    assert_eq!(err, RangeError::NegativeLength(-1));
    assert_eq!(err.kind(), RangeErrorKind::InvalidArgument);

    let err = ensure_offset_length(10, -2, 3).unwrap_err();
    assert_eq!(err, RangeError::NegativeOffset(-2));
    assert_eq!(err.kind(), RangeErrorKind::OutOfBounds);

    let err = ensure_offset_length(10, 8, 3).unwrap_err();
    assert_eq!(
        err,
        RangeError::LastPastLength {
            offset: 8,
            count: 3,
            length: 10
        }
    );
    assert_eq!(err.kind(), RangeErrorKind::OutOfBounds);
}

#[test]
fn test_offset_length_overflow() {
    let err = ensure_offset_length(isize::MAX, isize::MAX, 1).unwrap_err();
    assert_eq!(err.kind(), RangeErrorKind::OutOfBounds);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ensure_from_to(10, 3, 2).unwrap_err().to_string(),
        "start index (3) is greater than end index (2)"
    );
    assert_eq!(
        ensure_from_to(10, -1, 5).unwrap_err().to_string(),
        "start index (-1) is negative"
    );
    assert_eq!(
        ensure_offset_length(10, 8, 3).unwrap_err().to_string(),
        "last index (8 + 3) is greater than length (10)"
    );

    // Usable as a boxed error.
    let boxed: Box<dyn std::error::Error> = Box::new(RangeError::NegativeLength(-4));
    assert_eq!(boxed.to_string(), "length (-4) is negative");
}
