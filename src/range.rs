//! Precondition checks for range-accepting APIs.
//!
//! The sorting algorithms trust their `from`/`to` arguments. Callers that accept ranges from
//! elsewhere should run them through [`ensure_from_to`] or [`ensure_offset_length`] first.
//! Arguments are signed so that negative values produced by caller arithmetic are reported
//! rather than wrapped.

use std::fmt;

/// Broad category of a [`RangeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeErrorKind {
    /// The arguments are inconsistent with each other, independent of the structure's length.
    InvalidArgument,
    /// An index lies outside `[0, length]`.
    OutOfBounds,
}

/// A range that does not fit the structure it is meant to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// `from` is negative.
    NegativeStart(isize),
    /// `from` is greater than `to`.
    StartAfterEnd { from: isize, to: isize },
    /// `to` is greater than the structure's length.
    EndPastLength { to: isize, length: isize },
    /// `offset` is negative.
    NegativeOffset(isize),
    /// `count` is negative.
    NegativeLength(isize),
    /// `offset + count` is greater than the structure's length (or overflows).
    LastPastLength {
        offset: isize,
        count: isize,
        length: isize,
    },
    /// A `usize` position is too large to be checked as an `isize`.
    PositionTooLarge(usize),
}

impl RangeError {
    /// Returns whether this is an argument error or a bounds error.
    pub fn kind(&self) -> RangeErrorKind {
        match self {
            RangeError::StartAfterEnd { .. } | RangeError::NegativeLength(_) => {
                RangeErrorKind::InvalidArgument
            }
            RangeError::NegativeStart(_)
            | RangeError::EndPastLength { .. }
            | RangeError::NegativeOffset(_)
            | RangeError::LastPastLength { .. }
            | RangeError::PositionTooLarge(_) => RangeErrorKind::OutOfBounds,
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::NegativeStart(from) => {
                write!(f, "start index ({}) is negative", from)
            }
            RangeError::StartAfterEnd { from, to } => {
                write!(
                    f,
                    "start index ({}) is greater than end index ({})",
                    from, to
                )
            }
            RangeError::EndPastLength { to, length } => {
                write!(
                    f,
                    "end index ({}) is greater than length ({})",
                    to, length
                )
            }
            RangeError::NegativeOffset(offset) => {
                write!(f, "offset ({}) is negative", offset)
            }
            RangeError::NegativeLength(count) => {
                write!(f, "length ({}) is negative", count)
            }
            RangeError::LastPastLength {
                offset,
                count,
                length,
            } => {
                write!(
                    f,
                    "last index ({} + {}) is greater than length ({})",
                    offset, count, length
                )
            }
            RangeError::PositionTooLarge(position) => {
                write!(f, "position ({}) is greater than isize::MAX", position)
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// Checks that the half-open range `[from, to)` fits a structure of `length` positions.
///
/// # Errors
///
/// - [`RangeError::NegativeStart`] if `from < 0`.
/// - [`RangeError::StartAfterEnd`] if `from > to`.
/// - [`RangeError::EndPastLength`] if `to > length`.
///
/// # Examples
///
/// ```
/// use idxsort::range::{RangeErrorKind, ensure_from_to};
///
/// assert!(ensure_from_to(10, 2, 10).is_ok());
/// assert_eq!(
///     ensure_from_to(10, 3, 2).unwrap_err().kind(),
///     RangeErrorKind::InvalidArgument
/// );
/// ```
pub fn ensure_from_to(length: isize, from: isize, to: isize) -> Result<(), RangeError> {
    if from < 0 {
        return Err(RangeError::NegativeStart(from));
    }
    if from > to {
        return Err(RangeError::StartAfterEnd { from, to });
    }
    if to > length {
        return Err(RangeError::EndPastLength { to, length });
    }
    Ok(())
}

/// Checks that `count` positions starting at `offset` fit a structure of `length` positions.
///
/// # Errors
///
/// - [`RangeError::NegativeOffset`] if `offset < 0`.
/// - [`RangeError::NegativeLength`] if `count < 0`.
/// - [`RangeError::LastPastLength`] if `offset + count > length`.
pub fn ensure_offset_length(length: isize, offset: isize, count: isize) -> Result<(), RangeError> {
    if offset < 0 {
        return Err(RangeError::NegativeOffset(offset));
    }
    if count < 0 {
        return Err(RangeError::NegativeLength(count));
    }
    match offset.checked_add(count) {
        Some(last) if last <= length => Ok(()),
        _ => Err(RangeError::LastPastLength {
            offset,
            count,
            length,
        }),
    }
}

/// Validates a `usize` range against a collection length, as the `*_range` sort entry points do.
///
/// `from` and `to` past `isize::MAX` are rejected with [`RangeError::PositionTooLarge`]. A length
/// past `isize::MAX` is clamped, which cannot change the outcome once `to` fits an `isize`.
pub(crate) fn check_bounds(length: usize, from: usize, to: usize) -> Result<(), RangeError> {
    let from = isize::try_from(from).map_err(|_| RangeError::PositionTooLarge(from))?;
    let to = isize::try_from(to).map_err(|_| RangeError::PositionTooLarge(to))?;
    let length = isize::try_from(length).unwrap_or(isize::MAX);
    ensure_from_to(length, from, to)
}
