//! Library error types.
use std::fmt;

/// A sipc-codec `Result`, normally returning a sipc-codec [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A sipc-codec error. Encompasses any issues that can happen while parsing a
/// message, pulling a typed value out of an atom, or formatting one back to
/// wire form.
///
/// The codec never logs or retries on its own behalf; every error is handed
/// straight back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A hex digit was expected but the byte at the cursor wasn't one.
    InvalidHexDigit,
    /// A hex-encoded number used a leading zero (e.g. `01`), which the
    /// canonical form forbids.
    LeadingZero,
    /// A real number's significand overflowed 64 bits in a way the exponent
    /// field could not absorb (the biased exponent itself overflowed `i32`).
    ExponentOverflow,
    /// A real with an exponent had a significand whose low bit was clear,
    /// which the canonical form forbids (it should have been shifted into
    /// the exponent instead).
    NonCanonicalSignificand,
    /// A real without an exponent was either zero-with-negate or had a zero
    /// low byte, both of which the canonical form forbids.
    NonCanonicalReal,
    /// A negative zero integer (`-0`) was parsed; this is not representable.
    NegativeZero,
    /// The expected atom separator (a single ASCII space) was missing.
    MissingSeparator,
    /// A sized atom (string/bytes/reference) used the wrong delimiter byte
    /// after its hex size.
    BadDelimiter,
    /// A sized atom's declared length ran past the end of the buffer, or
    /// left no room for the trailing sentinel.
    SizeOutOfBounds,
    /// The next atom's tag did not match the typed accessor that was called.
    UnexpectedTag,
    /// A value parsed correctly but did not fit in the accessor's target type.
    RangeOverflow,
    /// A container was nested more than 16 levels deep.
    DepthExceeded,
    /// A container's closing delimiter didn't match its opening delimiter
    /// (e.g. an array opened with `[` closed with `}`).
    MismatchedContainer,
    /// `END` (or a bare `\n`/NUL) was encountered while still inside a
    /// container that expected a matching close.
    UnexpectedEnd,
    /// The message-kind byte at the start of a message was not printable
    /// ASCII, or the buffer was empty.
    BadMessageKind,
    /// The buffer handed to [`crate::cursor::Cursor::init`] did not end in
    /// a newline, or was too short to contain one.
    UnterminatedBuffer,
    /// The frame header's length digits were not valid hex, or the fifth
    /// byte was not a newline.
    BadFrameHeader,
    /// An unrecognized `%` placeholder was used in a format string.
    UnknownFormatSpecifier,
    /// A format string called for more arguments than were supplied, or the
    /// next argument's variant didn't match the placeholder's expected kind.
    FormatArgMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidHexDigit => write!(f, "expected a hex digit (0-9, a-f)"),
            Error::LeadingZero => write!(f, "hex number has a disallowed leading zero"),
            Error::ExponentOverflow => write!(f, "real number's exponent overflowed"),
            Error::NonCanonicalSignificand => write!(
                f,
                "real with exponent must have its significand's low bit set"
            ),
            Error::NonCanonicalReal => write!(
                f,
                "real without exponent must be zero or have a non-zero low byte"
            ),
            Error::NegativeZero => write!(f, "negative zero integer is not representable"),
            Error::MissingSeparator => write!(f, "expected atom separator (space)"),
            Error::BadDelimiter => write!(f, "sized atom used an unrecognized delimiter"),
            Error::SizeOutOfBounds => {
                write!(f, "sized atom's declared length runs past the buffer")
            }
            Error::UnexpectedTag => write!(f, "next atom did not have the expected tag"),
            Error::RangeOverflow => write!(f, "value does not fit in the requested type"),
            Error::DepthExceeded => {
                write!(f, "container nesting exceeded the maximum depth of 16")
            }
            Error::MismatchedContainer => write!(f, "container close did not match its open"),
            Error::UnexpectedEnd => write!(f, "message ended while inside an open container"),
            Error::BadMessageKind => {
                write!(f, "message-kind byte is missing or not printable ASCII")
            }
            Error::UnterminatedBuffer => write!(f, "buffer is not newline-terminated"),
            Error::BadFrameHeader => write!(f, "frame length header is malformed"),
            Error::UnknownFormatSpecifier => write!(f, "unknown % specifier in format string"),
            Error::FormatArgMismatch => {
                write!(f, "format argument missing or of the wrong kind")
            }
        }
    }
}

impl std::error::Error for Error {}
