//! A zero-copy streaming codec for a textual, self-delimiting IPC wire
//! format: tagged atoms (booleans, hex integers, hex/mantissa-exponent
//! reals, sized strings/bytes/references, and nested arrays/maps), a
//! printf-like formatter that inverts the parser, and a fixed-width hex
//! length frame for stream transports.
//!
//! This crate is the codec only. Reading and writing the bytes that make up
//! a frame, and passing the file descriptors/handles a `W`-kind message's
//! payload may refer to, are the caller's problem — see [`Cursor`] and
//! [`format`] for where the boundary sits.
//!
//! ```
//! use sipc_codec::{Cursor, Atom};
//!
//! let mut buf = b"R 3:cmd -123\n".to_vec();
//! let mut cursor = Cursor::init(&mut buf).unwrap();
//! assert_eq!(cursor.start().unwrap().to_byte(), b'R');
//! assert_eq!(cursor.next().unwrap(), Atom::Str(b"cmd"));
//! assert_eq!(cursor.next().unwrap(), Atom::NegativeInt(0x123));
//! assert_eq!(cursor.next().unwrap(), Atom::End);
//! ```

#![allow(dead_code)]

mod atom;
mod cursor;
mod digits;
mod envelope;
mod error;
mod format;
mod frame;
mod real;

pub use atom::{Atom, Tag};
pub use cursor::{Cursor, MAX_DEPTH};
pub use envelope::MessageKind;
pub use error::{Error, Result};
pub use format::{format, Arg, FormatResult, MAX_ATOM_SIZE};
pub use frame::{frame, unframe, Unframed, HEADER_LEN, MAX_FRAME_LEN};
