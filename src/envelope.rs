//! Message envelope: the single leading kind byte plus [`Cursor::peek_kind`]/
//! [`Cursor::start`]/[`Cursor::end`] helpers built on it.

use crate::cursor::Cursor;
use crate::error::{Error, Result};

/// The kind of a message, carried in its first byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    /// `R` — a request.
    Request,
    /// `S` — a successful reply.
    Success,
    /// `E` — an error reply.
    ErrorReply,
    /// `W` — carries an OS handle/file-descriptor value as a plain unsigned
    /// integer atom. Transferring the underlying handle (`SCM_RIGHTS`,
    /// `DuplicateHandle`) is a transport-layer concern this codec does not
    /// perform; it only round-trips the integer.
    HandleCarrier,
}

impl MessageKind {
    fn from_byte(byte: u8) -> Result<MessageKind> {
        match byte {
            b'R' => Ok(MessageKind::Request),
            b'S' => Ok(MessageKind::Success),
            b'E' => Ok(MessageKind::ErrorReply),
            b'W' => Ok(MessageKind::HandleCarrier),
            _ => Err(Error::BadMessageKind),
        }
    }

    /// The wire byte for this kind.
    pub fn to_byte(self) -> u8 {
        match self {
            MessageKind::Request => b'R',
            MessageKind::Success => b'S',
            MessageKind::ErrorReply => b'E',
            MessageKind::HandleCarrier => b'W',
        }
    }
}

impl<'a> Cursor<'a> {
    /// Returns the message-kind byte without consuming it. Errors if the
    /// buffer is empty or its first byte is not printable ASCII (matching
    /// the reference implementation's `*p->next > ' '` guard, which also
    /// rejects a stray leading `\n`/NUL).
    pub fn peek_kind(&self) -> Result<MessageKind> {
        match self.remaining().first() {
            Some(&b) if b > b' ' => MessageKind::from_byte(b),
            _ => Err(Error::BadMessageKind),
        }
    }

    /// As [`Cursor::peek_kind`], but also advances past the kind byte so the
    /// next [`Cursor::next`]/[`Cursor::any`] call sees the payload's leading
    /// separator.
    pub fn start(&mut self) -> Result<MessageKind> {
        let kind = self.peek_kind()?;
        self.advance_kind_byte();
        Ok(kind)
    }

    /// Drains every remaining atom until `END`. Useful for skipping a
    /// message whose contents are irrelevant to the caller.
    pub fn end(&mut self) -> Result<()> {
        loop {
            if self.any()? == crate::atom::Atom::End {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_every_kind() {
        for (byte, kind) in [
            (b'R', MessageKind::Request),
            (b'S', MessageKind::Success),
            (b'E', MessageKind::ErrorReply),
            (b'W', MessageKind::HandleCarrier),
        ] {
            let mut buf = vec![byte, b'\n'];
            let mut c = Cursor::init(&mut buf).unwrap();
            assert_eq!(c.peek_kind().unwrap(), kind);
            assert_eq!(c.start().unwrap(), kind);
            assert!(c.is_at_end());
            assert_eq!(kind.to_byte(), byte);
        }
    }

    #[test]
    fn rejects_unprintable_kind_byte() {
        let mut buf = vec![b'\t', b'\n'];
        let mut c = Cursor::init(&mut buf).unwrap();
        assert_eq!(c.peek_kind(), Err(Error::BadMessageKind));
    }

    #[test]
    fn rejects_unknown_kind_letter() {
        let mut buf = vec![b'Q', b'\n'];
        let mut c = Cursor::init(&mut buf).unwrap();
        assert_eq!(c.peek_kind(), Err(Error::BadMessageKind));
    }

    #[test]
    fn end_drains_remaining_atoms() {
        let mut buf = b"R 3:cmd -123\n".to_vec();
        let mut c = Cursor::init(&mut buf).unwrap();
        c.start().unwrap();
        c.end().unwrap();
        assert!(c.is_at_end());
    }
}
