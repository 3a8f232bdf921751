//! Stream framing: a fixed-width hex length prefix in front of every message,
//! so a byte-stream transport (as opposed to a datagram one) can tell where
//! one message ends and the next begins.

use crate::cursor::Cursor;
use crate::digits::{hex_value, is_hex, HEX_CHARS};
use crate::error::{Error, Result};

/// Bytes occupied by the frame header: 4 hex digits plus a newline.
pub const HEADER_LEN: usize = 5;

/// Largest frame (header + body) this format can express in a 4-hex-digit
/// length.
pub const MAX_FRAME_LEN: usize = 0xFFFF;

/// Writes the frame header in place.
///
/// The caller has already written the body, including a placeholder at
/// `buf[0..4]`, a newline at `buf[4]`, and a terminating newline at
/// `buf[buf.len() - 1]`. This overwrites `buf[0..4]` with the big-endian
/// hex length of the whole buffer.
pub fn frame(buf: &mut [u8]) -> Result<()> {
    let len = buf.len();
    if !(HEADER_LEN + 1..=MAX_FRAME_LEN).contains(&len) {
        return Err(Error::BadFrameHeader);
    }
    if buf[4] != b'\n' || buf[len - 1] != b'\n' {
        return Err(Error::BadFrameHeader);
    }
    write_fixed_hex(len as u32, &mut buf[0..4]);
    Ok(())
}

/// Outcome of attempting to strip one frame off the front of a byte stream.
pub enum Unframed<'a> {
    /// Fewer bytes are buffered than the frame claims to need; the caller
    /// should read more and retry.
    NeedMoreData,
    /// A complete frame was found. `frame_len` is the number of bytes (from
    /// the start of `buf`) this message occupied, so the caller can advance
    /// its read position past it.
    Message { cursor: Cursor<'a>, frame_len: usize },
}

/// Parses a frame header off the front of `buf` and, if the full frame is
/// present, initializes a cursor over its body.
pub fn unframe(buf: &mut [u8]) -> Result<Unframed<'_>> {
    if buf.len() < HEADER_LEN {
        return Ok(Unframed::NeedMoreData);
    }
    if buf[4] != b'\n' {
        return Err(Error::BadFrameHeader);
    }
    let length = {
        let mut header = &buf[0..4];
        parse_fixed_hex(&mut header)? as usize
    };
    if length > buf.len() {
        return Ok(Unframed::NeedMoreData);
    }
    let cursor = Cursor::init(&mut buf[HEADER_LEN..length])?;
    Ok(Unframed::Message {
        cursor,
        frame_len: length,
    })
}

fn write_fixed_hex(value: u32, out: &mut [u8]) {
    for (i, slot) in out.iter_mut().enumerate() {
        let shift = (3 - i) * 4;
        *slot = HEX_CHARS[((value >> shift) & 0xf) as usize];
    }
}

fn parse_fixed_hex(data: &mut &[u8]) -> Result<u32> {
    let mut value: u32 = 0;
    for _ in 0..4 {
        let (&b, rest) = data.split_first().ok_or(Error::BadFrameHeader)?;
        if !is_hex(b) {
            return Err(Error::BadFrameHeader);
        }
        value = (value << 4) | hex_value(b) as u32;
        *data = rest;
    }
    Ok(value)
}
