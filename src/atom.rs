//! The tagged atom produced by walking a message: [`Atom`] and its coarse
//! [`Tag`] classification.

use crate::cursor::Cursor;

/// The kind of value an [`Atom`] carries, independent of its payload. Useful
/// for error messages and for code that wants to branch on shape before
/// committing to a typed accessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    End,
    Bool,
    PositiveInt,
    NegativeInt,
    Double,
    String,
    Bytes,
    Reference,
    Array,
    Map,
    ArrayEnd,
    MapEnd,
}

/// A single parsed wire atom, borrowed from the buffer it was parsed out of.
///
/// [`Cursor::next`] yields the raw token stream: container opens arrive as
/// the payload-free [`Atom::ArrayOpen`]/[`Atom::MapOpen`], and it is up to
/// the caller to track nesting manually (this is what the internal container
/// scanner does). [`Cursor::any`] is the friendlier entry point: it resolves
/// a container open into a [`Atom::Array`]/[`Atom::Map`] carrying a sub-cursor
/// already bounded to the container's interior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Atom<'a> {
    /// The message's payload is exhausted.
    End,
    Bool(bool),
    /// A non-negative integer.
    PositiveInt(u64),
    /// The magnitude of a negative integer; the sign is implied by the variant.
    NegativeInt(u64),
    Double(f64),
    /// Opaque string bytes. Never validated as UTF-8 (see the crate's
    /// top-level docs on textual atoms).
    Str(&'a [u8]),
    Bytes(&'a [u8]),
    Reference(&'a [u8]),
    /// An array opened but not yet resolved to its interior; only produced
    /// by [`Cursor::next`].
    ArrayOpen,
    /// A map opened but not yet resolved to its interior; only produced by
    /// [`Cursor::next`].
    MapOpen,
    /// An array resolved to a cursor over its interior; only produced by
    /// [`Cursor::any`].
    Array(Cursor<'a>),
    /// A map resolved to a cursor over its interior; only produced by
    /// [`Cursor::any`].
    Map(Cursor<'a>),
    ArrayEnd,
    MapEnd,
}

impl<'a> Atom<'a> {
    /// This atom's coarse tag, collapsing the open/resolved distinction
    /// between the `next`/`any` APIs into a single `Array`/`Map` tag.
    pub fn tag(&self) -> Tag {
        match self {
            Atom::End => Tag::End,
            Atom::Bool(_) => Tag::Bool,
            Atom::PositiveInt(_) => Tag::PositiveInt,
            Atom::NegativeInt(_) => Tag::NegativeInt,
            Atom::Double(_) => Tag::Double,
            Atom::Str(_) => Tag::String,
            Atom::Bytes(_) => Tag::Bytes,
            Atom::Reference(_) => Tag::Reference,
            Atom::ArrayOpen | Atom::Array(_) => Tag::Array,
            Atom::MapOpen | Atom::Map(_) => Tag::Map,
            Atom::ArrayEnd => Tag::ArrayEnd,
            Atom::MapEnd => Tag::MapEnd,
        }
    }
}
