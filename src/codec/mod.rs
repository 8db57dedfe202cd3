// Codec module for the Fulmen wire format.
//
// Wire layout summary:
//   fixed-width integer  N little-endian bytes
//   sequence of T        u32 LE element count, then each element's encoding
//   text                 u32 LE byte count, then raw bytes verbatim
//   enumeration          its declared underlying fixed-width integer
//   record               each declared field's encoding, in order, unpadded

pub mod encodable;
pub mod enumeration;
pub mod order;
pub mod primitive;
pub mod record;
pub mod sequence;
pub mod text;

pub use encodable::Encodable;

use crate::internal::error::Result;

/// Returns the exact number of bytes `encode` would produce for `value`.
pub fn encoded_size<T: Encodable>(value: &T) -> usize {
    value.encoded_size()
}

/// Encodes `value` into a freshly allocated buffer sized up front via
/// [`encoded_size`].
pub fn encode<T: Encodable>(value: &T) -> Vec<u8> {
    let mut buf = Vec::with_capacity(value.encoded_size());
    value.write(&mut buf);
    buf
}

/// Appends the encoding of `value` to a caller-supplied buffer.
pub fn encode_into<T: Encodable>(value: &T, buf: &mut Vec<u8>) {
    value.write(buf);
}

/// Decodes a value of type `T` from the front of `buf`.
///
/// Returns the value together with the number of bytes consumed so callers
/// can advance a shared cursor before the next decode.
pub fn decode<T: Encodable>(buf: &[u8]) -> Result<(T, usize)> {
    T::read(buf)
}
