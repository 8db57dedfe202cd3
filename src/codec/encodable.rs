use crate::internal::error::Result;

/// The encodable contract: one size/write/read triple per supported type.
///
/// Codec selection is static trait dispatch, so a type without an impl is a
/// compile-time error rather than a runtime surprise mid-encode. Every impl
/// must keep the three operations in agreement:
///
/// * `write` appends exactly `encoded_size` bytes to the buffer;
/// * `read` consumes exactly that many bytes and reconstructs an equal
///   value, reporting the exact count so callers can advance a shared
///   cursor;
/// * `read` never touches bytes past the end of its input; when too few
///   bytes remain it fails with [`Error::TruncatedInput`] and consumes
///   nothing.
///
/// [`Error::TruncatedInput`]: crate::internal::error::Error::TruncatedInput
pub trait Encodable: Sized {
    /// The smallest encoding any value of this type can produce, in bytes.
    ///
    /// Used by length-prefixed codecs to reject a count that could not
    /// possibly fit in the remaining input before allocating for it.
    const MIN_WIRE_SIZE: usize;

    /// Exact number of bytes `write` will append for this value.
    fn encoded_size(&self) -> usize;

    /// Appends this value's wire encoding to `buf`.
    fn write(&self, buf: &mut Vec<u8>);

    /// Decodes a value from the front of `buf`, returning it together with
    /// the number of bytes consumed.
    fn read(buf: &[u8]) -> Result<(Self, usize)>;
}
