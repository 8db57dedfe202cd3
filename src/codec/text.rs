use crate::codec::encodable::Encodable;
use crate::codec::sequence::COUNT_PREFIX_LEN;
use crate::internal::error::{Error, Result};
use bytes::Bytes;

/// Reads a u32 length-prefixed payload, returning the payload slice and the
/// total bytes consumed (prefix + payload).
///
/// Applies the same sanity rule as the sequence codec to the raw byte
/// count: a prefix whose implied payload exceeds the remaining input fails
/// as truncation before anything is copied.
fn read_payload(buf: &[u8]) -> Result<(&[u8], usize)> {
    let (len, prefix) = u32::read(buf)?;
    let len = len as usize;

    let needed = prefix.saturating_add(len);
    if needed > buf.len() {
        return Err(Error::TruncatedInput {
            needed,
            available: buf.len(),
        });
    }

    Ok((&buf[prefix..needed], needed))
}

/// Text codec over raw bytes: a u32 little-endian byte count followed by
/// the payload copied verbatim. No character-encoding validation or
/// transcoding happens here.
impl Encodable for Bytes {
    const MIN_WIRE_SIZE: usize = COUNT_PREFIX_LEN;

    fn encoded_size(&self) -> usize {
        COUNT_PREFIX_LEN + self.len()
    }

    fn write(&self, buf: &mut Vec<u8>) {
        (self.len() as u32).write(buf);
        buf.extend_from_slice(self);
    }

    fn read(buf: &[u8]) -> Result<(Self, usize)> {
        let (payload, read) = read_payload(buf)?;
        Ok((Bytes::copy_from_slice(payload), read))
    }
}

/// Text codec over `String`: identical wire layout to [`Bytes`].
///
/// `String` carries a UTF-8 invariant, so the read path has to validate the
/// payload before constructing the value; invalid payloads fail with
/// [`Error::InvalidText`]. Callers that want payloads passed through
/// untouched decode into `Bytes` instead.
impl Encodable for String {
    const MIN_WIRE_SIZE: usize = COUNT_PREFIX_LEN;

    fn encoded_size(&self) -> usize {
        COUNT_PREFIX_LEN + self.len()
    }

    fn write(&self, buf: &mut Vec<u8>) {
        (self.len() as u32).write(buf);
        buf.extend_from_slice(self.as_bytes());
    }

    fn read(buf: &[u8]) -> Result<(Self, usize)> {
        let (payload, read) = read_payload(buf)?;
        let text = std::str::from_utf8(payload)?;
        Ok((text.to_owned(), read))
    }
}
