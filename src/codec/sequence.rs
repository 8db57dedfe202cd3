use crate::codec::encodable::Encodable;
use crate::internal::error::{Error, Result};
use std::mem;

/// Width of the element-count prefix.
pub(crate) const COUNT_PREFIX_LEN: usize = mem::size_of::<u32>();

/// Sequence codec: a u32 little-endian element count followed by each
/// element's encoding concatenated in order.
///
/// Element sizes are summed individually; elements may themselves be
/// variable-size (text, nested sequences, records). Sequences longer than
/// `u32::MAX` elements are unrepresentable on the wire and must not be
/// encoded.
impl<T: Encodable> Encodable for Vec<T> {
    const MIN_WIRE_SIZE: usize = COUNT_PREFIX_LEN;

    fn encoded_size(&self) -> usize {
        let mut size = COUNT_PREFIX_LEN;
        for element in self {
            size += element.encoded_size();
        }
        size
    }

    fn write(&self, buf: &mut Vec<u8>) {
        (self.len() as u32).write(buf);
        for element in self {
            element.write(buf);
        }
    }

    fn read(buf: &[u8]) -> Result<(Self, usize)> {
        let (count, mut read) = u32::read(buf)?;
        let count = count as usize;

        // A corrupt or adversarial count must fail before any allocation:
        // even at the element codec's minimum size, the declared count has
        // to fit in the bytes that remain.
        let floor = count
            .checked_mul(T::MIN_WIRE_SIZE)
            .unwrap_or(usize::MAX)
            .saturating_add(read);
        if floor > buf.len() {
            return Err(Error::TruncatedInput {
                needed: floor,
                available: buf.len(),
            });
        }

        let mut vec = Vec::with_capacity(count);
        for _ in 0..count {
            let (element, used) = T::read(&buf[read..])?;
            read += used;
            vec.push(element);
        }

        Ok((vec, read))
    }
}
