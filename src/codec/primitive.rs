use crate::codec::encodable::Encodable;
use crate::codec::order;
use crate::internal::error::{Error, Result};
use std::mem;

/// Implements [`Encodable`] for a fixed-width integer type: the encoding is
/// the type's native bytes normalized to wire order, nothing more.
macro_rules! impl_wire_int {
    ($($ty:ty),+ $(,)?) => {$(
        impl Encodable for $ty {
            const MIN_WIRE_SIZE: usize = mem::size_of::<$ty>();

            fn encoded_size(&self) -> usize {
                mem::size_of::<$ty>()
            }

            fn write(&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice(&order::to_wire(self.to_ne_bytes()));
            }

            fn read(buf: &[u8]) -> Result<(Self, usize)> {
                const WIDTH: usize = mem::size_of::<$ty>();
                if buf.len() < WIDTH {
                    return Err(Error::TruncatedInput {
                        needed: WIDTH,
                        available: buf.len(),
                    });
                }
                let mut raw = [0u8; WIDTH];
                raw.copy_from_slice(&buf[..WIDTH]);
                Ok((<$ty>::from_ne_bytes(order::from_wire(raw)), WIDTH))
            }
        }
    )+};
}

impl_wire_int!(u8, u16, u32, u64, i8, i16, i32, i64);
