//! Enumeration codec: a fieldless enum travels on the wire as its declared
//! underlying fixed-width integer, and every decoded integer is checked
//! against the declared discriminant list. Reinterpreting an arbitrary
//! integer as an enumeration value is not an option this codec offers.

/// Declares a fieldless enumeration with an explicit underlying integer
/// representation and explicit discriminant values, and implements
/// [`Encodable`](crate::codec::Encodable) for it by delegating to the
/// primitive codec over that representation.
///
/// ```
/// fulmen::encodable_enum! {
///     /// Status byte carried in a reply.
///     pub enum ReplyStatus: u8 {
///         Ok = 0,
///         Rejected = 1,
///     }
/// }
/// ```
///
/// The generated `read` fails with
/// [`Error::InvalidDiscriminant`](crate::internal::error::Error::InvalidDiscriminant)
/// when the decoded integer matches none of the declared values.
#[macro_export]
macro_rules! encodable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $( $(#[$variant_meta:meta])* $variant:ident = $value:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant = $value ),+
        }

        impl $crate::codec::Encodable for $name {
            const MIN_WIRE_SIZE: usize = ::std::mem::size_of::<$repr>();

            fn encoded_size(&self) -> usize {
                ::std::mem::size_of::<$repr>()
            }

            fn write(&self, buf: &mut ::std::vec::Vec<u8>) {
                $crate::codec::Encodable::write(&(*self as $repr), buf);
            }

            fn read(buf: &[u8]) -> $crate::internal::error::Result<(Self, usize)> {
                let (raw, read) = <$repr as $crate::codec::Encodable>::read(buf)?;
                $(
                    if raw == $name::$variant as $repr {
                        return Ok(($name::$variant, read));
                    }
                )+
                Err($crate::internal::error::Error::InvalidDiscriminant {
                    value: raw as u64,
                    enumeration: stringify!($name),
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::codec::{decode, encode, encoded_size};
    use crate::internal::error::Error;

    crate::encodable_enum! {
        enum Flavor: u16 {
            Plain = 0,
            Salted = 10,
            Smoked = 300,
        }
    }

    #[test]
    fn test_enum_encodes_as_underlying_integer() {
        let buf = encode(&Flavor::Smoked);
        assert_eq!(buf, vec![0x2C, 0x01]);
        assert_eq!(encoded_size(&Flavor::Plain), 2);
    }

    #[test]
    fn test_enum_round_trip() {
        for flavor in [Flavor::Plain, Flavor::Salted, Flavor::Smoked] {
            assert_eq!(decode::<Flavor>(&encode(&flavor)).unwrap(), (flavor, 2));
        }
    }

    #[test]
    fn test_invalid_discriminant_rejected() {
        let buf = encode(&11u16);
        assert_eq!(
            decode::<Flavor>(&buf),
            Err(Error::InvalidDiscriminant {
                value: 11,
                enumeration: "Flavor",
            })
        );
    }

    #[test]
    fn test_truncated_enum() {
        assert_eq!(
            decode::<Flavor>(&[0x0A]),
            Err(Error::TruncatedInput {
                needed: 2,
                available: 1
            })
        );
    }
}
