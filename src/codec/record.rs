//! Aggregate codec: a record's wire form is the concatenation of its
//! declared fields' encodings, in declared order, with no padding. The
//! field list is stated once, at the type's declaration; size, write, and
//! read all fold over that same list, so they cannot drift apart.

/// Declares a record struct and implements
/// [`Encodable`](crate::codec::Encodable) for it over its declared field
/// order.
///
/// ```
/// fulmen::encodable_enum! {
///     pub enum Compass: u8 { North = 0, South = 1 }
/// }
///
/// fulmen::encodable_record! {
///     /// A position report.
///     pub struct Report {
///         pub seq: u32,
///         pub heading: Compass,
///     }
/// }
///
/// let buf = fulmen::encode(&Report { seq: 7, heading: Compass::South });
/// assert_eq!(buf, vec![7, 0, 0, 0, 1]);
/// ```
///
/// Fields may be primitives, sequences, text, enumerations, or other
/// records; decoding reads each field from the same advancing cursor and
/// assembles the struct from the fully-decoded values, so nesting needs no
/// special handling. The macro derives `Debug`, `Clone`, and `PartialEq`
/// on the declared struct.
#[macro_export]
macro_rules! encodable_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$field_meta:meta])* $field_vis:vis $field:ident : $ty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $( $(#[$field_meta])* $field_vis $field: $ty, )+
        }

        impl $crate::codec::Encodable for $name {
            const MIN_WIRE_SIZE: usize =
                0 $( + <$ty as $crate::codec::Encodable>::MIN_WIRE_SIZE )+;

            fn encoded_size(&self) -> usize {
                0 $( + $crate::codec::Encodable::encoded_size(&self.$field) )+
            }

            fn write(&self, buf: &mut ::std::vec::Vec<u8>) {
                $( $crate::codec::Encodable::write(&self.$field, buf); )+
            }

            fn read(buf: &[u8]) -> $crate::internal::error::Result<(Self, usize)> {
                let mut read = 0usize;
                $(
                    let ($field, used) =
                        <$ty as $crate::codec::Encodable>::read(&buf[read..])?;
                    read += used;
                )+
                Ok(($name { $( $field ),+ }, read))
            }
        }
    };
}
