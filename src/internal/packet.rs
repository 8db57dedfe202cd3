//! Packet definitions for the Fulmen connection handshake. These are plain
//! data declarations: all encoding behavior comes from the codec macros,
//! which fold the wire format over the declared fields.

/// Identifier carried by every packet.
pub type PacketId = u64;

crate::encodable_enum! {
    /// Discriminates what the packet carries. One byte on the wire.
    pub enum PacketKind: u8 {
        /// Opens a connection.
        Connect = 1,
    }
}

crate::encodable_record! {
    /// Leading record of every packet: the packet identifier followed by
    /// the kind discriminant. Nine unpadded bytes on the wire.
    pub struct PacketHeader {
        pub id: PacketId,
        pub kind: PacketKind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode, encoded_size};
    use crate::internal::error::Error;

    #[test]
    fn test_header_wire_layout() {
        // Scenario: {id: 3, kind: Connect} is eight id bytes plus the
        // discriminant, little-endian, no padding.
        let header = PacketHeader {
            id: 3,
            kind: PacketKind::Connect,
        };
        let buf = encode(&header);
        assert_eq!(buf, vec![3, 0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(encoded_size(&header), 9);
        assert_eq!(decode::<PacketHeader>(&buf).unwrap(), (header, 9));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let mut buf = encode(&7u64);
        buf.push(0xAA);
        assert_eq!(
            decode::<PacketHeader>(&buf),
            Err(Error::InvalidDiscriminant {
                value: 0xAA,
                enumeration: "PacketKind",
            })
        );
    }

    #[test]
    fn test_truncated_header() {
        let buf = encode(&PacketHeader {
            id: u64::MAX,
            kind: PacketKind::Connect,
        });
        assert_eq!(
            decode::<PacketHeader>(&buf[..8]),
            Err(Error::TruncatedInput {
                needed: 1,
                available: 0
            })
        );
    }
}
