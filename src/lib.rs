// Fulmen library entry point

pub mod codec;
pub mod internal;

pub use codec::{decode, encode, encode_into, encoded_size, Encodable};
pub use internal::error::{Error, Result};
