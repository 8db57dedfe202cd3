// Internal module for error handling and packet definitions

pub mod error;
pub mod packet;
