//! Opaque keyset pagination cursors.
//!
//! A cursor token is the standard base64 encoding of
//! `"<uuid>;<serial>;<direction-code>"`. The format is stable: tokens issued
//! by earlier builds must keep decoding.

pub mod codec;
pub mod cursor;
pub mod direction;

pub use codec::{decode, encode, SEPARATOR};
pub use cursor::Cursor;
pub use direction::Direction;
