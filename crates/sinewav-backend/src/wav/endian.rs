//! Little-endian field encoders.
//!
//! Both encoders keep only the low-order bits of their input. A value too
//! large for the field wraps around exactly as fixed-width two's-complement
//! storage would; no error is raised.

use byteorder::{ByteOrder, LittleEndian};

/// Encodes the low 32 bits of `value` as 4 little-endian bytes.
pub fn encode_le32(value: i64) -> [u8; 4] {
    let mut buf = [0u8; 4];
    LittleEndian::write_u32(&mut buf, value as u32);
    buf
}

/// Encodes the low 16 bits of `value` as 2 little-endian bytes.
pub fn encode_le16(value: i64) -> [u8; 2] {
    let mut buf = [0u8; 2];
    LittleEndian::write_u16(&mut buf, value as u16);
    buf
}
