#![doc = r#"
Variable-length quantities, the encoding of every delta time in a MIDI track.

A quantity is split into 7-bit groups, most significant group first. Every
byte but the last has its high bit (`0x80`) set. MIDI limits delta times to
four bytes, so the largest encodable value is [`MAX_VALUE`] (`0x0FFFFFFF`).

| Value        | Bytes             |
|--------------|-------------------|
| `0x00`       | `00`              |
| `0x7F`       | `7F`              |
| `0x80`       | `81 00`           |
| `0x3FFF`     | `FF 7F`           |
| `0x100000`   | `C0 80 00`        |
| `0x0FFFFFFF` | `FF FF FF 7F`     |
"#]

use alloc::vec::Vec;

use crate::VlqError;

/// The largest value a 4-byte variable-length quantity can hold.
pub const MAX_VALUE: u32 = 0x0FFF_FFFF;

/// The maximum number of bytes in a MIDI variable-length quantity
pub const MAX_LEN: usize = 4;

const CONTINUE: u8 = 0x80;

/// Encode `value` as a minimal-length variable-length quantity.
///
/// # Errors
/// [`VlqError::Overflow`] if `value` is greater than [`MAX_VALUE`]
pub fn encode(value: u32) -> Result<Vec<u8>, VlqError> {
    let mut out = Vec::with_capacity(encoded_len(value));
    encode_into(value, &mut out)?;
    Ok(out)
}

/// Append the encoding of `value` to `buf`.
///
/// `buf` is left untouched on error.
pub fn encode_into(value: u32, buf: &mut Vec<u8>) -> Result<(), VlqError> {
    if value > MAX_VALUE {
        return Err(VlqError::Overflow(value));
    }
    let len = encoded_len(value);
    let mut bytes = [0u8; MAX_LEN];
    let mut rest = value;
    for i in (0..len).rev() {
        bytes[i] = (rest & 0x7F) as u8;
        if i != len - 1 {
            bytes[i] |= CONTINUE;
        }
        rest >>= 7;
    }
    buf.extend_from_slice(&bytes[..len]);
    Ok(())
}

/// Number of bytes the minimal encoding of `value` takes.
///
/// Values above [`MAX_VALUE`] report the length they would need, even though
/// [`encode`] refuses them.
pub const fn encoded_len(value: u32) -> usize {
    match value {
        0..0x80 => 1,
        0x80..0x4000 => 2,
        0x4000..0x20_0000 => 3,
        0x20_0000..0x1000_0000 => 4,
        _ => 5,
    }
}

/// Decode a complete variable-length quantity.
///
/// An empty slice decodes to 0.
///
/// # Errors
/// - [`VlqError::TooLong`] if more than four bytes are given
/// - [`VlqError::Unterminated`] if the last byte has its continuation bit set
/// - [`VlqError::TrailingBytes`] if a byte before the last one is missing its continuation bit
pub fn decode(bytes: &[u8]) -> Result<u32, VlqError> {
    if bytes.is_empty() {
        return Ok(0);
    }
    if bytes.len() > MAX_LEN {
        return Err(VlqError::TooLong(bytes.len()));
    }
    let (value, read) = read(bytes)?;
    if read != bytes.len() {
        return Err(VlqError::TrailingBytes(read));
    }
    Ok(value)
}

/// Read one variable-length quantity from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed. Anything after the
/// quantity is left alone, which makes this the primitive for walking a
/// track's events.
pub fn read(bytes: &[u8]) -> Result<(u32, usize), VlqError> {
    let mut value: u32 = 0;
    for (i, byte) in bytes.iter().enumerate() {
        if i == MAX_LEN {
            return Err(VlqError::TooLong(i + 1));
        }
        value = (value << 7) | u32::from(byte & 0x7F);
        if byte & CONTINUE == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(VlqError::Unterminated)
}

#[test]
fn encodes_known_values() {
    use pretty_assertions::assert_eq;
    assert_eq!(encode(0).unwrap(), [0x00]);
    assert_eq!(encode(0x40).unwrap(), [0x40]);
    assert_eq!(encode(0x7F).unwrap(), [0x7F]);
    assert_eq!(encode(0x80).unwrap(), [0x81, 0x00]);
    assert_eq!(encode(0x2000).unwrap(), [0xC0, 0x00]);
    assert_eq!(encode(0x3FFF).unwrap(), [0xFF, 0x7F]);
    assert_eq!(encode(0x4000).unwrap(), [0x81, 0x80, 0x00]);
    assert_eq!(encode(0x10_0000).unwrap(), [0xC0, 0x80, 0x00]);
    assert_eq!(encode(0x1F_FFFF).unwrap(), [0xFF, 0xFF, 0x7F]);
    assert_eq!(encode(0x20_0000).unwrap(), [0x81, 0x80, 0x80, 0x00]);
    assert_eq!(encode(MAX_VALUE).unwrap(), [0xFF, 0xFF, 0xFF, 0x7F]);
}

#[test]
fn rejects_values_needing_a_fifth_byte() {
    assert_eq!(encode(0x1000_0000), Err(VlqError::Overflow(0x1000_0000)));
    assert_eq!(encode(u32::MAX), Err(VlqError::Overflow(u32::MAX)));

    let mut buf = alloc::vec![0xAA];
    assert!(encode_into(0x1000_0000, &mut buf).is_err());
    assert_eq!(buf, [0xAA]);
}

#[test]
fn decodes_and_validates() {
    assert_eq!(decode(&[]), Ok(0));
    assert_eq!(decode(&[0x00]), Ok(0));
    assert_eq!(decode(&[0x81, 0x00]), Ok(0x80));
    assert_eq!(decode(&[0xC0, 0x80, 0x00]), Ok(0x10_0000));
    assert_eq!(decode(&[0xFF, 0xFF, 0xFF, 0x7F]), Ok(MAX_VALUE));

    assert_eq!(decode(&[0x81]), Err(VlqError::Unterminated));
    assert_eq!(decode(&[0x81, 0x80]), Err(VlqError::Unterminated));
    assert_eq!(decode(&[0x00, 0x00]), Err(VlqError::TrailingBytes(1)));
    assert_eq!(decode(&[0x81, 0x80, 0x80, 0x80, 0x00]), Err(VlqError::TooLong(5)));
}

#[test]
fn read_stops_at_the_last_byte() {
    let bytes = [0x83, 0x60, 0x90, 0x3C];
    assert_eq!(read(&bytes), Ok((0x1E0, 2)));
    assert_eq!(read(&[0x81, 0x80, 0x80, 0x80, 0x00]), Err(VlqError::TooLong(5)));
    assert_eq!(read(&[]), Err(VlqError::Unterminated));
}

#[test]
fn lengths_match_encoding() {
    for value in [0, 1, 0x7F, 0x80, 0x3FFF, 0x4000, 0x1F_FFFF, 0x20_0000, MAX_VALUE] {
        assert_eq!(encoded_len(value), encode(value).unwrap().len());
    }
    assert_eq!(encoded_len(MAX_VALUE + 1), 5);
}
