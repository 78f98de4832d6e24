use alloc::vec::Vec;

use crate::{EncodeError, EncodeResult};

/// Type identifier of a track chunk, `"MTrk"`
pub const TRACK_TYPE: [u8; 4] = *b"MTrk";

/// The end-of-track meta event closing every track chunk
pub const END_OF_TRACK: [u8; 4] = [0x00, 0xFF, 0x2F, 0x00];

/// Wrap event bytes in a track chunk and close it with [`END_OF_TRACK`].
///
/// The length field covers `contents` and the end-of-track event. The
/// contents are copied as is; nothing checks that they are well-formed
/// events.
///
/// # Errors
/// [`EncodeError::TrackTooLong`] if the chunk body would not fit a 32-bit length
pub fn track(contents: &[u8]) -> EncodeResult<Vec<u8>> {
    let mut out = Vec::with_capacity(TRACK_TYPE.len() + 4 + contents.len() + END_OF_TRACK.len());
    track_into(contents, &mut out)?;
    Ok(out)
}

pub(crate) fn track_into(contents: &[u8], buf: &mut Vec<u8>) -> EncodeResult<()> {
    let len = contents
        .len()
        .checked_add(END_OF_TRACK.len())
        .and_then(|len| u32::try_from(len).ok())
        .ok_or(EncodeError::TrackTooLong(contents.len()))?;

    buf.extend_from_slice(&TRACK_TYPE);
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(contents);
    buf.extend_from_slice(&END_OF_TRACK);
    Ok(())
}

#[test]
fn empty_track() {
    use pretty_assertions::assert_eq;
    assert_eq!(
        track(&[]).unwrap(),
        [0x4D, 0x54, 0x72, 0x6B, 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00]
    );
}

#[test]
fn track_length_counts_end_of_track() {
    let contents = [0x00, 0xC0, 0x05];
    let chunk = track(&contents).unwrap();
    assert_eq!(chunk.len(), 8 + contents.len() + 4);
    assert_eq!(chunk[4..8], 7u32.to_be_bytes());
    assert_eq!(chunk[8..11], contents);
    assert_eq!(chunk[11..], END_OF_TRACK);
}
