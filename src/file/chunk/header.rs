use alloc::vec::Vec;

use crate::file::HeaderChunkMode;

/// Type identifier of the header chunk, `"MThd"`
pub const HEADER_TYPE: [u8; 4] = *b"MThd";

/// The header chunk's body is always six bytes
pub const HEADER_LENGTH: [u8; 4] = 6u32.to_be_bytes();

/// Size of a complete header chunk
pub const HEADER_CHUNK_LEN: usize = 14;

/// Write a header chunk.
///
/// `division` is the number of ticks in a quarter note, usually
/// [`DEFAULT_DIVISION`](crate::file::DEFAULT_DIVISION). It is written as is;
/// a value with the top bit set is read by players as SMPTE timing.
///
/// On its own this is not a playable file. Use [`file`](crate::file::file)
/// unless you are assembling tracks yourself.
pub fn header_chunk(mode: HeaderChunkMode, division: u16) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_CHUNK_LEN);
    out.extend_from_slice(&HEADER_TYPE);
    out.extend_from_slice(&HEADER_LENGTH);
    out.extend_from_slice(&mode.format_bytes());
    out.extend_from_slice(&mode.num_tracks().to_be_bytes());
    out.extend_from_slice(&division.to_be_bytes());
    out
}

#[test]
fn header_layout() {
    use pretty_assertions::assert_eq;
    assert_eq!(
        header_chunk(HeaderChunkMode::SingleTrack, 0x60),
        [0x4D, 0x54, 0x68, 0x64, 0, 0, 0, 6, 0, 0, 0, 1, 0, 0x60]
    );
    assert_eq!(
        header_chunk(HeaderChunkMode::SimultaneousTracks(0x0102), 0x01E0),
        [0x4D, 0x54, 0x68, 0x64, 0, 0, 0, 6, 0, 1, 1, 2, 0x01, 0xE0]
    );
    assert_eq!(
        header_chunk(HeaderChunkMode::IndependentTracks(4), 24)[8..],
        [0, 2, 0, 4, 0, 24]
    );
}
