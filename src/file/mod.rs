#![doc = r#"
Assembly of complete Standard MIDI Files.

A file written here is a header chunk immediately followed by a single
track chunk holding the caller's events:

```rust
# use midiscribe::prelude::*;
let contents = note(60, 100, 96, 0, 0)?;
let bytes = file(HeaderChunkMode::SingleTrack, &contents, DEFAULT_DIVISION)?;

assert_eq!(bytes.len(), 14 + 8 + contents.len() + 4);
assert_eq!(&bytes[..4], b"MThd");
assert_eq!(&bytes[14..18], b"MTrk");
assert_eq!(&bytes[bytes.len() - 4..], [0x00, 0xFF, 0x2F, 0x00]);
# Ok::<(), EncodeError>(())
```
"#]

/// Chunk writers and their constants
pub mod chunk;
pub use chunk::{header_chunk, track};

mod format;
pub use format::*;

use alloc::vec::Vec;

use crate::EncodeResult;

/// Ticks per quarter note used when no other division is chosen (96).
///
/// 96 divides evenly into sixty-fourth notes and into triplets down to the
/// thirty-second.
pub const DEFAULT_DIVISION: u16 = 0x60;

/// Return a complete, playable MIDI file holding `contents` as its only track.
///
/// `contents` is any concatenation of encoder output, such as
/// [`note`](crate::event::note), [`chord`](crate::chord::chord),
/// [`program_change`](crate::event::program_change) and
/// [`tempo`](crate::event::tempo).
///
/// # Errors
/// [`EncodeError::TrackTooLong`](crate::EncodeError::TrackTooLong) if the track does not fit a chunk
pub fn file(mode: HeaderChunkMode, contents: &[u8], division: u16) -> EncodeResult<Vec<u8>> {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        "writing format {} file: {} track(s), division {division}, {} event bytes",
        mode.format_type() as u16,
        mode.num_tracks(),
        contents.len()
    );

    let mut out = header_chunk(mode, division);
    out.reserve(8 + contents.len() + chunk::END_OF_TRACK.len());
    chunk::track_into(contents, &mut out)?;
    Ok(out)
}

#[test]
fn single_track_file() {
    use pretty_assertions::assert_eq;
    let contents = [0x00, 0xC0, 0x05];
    let bytes = file(HeaderChunkMode::SingleTrack, &contents, DEFAULT_DIVISION).unwrap();
    assert_eq!(
        bytes,
        [
            0x4D, 0x54, 0x68, 0x64, 0, 0, 0, 6, 0, 0, 0, 1, 0, 0x60, // header
            0x4D, 0x54, 0x72, 0x6B, 0, 0, 0, 7, // track header
            0x00, 0xC0, 0x05, // program change
            0x00, 0xFF, 0x2F, 0x00, // end of track
        ]
    );
}

#[test]
fn file_is_header_then_track() {
    let contents = [0x00, 0x90, 60, 100, 0x60, 0x90, 60, 0];
    let mode = HeaderChunkMode::SimultaneousTracks(2);
    let bytes = file(mode, &contents, 480).unwrap();
    let mut expected = header_chunk(mode, 480);
    expected.extend(track(&contents).unwrap());
    assert_eq!(bytes, expected);
}
