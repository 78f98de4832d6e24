#![doc = r#"
Byte-exact Standard MIDI File encoding.

`midiscribe` turns notes, chords, program changes and tempo changes into
the raw bytes of a Standard MIDI File (SMF). Every encoder returns a plain
`Vec<u8>`; concatenate them in playing order and hand the result to
[`file`](crate::file::file) to get a complete, playable buffer.

# Example
```rust
use midiscribe::prelude::*;

let mut contents = Vec::new();
contents.extend(tempo(120)?);
contents.extend(program_change(Instrument::ElectricPiano1.program(), 0, 0)?);
contents.extend(Note::new(C[4], 100, duration(4, false, DEFAULT_DIVISION)).encode()?);

let root = Note::new(C[4], 80, duration(2, false, DEFAULT_DIVISION));
contents.extend(chord(
    &root,
    &[
        ChordMember::interval(interval::P1),
        ChordMember::interval(interval::M3),
        ChordMember::interval(interval::P5),
    ],
)?);

let bytes = file(HeaderChunkMode::SingleTrack, &contents, DEFAULT_DIVISION)?;
assert_eq!(&bytes[..4], b"MThd");
# Ok::<(), midiscribe::EncodeError>(())
```

# Layout
- [`vlq`] encodes and decodes delta times
- [`event`] encodes single notes, program changes and tempo
- [`chord`] merges overlapping notes into one ordered stream
- [`file`] wraps event bytes into header and track chunks
- [`pitch`] and [`gm`] hold the lookup tables
"#]
#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
pub use error::*;

pub mod chord;
pub mod event;
pub mod file;
pub mod gm;
pub mod pitch;
pub mod vlq;

/// Commonly used types, functions and tables
pub mod prelude {
    pub use crate::chord::{ChordMember, MemberPitch, ResolvedMember, chord, resolve};
    pub use crate::error::*;
    pub use crate::event::{Note, duration, note, program_change, tempo, ticks};
    pub use crate::file::{DEFAULT_DIVISION, FormatType, HeaderChunkMode, file, header_chunk, track};
    pub use crate::gm::{DRUM_CHANNEL, Instrument, Percussion};
    pub use crate::pitch::{interval, *};
}
