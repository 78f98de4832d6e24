#![doc = r#"
Encoders for single track events.

Every function returns the complete bytes of its event(s), delta time
included, ready to be concatenated into a track. Status bytes are always
written in full; running status is never used, so any concatenation of
encoder output is a valid event stream.

A note is written as two note-on messages, the second with velocity 0:

```text
VLQ(offset) 9n pitch velocity VLQ(duration) 9n pitch 00
```
"#]

use alloc::vec::Vec;

use crate::{
    EncodeError, EncodeResult, RangeError,
    file::DEFAULT_DIVISION,
    vlq,
};

/// Status nibble of a note-on message. OR with a channel.
pub const NOTE_ON: u8 = 0x90;

/// Status nibble of a program change message. OR with a channel.
pub const PROGRAM_CHANGE: u8 = 0xC0;

/// Meta event introducer
pub const META: u8 = 0xFF;

/// Meta event type of a tempo change
pub const META_TEMPO: u8 = 0x51;

const MICROS_PER_MINUTE: u32 = 60_000_000;

#[doc = r#"
A note, or the root of a chord.

`offset` is the delta time from the previous event in the stream, so a run of
encoded notes plays one after the other. To sound notes together use
[`chord`](crate::chord::chord).

To play a drum, use [`DRUM_CHANNEL`](crate::gm::DRUM_CHANNEL) and a
[`Percussion`](crate::gm::Percussion) pitch.

# Example
```rust
# use midiscribe::prelude::*;
let note = Note::new(60, 100, 96);
assert_eq!(note.encode()?, [0x00, 0x90, 60, 100, 0x60, 0x90, 60, 0]);

let snare = Note::new(Percussion::AcousticSnare.pitch(), 80, 96)
    .with_offset(48)
    .with_channel(DRUM_CHANNEL);
assert_eq!(snare.encode()?, [0x30, 0x99, 38, 80, 0x60, 0x99, 38, 0]);
# Ok::<(), EncodeError>(())
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    /// 0-127
    pub pitch: u8,
    /// 0-127
    pub velocity: u8,
    /// Ticks between note-on and note-off
    pub duration: u32,
    /// Ticks since the previous event
    pub offset: u32,
    /// Zero-indexed, 0-15
    pub channel: u8,
}

impl Note {
    /// A note that starts right after the previous event, on channel 0.
    pub const fn new(pitch: u8, velocity: u8, duration: u32) -> Self {
        Self {
            pitch,
            velocity,
            duration,
            offset: 0,
            channel: 0,
        }
    }

    /// Wait `offset` ticks after the previous event before starting
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Play on a zero-indexed channel
    pub const fn with_channel(mut self, channel: u8) -> Self {
        self.channel = channel;
        self
    }

    /// Encode the note-on/note-off pair.
    pub fn encode(&self) -> EncodeResult<Vec<u8>> {
        let mut out = Vec::with_capacity(8);
        self.encode_into(&mut out)?;
        Ok(out)
    }

    /// Append the note-on/note-off pair to `buf`.
    ///
    /// Everything is validated before anything is written, so `buf` is
    /// untouched on error.
    pub fn encode_into(&self, buf: &mut Vec<u8>) -> EncodeResult<()> {
        check_pitch(u16::from(self.pitch))?;
        check_velocity(self.velocity)?;
        let status = NOTE_ON | check_channel(self.channel)?;
        check_delta(self.offset)?;
        check_delta(self.duration)?;

        vlq::encode_into(self.offset, buf)?;
        buf.extend_from_slice(&[status, self.pitch, self.velocity]);
        vlq::encode_into(self.duration, buf)?;
        buf.extend_from_slice(&[status, self.pitch, 0]);
        Ok(())
    }
}

/// Encode a single note. Same as building a [`Note`] and calling [`Note::encode`].
///
/// # Errors
/// - [`RangeError`] if pitch or velocity exceed 127, or channel exceeds 15
/// - [`VlqError::Overflow`](crate::VlqError::Overflow) if duration or offset exceed 28 bits
pub fn note(
    pitch: u8,
    velocity: u8,
    duration: u32,
    offset: u32,
    channel: u8,
) -> EncodeResult<Vec<u8>> {
    Note {
        pitch,
        velocity,
        duration,
        offset,
        channel,
    }
    .encode()
}

/// Select the instrument a channel plays.
///
/// `to` is the program change wire value (0-127), as returned by
/// [`Instrument::program`](crate::gm::Instrument::program).
///
/// # Example
/// ```rust
/// # use midiscribe::prelude::*;
/// let bytes = program_change(Instrument::Lead1Square.program(), 0, 0)?;
/// assert_eq!(bytes, [0x00, 0xC0, 80]);
/// # Ok::<(), EncodeError>(())
/// ```
pub fn program_change(to: u8, offset: u32, channel: u8) -> EncodeResult<Vec<u8>> {
    if to > 127 {
        return Err(RangeError::Program(to).into());
    }
    let status = PROGRAM_CHANGE | check_channel(channel)?;

    let mut out = vlq::encode(offset)?;
    out.extend_from_slice(&[status, to]);
    Ok(out)
}

/// A tempo meta event at delta time 0.
///
/// The tempo is stored as microseconds per quarter note,
/// `60_000_000 / bpm` rounded down, in three big-endian bytes.
///
/// # Errors
/// - [`EncodeError::ZeroTempo`] if `bpm` is 0
/// - [`EncodeError::TempoOutOfRange`] if `bpm` is below 4, whose quarter note
///   is too long for three bytes
pub fn tempo(bpm: u32) -> EncodeResult<Vec<u8>> {
    let micros = MICROS_PER_MINUTE
        .checked_div(bpm)
        .ok_or(EncodeError::ZeroTempo)?;
    let [overflow, hi, mid, lo] = micros.to_be_bytes();
    if overflow != 0 {
        return Err(EncodeError::TempoOutOfRange(bpm));
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("tempo {bpm} bpm is {micros} us per quarter note");

    Ok(alloc::vec![0x00, META, META_TEMPO, 0x03, hi, mid, lo])
}

/// Ticks in a note value.
///
/// `number` is the note value's denominator: 1 is a whole note, 4 a quarter,
/// 8 an eighth and so on. `quarter_note` is the header division, usually
/// [`DEFAULT_DIVISION`]. A dotted note lasts half as long again.
///
/// `number` 0 means "no delay" and gives 0 ticks. For notes longer than a
/// whole note, multiply the result.
///
/// # Example
/// ```rust
/// # use midiscribe::prelude::*;
/// assert_eq!(duration(4, false, DEFAULT_DIVISION), 96);
/// assert_eq!(duration(4, true, DEFAULT_DIVISION), 144);
/// assert_eq!(duration(1, false, DEFAULT_DIVISION), 384);
/// assert_eq!(duration(0, false, DEFAULT_DIVISION), 0);
/// ```
pub const fn duration(number: u32, dotted: bool, quarter_note: u16) -> u32 {
    if number == 0 {
        return 0;
    }
    let halves = if dotted { 3 } else { 2 };
    quarter_note as u32 * 4 * halves / 2 / number
}

/// [`duration`] with the default division and no dot.
pub const fn ticks(number: u32) -> u32 {
    duration(number, false, DEFAULT_DIVISION)
}

pub(crate) const fn check_pitch(pitch: u16) -> Result<u8, RangeError> {
    if pitch > 127 {
        return Err(RangeError::Pitch(pitch));
    }
    Ok(pitch as u8)
}

pub(crate) const fn check_velocity(velocity: u8) -> Result<u8, RangeError> {
    if velocity > 127 {
        return Err(RangeError::Velocity(velocity));
    }
    Ok(velocity)
}

pub(crate) const fn check_channel(channel: u8) -> Result<u8, RangeError> {
    if channel > 15 {
        return Err(RangeError::Channel(channel));
    }
    Ok(channel)
}

const fn check_delta(ticks: u32) -> Result<u32, crate::VlqError> {
    if ticks > vlq::MAX_VALUE {
        return Err(crate::VlqError::Overflow(ticks));
    }
    Ok(ticks)
}

#[test]
fn encode_note() {
    use pretty_assertions::assert_eq;
    assert_eq!(
        note(60, 100, 96, 0, 0).unwrap(),
        [0x00, 0x90, 60, 100, 0x60, 0x90, 60, 0]
    );
    assert_eq!(
        note(72, 1, 0x80, 0x3FFF, 15).unwrap(),
        [0xFF, 0x7F, 0x9F, 72, 1, 0x81, 0x00, 0x9F, 72, 0]
    );
}

#[test]
fn note_rejects_bad_input() {
    assert_eq!(note(128, 100, 96, 0, 0), Err(RangeError::Pitch(128).into()));
    assert_eq!(note(60, 200, 96, 0, 0), Err(RangeError::Velocity(200).into()));
    assert_eq!(note(60, 100, 96, 0, 16), Err(RangeError::Channel(16).into()));
    assert_eq!(
        note(60, 100, 0x1000_0000, 0, 0),
        Err(crate::VlqError::Overflow(0x1000_0000).into())
    );

    let mut buf = alloc::vec![0x11];
    assert!(Note::new(60, 100, u32::MAX).encode_into(&mut buf).is_err());
    assert_eq!(buf, [0x11]);
}

#[test]
fn encode_program_change() {
    assert_eq!(program_change(5, 0, 0).unwrap(), [0x00, 0xC0, 0x05]);
    assert_eq!(program_change(0, 0x80, 9).unwrap(), [0x81, 0x00, 0xC9, 0x00]);
    assert_eq!(program_change(128, 0, 0), Err(RangeError::Program(128).into()));
    assert_eq!(program_change(1, 0, 16), Err(RangeError::Channel(16).into()));
}

#[test]
fn encode_tempo() {
    use pretty_assertions::assert_eq;
    assert_eq!(tempo(120).unwrap(), [0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20]);
    // 60_000_000 / 7 = 8_571_428 = 0x82_CA_24
    assert_eq!(tempo(7).unwrap(), [0x00, 0xFF, 0x51, 0x03, 0x82, 0xCA, 0x24]);
    assert_eq!(tempo(4).unwrap(), [0x00, 0xFF, 0x51, 0x03, 0xE4, 0xE1, 0xC0]);
    assert_eq!(tempo(0), Err(EncodeError::ZeroTempo));
    assert_eq!(tempo(3), Err(EncodeError::TempoOutOfRange(3)));
}

#[test]
fn note_values_to_ticks() {
    assert_eq!(duration(2, false, 96), 192);
    assert_eq!(duration(8, false, 96), 48);
    assert_eq!(duration(8, true, 96), 72);
    assert_eq!(duration(16, false, 96), 24);
    assert_eq!(duration(3, false, 96), 128);
    assert_eq!(duration(0, true, 96), 0);
    assert_eq!(duration(4, false, 480), 480);
    assert_eq!(ticks(4), 96);
}
