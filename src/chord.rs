#![doc = r#"
Simultaneous and overlapping notes.

Concatenated [`Note`]s play in sequence. To play notes together, describe
each voice as a [`ChordMember`] of a root [`Note`] and let [`chord`] merge
them into one time-ordered stream.

Each member starts `offset` ticks after the start of the chord and lasts
`duration` ticks. Members are independent of each other, so they may be
given in any order, overlap freely and start at any tick: arpeggios,
block chords and whole polyphonic phrases are all chords.

The root only supplies defaults. It is not sounded unless a member
asks for it with [`interval::P1`](crate::pitch::interval::P1).

# Example
```rust
# use midiscribe::prelude::*;
let root = Note::new(C[3], 60, 96);
let bytes = chord(
    &root,
    &[
        ChordMember::interval(interval::P1),
        ChordMember::interval(interval::P5),
        ChordMember::absolute(Percussion::BassDrum1.pitch()).with_channel(DRUM_CHANNEL),
    ],
)?;
assert_eq!(
    bytes,
    [
        0x00, 0x90, 48, 60, // C on
        0x00, 0x90, 55, 60, // G on
        0x00, 0x99, 36, 60, // kick on
        0x60, 0x90, 48, 0, // C off
        0x00, 0x90, 55, 0, // G off
        0x00, 0x99, 36, 0, // kick off
    ]
);
# Ok::<(), EncodeError>(())
```
"#]

use alloc::vec::Vec;

use crate::{
    EncodeError, EncodeResult,
    event::{NOTE_ON, Note, check_channel, check_pitch, check_velocity},
    vlq,
};

/// How a [`ChordMember`] picks its pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemberPitch {
    /// A fixed pitch, regardless of the root. Useful for percussion
    /// sharing the chord's timing.
    Absolute(u8),
    /// Semitones above the root's pitch
    Interval(u8),
}

#[doc = r#"
A note in a chord whose unset properties follow the root [`Note`].

`offset` is measured from the start of the chord, not from the previous
member.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChordMember {
    /// Absolute pitch, or interval from the root
    pub pitch: MemberPitch,
    /// if `None`, follow root
    pub velocity: Option<u8>,
    /// if `None`, follow root
    pub duration: Option<u32>,
    /// Ticks from the start of the chord
    pub offset: u32,
    /// Zero-indexed. If `None`, follow root
    pub channel: Option<u8>,
}

impl ChordMember {
    /// A member sounding the given pitch, following the root otherwise
    pub const fn new(pitch: MemberPitch) -> Self {
        Self {
            pitch,
            velocity: None,
            duration: None,
            offset: 0,
            channel: None,
        }
    }

    /// A member `interval` semitones above the root
    pub const fn interval(interval: u8) -> Self {
        Self::new(MemberPitch::Interval(interval))
    }

    /// A member at a fixed pitch
    pub const fn absolute(pitch: u8) -> Self {
        Self::new(MemberPitch::Absolute(pitch))
    }

    /// Override the root's velocity
    pub const fn with_velocity(mut self, velocity: u8) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Override the root's duration
    pub const fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Start `offset` ticks after the chord starts
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Override the root's channel
    pub const fn with_channel(mut self, channel: u8) -> Self {
        self.channel = Some(channel);
        self
    }
}

/// A [`ChordMember`] with every property filled in and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedMember {
    /// 0-127
    pub pitch: u8,
    /// 0-127
    pub velocity: u8,
    /// absolute tick of the note-on
    pub start: u32,
    /// absolute tick of the note-off
    pub end: u32,
    /// 0-15
    pub channel: u8,
}

/// Fill in `member`'s unset properties from `root`.
///
/// # Errors
/// - [`RangeError`](crate::RangeError) if the resolved pitch, velocity or channel is out of range.
///   An interval pushing the root above 127 reports the sum.
/// - [`EncodeError::TickOverflow`] if the member ends past `u32::MAX`
pub fn resolve(member: &ChordMember, root: &Note) -> EncodeResult<ResolvedMember> {
    let pitch = match member.pitch {
        MemberPitch::Absolute(pitch) => check_pitch(pitch as u16)?,
        MemberPitch::Interval(interval) => check_pitch(root.pitch as u16 + interval as u16)?,
    };
    let velocity = check_velocity(member.velocity.unwrap_or(root.velocity))?;
    let channel = check_channel(member.channel.unwrap_or(root.channel))?;

    let start = member.offset;
    let duration = member.duration.unwrap_or(root.duration);
    let end = start
        .checked_add(duration)
        .ok_or(EncodeError::TickOverflow { start, duration })?;

    Ok(ResolvedMember {
        pitch,
        velocity,
        start,
        end,
        channel,
    })
}

/// Sort rank of an event among others on the same tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    /// Ends a note that started on an earlier tick
    Off,
    On,
    /// Ends a note that started on this same tick
    InstantOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ChordEvent {
    kind: EventKind,
    pitch: u8,
    velocity: u8,
    time: u32,
    channel: u8,
}

/// Merge `members` into one delta-timed stream of note-on/note-off messages.
///
/// Events are ordered by absolute time. When events share a tick, note-offs
/// come before note-ons so a pitch that ends and restarts on the same tick is
/// retriggered rather than cut short; otherwise the order of `members` is kept.
/// A member lasting zero ticks still has its note-off after its own note-on.
///
/// The root's own `offset` is not applied: the first event's delta is the
/// earliest member's `offset`.
///
/// # Errors
/// Any error from [`resolve`], or [`VlqError::Overflow`](crate::VlqError::Overflow)
/// if two consecutive events are more than `0x0FFFFFFF` ticks apart.
pub fn chord(root: &Note, members: &[ChordMember]) -> EncodeResult<Vec<u8>> {
    let mut events = Vec::with_capacity(members.len() * 2);
    for member in members {
        let resolved = resolve(member, root)?;
        events.push(ChordEvent {
            kind: EventKind::On,
            pitch: resolved.pitch,
            velocity: resolved.velocity,
            time: resolved.start,
            channel: resolved.channel,
        });
        events.push(ChordEvent {
            kind: if resolved.end == resolved.start {
                EventKind::InstantOff
            } else {
                EventKind::Off
            },
            pitch: resolved.pitch,
            velocity: 0,
            time: resolved.end,
            channel: resolved.channel,
        });
    }

    // stable: equal keys keep member order
    events.sort_by_key(|event| (event.time, event.kind));

    #[cfg(feature = "tracing")]
    tracing::trace!(
        "chord of {} members spans {} ticks",
        members.len(),
        events.last().map_or(0, |e| e.time)
    );

    let mut out = Vec::with_capacity(events.len() * 5);
    let mut last_time = 0;
    for event in &events {
        vlq::encode_into(event.time - last_time, &mut out)?;
        out.extend_from_slice(&[NOTE_ON | event.channel, event.pitch, event.velocity]);
        last_time = event.time;
    }
    Ok(out)
}

#[test]
fn members_follow_root_unless_set() {
    use crate::RangeError;
    use pretty_assertions::assert_eq;

    let root = Note::new(60, 90, 96).with_channel(2);

    let follows = resolve(&ChordMember::interval(4), &root).unwrap();
    assert_eq!(
        follows,
        ResolvedMember {
            pitch: 64,
            velocity: 90,
            start: 0,
            end: 96,
            channel: 2
        }
    );

    let own = ChordMember::absolute(36)
        .with_velocity(10)
        .with_duration(24)
        .with_offset(48)
        .with_channel(9);
    assert_eq!(
        resolve(&own, &root).unwrap(),
        ResolvedMember {
            pitch: 36,
            velocity: 10,
            start: 48,
            end: 72,
            channel: 9
        }
    );

    let too_high = Note::new(120, 90, 96);
    assert_eq!(
        resolve(&ChordMember::interval(12), &too_high),
        Err(RangeError::Pitch(132).into())
    );
    assert_eq!(
        resolve(&ChordMember::interval(0).with_channel(16), &root),
        Err(RangeError::Channel(16).into())
    );
    assert_eq!(
        resolve(&ChordMember::interval(0).with_offset(u32::MAX), &root),
        Err(EncodeError::TickOverflow {
            start: u32::MAX,
            duration: 96
        })
    );
}

#[test]
fn root_is_not_sounded() {
    let root = Note::new(60, 90, 96);
    assert!(chord(&root, &[]).unwrap().is_empty());
    assert_eq!(
        chord(&root, &[ChordMember::interval(7)]).unwrap(),
        [0x00, 0x90, 67, 90, 0x60, 0x90, 67, 0]
    );
}

#[test]
fn note_off_precedes_note_on_at_same_tick() {
    use pretty_assertions::assert_eq;
    let root = Note::new(60, 90, 96);
    // second member restarts the same pitch exactly when the first ends
    let members = [
        ChordMember::interval(0).with_offset(96),
        ChordMember::interval(0),
    ];
    assert_eq!(
        chord(&root, &members).unwrap(),
        [
            0x00, 0x90, 60, 90, // second member on
            0x60, 0x90, 60, 0, // second member off
            0x00, 0x90, 60, 90, // first member on
            0x60, 0x90, 60, 0, // first member off
        ]
    );
}

#[test]
fn simultaneous_ons_keep_member_order() {
    let root = Note::new(60, 90, 10);
    let members = [
        ChordMember::interval(7),
        ChordMember::interval(0),
        ChordMember::interval(4),
    ];
    let bytes = chord(&root, &members).unwrap();
    let on_pitches: Vec<u8> = bytes.chunks(4).take(3).map(|event| event[2]).collect();
    assert_eq!(on_pitches, [67, 60, 64]);
}

#[test]
fn zero_length_member_ends_after_it_starts() {
    use pretty_assertions::assert_eq;
    let root = Note::new(60, 90, 96);
    assert_eq!(
        chord(&root, &[ChordMember::interval(0).with_duration(0)]).unwrap(),
        [0x00, 0x90, 60, 90, 0x00, 0x90, 60, 0]
    );

    // a root lasting zero ticks leaves every member zero-length
    let instant = Note::new(60, 90, crate::event::ticks(512));
    assert_eq!(
        chord(&instant, &[ChordMember::interval(0), ChordMember::interval(7)]).unwrap(),
        [
            0x00, 0x90, 60, 90, //
            0x00, 0x90, 67, 90, //
            0x00, 0x90, 60, 0, //
            0x00, 0x90, 67, 0, //
        ]
    );
}

#[test]
fn zero_length_member_among_sustained_ones() {
    use pretty_assertions::assert_eq;
    let root = Note::new(60, 90, 96);
    let members = [
        ChordMember::interval(0),
        ChordMember::interval(4).with_offset(96).with_duration(0),
        ChordMember::interval(7).with_offset(96),
    ];
    assert_eq!(
        chord(&root, &members).unwrap(),
        [
            0x00, 0x90, 60, 90, // root on
            0x60, 0x90, 60, 0, // root off, ended earlier
            0x00, 0x90, 64, 90, // instant on
            0x00, 0x90, 67, 90, // fifth on
            0x00, 0x90, 64, 0, // instant off
            0x60, 0x90, 67, 0, // fifth off
        ]
    );
}

#[test]
fn silent_member_is_still_a_note_on() {
    use pretty_assertions::assert_eq;
    let root = Note::new(60, 90, 96);
    // the silent member starts on the tick the first one ends
    let members = [
        ChordMember::interval(4).with_velocity(0).with_offset(96),
        ChordMember::interval(0),
    ];
    assert_eq!(
        chord(&root, &members).unwrap(),
        [
            0x00, 0x90, 60, 90, //
            0x60, 0x90, 60, 0, //
            0x00, 0x90, 64, 0, //
            0x60, 0x90, 64, 0, //
        ]
    );
}
