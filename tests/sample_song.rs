//! A short piece exercising every encoder: melody, drums, a polyphonic
//! chord passage with percussion, and an arpeggiated lead.

mod common;

use common::{split_file, walk};
use midiscribe::prelude::*;
use pretty_assertions::assert_eq;

fn song() -> EncodeResult<Vec<u8>> {
    let q = ticks(4);
    let mut contents = Vec::new();

    contents.extend(program_change(Instrument::BrightAcousticPiano.program(), 0, 0)?);
    contents.extend(note(C[3], 60, ticks(4), 0, 0)?);
    contents.extend(note(D[3], 80, ticks(4), 0, 0)?);
    contents.extend(note(E[3], 100, ticks(8), 0, 0)?);
    contents.extend(note(D[3], 80, duration(4, true, DEFAULT_DIVISION), 0, 0)?);
    contents.extend(note(C[3], 60, ticks(1), 0, 0)?);

    for drum in [
        Percussion::BassDrum1,
        Percussion::AcousticSnare,
        Percussion::BassDrum1,
        Percussion::AcousticSnare,
    ] {
        contents.extend(
            Note::new(drum.pitch(), 80, q)
                .with_channel(DRUM_CHANNEL)
                .encode()?,
        );
    }

    contents.extend(program_change(Instrument::ElectricPiano1.program(), 0, 0)?);
    let drum = |pitch: Percussion, offset: u32| {
        ChordMember::absolute(pitch.pitch())
            .with_offset(offset)
            .with_channel(DRUM_CHANNEL)
    };
    contents.extend(chord(
        &Note::new(C[3], 60, q),
        &[
            ChordMember::interval(interval::P1),
            ChordMember::interval(interval::P5),
            ChordMember::interval(interval::M2).with_offset(q),
            ChordMember::interval(interval::M6).with_offset(q),
            ChordMember::interval(interval::M3)
                .with_duration(ticks(8))
                .with_offset(q * 2),
            ChordMember::interval(interval::M7)
                .with_duration(ticks(8))
                .with_offset(q * 2),
            ChordMember::interval(interval::P5)
                .with_duration(duration(4, true, DEFAULT_DIVISION))
                .with_offset(q * 5 / 2),
            ChordMember::interval(interval::P1)
                .with_duration(ticks(1))
                .with_offset(q * 4),
            ChordMember::interval(interval::P8)
                .with_duration(ticks(1))
                .with_offset(q * 4),
            drum(Percussion::BassDrum1, 0),
            drum(Percussion::AcousticSnare, q),
            drum(Percussion::BassDrum1, q * 2),
            drum(Percussion::AcousticSnare, q * 3),
            drum(Percussion::CrashCymbal1, q * 4),
        ],
    )?);

    contents.extend(program_change(Instrument::Lead1Square.program(), 0, 0)?);
    let arpeggio = [interval::P1, interval::M3, interval::P5, interval::P8];
    for step in arpeggio.iter().cycle().take(16) {
        contents.extend(note(C[3] + step, 60, ticks(16), 0, 0)?);
    }

    file(HeaderChunkMode::SingleTrack, &contents, DEFAULT_DIVISION)
}

#[test]
fn song_is_a_single_valid_track() {
    let bytes = song().unwrap();
    let (header, body) = split_file(&bytes);
    assert_eq!(header, [0x4D, 0x54, 0x68, 0x64, 0, 0, 0, 6, 0, 0, 0, 1, 0, 0x60]);

    let events = walk(body);
    let programs: Vec<u8> = events
        .iter()
        .filter(|e| e.status == 0xC0)
        .map(|e| e.data[0])
        .collect();
    assert_eq!(programs, [1, 4, 80]);

    let ons = events.iter().filter(|e| e.is_note_on()).count();
    let offs = events.iter().filter(|e| e.is_note_off()).count();
    assert_eq!(ons, 5 + 4 + 14 + 16);
    assert_eq!(ons, offs);
    assert!(matches!(events.last(), Some(e) if e.status == 0xFF && e.data == [0x2F, 0x00]));
}

#[test]
fn song_timeline() {
    let bytes = song().unwrap();
    let (_, body) = split_file(&bytes);
    let events = walk(body);
    let q = ticks(4);

    // melody: 1 + 1 + 1/2 + 3/2 + 4 quarters, drums: 4 quarters
    let melody_and_drums = q * 12;
    let first_chord_event = events
        .iter()
        .position(|e| {
            e.is_note_on() && e.channel() == 0 && e.pitch() == C[3] && e.tick == melody_and_drums
        })
        .unwrap();
    assert!(first_chord_event > 0);

    let chord_end = melody_and_drums + q * 4 + ticks(1);
    let lead_notes: Vec<_> = events
        .iter()
        .filter(|e| e.is_note_on() && e.tick >= chord_end)
        .collect();
    assert_eq!(lead_notes.len(), 16);
    assert_eq!(lead_notes[0].tick, chord_end);
    assert_eq!(lead_notes[15].tick, chord_end + 15 * ticks(16));
    assert_eq!(events.last().unwrap().tick, chord_end + 16 * ticks(16));

    let drum_hits = events
        .iter()
        .filter(|e| e.is_note_on() && e.channel() == DRUM_CHANNEL)
        .count();
    assert_eq!(drum_hits, 4 + 5);
}
