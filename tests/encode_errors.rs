use midiscribe::prelude::*;

/// Encode a single note on channel 0 at the start of the track
fn quick_note(pitch: u8, velocity: u8) -> EncodeResult<Vec<u8>> {
    note(pitch, velocity, 96, 0, 0)
}

#[test]
fn data_bytes_above_127() {
    assert!(matches!(
        quick_note(128, 100),
        Err(EncodeError::Range(RangeError::Pitch(128)))
    ));
    assert!(matches!(
        quick_note(60, 255),
        Err(EncodeError::Range(RangeError::Velocity(255)))
    ));
    assert!(matches!(
        program_change(200, 0, 0),
        Err(EncodeError::Range(RangeError::Program(200)))
    ));

    // the largest valid values still encode
    assert!(quick_note(127, 127).is_ok());
    assert!(program_change(127, 0, 15).is_ok());
}

#[test]
fn channels_above_15() {
    for channel in [16u8, 17, 0x7F, 0xFF] {
        assert!(matches!(
            note(60, 100, 96, 0, channel),
            Err(EncodeError::Range(RangeError::Channel(c))) if c == channel
        ));
        assert!(matches!(
            program_change(0, 0, channel),
            Err(EncodeError::Range(RangeError::Channel(_)))
        ));
    }
}

#[test]
fn chord_members_out_of_range() {
    let root = Note::new(120, 100, 96);
    let members = [
        ChordMember::interval(interval::P1),
        ChordMember::interval(interval::P8),
    ];
    let err = chord(&root, &members).unwrap_err();
    assert!(err.is_range());
    assert_eq!(err.range_error(), Some(&RangeError::Pitch(132)));

    let root = Note::new(60, 100, 96);
    assert!(matches!(
        chord(&root, &[ChordMember::absolute(60).with_velocity(128)]),
        Err(EncodeError::Range(RangeError::Velocity(128)))
    ));
    // root values are only checked when a member follows them
    let bad_root = Note::new(60, 200, 96);
    assert!(chord(&bad_root, &[ChordMember::absolute(60).with_velocity(1)]).is_ok());
    assert!(chord(&bad_root, &[ChordMember::absolute(60)]).is_err());
}

#[test]
fn delta_times_beyond_28_bits() {
    assert!(matches!(
        note(60, 100, 0x1000_0000, 0, 0),
        Err(EncodeError::Vlq(VlqError::Overflow(0x1000_0000)))
    ));
    assert!(matches!(
        program_change(0, u32::MAX, 0),
        Err(EncodeError::Vlq(VlqError::Overflow(u32::MAX)))
    ));

    let root = Note::new(60, 100, 1);
    assert!(matches!(
        chord(&root, &[ChordMember::absolute(60).with_offset(0x1000_0000)]),
        Err(EncodeError::Vlq(VlqError::Overflow(0x1000_0000)))
    ));
    assert!(matches!(
        chord(&root, &[ChordMember::absolute(60).with_offset(u32::MAX)]),
        Err(EncodeError::TickOverflow { start: u32::MAX, duration: 1 })
    ));
}

#[test]
fn tempo_bounds() {
    assert!(matches!(tempo(0), Err(EncodeError::ZeroTempo)));
    assert!(matches!(tempo(1), Err(EncodeError::TempoOutOfRange(1))));
    assert!(tempo(4).is_ok());
    assert!(tempo(60_000_000).is_ok());
    // faster than one microsecond per quarter note rounds down to zero
    assert_eq!(tempo(u32::MAX).unwrap()[4..], [0, 0, 0]);
}

#[test]
fn errors_display() {
    assert_eq!(
        EncodeError::from(RangeError::Channel(16)).to_string(),
        "Out of range: channel 16 is greater than 15"
    );
    assert_eq!(
        EncodeError::from(VlqError::Overflow(0x1000_0000)).to_string(),
        "Delta time: 0x10000000 is larger than the maximum delta time 0x0FFFFFFF"
    );
}
