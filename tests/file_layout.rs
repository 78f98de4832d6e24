mod common;

use common::{split_file, walk};
use midiscribe::{file::chunk::END_OF_TRACK, prelude::*};
use pretty_assertions::assert_eq;

#[test]
fn single_track_file_length() {
    for len in [0usize, 1, 8, 127, 128, 1000] {
        let contents = vec![0u8; len];
        let bytes = file(HeaderChunkMode::SingleTrack, &contents, DEFAULT_DIVISION).unwrap();
        assert_eq!(bytes.len(), 14 + 8 + len + 4);
        assert_eq!(bytes[8], 0x00);
        assert_eq!(bytes[9], 0x00);
    }
}

#[test]
fn header_fields_follow_mode() {
    let cases: [(HeaderChunkMode, [u8; 2], [u8; 2]); 3] = [
        (HeaderChunkMode::SingleTrack, [0x00, 0x00], [0x00, 0x01]),
        (HeaderChunkMode::SimultaneousTracks(2), [0x00, 0x01], [0x00, 0x02]),
        (HeaderChunkMode::IndependentTracks(0x1234), [0x00, 0x02], [0x12, 0x34]),
    ];
    for (mode, format, tracks) in cases {
        let bytes = file(mode, &[], 0x01E0).unwrap();
        assert_eq!(&bytes[..8], b"MThd\x00\x00\x00\x06");
        assert_eq!(bytes[8..10], format);
        assert_eq!(bytes[10..12], tracks);
        assert_eq!(bytes[12..14], [0x01, 0xE0]);
    }
}

#[test]
fn track_body_is_contents_then_end_of_track() {
    let mut contents = tempo(90).unwrap();
    contents.extend(program_change(Instrument::Violin.program(), 0, 1).unwrap());
    contents.extend(note(A[4], 64, ticks(2), ticks(4), 1).unwrap());

    let bytes = file(HeaderChunkMode::SingleTrack, &contents, DEFAULT_DIVISION).unwrap();
    let (header, body) = split_file(&bytes);
    assert_eq!(header, header_chunk(HeaderChunkMode::SingleTrack, DEFAULT_DIVISION));
    assert_eq!(body[..contents.len()], contents);
    assert_eq!(body[contents.len()..], END_OF_TRACK);

    let events = walk(body);
    let last = events.last().unwrap();
    assert_eq!(last.status, 0xFF);
    assert_eq!(last.data, [0x2F, 0x00]);
    assert_eq!(last.tick, ticks(4) + ticks(2));
}

#[test]
fn tracks_can_be_appended_for_multi_track_modes() {
    let mode = HeaderChunkMode::SimultaneousTracks(2);
    let first = note(60, 100, 96, 0, 0).unwrap();
    let second = note(67, 100, 96, 0, 1).unwrap();

    let mut bytes = file(mode, &first, DEFAULT_DIVISION).unwrap();
    bytes.extend(track(&second).unwrap());

    let second_track = 14 + 8 + first.len() + 4;
    assert_eq!(&bytes[second_track..second_track + 4], b"MTrk");
    assert_eq!(bytes.len(), second_track + 8 + second.len() + 4);
}
