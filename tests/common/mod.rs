#![allow(dead_code)]

use midiscribe::vlq;

/// An event read back from encoded bytes, with its absolute tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walked {
    pub tick: u32,
    pub status: u8,
    pub data: Vec<u8>,
}

impl Walked {
    pub fn is_note_on(&self) -> bool {
        self.status & 0xF0 == 0x90 && self.data[1] != 0
    }
    pub fn is_note_off(&self) -> bool {
        self.status & 0xF0 == 0x90 && self.data[1] == 0
    }
    pub fn channel(&self) -> u8 {
        self.status & 0x0F
    }
    pub fn pitch(&self) -> u8 {
        self.data[0]
    }
}

/// Walk a stream of delta-timed events as written by the encoders.
///
/// Only the messages the encoders produce are understood: note-on,
/// program change and meta events.
pub fn walk(mut bytes: &[u8]) -> Vec<Walked> {
    let mut events = Vec::new();
    let mut tick = 0;
    while !bytes.is_empty() {
        let (delta, read) = vlq::read(bytes).unwrap();
        tick += delta;
        bytes = &bytes[read..];

        let status = bytes[0];
        bytes = &bytes[1..];
        let len = match status & 0xF0 {
            0x90 => 2,
            0xC0 => 1,
            0xF0 => {
                assert_eq!(status, 0xFF, "only meta events are written");
                let (len, read) = vlq::read(&bytes[1..]).unwrap();
                1 + read + len as usize
            }
            other => panic!("unexpected status {other:#X}"),
        };
        events.push(Walked {
            tick,
            status,
            data: bytes[..len].to_vec(),
        });
        bytes = &bytes[len..];
    }
    events
}

/// Split a complete file into its header chunk and its track chunk body.
pub fn split_file(bytes: &[u8]) -> (&[u8], &[u8]) {
    let (header, rest) = bytes.split_at(14);
    assert_eq!(&rest[..4], b"MTrk");
    let len = u32::from_be_bytes(rest[4..8].try_into().unwrap()) as usize;
    assert_eq!(rest.len(), 8 + len, "track length must cover the rest of the file");
    (header, &rest[8..])
}
