#![doc = r#"
Writers for MIDI file chunks

# Overview

MIDI files are organized into chunks, each identified by a 4-character ASCII type identifier
followed by a 32-bit big-endian length field and then the chunk data.

## Header chunk

The header chunk (identified by "MThd") must be the first chunk in a MIDI file. Its body is
always 6 bytes:

```text
4D 54 68 64  00 00 00 06  ff ff  nn nn  dd dd
"MThd"       length       format tracks division
```

## Track chunk

A track chunk (identified by "MTrk") holds delta-timed events and is closed by the
end-of-track meta event `00 FF 2F 00`. The length field counts every byte after
it, end-of-track included.

```text
4D 54 72 6B  ll ll ll ll  <events...>  00 FF 2F 00
```
"#]

mod header;
pub use header::*;

mod track;
pub use track::*;
