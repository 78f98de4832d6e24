#[doc = r#"
Selects the format field of the header chunk and the number of tracks it
announces.

| Mode                    | Format | Tracks |
|-------------------------|--------|--------|
| `SingleTrack`           | 0      | 1      |
| `SimultaneousTracks(n)` | 1      | `n`    |
| `IndependentTracks(n)`  | 2      | `n`    |

Only one track chunk is ever written by [`file`](crate::file::file);
formats 1 and 2 are announced for callers who append further tracks
themselves with [`track`](crate::file::track).
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderChunkMode {
    /// Format 0
    #[default]
    SingleTrack,
    /// Format 1
    SimultaneousTracks(u16),
    /// Format 2
    IndependentTracks(u16),
}

impl HeaderChunkMode {
    /// The two bytes of the format field.
    pub const fn format_bytes(&self) -> [u8; 2] {
        (self.format_type() as u16).to_be_bytes()
    }

    /// Returns the number of tracks announced by the header.
    ///
    /// [`HeaderChunkMode::SingleTrack`] will always return 1.
    pub const fn num_tracks(&self) -> u16 {
        use HeaderChunkMode::*;
        match self {
            SingleTrack => 1,
            SimultaneousTracks(num) | IndependentTracks(num) => *num,
        }
    }

    /// Returns the format type of the mode.
    pub const fn format_type(&self) -> FormatType {
        use HeaderChunkMode::*;
        match self {
            SingleTrack => FormatType::SingleMultiChannel,
            SimultaneousTracks(_) => FormatType::Simultaneous,
            IndependentTracks(_) => FormatType::SequentiallyIndependent,
        }
    }
}

/// The SMF format number, without a track count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum FormatType {
    /// Format 0
    SingleMultiChannel = 0,
    /// Format 1
    Simultaneous = 1,
    /// Format 2
    SequentiallyIndependent = 2,
}

#[test]
fn format_fields() {
    use pretty_assertions::assert_eq;
    assert_eq!(HeaderChunkMode::SingleTrack.format_bytes(), [0x00, 0x00]);
    assert_eq!(HeaderChunkMode::SimultaneousTracks(3).format_bytes(), [0x00, 0x01]);
    assert_eq!(HeaderChunkMode::IndependentTracks(3).format_bytes(), [0x00, 0x02]);

    assert_eq!(HeaderChunkMode::SingleTrack.num_tracks(), 1);
    assert_eq!(HeaderChunkMode::SimultaneousTracks(300).num_tracks(), 300);
    assert_eq!(HeaderChunkMode::IndependentTracks(0).num_tracks(), 0);
    assert_eq!(HeaderChunkMode::default(), HeaderChunkMode::SingleTrack);
}
