use thiserror::Error;

#[doc = r#"
A set of errors that can occur while encoding events into MIDI bytes.

Every error is a problem with the caller's input and is reported by the
call that received the bad value. Nothing is written on failure.
"#]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// A data byte or channel is outside of its valid range
    #[error("Out of range: {0}")]
    Range(#[from] RangeError),
    /// A delta time could not be written as a variable-length quantity
    #[error("Delta time: {0}")]
    Vlq(#[from] VlqError),
    /// Tempo was requested at 0 beats per minute
    #[error("Tempo must be at least 1 beat per minute")]
    ZeroTempo,
    /// The microseconds per quarter note for this tempo do not fit in 24 bits
    #[error("A tempo of {0} bpm cannot be represented (at least 4 bpm is required)")]
    TempoOutOfRange(u32),
    /// A chord member ends after the last representable tick
    #[error("A note starting at tick {start} lasting {duration} ticks overflows 32 bits")]
    TickOverflow {
        /// absolute start of the note
        start: u32,
        /// requested duration of the note
        duration: u32,
    },
    /// Track contents are too long for a 32-bit chunk length
    #[error("Track of {0} bytes does not fit in a chunk")]
    TrackTooLong(usize),
}

/// A value that must fit into a data byte or channel nibble, but didn't.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Pitches are 7-bit (0-127). Holds the offending pitch,
    /// which may be the sum of a root and an interval.
    #[error("pitch {0} is greater than 127")]
    Pitch(u16),
    /// Velocities are 7-bit (0-127)
    #[error("velocity {0} is greater than 127")]
    Velocity(u8),
    /// Channels are zero-indexed (0-15)
    #[error("channel {0} is greater than 15")]
    Channel(u8),
    /// Program numbers are 7-bit (0-127) on the wire
    #[error("program {0} is greater than 127")]
    Program(u8),
}

/// Errors produced by the variable-length quantity codec.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VlqError {
    /// The value needs more than the 28 bits a MIDI delta time may carry
    #[error("{0:#X} is larger than the maximum delta time 0x0FFFFFFF")]
    Overflow(u32),
    /// The final byte still has its continuation bit set
    #[error("Variable-length quantity ends with the continuation bit set")]
    Unterminated,
    /// A byte without the continuation bit appeared before the end of input
    #[error("Variable-length quantity terminates early at byte {0}")]
    TrailingBytes(usize),
    /// More than four bytes were supplied
    #[error("Variable-length quantity is {0} bytes long (maximum is 4)")]
    TooLong(usize),
}

impl EncodeError {
    /// True if the error came from a value outside of its valid range
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::Range(_))
    }
    /// Returns the nested range error, if any
    pub const fn range_error(&self) -> Option<&RangeError> {
        match self {
            Self::Range(e) => Some(e),
            _ => None,
        }
    }
}

/// The Encode Result type (see [`EncodeError`])
pub type EncodeResult<T> = Result<T, EncodeError>;
