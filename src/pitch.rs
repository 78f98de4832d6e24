#![doc = r#"
Pitch lookup tables.

Each pitch class has a table indexed by octave, so `C[4]` is middle C (60)
and `A[4]` is concert A (69). Tables run from octave 0 to 8; octave 9 is
only partially representable in MIDI and octave -1 is reached by
subtracting [`interval::P8`].

# Example
```rust
# use midiscribe::prelude::*;
assert_eq!(C[4], 60);
assert_eq!(A[4], 69);
assert_eq!(C_SHARP[3], D_FLAT[3]);
assert_eq!(C[4] + interval::P5, G[4]);
assert_eq!(pitch_of(Key::G, Octave::new(9)), Ok(127));
```
"#]

use crate::RangeError;

/// Number of octaves in each pitch table
pub const OCTAVES: usize = 9;

const fn pitch_class(semitone: u8) -> [u8; OCTAVES] {
    let mut table = [0u8; OCTAVES];
    let mut i = 0;
    while i < OCTAVES {
        table[i] = 12 * (i as u8 + 1) + semitone;
        i += 1;
    }
    table
}

/// C in octaves 0-8
pub const C: [u8; OCTAVES] = pitch_class(0);
/// C♯ in octaves 0-8
pub const C_SHARP: [u8; OCTAVES] = pitch_class(1);
/// D♭ in octaves 0-8
pub const D_FLAT: [u8; OCTAVES] = C_SHARP;
/// D in octaves 0-8
pub const D: [u8; OCTAVES] = pitch_class(2);
/// D♯ in octaves 0-8
pub const D_SHARP: [u8; OCTAVES] = pitch_class(3);
/// E♭ in octaves 0-8
pub const E_FLAT: [u8; OCTAVES] = D_SHARP;
/// E in octaves 0-8
pub const E: [u8; OCTAVES] = pitch_class(4);
/// F in octaves 0-8
pub const F: [u8; OCTAVES] = pitch_class(5);
/// F♯ in octaves 0-8
pub const F_SHARP: [u8; OCTAVES] = pitch_class(6);
/// G♭ in octaves 0-8
pub const G_FLAT: [u8; OCTAVES] = F_SHARP;
/// G in octaves 0-8
pub const G: [u8; OCTAVES] = pitch_class(7);
/// G♯ in octaves 0-8
pub const G_SHARP: [u8; OCTAVES] = pitch_class(8);
/// A♭ in octaves 0-8
pub const A_FLAT: [u8; OCTAVES] = G_SHARP;
/// A in octaves 0-8
pub const A: [u8; OCTAVES] = pitch_class(9);
/// A♯ in octaves 0-8
pub const A_SHARP: [u8; OCTAVES] = pitch_class(10);
/// B♭ in octaves 0-8
pub const B_FLAT: [u8; OCTAVES] = A_SHARP;
/// B in octaves 0-8
pub const B: [u8; OCTAVES] = pitch_class(11);

/// Semitone offsets from a chord root.
///
/// Lowercase names are minor intervals, uppercase names are major.
#[allow(non_upper_case_globals)]
pub mod interval {
    /// Perfect unison
    pub const P1: u8 = 0;
    /// Minor second
    pub const m2: u8 = 1;
    /// Major second
    pub const M2: u8 = 2;
    /// Minor third
    pub const m3: u8 = 3;
    /// Major third
    pub const M3: u8 = 4;
    /// Perfect fourth
    pub const P4: u8 = 5;
    /// Tritone
    pub const TT: u8 = 6;
    /// Perfect fifth
    pub const P5: u8 = 7;
    /// Minor sixth
    pub const m6: u8 = 8;
    /// Major sixth
    pub const M6: u8 = 9;
    /// Minor seventh
    pub const m7: u8 = 10;
    /// Major seventh
    pub const M7: u8 = 11;
    /// Perfect octave
    pub const P8: u8 = 12;
}

#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[doc = r#"
One of the twelve pitch classes.

# Example
```rust
# use midiscribe::prelude::*;
let key = Key::from_pitch(61);
assert_eq!(key, Key::CSharp);
assert_eq!(key.table(), C_SHARP);
```
"#]
pub enum Key {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Key {
    /// Returns an array beginning with [`Key::C`] to [`Key::B`]
    pub const fn all() -> [Key; 12] {
        use Key::*;
        [C, CSharp, D, DSharp, E, F, FSharp, G, GSharp, A, ASharp, B]
    }

    /// Identify the pitch class of a MIDI pitch.
    pub const fn from_pitch(pitch: u8) -> Self {
        Self::all()[(pitch % 12) as usize]
    }

    /// Semitones above C
    pub const fn semitone(&self) -> u8 {
        *self as u8
    }

    /// The table for this pitch class, indexed by octave.
    pub const fn table(&self) -> [u8; OCTAVES] {
        pitch_class(self.semitone())
    }
}

#[doc = r#"
An octave number. Values range from -1 to 9; pitch 0 is `C(-1)`.
"#]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Octave(i8);

impl Octave {
    /// Should be a value between [-1, 9]. Clamps between these two values.
    pub const fn new(octave: i8) -> Self {
        if octave < -1 {
            Self(-1)
        } else if octave > 9 {
            Self(9)
        } else {
            Self(octave)
        }
    }

    /// Identify the octave of a MIDI pitch.
    pub const fn from_pitch(pitch: u8) -> Self {
        Self((pitch / 12) as i8 - 1)
    }

    /// The octave, from `[-1,9]`
    pub const fn value(&self) -> i8 {
        self.0
    }
}

/// The MIDI pitch of `key` in `octave`.
///
/// # Errors
/// [`RangeError::Pitch`] for keys above G in octave 9
pub const fn pitch_of(key: Key, octave: Octave) -> Result<u8, RangeError> {
    let pitch = (octave.value() + 1) as u16 * 12 + key.semitone() as u16;
    if pitch > 127 {
        return Err(RangeError::Pitch(pitch));
    }
    Ok(pitch as u8)
}

#[test]
fn tables_follow_twelve_tone_layout() {
    use pretty_assertions::assert_eq;
    assert_eq!(C, [12, 24, 36, 48, 60, 72, 84, 96, 108]);
    assert_eq!(B[8], 119);
    assert_eq!(E_FLAT, D_SHARP);
    for key in Key::all() {
        for (octave, pitch) in key.table().iter().enumerate() {
            assert_eq!(C[octave] + key.semitone(), *pitch);
        }
    }
}

#[test]
fn interval_stacks_reach_the_octave() {
    use interval::*;
    assert_eq!(C[3] + P8, C[4]);
    assert_eq!(C[3] + M3 + m3, G[3]);
    assert_eq!(P4 + P5, P8);
    assert_eq!(TT * 2, P8);
    assert_eq!(m7 + M2, P8);
}

#[test]
fn pitch_key_octave_pairs() {
    for pitch in 0..128u8 {
        let key = Key::from_pitch(pitch);
        let octave = Octave::from_pitch(pitch);
        assert_eq!(pitch_of(key, octave), Ok(pitch));
    }
    assert_eq!(pitch_of(Key::GSharp, Octave::new(9)), Err(RangeError::Pitch(128)));
    assert_eq!(Octave::new(-4).value(), -1);
}
