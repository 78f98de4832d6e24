#![doc = r#"
General MIDI sound set tables.

[`Instrument`] holds the 128 melodic programs and [`Percussion`] the key map
of the percussion channel ([`DRUM_CHANNEL`]).

The General MIDI catalogue numbers programs from 1 to 128, but the program
change message carries 0 to 127. [`Instrument`] discriminants are the wire
values, so [`Instrument::program`] can be handed straight to
[`program_change`](crate::event::program_change). Use
[`Instrument::gm_number`] when the catalogue number is wanted.

# Example
```rust
# use midiscribe::prelude::*;
let piano = Instrument::AcousticGrandPiano;
assert_eq!(piano.program(), 0);
assert_eq!(piano.gm_number(), 1);
assert_eq!(Instrument::from_gm_number(128), Some(Instrument::Gunshot));

assert_eq!(u8::from(Percussion::AcousticSnare), 38);
```
"#]

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The zero-indexed channel General MIDI reserves for percussion (channel 10).
pub const DRUM_CHANNEL: u8 = 9;

/// General MIDI melodic instruments, by program change wire value (0-127).
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Instrument {
    // Piano
    AcousticGrandPiano = 0,
    BrightAcousticPiano = 1,
    ElectricGrandPiano = 2,
    HonkyTonkPiano = 3,
    ElectricPiano1 = 4,
    ElectricPiano2 = 5,
    Harpsichord = 6,
    Clavi = 7,
    // Chromatic Percussion
    Celesta = 8,
    Glockenspiel = 9,
    MusicBox = 10,
    Vibraphone = 11,
    Marimba = 12,
    Xylophone = 13,
    TubularBells = 14,
    Dulcimer = 15,
    // Organ
    DrawbarOrgan = 16,
    PercussiveOrgan = 17,
    RockOrgan = 18,
    ChurchOrgan = 19,
    ReedOrgan = 20,
    Accordion = 21,
    Harmonica = 22,
    TangoAccordion = 23,
    // Guitar
    AcousticGuitarNylon = 24,
    AcousticGuitarSteel = 25,
    ElectricGuitarJazz = 26,
    ElectricGuitarClean = 27,
    ElectricGuitarMuted = 28,
    OverdrivenGuitar = 29,
    DistortionGuitar = 30,
    GuitarHarmonics = 31,
    // Bass
    AcousticBass = 32,
    ElectricBassFinger = 33,
    ElectricBassPick = 34,
    FretlessBass = 35,
    SlapBass1 = 36,
    SlapBass2 = 37,
    SynthBass1 = 38,
    SynthBass2 = 39,
    // Strings
    Violin = 40,
    Viola = 41,
    Cello = 42,
    Contrabass = 43,
    TremoloStrings = 44,
    PizzicatoStrings = 45,
    OrchestralHarp = 46,
    Timpani = 47,
    // Ensemble
    StringEnsemble1 = 48,
    StringEnsemble2 = 49,
    SynthStrings1 = 50,
    SynthStrings2 = 51,
    ChoirAahs = 52,
    VoiceOohs = 53,
    SynthVoice = 54,
    OrchestraHit = 55,
    // Brass
    Trumpet = 56,
    Trombone = 57,
    Tuba = 58,
    MutedTrumpet = 59,
    FrenchHorn = 60,
    BrassSection = 61,
    SynthBrass1 = 62,
    SynthBrass2 = 63,
    // Reed
    SopranoSax = 64,
    AltoSax = 65,
    TenorSax = 66,
    BaritoneSax = 67,
    Oboe = 68,
    EnglishHorn = 69,
    Bassoon = 70,
    Clarinet = 71,
    // Pipe
    Piccolo = 72,
    Flute = 73,
    Recorder = 74,
    PanFlute = 75,
    BlownBottle = 76,
    Shakuhachi = 77,
    Whistle = 78,
    Ocarina = 79,
    // Synth Lead
    Lead1Square = 80,
    Lead2Sawtooth = 81,
    Lead3Calliope = 82,
    Lead4Chiff = 83,
    Lead5Charang = 84,
    Lead6Voice = 85,
    Lead7Fifths = 86,
    Lead8BassLead = 87,
    // Synth Pad
    Pad1NewAge = 88,
    Pad2Warm = 89,
    Pad3Polysynth = 90,
    Pad4Choir = 91,
    Pad5Bowed = 92,
    Pad6Metallic = 93,
    Pad7Halo = 94,
    Pad8Sweep = 95,
    // Synth Effects
    Fx1Rain = 96,
    Fx2Soundtrack = 97,
    Fx3Crystal = 98,
    Fx4Atmosphere = 99,
    Fx5Brightness = 100,
    Fx6Goblins = 101,
    Fx7Echoes = 102,
    Fx8SciFi = 103,
    // Ethnic
    Sitar = 104,
    Banjo = 105,
    Shamisen = 106,
    Koto = 107,
    Kalimba = 108,
    Bagpipe = 109,
    Fiddle = 110,
    Shanai = 111,
    // Percussive
    TinkleBell = 112,
    Agogo = 113,
    SteelDrums = 114,
    Woodblock = 115,
    TaikoDrum = 116,
    MelodicTom = 117,
    SynthDrum = 118,
    ReverseCymbal = 119,
    // Sound Effects
    GuitarFretNoise = 120,
    BreathNoise = 121,
    Seashore = 122,
    BirdTweet = 123,
    TelephoneRing = 124,
    Helicopter = 125,
    Applause = 126,
    Gunshot = 127,
}

impl Instrument {
    /// The value sent in a program change message (0-127).
    #[inline]
    pub const fn program(self) -> u8 {
        self as u8
    }

    /// The 1-based number used by the General MIDI sound set table.
    #[inline]
    pub const fn gm_number(self) -> u8 {
        self as u8 + 1
    }

    /// Look up an instrument by its 1-based General MIDI number.
    pub fn from_gm_number(number: u8) -> Option<Self> {
        let program = number.checked_sub(1)?;
        Self::try_from(program).ok()
    }

    /// The General MIDI family name, such as `"Piano"` or `"Synth Lead"`.
    pub const fn family(self) -> &'static str {
        match self.program() {
            0..=7 => "Piano",
            8..=15 => "Chromatic Percussion",
            16..=23 => "Organ",
            24..=31 => "Guitar",
            32..=39 => "Bass",
            40..=47 => "Strings",
            48..=55 => "Ensemble",
            56..=63 => "Brass",
            64..=71 => "Reed",
            72..=79 => "Pipe",
            80..=87 => "Synth Lead",
            88..=95 => "Synth Pad",
            96..=103 => "Synth Effects",
            104..=111 => "Ethnic",
            112..=119 => "Percussive",
            _ => "Sound Effects",
        }
    }
}

/// General MIDI percussion key map. Play these as pitches on [`DRUM_CHANNEL`].
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Percussion {
    AcousticBassDrum = 35,
    BassDrum1 = 36,
    SideStick = 37,
    AcousticSnare = 38,
    HandClap = 39,
    ElectricSnare = 40,
    LowFloorTom = 41,
    ClosedHiHat = 42,
    HighFloorTom = 43,
    PedalHiHat = 44,
    LowTom = 45,
    OpenHiHat = 46,
    LowMidTom = 47,
    HiMidTom = 48,
    CrashCymbal1 = 49,
    HighTom = 50,
    RideCymbal1 = 51,
    ChineseCymbal = 52,
    RideBell = 53,
    Tambourine = 54,
    SplashCymbal = 55,
    Cowbell = 56,
    CrashCymbal2 = 57,
    Vibraslap = 58,
    RideCymbal2 = 59,
    HiBongo = 60,
    LowBongo = 61,
    MuteHiConga = 62,
    OpenHiConga = 63,
    LowConga = 64,
    HighTimbale = 65,
    LowTimbale = 66,
    HighAgogo = 67,
    LowAgogo = 68,
    Cabasa = 69,
    Maracas = 70,
    ShortWhistle = 71,
    LongWhistle = 72,
    ShortGuiro = 73,
    LongGuiro = 74,
    Claves = 75,
    HiWoodBlock = 76,
    LowWoodBlock = 77,
    MuteCuica = 78,
    OpenCuica = 79,
    MuteTriangle = 80,
    OpenTriangle = 81,
}

impl Percussion {
    /// The pitch that triggers this sound on the percussion channel
    #[inline]
    pub const fn pitch(self) -> u8 {
        self as u8
    }
}

#[test]
fn instrument_numbers_are_offset_by_one() {
    use pretty_assertions::assert_eq;
    assert_eq!(Instrument::BrightAcousticPiano.program(), 1);
    assert_eq!(Instrument::BrightAcousticPiano.gm_number(), 2);
    assert_eq!(Instrument::ElectricPiano1.program(), 4);
    assert_eq!(Instrument::Lead1Square.gm_number(), 81);
    assert_eq!(Instrument::Gunshot.program(), 127);
    assert_eq!(Instrument::from_gm_number(0), None);
    assert_eq!(Instrument::from_gm_number(129), None);
    for program in 0..128u8 {
        let instrument = Instrument::try_from(program).unwrap();
        assert_eq!(Instrument::from_gm_number(instrument.gm_number()), Some(instrument));
    }
    assert!(Instrument::try_from(128).is_err());
}

#[test]
fn instrument_families() {
    assert_eq!(Instrument::Clavi.family(), "Piano");
    assert_eq!(Instrument::Celesta.family(), "Chromatic Percussion");
    assert_eq!(Instrument::Timpani.family(), "Strings");
    assert_eq!(Instrument::Pad8Sweep.family(), "Synth Pad");
    assert_eq!(Instrument::Gunshot.family(), "Sound Effects");
}

#[test]
fn percussion_key_map() {
    assert_eq!(Percussion::AcousticBassDrum.pitch(), 35);
    assert_eq!(Percussion::BassDrum1.pitch(), 36);
    assert_eq!(Percussion::CrashCymbal1.pitch(), 49);
    assert_eq!(Percussion::OpenTriangle.pitch(), 81);
    assert_eq!(Percussion::try_from(34).unwrap_err().number, 34);
    assert!(Percussion::try_from(82).is_err());
}
