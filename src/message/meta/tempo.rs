#![doc = r#"
Tempo meta events

# Format

`FF 51 03 tt tt tt`: the length of a quarter note in microseconds, as a
24-bit big-endian number. 500,000µs is 120 beats per minute.
"#]

use super::{MetaKind, MetaMessage};
use crate::ParameterError;
use alloc::vec;

const MICROS_PER_MINUTE: u32 = 60_000_000;

/// The largest microseconds per quarter note a tempo event can hold
pub const MAX_MICROS_PER_QUARTER_NOTE: u32 = 0x00FF_FFFF;

impl MetaMessage {
    /// A tempo change, in beats (quarter notes) per minute.
    ///
    /// The tempo is stored as `60_000_000 / bpm` microseconds per quarter
    /// note, rounded down. Zero bpm is rejected, as are tempos slower than
    /// 4 bpm (which do not fit in 24 bits) and tempos over 60,000,000 bpm
    /// (which round down to nothing).
    ///
    /// # Example
    /// ```rust
    /// # use smfseq::prelude::*;
    /// let tempo = MetaMessage::tempo(60).unwrap();
    /// assert_eq!(tempo.data(), &[0x0F, 0x42, 0x40]); // 1,000,000µs
    /// assert_eq!(MetaMessage::tempo(0), Err(ParameterError::Bpm(0)));
    /// ```
    pub fn tempo(bpm: u32) -> Result<Self, ParameterError> {
        if bpm == 0 {
            return Err(ParameterError::Bpm(bpm));
        }
        let micros = MICROS_PER_MINUTE / bpm;
        if micros == 0 || micros > MAX_MICROS_PER_QUARTER_NOTE {
            return Err(ParameterError::Bpm(bpm));
        }
        Ok(Self::tempo_from_micros(micros))
    }

    /// A tempo change given directly in microseconds per quarter note.
    pub fn tempo_micros(micros_per_quarter_note: u32) -> Result<Self, ParameterError> {
        if micros_per_quarter_note == 0 || micros_per_quarter_note > MAX_MICROS_PER_QUARTER_NOTE {
            return Err(ParameterError::Tempo(micros_per_quarter_note));
        }
        Ok(Self::tempo_from_micros(micros_per_quarter_note))
    }

    fn tempo_from_micros(micros: u32) -> Self {
        let [_, hi, mid, lo] = micros.to_be_bytes();
        Self::new(MetaKind::Tempo, vec![hi, mid, lo])
    }

    /// For tempo events, the microseconds per quarter note.
    pub fn micros_per_quarter_note(&self) -> Option<u32> {
        match (self.kind(), self.data()) {
            (MetaKind::Tempo, &[hi, mid, lo]) => Some(u32::from_be_bytes([0, hi, mid, lo])),
            _ => None,
        }
    }
}
