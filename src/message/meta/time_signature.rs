use super::{MetaKind, MetaMessage};
use alloc::vec;

/// MIDI clocks in one metronome click, as written in every time signature
pub const MIDI_CLOCKS_PER_METRONOME_CLICK: u8 = 1;
/// Notated 32nd notes in a MIDI quarter note, as written in every time signature
pub const THIRTY_SECOND_NOTES_PER_QUARTER_NOTE: u8 = 8;

impl MetaMessage {
    /// A time signature change: `FF 58 04 nn dd cc bb`.
    ///
    /// `beat_value` is the notated denominator (4 for quarter notes, 8 for
    /// eighths) and is stored as a power of two. A denominator that is not a
    /// power of two rounds up to the next one.
    ///
    /// # Example
    /// ```rust
    /// # use smfseq::prelude::*;
    /// let six_eight = MetaMessage::time_signature(6, 8);
    /// assert_eq!(six_eight.data(), &[6, 3, 1, 8]);
    /// ```
    pub fn time_signature(beats_per_bar: u8, beat_value: u16) -> Self {
        Self::new(
            MetaKind::TimeSignature,
            vec![
                beats_per_bar,
                denominator_exponent(beat_value),
                MIDI_CLOCKS_PER_METRONOME_CLICK,
                THIRTY_SECOND_NOTES_PER_QUARTER_NOTE,
            ],
        )
    }
}

/// The number of times `beat_value` halves before it is no more than one,
/// counting at least one halving.
const fn denominator_exponent(beat_value: u16) -> u8 {
    if beat_value <= 2 {
        return 1;
    }
    (u16::BITS - (beat_value - 1).leading_zeros()) as u8
}
