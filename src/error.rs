use crate::message::meta::MetaKind;
use thiserror::Error;

#[doc = r#"
A parameter passed to a message or sequence constructor was out of range.

Nothing is constructed when this error is returned.
"#]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Channels are 4-bit, 0-15
    #[error("Invalid channel {0}: must be in 0..=15")]
    Channel(u8),
    /// Note numbers are data bytes, 0-127
    #[error("Invalid note number {0}: must be in 0..=127")]
    Note(u8),
    /// Velocities are data bytes, 0-127
    #[error("Invalid velocity {0}: must be in 0..=127")]
    Velocity(u8),
    /// Key pressure is a data byte, 0-127
    #[error("Invalid pressure {0}: must be in 0..=127")]
    Pressure(u8),
    /// Program numbers are data bytes, 0-127
    #[error("Invalid instrument number {0}: must be in 0..=127")]
    Instrument(u8),
    /// The beats per minute do not give a 24-bit, nonzero tempo.
    #[error("Invalid bpm {0}: must be in 4..=60000000")]
    Bpm(u32),
    /// Microseconds per quarter note must fit in 24 bits and be nonzero.
    #[error("Invalid tempo of {0}µs per quarter note: must be in 1..=16777215")]
    Tempo(u32),
    /// Ticks per quarter note must fit in 15 bits and be nonzero.
    #[error("Invalid resolution {0}: must be in 1..=32767 ticks per quarter note")]
    Resolution(u16),
    /// The status byte names no constructible channel message, or not the
    /// kind it was given with.
    #[error("Invalid status byte {0:#04X} for a channel message")]
    Status(u8),
    /// The payload does not fit the meta event type, or the type is the
    /// end-of-track marker, which only a track may hold.
    #[error("Invalid {0:?} meta event payload")]
    MetaPayload(MetaKind),
}

#[doc = r#"
An event could not be placed on a track.

The track is left untouched when this error is returned.
"#]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EventError {
    /// Timelines start at tick zero.
    #[error("Time index {0} is negative")]
    NegativeTimeIndex(i64),
    /// The gap between this event and the one before it cannot be written
    /// as a four byte delta-time.
    #[error("Delta-time of {delta} ticks exceeds the 0x0FFFFFFF maximum")]
    DeltaTooLarge {
        /// ticks between the event and its predecessor
        delta: u64,
    },
}

#[doc = r#"
Any error that can occur while building a sequence.
"#]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MidiError {
    /// A message parameter was out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),
    /// An event was rejected by a track
    #[error("Invalid event: {0}")]
    InvalidEvent(#[from] EventError),
}

impl MidiError {
    /// True if a message or sequence parameter was out of range
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
    /// True if a track rejected an event
    pub const fn is_invalid_event(&self) -> bool {
        matches!(self, Self::InvalidEvent(_))
    }
}
