#![doc = r#"
Contains the channel voice messages a track can carry

# Layout
```text
|--------------------|-----------|-----------|
| kind   | channel   | data 1    | data 2    |
| 4 bits | 4 bits    | 0-127     | 0-127     |
|--------------------|-----------|-----------|
```
Program changes only carry a single data byte.
"#]
mod kind;
pub use kind::*;

use crate::ParameterError;

const CHANNEL_MASK: u8 = 0x0F;
const KIND_MASK: u8 = 0xF0;
const DATA_MAX: u8 = 0x7F;

#[doc = r#"
A validated channel voice message.

The status byte and data bytes are stored exactly as they will be written.

# Example
```rust
# use smfseq::prelude::*;
let on = ChannelMessage::note_on(3, 60, 100).unwrap();
assert_eq!(on.data(), &[0x93, 60, 100]);
assert_eq!(on.kind(), ChannelKind::NoteOn);

assert_eq!(
    ChannelMessage::note_on(16, 60, 100),
    Err(ParameterError::Channel(16))
);
```
"#]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawChannelMessage")
)]
pub struct ChannelMessage {
    kind: ChannelKind,
    bytes: [u8; 3],
}

impl ChannelMessage {
    /// Start sounding `note` on `channel`.
    pub fn note_on(channel: u8, note: u8, velocity: u8) -> Result<Self, ParameterError> {
        check_channel(channel)?;
        check_note(note)?;
        check_data(velocity, ParameterError::Velocity)?;
        Ok(Self::two_data(ChannelKind::NoteOn, channel, note, velocity))
    }

    /// Release `note` on `channel`.
    pub fn note_off(channel: u8, note: u8, velocity: u8) -> Result<Self, ParameterError> {
        check_channel(channel)?;
        check_note(note)?;
        check_data(velocity, ParameterError::Velocity)?;
        Ok(Self::two_data(ChannelKind::NoteOff, channel, note, velocity))
    }

    /// Change the aftertouch of a single held `note`.
    pub fn polyphonic_key_pressure(
        channel: u8,
        note: u8,
        pressure: u8,
    ) -> Result<Self, ParameterError> {
        check_channel(channel)?;
        check_note(note)?;
        check_data(pressure, ParameterError::Pressure)?;
        Ok(Self::two_data(
            ChannelKind::PolyphonicKeyPressure,
            channel,
            note,
            pressure,
        ))
    }

    /// Select the instrument (patch) for `channel`.
    pub fn program_change(channel: u8, instrument: u8) -> Result<Self, ParameterError> {
        check_channel(channel)?;
        check_data(instrument, ParameterError::Instrument)?;
        Ok(Self {
            kind: ChannelKind::ProgramChange,
            bytes: [status(ChannelKind::ProgramChange, channel), instrument, 0],
        })
    }

    const fn two_data(kind: ChannelKind, channel: u8, one: u8, two: u8) -> Self {
        Self {
            kind,
            bytes: [status(kind, channel), one, two],
        }
    }

    /// The status byte: kind in the high nibble, channel in the low nibble.
    #[inline]
    pub const fn status(&self) -> u8 {
        self.bytes[0]
    }

    /// The channel the message is addressed to, 0-15
    #[inline]
    pub const fn channel(&self) -> u8 {
        self.bytes[0] & CHANNEL_MASK
    }

    /// Identifies the type of message from its status byte
    #[inline]
    pub const fn kind(&self) -> ChannelKind {
        self.kind
    }

    /// The encoded message: the status byte followed by its data bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Number of bytes on the wire, 2 or 3.
    #[inline]
    pub const fn len(&self) -> usize {
        1 + self.kind.data_len()
    }

    /// Channel messages always carry a status byte
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// The serialized form, checked by the constructors before it becomes a
/// [`ChannelMessage`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawChannelMessage {
    kind: ChannelKind,
    bytes: [u8; 3],
}

#[cfg(feature = "serde")]
impl TryFrom<RawChannelMessage> for ChannelMessage {
    type Error = ParameterError;

    fn try_from(raw: RawChannelMessage) -> Result<Self, Self::Error> {
        let [status, one, two] = raw.bytes;
        if ChannelKind::from_status(status) != Some(raw.kind) {
            return Err(ParameterError::Status(status));
        }
        let channel = status & CHANNEL_MASK;
        match raw.kind {
            ChannelKind::NoteOn => Self::note_on(channel, one, two),
            ChannelKind::NoteOff => Self::note_off(channel, one, two),
            ChannelKind::PolyphonicKeyPressure => {
                Self::polyphonic_key_pressure(channel, one, two)
            }
            ChannelKind::ProgramChange => Self::program_change(channel, one),
            ChannelKind::ControlChange
            | ChannelKind::ChannelPressure
            | ChannelKind::PitchWheelChange => Err(ParameterError::Status(status)),
        }
    }
}

const fn status(kind: ChannelKind, channel: u8) -> u8 {
    (kind as u8 & KIND_MASK) | (channel & CHANNEL_MASK)
}

const fn check_channel(channel: u8) -> Result<(), ParameterError> {
    if channel & !CHANNEL_MASK != 0 {
        return Err(ParameterError::Channel(channel));
    }
    Ok(())
}

const fn check_note(note: u8) -> Result<(), ParameterError> {
    if note > DATA_MAX {
        return Err(ParameterError::Note(note));
    }
    Ok(())
}

fn check_data(value: u8, err: fn(u8) -> ParameterError) -> Result<(), ParameterError> {
    if value > DATA_MAX {
        return Err(err(value));
    }
    Ok(())
}
