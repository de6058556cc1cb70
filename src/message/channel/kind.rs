use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
The high nibble of a channel message's status byte.

Every kind is listed so a status byte can always be identified, but only
note on/off, polyphonic key pressure and program change can be constructed
through [`ChannelMessage`](super::ChannelMessage).

# Example
```rust
# use smfseq::prelude::*;
assert_eq!(ChannelKind::from_status(0x9A), Some(ChannelKind::NoteOn));
assert_eq!(u8::from(ChannelKind::ProgramChange), 0xC0);
assert_eq!(ChannelKind::from_status(0x3F), None);
```
"#]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ChannelKind {
    /// 0x8n
    NoteOff = 0x80,
    /// 0x9n
    NoteOn = 0x90,
    /// 0xAn (aftertouch)
    PolyphonicKeyPressure = 0xA0,
    /// 0xBn
    ControlChange = 0xB0,
    /// 0xCn
    ProgramChange = 0xC0,
    /// 0xDn
    ChannelPressure = 0xD0,
    /// 0xEn
    PitchWheelChange = 0xE0,
}

impl ChannelKind {
    /// Identify the kind of a status byte, ignoring its channel nibble.
    pub fn from_status(status: u8) -> Option<Self> {
        Self::try_from(status & 0xF0).ok()
    }

    /// Number of data bytes that follow the status byte
    pub const fn data_len(&self) -> usize {
        match self {
            Self::ProgramChange | Self::ChannelPressure => 1,
            _ => 2,
        }
    }
}
