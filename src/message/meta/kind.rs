use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The type byte of a supported meta event
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MetaKind {
    /// FF 01 len text
    Text = 0x01,
    /// FF 05 len text
    Lyric = 0x05,
    /// FF 06 len text
    Marker = 0x06,
    /// FF 2F 00
    EndOfTrack = 0x2F,
    /// FF 51 03 tttttt
    Tempo = 0x51,
    /// FF 58 04 nn dd cc bb
    TimeSignature = 0x58,
}
