#![doc = r#"
Contains all message types a track can hold

# Hierarchy
```text
                  |---------|
                  | Message |
                  |---------|
                 /     |     \
|-----------------| |-------------| |-------------|
| Channel Message | | MetaMessage | | End of Track|
|-----------------| |-------------| |-------------|
```

Every message knows its exact size on the wire, which is what lets a
[`Track`](crate::track::Track) compute its chunk length before any byte is written.
"#]

pub mod channel;
pub mod meta;

use alloc::vec::Vec;
use channel::ChannelMessage;
use meta::{META_STATUS, MetaKind, MetaMessage};

const END_OF_TRACK: [u8; 3] = [META_STATUS, MetaKind::EndOfTrack as u8, 0x00];

#[doc = r#"
The set of messages that can be placed in a track
"#]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// A channel voice message
    Channel(ChannelMessage),
    /// A meta event
    Meta(MetaMessage),
    /// The end of a track.
    ///
    /// Appending this to a track moves the track's end instead of adding an event.
    EndOfTrack,
}

impl Message {
    /// The payload of the message.
    ///
    /// For channel messages this is the status and data bytes; for meta events
    /// it excludes the `0xFF`, type and length prefix.
    pub fn data(&self) -> &[u8] {
        match self {
            Self::Channel(c) => c.data(),
            Self::Meta(m) => m.data(),
            Self::EndOfTrack => &[],
        }
    }

    /// Number of bytes the message occupies on the wire
    pub fn len(&self) -> usize {
        match self {
            Self::Channel(c) => c.len(),
            Self::Meta(m) => m.len(),
            Self::EndOfTrack => END_OF_TRACK.len(),
        }
    }

    /// No message encodes to zero bytes
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// True if this is the end of track marker
    pub const fn is_end_of_track(&self) -> bool {
        matches!(self, Self::EndOfTrack)
    }

    /// Appends the wire encoding to `buf`.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        match self {
            Self::Channel(c) => buf.extend_from_slice(c.data()),
            Self::Meta(m) => m.encode_into(buf),
            Self::EndOfTrack => buf.extend_from_slice(&END_OF_TRACK),
        }
    }

    /// The wire encoding
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len());
        self.encode_into(&mut bytes);
        bytes
    }
}

impl From<ChannelMessage> for Message {
    fn from(value: ChannelMessage) -> Self {
        Self::Channel(value)
    }
}

impl From<MetaMessage> for Message {
    fn from(value: MetaMessage) -> Self {
        Self::Meta(value)
    }
}
