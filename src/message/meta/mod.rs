#![doc = r#"
Meta events: non-MIDI information stored in a track

```text
|------|------|----------------|-------------|
| 0xFF | type | length (VLQ)   | payload ... |
|------|------|----------------|-------------|
```

Only the meta events needed to lay out a performance are supported:
tempo, time signature, and the text family (text, lyric, marker).
The end-of-track meta event is managed by [`Track`](crate::track::Track).
"#]

mod kind;
pub use kind::*;

mod tempo;
pub use tempo::*;

mod time_signature;
pub use time_signature::*;

use crate::vlq;
use alloc::vec::Vec;

/// Marks a track event as a meta event
pub const META_STATUS: u8 = 0xFF;

#[doc = r#"
A meta event with its type and raw payload.

The payload is never modified after construction, so the on-wire length is
fixed once the message exists.

# Example
```rust
# use smfseq::prelude::*;
let marker = MetaMessage::marker("Chorus");
assert_eq!(marker.kind(), MetaKind::Marker);
assert_eq!(marker.data(), b"Chorus");
// 0xFF, type, one length byte, six payload bytes
assert_eq!(marker.len(), 9);
```
"#]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMetaMessage")
)]
pub struct MetaMessage {
    kind: MetaKind,
    data: Vec<u8>,
}

impl MetaMessage {
    pub(crate) const fn new(kind: MetaKind, data: Vec<u8>) -> Self {
        Self { kind, data }
    }

    /// Free-form text. Type `0x01`.
    pub fn text(text: impl AsRef<[u8]>) -> Self {
        Self::new(MetaKind::Text, text.as_ref().to_vec())
    }

    /// A lyric syllable, usually one per note. Type `0x05`.
    pub fn lyric(text: impl AsRef<[u8]>) -> Self {
        Self::new(MetaKind::Lyric, text.as_ref().to_vec())
    }

    /// A rehearsal mark or section name. Type `0x06`.
    pub fn marker(text: impl AsRef<[u8]>) -> Self {
        Self::new(MetaKind::Marker, text.as_ref().to_vec())
    }

    /// The kind of meta event
    #[inline]
    pub const fn kind(&self) -> MetaKind {
        self.kind
    }

    /// The type byte written after `0xFF`
    #[inline]
    pub fn type_byte(&self) -> u8 {
        self.kind.into()
    }

    /// The payload, without the status, type or length prefix.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of bytes on the wire, including the `0xFF`, type and length prefix.
    pub fn len(&self) -> usize {
        2 + vlq::byte_length(self.data.len() as u64) + self.data.len()
    }

    /// Meta events always carry at least their status, type and length
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Appends the wire encoding to `buf`.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        buf.reserve(self.len());
        buf.push(META_STATUS);
        buf.push(self.type_byte());
        vlq::encode_into(self.data.len() as u64, buf);
        buf.extend_from_slice(&self.data);
    }
}

/// The serialized form, checked against its type before it becomes a
/// [`MetaMessage`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMetaMessage {
    kind: MetaKind,
    data: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMetaMessage> for MetaMessage {
    type Error = crate::ParameterError;

    fn try_from(raw: RawMetaMessage) -> Result<Self, Self::Error> {
        let well_formed = match raw.kind {
            MetaKind::Text | MetaKind::Lyric | MetaKind::Marker => true,
            // only Message::EndOfTrack moves a track's end
            MetaKind::EndOfTrack => false,
            MetaKind::Tempo => matches!(raw.data.as_slice(), &[hi, mid, lo] if (hi | mid | lo) != 0),
            MetaKind::TimeSignature => raw.data.len() == 4,
        };
        if !well_formed {
            return Err(crate::ParameterError::MetaPayload(raw.kind));
        }
        Ok(Self::new(raw.kind, raw.data))
    }
}
