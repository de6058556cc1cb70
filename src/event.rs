#![doc = r#"
Events: messages placed on a track's timeline
"#]

use crate::{EventError, message::Message};

#[doc = r#"
A message placed at an absolute position on a timeline.

The time index is measured in ticks from the start of the sequence; the
sequence's [`Resolution`](crate::file::Resolution) says how many ticks make a
quarter note.

# Example
```rust
# use smfseq::prelude::*;
let event = Event::new(ChannelMessage::note_on(0, 64, 90).unwrap(), 384);
assert_eq!(event.time_index(), 384);

assert_eq!(
    Event::from_signed(Message::EndOfTrack, -1),
    Err(EventError::NegativeTimeIndex(-1))
);
```
"#]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    message: Message,
    time_index: u64,
}

impl Event {
    /// Place `message` at `time_index` ticks.
    pub fn new(message: impl Into<Message>, time_index: u64) -> Self {
        Self {
            message: message.into(),
            time_index,
        }
    }

    /// Place `message` at a time computed with signed arithmetic.
    ///
    /// Fails if the time is before the start of the timeline.
    pub fn from_signed(message: impl Into<Message>, time_index: i64) -> Result<Self, EventError> {
        let Ok(ticks) = u64::try_from(time_index) else {
            return Err(EventError::NegativeTimeIndex(time_index));
        };
        Ok(Self::new(message, ticks))
    }

    /// The message of the event
    pub const fn message(&self) -> &Message {
        &self.message
    }

    /// Ticks from the start of the timeline
    pub const fn time_index(&self) -> u64 {
        self.time_index
    }

    /// Returns the message, consuming the event
    pub fn into_message(self) -> Message {
        self.message
    }
}
