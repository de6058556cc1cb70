#![doc = r#"
Build multi-track MIDI sequences and write them as Standard MIDI Files.

# Overview

A [`Sequence`](crate::sequence::Sequence) owns a list of [`Track`](crate::track::Track)s
that share a resolution (ticks per quarter note). Each track keeps its
[`Event`](crate::event::Event)s in chronological order and always ends with an
end-of-track marker. Writing a sequence produces a format 1 (multi-track) file:
one `MThd` header chunk followed by one `MTrk` chunk per track.

```rust
# use smfseq::prelude::*;
# fn main() -> Result<(), MidiError> {
let mut sequence = Sequence::new();

let tempo = sequence.create_track();
tempo.append(Event::new(MetaMessage::tempo(120)?, 0))?;

let piano = sequence.create_track();
piano.append(Event::new(ChannelMessage::note_on(0, 60, 100)?, 0))?;
piano.append(Event::new(ChannelMessage::note_off(0, 60, 64)?, 192))?;

let bytes = sequence.to_bytes().unwrap();
assert_eq!(&bytes[0..4], b"MThd");
assert_eq!(sequence.duration(), 192);
# Ok(())
# }
```
"#]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
pub use error::*;

pub mod event;
pub mod file;
pub mod message;
pub mod sequence;
pub mod track;
pub mod vlq;

#[doc = r#"
Common re-exports for building and writing sequences
"#]
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::file::{IoSink, write_file, write_to_writer};
    pub use crate::{
        error::*,
        event::*,
        file::{ByteSink, Resolution, WriteError, write},
        message::{channel::*, meta::*, *},
        sequence::*,
        track::*,
        vlq,
    };
}
