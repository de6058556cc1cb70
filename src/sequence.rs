#![doc = r#"
Sequences: the tracks of one performance and their shared resolution
"#]

use crate::{
    ParameterError,
    file::{self, ByteSink, Resolution, WriteResult},
    track::Track,
};
use alloc::vec::Vec;
use core::convert::Infallible;

#[doc = r#"
An ordered set of [`Track`]s that share a resolution.

Tracks are numbered from zero in the order they were created and are never
reordered. When written, track `0` is the first track chunk in the file.

# Example
```rust
# use smfseq::prelude::*;
# fn main() -> Result<(), MidiError> {
let mut sequence = Sequence::with_resolution(480)?;
sequence
    .create_track()
    .append(Event::new(MetaMessage::time_signature(3, 4), 0))?;
sequence
    .create_track()
    .append(Event::new(ChannelMessage::note_off(9, 36, 0)?, 1440))?;

assert_eq!(sequence.num_tracks(), 2);
assert_eq!(sequence.duration(), 1440);
# Ok(())
# }
```
"#]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    resolution: Resolution,
    tracks: Vec<Track>,
}

impl Sequence {
    /// An empty sequence at the default resolution of 192 ticks per quarter note.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty sequence with `ticks_per_quarter_note` ticks per quarter note, 1-32767.
    pub fn with_resolution(ticks_per_quarter_note: u16) -> Result<Self, ParameterError> {
        Ok(Self {
            resolution: Resolution::new(ticks_per_quarter_note)?,
            tracks: Vec::new(),
        })
    }

    /// Add an empty track to the end of the sequence and return it.
    pub fn create_track(&mut self) -> &Track {
        self.tracks.push(Track::new());
        log::trace!("Created track {}", self.tracks.len() - 1);
        &self.tracks[self.tracks.len() - 1]
    }

    /// Returns the track at `index`, if there is one.
    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Returns all tracks, in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks in the sequence
    pub fn num_tracks(&self) -> usize {
        self.tracks.len()
    }

    /// Returns the timing of the sequence
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// The length of the sequence in ticks: the latest end of any track.
    ///
    /// An empty sequence has no length.
    pub fn duration(&self) -> u64 {
        self.tracks
            .iter()
            .map(Track::total_time)
            .max()
            .unwrap_or_default()
    }

    /// Write the sequence as a MIDI file. See [`file::write`].
    pub fn write_to<S: ByteSink + ?Sized>(&self, sink: &mut S) -> WriteResult<(), S::Error> {
        file::write(self, sink)
    }

    /// The complete MIDI file in memory.
    pub fn to_bytes(&self) -> WriteResult<Vec<u8>, Infallible> {
        let mut bytes = Vec::new();
        file::write(self, &mut bytes)?;
        Ok(bytes)
    }
}
