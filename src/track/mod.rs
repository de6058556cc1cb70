#![doc = r#"
Contains the [`Track`] type: a time-ordered lane of events

A track always ends with an end-of-track marker. The marker is not stored
with the other events; the track keeps its time separately and moves it
forward whenever a later event arrives, so the marker can never be removed,
reordered, or placed before another event.

# Concurrency

Every track guards its events with a single lock. Appending takes it for
writing; reading events, computing the chunk length and writing the track to
a file take it for reading. A track can therefore be shared between threads
that append to it while another reads it.

```rust
# use smfseq::prelude::*;
let track = Track::new();
std::thread::scope(|s| {
    for channel in 0..4 {
        let track = &track;
        s.spawn(move || {
            for tick in 0..10 {
                let on = ChannelMessage::note_on(channel, 60, 100).unwrap();
                track.append(Event::new(on, tick * 48)).unwrap();
            }
        });
    }
});
assert_eq!(track.num_events(), 41);
assert_eq!(track.total_time(), 432);
```
"#]

mod events;
pub(crate) use events::*;

use crate::{EventError, event::Event};
use alloc::vec::Vec;
use bevy_platform::sync::{PoisonError, RwLock, RwLockReadGuard};

#[doc = r#"
An ordered, thread-safe collection of [`Event`]s for one instrument or voice.

Events are kept in non-decreasing time order. Events at the same time keep
the order in which they were appended.
"#]
#[derive(Debug, Default)]
pub struct Track {
    inner: RwLock<TrackEvents>,
}

impl Track {
    /// Create a track holding only its end-of-track marker, at tick zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an event in time order.
    ///
    /// The event goes after every event whose time index is less than or equal
    /// to its own. If it lands at the end of the track, the end-of-track marker
    /// moves forward to it.
    ///
    /// Appending a [`Message::EndOfTrack`](crate::message::Message::EndOfTrack)
    /// event does not add an event; it moves the end of the track forward to
    /// the event's time, see [`Track::extend_to`].
    ///
    /// # Errors
    /// [`EventError::DeltaTooLarge`] if the event is further from the event
    /// before it than a delta-time can express. The track is unchanged.
    pub fn append(&self, event: Event) -> Result<(), EventError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if event.message().is_end_of_track() {
            return inner.extend_to(event.time_index());
        }
        inner.insert(event)
    }

    /// Move the end of the track to `time_index`, padding it with silence.
    ///
    /// The end never moves backwards; an earlier time is ignored.
    pub fn extend_to(&self, time_index: u64) -> Result<(), EventError> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_to(time_index)
    }

    /// Number of events, including the end-of-track marker.
    pub fn num_events(&self) -> usize {
        self.read().num_events()
    }

    /// True if the track holds nothing but its end-of-track marker.
    pub fn is_empty(&self) -> bool {
        self.read().events.is_empty()
    }

    /// Returns a copy of the event at `index`.
    ///
    /// The last index (`num_events() - 1`) is the end-of-track marker.
    pub fn get(&self, index: usize) -> Option<Event> {
        let inner = self.read();
        match index.cmp(&inner.events.len()) {
            core::cmp::Ordering::Less => inner.events.get(index).cloned(),
            core::cmp::Ordering::Equal => Some(inner.end_of_track_event()),
            core::cmp::Ordering::Greater => None,
        }
    }

    /// A snapshot of every event, ending with the end-of-track marker.
    pub fn events(&self) -> Vec<Event> {
        let inner = self.read();
        let mut events = Vec::with_capacity(inner.num_events());
        events.extend(inner.events.iter().cloned());
        events.push(inner.end_of_track_event());
        events
    }

    /// The time of the end-of-track marker, which is the track's duration in ticks.
    pub fn total_time(&self) -> u64 {
        self.read().end_of_track
    }

    /// The byte length of the track chunk body.
    ///
    /// This is the sum, over every event including the end-of-track marker, of
    /// the event's encoded delta-time and message bytes. It is the length
    /// written in the chunk's header.
    pub fn length(&self) -> usize {
        self.read().chunk_len()
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, TrackEvents> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }
        *self.read() == *other.read()
    }
}

impl Eq for Track {}
