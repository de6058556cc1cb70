use crate::{
    EventError,
    event::Event,
    message::Message,
    vlq::{self, MAX_VALUE},
};
use alloc::vec::Vec;

static END_OF_TRACK: Message = Message::EndOfTrack;

/// The state behind a [`Track`](super::Track)'s lock.
///
/// `events` never holds an end-of-track message; the marker lives in
/// `end_of_track`, which is never less than the last event's time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct TrackEvents {
    pub(crate) events: Vec<Event>,
    pub(crate) end_of_track: u64,
}

impl TrackEvents {
    pub(crate) fn num_events(&self) -> usize {
        self.events.len() + 1
    }

    fn last_time(&self) -> u64 {
        self.events.last().map_or(0, Event::time_index)
    }

    pub(crate) fn end_of_track_event(&self) -> Event {
        Event::new(Message::EndOfTrack, self.end_of_track)
    }

    /// Stable insert: after every event at or before `event`'s time.
    pub(crate) fn insert(&mut self, event: Event) -> Result<(), EventError> {
        let time = event.time_index();
        let index = self.events.partition_point(|e| e.time_index() <= time);
        let previous = index
            .checked_sub(1)
            .map_or(0, |i| self.events[i].time_index());
        check_delta(time - previous)?;

        if index == self.events.len() {
            log::trace!("appending event at tick {time} to the end of the track");
            self.events.push(event);
            self.end_of_track = self.end_of_track.max(time);
        } else {
            log::trace!("inserting event at tick {time} at position {index}");
            self.events.insert(index, event);
        }
        Ok(())
    }

    pub(crate) fn extend_to(&mut self, time: u64) -> Result<(), EventError> {
        if time <= self.end_of_track {
            return Ok(());
        }
        check_delta(time - self.last_time())?;
        log::trace!("end of track moved from tick {} to {time}", self.end_of_track);
        self.end_of_track = time;
        Ok(())
    }

    /// Every event as (delta-time, message), ending with the end-of-track marker.
    pub(crate) fn deltas(&self) -> impl Iterator<Item = (u64, &Message)> {
        let mut previous = 0;
        self.events
            .iter()
            .map(|e| (e.time_index(), e.message()))
            .chain(core::iter::once((self.end_of_track, &END_OF_TRACK)))
            .map(move |(time, message)| {
                let delta = time - previous;
                previous = time;
                (delta, message)
            })
    }

    pub(crate) fn chunk_len(&self) -> usize {
        self.deltas()
            .map(|(delta, message)| vlq::byte_length(delta) + message.len())
            .sum()
    }
}

const fn check_delta(delta: u64) -> Result<(), EventError> {
    if delta > MAX_VALUE {
        return Err(EventError::DeltaTooLarge { delta });
    }
    Ok(())
}
