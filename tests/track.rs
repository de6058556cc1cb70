use pretty_assertions::assert_eq;
use smfseq::prelude::*;

/// Bytes taken by the end of track marker with a one byte delta-time
const END_OF_TRACK_EVENT_LEN: usize = 4;

fn note_on(time: u64) -> Event {
    Event::new(ChannelMessage::note_on(0, 60, 50).unwrap(), time)
}

fn program_change(instrument: u8, time: u64) -> Event {
    Event::new(
        ChannelMessage::program_change(0, instrument).unwrap(),
        time,
    )
}

fn assert_well_formed(track: &Track) {
    let events = track.events();
    let (end, rest) = events.split_last().unwrap();
    assert!(end.message().is_end_of_track());
    assert!(rest.iter().all(|e| !e.message().is_end_of_track()));
    assert!(
        events
            .windows(2)
            .all(|w| w[0].time_index() <= w[1].time_index()),
        "out of order: {events:?}"
    );
    assert_eq!(end.time_index(), track.total_time());
}

#[test]
fn new_track_holds_only_end_of_track() {
    let track = Track::new();
    assert_eq!(track.num_events(), 1);
    assert!(track.is_empty());

    let end = track.get(0).unwrap();
    assert_eq!(end.time_index(), 0);
    assert_eq!(end.message(), &Message::EndOfTrack);
    assert_eq!(end.message().to_bytes(), vec![0xFF, 0x2F, 0x00]);
    assert_eq!(track.length(), END_OF_TRACK_EVENT_LEN);
    assert_eq!(track.get(1), None);
}

#[test]
fn append_one_event() {
    let track = Track::new();
    track.append(program_change(60, 0)).unwrap();
    assert_eq!(track.num_events(), 2);
    assert!(!track.is_empty());
}

#[test]
fn negative_time_is_rejected_before_the_track() {
    let err = Event::from_signed(ChannelMessage::program_change(0, 60).unwrap(), -1).unwrap_err();
    assert_eq!(err, EventError::NegativeTimeIndex(-1));
    assert!(MidiError::from(err).is_invalid_event());

    let event = Event::from_signed(ChannelMessage::program_change(0, 60).unwrap(), 3).unwrap();
    assert_eq!(event.time_index(), 3);
}

#[test]
fn end_of_track_follows_the_last_event() {
    let track = Track::new();
    track.append(program_change(60, 4)).unwrap();
    assert_eq!(track.num_events(), 2);
    assert_eq!(track.get(0).unwrap().time_index(), 4);
    assert_eq!(track.get(1).unwrap().time_index(), 4);
    assert_eq!(track.total_time(), 4);

    track.append(program_change(60, 7)).unwrap();
    assert_eq!(track.num_events(), 3);
    assert_eq!(track.get(1).unwrap().time_index(), 7);
    assert_eq!(track.get(2).unwrap().time_index(), 7);
    assert_eq!(track.total_time(), 7);

    for time in [9, 11, 50] {
        track.append(note_on(time)).unwrap();
    }
    assert_eq!(track.total_time(), 50);
    assert_well_formed(&track);
}

#[test]
fn total_time() {
    let track = Track::new();
    track.append(program_change(60, 5)).unwrap();
    track.append(program_change(60, 6)).unwrap();
    assert_eq!(track.total_time(), 6);

    // earlier events never pull the end back
    track.append(program_change(60, 2)).unwrap();
    assert_eq!(track.total_time(), 6);
    assert_eq!(track.get(0).unwrap().time_index(), 2);
}

#[test]
fn end_of_track_message_moves_the_end() {
    let track = Track::new();
    track.append(note_on(10)).unwrap();
    track.append(Event::new(Message::EndOfTrack, 100)).unwrap();
    assert_eq!(track.num_events(), 2);
    assert_eq!(track.total_time(), 100);

    // never backwards
    track.append(Event::new(Message::EndOfTrack, 50)).unwrap();
    track.extend_to(20).unwrap();
    assert_eq!(track.total_time(), 100);

    // an event before the padded end stays before it
    track.append(note_on(60)).unwrap();
    assert_eq!(track.num_events(), 3);
    assert_eq!(track.get(1).unwrap().time_index(), 60);
    assert_eq!(track.total_time(), 100);

    // and one after it moves it again
    track.append(note_on(130)).unwrap();
    assert_eq!(track.total_time(), 130);
    assert_well_formed(&track);
}

#[test]
fn length_with_one_program_change() {
    let track = Track::new();
    let event = program_change(60, 5);
    let message_len = event.message().len();
    track.append(event).unwrap();
    assert_eq!(track.length(), message_len + 1 + END_OF_TRACK_EVENT_LEN);
}

#[test]
fn length_with_one_note() {
    let track = Track::new();
    assert_eq!(track.length(), END_OF_TRACK_EVENT_LEN);
    track.append(note_on(5)).unwrap();
    assert_eq!(track.length(), 3 + 1 + END_OF_TRACK_EVENT_LEN);
}

#[test]
fn length_of_every_kind_of_message() {
    let track = Track::new();
    let note = note_on(500);
    let program = program_change(20, 0);
    let tempo = Event::new(MetaMessage::tempo(60).unwrap(), 200);

    let expected = (note.message().len() + 2)
        + (program.message().len() + 1)
        + (tempo.message().len() + 2)
        + END_OF_TRACK_EVENT_LEN;

    track.append(note).unwrap();
    track.append(program).unwrap();
    track.append(tempo).unwrap();

    // deltas: 0, 200, 300, 0
    assert_eq!(track.length(), expected);
    assert_eq!(track.length(), (2 + 1) + (6 + 2) + (3 + 2) + 4);
}

#[test]
fn length_of_simultaneous_events() {
    let track = Track::new();
    let events = 5;
    for _ in 0..events {
        track.append(note_on(228)).unwrap();
    }
    assert_eq!(track.num_events(), events + 1);

    // only the first event carries the two byte delta
    let expected = (3 + 2) + (events - 1) * (3 + 1) + END_OF_TRACK_EVENT_LEN;
    assert_eq!(track.length(), expected);
}

#[test]
fn simultaneous_events_keep_insertion_order() {
    let track = Track::new();
    track.append(note_on(10)).unwrap();
    track.append(program_change(1, 5)).unwrap();
    track.append(program_change(2, 5)).unwrap();
    track.append(program_change(3, 5)).unwrap();

    let instruments: Vec<u8> = track
        .events()
        .iter()
        .filter_map(|e| match e.message() {
            Message::Channel(c) if c.kind() == ChannelKind::ProgramChange => Some(c.data()[1]),
            _ => None,
        })
        .collect();
    assert_eq!(instruments, vec![1, 2, 3]);
}

#[test]
fn insertion_order_does_not_matter() {
    let track_one = Track::new();
    track_one.append(program_change(1, 0)).unwrap();
    track_one
        .append(Event::new(ChannelMessage::note_on(0, 67, 80).unwrap(), 0))
        .unwrap();
    track_one
        .append(Event::new(ChannelMessage::note_off(0, 67, 80).unwrap(), 192))
        .unwrap();
    track_one
        .append(Event::new(ChannelMessage::note_on(0, 78, 80).unwrap(), 169))
        .unwrap();
    track_one
        .append(Event::new(ChannelMessage::note_off(0, 78, 80).unwrap(), 361))
        .unwrap();

    let track_two = Track::new();
    track_two.append(program_change(1, 0)).unwrap();
    track_two
        .append(Event::new(ChannelMessage::note_on(0, 67, 80).unwrap(), 0))
        .unwrap();
    track_two
        .append(Event::new(ChannelMessage::note_on(0, 78, 80).unwrap(), 169))
        .unwrap();
    track_two
        .append(Event::new(ChannelMessage::note_off(0, 67, 80).unwrap(), 192))
        .unwrap();
    track_two
        .append(Event::new(ChannelMessage::note_off(0, 78, 80).unwrap(), 361))
        .unwrap();

    assert_eq!(track_one.length(), track_two.length());
    assert_eq!(track_one.events(), track_two.events());
    assert_eq!(track_one, track_two);
}

#[test]
fn every_rotation_gives_the_same_track() {
    // distinct times, so any order of appends must converge
    let times = [0u64, 3, 3 + 128, 1000, 20_000, 20_001, 2_000_000];
    let events: Vec<Event> = times
        .iter()
        .enumerate()
        .map(|(i, &t)| Event::new(ChannelMessage::note_on(0, i as u8, 64).unwrap(), t))
        .collect();

    let reference = Track::new();
    for event in &events {
        reference.append(event.clone()).unwrap();
    }
    assert_well_formed(&reference);

    for rotation in 0..events.len() {
        for reversed in [false, true] {
            let mut order = events.clone();
            order.rotate_left(rotation);
            if reversed {
                order.reverse();
            }
            let track = Track::new();
            for event in order {
                track.append(event).unwrap();
            }
            assert_well_formed(&track);
            assert_eq!(track.events(), reference.events());
            assert_eq!(track.length(), reference.length());
        }
    }
}

#[test]
fn delta_time_too_large_leaves_the_track_alone() {
    let track = Track::new();
    track.append(note_on(10)).unwrap();
    let before = track.events();

    let err = track.append(note_on(10 + vlq::MAX_VALUE + 1)).unwrap_err();
    assert_eq!(
        err,
        EventError::DeltaTooLarge {
            delta: vlq::MAX_VALUE + 1
        }
    );
    assert_eq!(track.events(), before);

    // exactly at the ceiling is fine
    track.append(note_on(10 + vlq::MAX_VALUE)).unwrap();
    assert_eq!(track.total_time(), 10 + vlq::MAX_VALUE);
    assert_eq!(track.length(), 4 + (4 + 3) + END_OF_TRACK_EVENT_LEN);
}

#[test]
fn concurrent_appends() {
    const THREADS: u8 = 8;
    const PER_THREAD: u64 = 200;

    let track = Track::new();
    std::thread::scope(|s| {
        for channel in 0..THREADS {
            let track = &track;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    // interleave times so inserts land in the middle too
                    let time = (i * 7 + u64::from(channel) * 13) % 500;
                    let on = ChannelMessage::note_on(channel, 60, 100).unwrap();
                    track.append(Event::new(on, time)).unwrap();
                    // readers run alongside writers
                    assert!(track.length() >= END_OF_TRACK_EVENT_LEN);
                }
            });
        }
    });

    assert_eq!(
        track.num_events(),
        usize::from(THREADS) * PER_THREAD as usize + 1
    );
    assert_well_formed(&track);
    assert_eq!(
        track.total_time(),
        track.events().iter().rev().nth(1).unwrap().time_index()
    );
}
