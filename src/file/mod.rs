#![doc = r#"
Writes a [`Sequence`] as a format 1 Standard MIDI File

The file is produced in a single pass:

1. The header chunk: `MThd`, length 6, format 1, the number of tracks and the
   resolution.
2. One `MTrk` chunk per track, in track order. Each starts with the track's
   [`length`](crate::track::Track::length), followed by every event as a
   variable-length delta-time and the message bytes.

Each track is read under its lock for the duration of its chunk, so the length
declared in the chunk header always matches the bytes that follow it.
"#]

mod chunk;
pub use chunk::*;

mod error;
pub use error::*;

mod header;
pub use header::*;

mod sink;
pub use sink::*;

mod timing;
pub use timing::*;

use crate::{sequence::Sequence, track::Track, vlq};
use alloc::vec::Vec;

/// Write `sequence` to `sink`.
///
/// # Errors
/// - [`WriteError::Sink`] as soon as the sink fails; the rest of the file is
///   not written.
/// - [`WriteError::TooManyTracks`] before anything is written if the sequence
///   has more than 65535 tracks.
/// - [`WriteError::ChunkTooLong`] before a track's chunk is started if its
///   length does not fit 32 bits.
///
/// # Example
/// ```rust
/// # use smfseq::prelude::*;
/// let mut sequence = Sequence::new();
/// sequence
///     .create_track()
///     .append(Event::new(ChannelMessage::note_on(0, 60, 50).unwrap(), 5))
///     .unwrap();
///
/// let mut bytes = Vec::new();
/// write(&sequence, &mut bytes).unwrap();
/// assert_eq!(
///     bytes,
///     [
///         b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 1, 0, 192, // header
///         b'M', b'T', b'r', b'k', 0, 0, 0, 8, // track prefix
///         5, 0x90, 60, 50, // note on at tick 5
///         0, 0xFF, 0x2F, 0x00, // end of track
///     ]
/// );
/// ```
pub fn write<S: ByteSink + ?Sized>(sequence: &Sequence, sink: &mut S) -> WriteResult<(), S::Error> {
    let tracks = sequence.tracks();
    let num_tracks =
        u16::try_from(tracks.len()).map_err(|_| WriteError::TooManyTracks(tracks.len()))?;

    let header = MidiFileHeader::new(num_tracks, sequence.resolution());
    sink.append(&header.to_bytes()).map_err(WriteError::Sink)?;

    let mut scratch = Vec::new();
    for (index, track) in tracks.iter().enumerate() {
        write_track(index, track, sink, &mut scratch)?;
    }
    Ok(())
}

fn write_track<S: ByteSink + ?Sized>(
    index: usize,
    track: &Track,
    sink: &mut S,
    scratch: &mut Vec<u8>,
) -> WriteResult<(), S::Error> {
    let events = track.read();
    let length = events.chunk_len();
    let Ok(chunk_len) = u32::try_from(length) else {
        return Err(WriteError::ChunkTooLong {
            track: index,
            length,
        });
    };
    log::debug!(
        "Writing track {index}: {} events in {length} bytes",
        events.num_events()
    );

    sink.append(&chunk_prefix(TRACK_CHUNK_ID, chunk_len))
        .map_err(WriteError::Sink)?;

    for (delta, message) in events.deltas() {
        scratch.clear();
        vlq::encode_into(delta, scratch);
        message.encode_into(scratch);
        sink.append(scratch).map_err(WriteError::Sink)?;
    }
    Ok(())
}

/// Write `sequence` to any [`std::io::Write`].
///
/// The writer is not flushed.
#[cfg(feature = "std")]
pub fn write_to_writer<W: std::io::Write>(
    sequence: &Sequence,
    writer: W,
) -> WriteResult<(), std::io::Error> {
    write(sequence, &mut IoSink(writer))
}

/// Create (or truncate) the file at `path` and write `sequence` to it.
#[cfg(feature = "std")]
pub fn write_file(
    sequence: &Sequence,
    path: impl AsRef<std::path::Path>,
) -> WriteResult<(), std::io::Error> {
    use std::io::Write;

    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(WriteError::Sink)?;
    let mut writer = std::io::BufWriter::new(file);
    write_to_writer(sequence, &mut writer)?;
    writer.flush().map_err(WriteError::Sink)?;
    log::info!(
        "Wrote {} tracks to {}",
        sequence.num_tracks(),
        path.display()
    );
    Ok(())
}
