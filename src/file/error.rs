use thiserror::Error;

#[doc = r#"
A set of errors that can occur while writing a sequence to a [`ByteSink`](super::ByteSink)

Nothing is retried or cleaned up: whatever was appended before the error stays
in the sink.
"#]
#[derive(Debug, Error)]
pub enum WriteError<E> {
    /// The sink failed to accept bytes. The sink's error is passed through unchanged.
    #[error("Writing to the byte sink failed: {0}")]
    Sink(#[source] E),
    /// The header stores the track count in two bytes.
    #[error("{0} tracks do not fit in a MIDI file header (max 65535)")]
    TooManyTracks(usize),
    /// Chunk lengths are stored in four bytes.
    #[error("Track {track} is {length} bytes long, which does not fit a chunk length")]
    ChunkTooLong {
        /// zero-based index of the track
        track: usize,
        /// the track's chunk body length
        length: usize,
    },
}

impl<E> WriteError<E> {
    /// True if the sink itself failed
    pub const fn is_sink_failure(&self) -> bool {
        matches!(self, Self::Sink(_))
    }

    /// Returns the sink's error, if the sink failed.
    pub fn into_sink_error(self) -> Option<E> {
        match self {
            Self::Sink(e) => Some(e),
            _ => None,
        }
    }
}

/// The result of writing to a sink with error type `E`
pub type WriteResult<T, E> = Result<T, WriteError<E>>;
