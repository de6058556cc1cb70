use alloc::vec::Vec;

#[doc = r#"
A destination for the bytes of a MIDI file.

The writer only ever appends; it never seeks or reads back. Errors returned
by [`ByteSink::append`] abort the write and are handed back to the caller
unchanged.
"#]
pub trait ByteSink {
    /// The error produced when bytes cannot be appended
    type Error;

    /// Append `bytes` to the end of the destination.
    fn append(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl ByteSink for Vec<u8> {
    type Error = core::convert::Infallible;

    fn append(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    type Error = S::Error;

    fn append(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).append(bytes)
    }
}

#[cfg(feature = "std")]
#[doc = r#"
Adapts any [`std::io::Write`] (a file, a socket, a `BufWriter`) into a [`ByteSink`].
"#]
#[derive(Debug)]
pub struct IoSink<W>(pub W);

#[cfg(feature = "std")]
impl<W> IoSink<W> {
    /// Returns the wrapped writer
    pub fn into_inner(self) -> W {
        self.0
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> ByteSink for IoSink<W> {
    type Error = std::io::Error;

    fn append(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.0.write_all(bytes)
    }
}
