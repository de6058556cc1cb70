use super::{
    Resolution,
    chunk::{CHUNK_PREFIX_LEN, HEADER_CHUNK_ID, chunk_prefix},
};

/// The header chunk's data is always six bytes
pub const HEADER_LEN: u32 = 6;

/// Format 1: one or more simultaneous tracks
pub const FORMAT_MULTI_TRACK: u16 = 1;

/// Total size of the header chunk, prefix included
pub const HEADER_CHUNK_LEN: usize = CHUNK_PREFIX_LEN + HEADER_LEN as usize;

#[doc = r#"
The contents of a format 1 header chunk.

```text
"MThd" 00 00 00 06 | 00 01 | tracks (u16) | ticks per quarter note (u16)
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiFileHeader {
    num_tracks: u16,
    resolution: Resolution,
}

impl MidiFileHeader {
    /// Create a new header from a track count and resolution
    pub const fn new(num_tracks: u16, resolution: Resolution) -> Self {
        Self {
            num_tracks,
            resolution,
        }
    }

    /// Number of track chunks that follow the header
    pub const fn num_tracks(&self) -> u16 {
        self.num_tracks
    }

    /// Get the timing props
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// The complete header chunk
    pub const fn to_bytes(&self) -> [u8; HEADER_CHUNK_LEN] {
        let prefix = chunk_prefix(HEADER_CHUNK_ID, HEADER_LEN);
        let [f0, f1] = FORMAT_MULTI_TRACK.to_be_bytes();
        let [t0, t1] = self.num_tracks.to_be_bytes();
        let [r0, r1] = self.resolution.to_be_bytes();
        [
            prefix[0], prefix[1], prefix[2], prefix[3], prefix[4], prefix[5], prefix[6],
            prefix[7], f0, f1, t0, t1, r0, r1,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_bytes() {
        let header = MidiFileHeader::new(3, Resolution::new(96).unwrap());
        assert_eq!(
            header.to_bytes(),
            [
                b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 3, 0, 96
            ]
        );
    }
}
