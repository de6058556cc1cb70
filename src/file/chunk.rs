#![doc = r#"
Chunk framing

MIDI files are organized into chunks, each identified by a 4-character ASCII
type identifier followed by a 32-bit big-endian length and then the chunk
data.

```text
[Header Chunk: "MThd"]
[Track Chunk 1: "MTrk"]
[Track Chunk 2: "MTrk"]
...
[Track Chunk N: "MTrk"]
```
"#]

/// Identifies the header chunk
pub const HEADER_CHUNK_ID: [u8; 4] = *b"MThd";
/// Identifies a track chunk
pub const TRACK_CHUNK_ID: [u8; 4] = *b"MTrk";

/// Bytes taken by a chunk's identifier and length
pub const CHUNK_PREFIX_LEN: usize = 8;

/// The identifier and length that start every chunk.
pub(crate) const fn chunk_prefix(id: [u8; 4], length: u32) -> [u8; CHUNK_PREFIX_LEN] {
    let [a, b, c, d] = length.to_be_bytes();
    [id[0], id[1], id[2], id[3], a, b, c, d]
}
