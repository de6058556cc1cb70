#![doc = r#"
Variable-length quantities

MIDI files store delta-times and meta event lengths as big-endian groups of
7 bits. Every byte except the last has its high bit set to signal that
another byte follows.

```text
value        encoded
0x00000000   00
0x0000007F   7F
0x00000080   81 00
0x00003FFF   FF 7F
0x00004000   81 80 00
0x0FFFFFFF   FF FF FF 7F
```

The file format caps quantities at four bytes ([`MAX_VALUE`]). The codec
itself accepts the full `u64` range; callers that write into a file are
responsible for staying under the cap.
"#]

use alloc::vec::Vec;

/// Largest quantity the file format allows: 28 bits, four encoded bytes.
pub const MAX_VALUE: u64 = 0x0FFF_FFFF;

const CONTINUATION: u8 = 0x80;
const GROUP_MASK: u64 = 0x7F;

/// Returns the number of bytes `value` occupies once encoded.
///
/// Zero still takes a single byte.
///
/// # Example
/// ```rust
/// # use smfseq::vlq;
/// assert_eq!(vlq::byte_length(0), 1);
/// assert_eq!(vlq::byte_length(0x7F), 1);
/// assert_eq!(vlq::byte_length(0x80), 2);
/// ```
pub const fn byte_length(mut value: u64) -> usize {
    let mut length = 0;
    loop {
        value >>= 7;
        length += 1;
        if value == 0 {
            return length;
        }
    }
}

/// Encodes `value`, most significant group first.
pub fn encode(value: u64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(byte_length(value));
    encode_into(value, &mut bytes);
    bytes
}

/// Appends the encoding of `value` to `buf`.
pub fn encode_into(value: u64, buf: &mut Vec<u8>) {
    let groups = byte_length(value);
    for i in (1..groups).rev() {
        let group = ((value >> (7 * i)) & GROUP_MASK) as u8;
        buf.push(group | CONTINUATION);
    }
    buf.push((value & GROUP_MASK) as u8);
}
