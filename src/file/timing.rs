use crate::ParameterError;

/// Ticks per quarter note used when none is given
pub const DEFAULT_RESOLUTION: u16 = 192;

const MAX_RESOLUTION: u16 = 0x7FFF;

#[doc = r#"
The timing of a sequence, as ticks per quarter note.

This is the header chunk's division field. Its leading bit must be clear:
a set bit would mean SMPTE timing, which is not written by this crate.

# Example
```rust
# use smfseq::prelude::*;
assert_eq!(Resolution::default().ticks_per_quarter_note(), 192);
assert_eq!(Resolution::new(480).unwrap().to_be_bytes(), [0x01, 0xE0]);
assert_eq!(Resolution::new(0x8000), Err(ParameterError::Resolution(0x8000)));
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u16")
)]
pub struct Resolution(u16);

impl Resolution {
    /// Define the resolution in ticks per quarter note, 1-32767
    pub const fn new(ticks_per_quarter_note: u16) -> Result<Self, ParameterError> {
        if ticks_per_quarter_note == 0 || ticks_per_quarter_note > MAX_RESOLUTION {
            return Err(ParameterError::Resolution(ticks_per_quarter_note));
        }
        Ok(Self(ticks_per_quarter_note))
    }

    /// Returns the ticks per quarter note
    #[inline]
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        self.0
    }

    /// The division field as written in the header
    pub const fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self(DEFAULT_RESOLUTION)
    }
}

impl TryFrom<u16> for Resolution {
    type Error = ParameterError;
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
