//! PC telemetry frame codec.
//!
//! Wire format (11 bytes, fixed length):
//! ```text
//! ┌──────┬───────────────┬───────────────┬──────┬──────┐
//! │ '$'  │ roll  (4B)    │ pitch (4B)    │ '\r' │ '\n' │
//! │ 0x24 │ LE i32, deg   │ LE i32, deg   │ 0x0D │ 0x0A │
//! └──────┴───────────────┴───────────────┴──────┴──────┘
//! ```
//!
//! Angles are sent as whole degrees, truncated toward zero.  The PC-side
//! plotter resynchronises on the `'$'` start byte.

use core::fmt;

use crate::control::orientation::FilteredAngles;

pub const FRAME_START: u8 = b'$';
pub const FRAME_LEN: usize = 11;
const TERMINATOR: [u8; 2] = *b"\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Fewer than [`FRAME_LEN`] bytes supplied.
    TooShort(usize),
    /// First byte was not [`FRAME_START`].
    BadStart(u8),
    /// Bytes 9..11 were not `"\r\n"`.
    BadTerminator,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(n) => write!(f, "frame too short ({n} of {FRAME_LEN} bytes)"),
            Self::BadStart(b) => write!(f, "bad start byte 0x{b:02x}"),
            Self::BadTerminator => write!(f, "missing CRLF terminator"),
        }
    }
}

/// Encode the current angles into a telemetry frame.
pub fn encode_frame(angles: FilteredAngles) -> [u8; FRAME_LEN] {
    // `as` saturates and truncates toward zero; NaN becomes 0.
    let roll = (angles.roll as i32).to_le_bytes();
    let pitch = (angles.pitch as i32).to_le_bytes();

    let mut frame = [0u8; FRAME_LEN];
    frame[0] = FRAME_START;
    frame[1..5].copy_from_slice(&roll);
    frame[5..9].copy_from_slice(&pitch);
    frame[9..].copy_from_slice(&TERMINATOR);
    frame
}

/// Decode a frame back into `(roll, pitch)` whole degrees.
///
/// Only the first [`FRAME_LEN`] bytes are inspected; trailing bytes belong
/// to the next frame.
pub fn decode_frame(bytes: &[u8]) -> Result<(i32, i32), FrameError> {
    let Some(frame) = bytes.get(..FRAME_LEN) else {
        return Err(FrameError::TooShort(bytes.len()));
    };
    if frame[0] != FRAME_START {
        return Err(FrameError::BadStart(frame[0]));
    }
    if frame[9..] != TERMINATOR {
        return Err(FrameError::BadTerminator);
    }

    let roll = i32::from_le_bytes([frame[1], frame[2], frame[3], frame[4]]);
    let pitch = i32::from_le_bytes([frame[5], frame[6], frame[7], frame[8]]);
    Ok((roll, pitch))
}
