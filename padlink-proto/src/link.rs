//! Co-processor link frames: how the wireless radio module reports pads.
//!
//! The radio co-processor owns pairing and the controller stack; it streams
//! connect/disconnect notifications and state reports to the bridge over a
//! serial link using small binary frames:
//!
//! ```text
//! [0xA7 sync] [len] [type] [payload ...] [crc8]
//! ```
//!
//! `len` counts everything after itself (type + payload + crc). The checksum
//! is CRC-8/SMBUS over type + payload.
//!
//! Frame types:
//!
//! | Type | Name         | Payload                                         |
//! |------|--------------|-------------------------------------------------|
//! | 0x01 | Connected    | handle, category                                |
//! | 0x02 | Disconnected | handle                                          |
//! | 0x03 | State        | handle, category, buttons u16, dpad, 4 axes i16,|
//! |      |              | brake u16, throttle u16, misc                   |
//!
//! All multi-byte payload fields are MSB-first. Axis and trigger values are
//! widened to the stack's `i32` accessor width on decode.

use crate::bytes::{get_i16_be, get_u16_be, put_i16_be, put_u16_be};
use crate::crc::calculate_crc8;
use crate::types::ControllerReading;

/// Frame sync byte.
pub const LINK_SYNC: u8 = 0xA7;

/// Largest body (type + payload + crc) of any frame type.
const MAX_BODY_LEN: usize = 20;

/// Largest complete frame, including sync and length bytes.
pub const MAX_FRAME_LEN: usize = MAX_BODY_LEN + 2;

const TYPE_CONNECTED: u8 = 0x01;
const TYPE_DISCONNECTED: u8 = 0x02;
const TYPE_STATE: u8 = 0x03;

/// A decoded link frame from the radio co-processor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkFrame {
    /// A pad finished pairing and is now live.
    Connected { handle: u8, category: u8 },
    /// A pad dropped off the radio.
    Disconnected { handle: u8 },
    /// Current inputs for a connected pad.
    State {
        handle: u8,
        reading: ControllerReading,
    },
}

/// Error type for link frame decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Length byte out of range or payload size wrong for the frame type.
    Length,
    /// CRC-8 mismatch.
    Checksum,
    /// Unrecognized frame type.
    UnknownType,
}

/// Push parser for link frames.
///
/// Feed bytes as they arrive; a complete, checksum-verified frame is
/// returned from the call that consumes its last byte. Bytes outside a
/// frame are skipped until the next sync byte, so the parser recovers
/// from line noise on its own.
pub struct LinkParser {
    buf: [u8; MAX_BODY_LEN],
    pos: usize,
    expected: usize,
    state: ParserState,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ParserState {
    AwaitSync,
    AwaitLen,
    Body,
}

impl LinkParser {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: [0; MAX_BODY_LEN],
            pos: 0,
            expected: 0,
            state: ParserState::AwaitSync,
        }
    }

    /// Feed one byte.
    ///
    /// Returns `Ok(Some(frame))` when this byte completes a valid frame,
    /// `Ok(None)` while a frame is still in flight (or the byte was skipped
    /// hunting for sync).
    ///
    /// # Errors
    ///
    /// Returns a [`LinkError`] when the in-flight frame turns out to be
    /// invalid; the parser resets and hunts for the next sync byte.
    pub fn feed(&mut self, byte: u8) -> Result<Option<LinkFrame>, LinkError> {
        match self.state {
            ParserState::AwaitSync => {
                if byte == LINK_SYNC {
                    self.state = ParserState::AwaitLen;
                }
                Ok(None)
            }
            ParserState::AwaitLen => {
                let len = byte as usize;
                // Minimum body is type + crc.
                if len < 2 || len > MAX_BODY_LEN {
                    self.state = ParserState::AwaitSync;
                    return Err(LinkError::Length);
                }
                self.expected = len;
                self.pos = 0;
                self.state = ParserState::Body;
                Ok(None)
            }
            ParserState::Body => {
                self.buf[self.pos] = byte;
                self.pos += 1;
                if self.pos < self.expected {
                    return Ok(None);
                }

                self.state = ParserState::AwaitSync;
                let body = &self.buf[..self.expected];
                let (payload, crc) = body.split_at(self.expected - 1);
                if calculate_crc8(payload) != crc[0] {
                    return Err(LinkError::Checksum);
                }
                decode_body(payload).map(Some)
            }
        }
    }
}

impl Default for LinkParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a checksum-verified frame body (type + payload).
fn decode_body(body: &[u8]) -> Result<LinkFrame, LinkError> {
    let payload = &body[1..];
    match body[0] {
        TYPE_CONNECTED => {
            if payload.len() != 2 {
                return Err(LinkError::Length);
            }
            Ok(LinkFrame::Connected {
                handle: payload[0],
                category: payload[1],
            })
        }
        TYPE_DISCONNECTED => {
            if payload.len() != 1 {
                return Err(LinkError::Length);
            }
            Ok(LinkFrame::Disconnected { handle: payload[0] })
        }
        TYPE_STATE => {
            if payload.len() != 18 {
                return Err(LinkError::Length);
            }
            Ok(LinkFrame::State {
                handle: payload[0],
                reading: ControllerReading {
                    category: payload[1],
                    buttons: get_u16_be(&payload[2..4]),
                    dpad: payload[4],
                    left_x: get_i16_be(&payload[5..7]) as i32,
                    left_y: get_i16_be(&payload[7..9]) as i32,
                    right_x: get_i16_be(&payload[9..11]) as i32,
                    right_y: get_i16_be(&payload[11..13]) as i32,
                    brake: get_u16_be(&payload[13..15]) as i32,
                    throttle: get_u16_be(&payload[15..17]) as i32,
                    misc_buttons: payload[17],
                    connected: true,
                },
            })
        }
        _ => Err(LinkError::UnknownType),
    }
}

impl LinkFrame {
    /// Encode the frame into `buf`, returning the number of bytes written.
    ///
    /// Used by tests and by co-processor firmware; the bridge itself only
    /// decodes. Axis and trigger values are narrowed to their wire widths.
    ///
    /// # Panics
    ///
    /// Panics if `buf.len() < MAX_FRAME_LEN`.
    pub fn encode(&self, buf: &mut [u8]) -> usize {
        assert!(buf.len() >= MAX_FRAME_LEN, "buffer too small for link frame");

        let body_len = match *self {
            LinkFrame::Connected { handle, category } => {
                buf[2] = TYPE_CONNECTED;
                buf[3] = handle;
                buf[4] = category;
                3
            }
            LinkFrame::Disconnected { handle } => {
                buf[2] = TYPE_DISCONNECTED;
                buf[3] = handle;
                2
            }
            LinkFrame::State { handle, reading } => {
                buf[2] = TYPE_STATE;
                buf[3] = handle;
                buf[4] = reading.category;
                put_u16_be(&mut buf[5..7], reading.buttons);
                buf[7] = reading.dpad;
                put_i16_be(&mut buf[8..10], reading.left_x as i16);
                put_i16_be(&mut buf[10..12], reading.left_y as i16);
                put_i16_be(&mut buf[12..14], reading.right_x as i16);
                put_i16_be(&mut buf[14..16], reading.right_y as i16);
                put_u16_be(&mut buf[16..18], reading.brake as u16);
                put_u16_be(&mut buf[18..20], reading.throttle as u16);
                buf[20] = reading.misc_buttons;
                19
            }
        };

        buf[0] = LINK_SYNC;
        buf[1] = (body_len + 1) as u8;
        buf[2 + body_len] = calculate_crc8(&buf[2..2 + body_len]);
        body_len + 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(parser: &mut LinkParser, bytes: &[u8]) -> Option<LinkFrame> {
        let mut result = None;
        for &b in bytes {
            if let Ok(Some(frame)) = parser.feed(b) {
                result = Some(frame);
            }
        }
        result
    }

    #[test]
    fn test_parse_connected_frame() {
        let frame = LinkFrame::Connected {
            handle: 2,
            category: 3,
        };
        let mut buf = [0u8; MAX_FRAME_LEN];
        let len = frame.encode(&mut buf);

        let mut parser = LinkParser::new();
        assert_eq!(feed_all(&mut parser, &buf[..len]), Some(frame));
    }

    #[test]
    fn test_parse_state_frame() {
        let frame = LinkFrame::State {
            handle: 1,
            reading: ControllerReading {
                buttons: 0x1234,
                dpad: 0x01,
                left_x: 100,
                left_y: -200,
                right_x: 0,
                right_y: 0,
                brake: 300,
                throttle: 0,
                misc_buttons: 0x05,
                category: 3,
                connected: true,
            },
        };
        let mut buf = [0u8; MAX_FRAME_LEN];
        let len = frame.encode(&mut buf);

        let mut parser = LinkParser::new();
        assert_eq!(feed_all(&mut parser, &buf[..len]), Some(frame));
    }

    #[test]
    fn test_parser_skips_leading_garbage() {
        let frame = LinkFrame::Disconnected { handle: 0 };
        let mut buf = [0u8; MAX_FRAME_LEN];
        let len = frame.encode(&mut buf);

        let mut parser = LinkParser::new();
        assert_eq!(parser.feed(0x00), Ok(None));
        assert_eq!(parser.feed(0xFF), Ok(None));
        assert_eq!(feed_all(&mut parser, &buf[..len]), Some(frame));
    }

    #[test]
    fn test_parser_rejects_bad_checksum() {
        let frame = LinkFrame::Connected {
            handle: 0,
            category: 1,
        };
        let mut buf = [0u8; MAX_FRAME_LEN];
        let len = frame.encode(&mut buf);
        buf[len - 1] ^= 0xFF;

        let mut parser = LinkParser::new();
        let mut saw_error = false;
        for &b in &buf[..len] {
            if parser.feed(b) == Err(LinkError::Checksum) {
                saw_error = true;
            }
        }
        assert!(saw_error);
    }

    #[test]
    fn test_parser_rejects_bad_length_and_recovers() {
        let mut parser = LinkParser::new();
        assert_eq!(parser.feed(LINK_SYNC), Ok(None));
        assert_eq!(parser.feed(0xFF), Err(LinkError::Length));

        // Parser must accept the next valid frame afterwards.
        let frame = LinkFrame::Disconnected { handle: 5 };
        let mut buf = [0u8; MAX_FRAME_LEN];
        let len = frame.encode(&mut buf);
        assert_eq!(feed_all(&mut parser, &buf[..len]), Some(frame));
    }

    #[test]
    fn test_parser_rejects_unknown_type() {
        let body = [0x7E, 0x00];
        let crc = calculate_crc8(&body);
        let raw = [LINK_SYNC, 3, body[0], body[1], crc];

        let mut parser = LinkParser::new();
        let mut last = Ok(None);
        for &b in &raw {
            last = parser.feed(b);
        }
        assert_eq!(last, Err(LinkError::UnknownType));
    }

    #[test]
    fn test_state_encode_narrows_axes() {
        // Values beyond i16 narrow on the wire, matching the accessor cast.
        let frame = LinkFrame::State {
            handle: 0,
            reading: ControllerReading {
                left_x: -511,
                brake: 1023,
                ..ControllerReading::neutral(0)
            },
        };
        let mut buf = [0u8; MAX_FRAME_LEN];
        frame.encode(&mut buf);
        assert_eq!(get_i16_be(&buf[8..10]), -511);
        assert_eq!(get_u16_be(&buf[16..18]), 1023);
    }
}
