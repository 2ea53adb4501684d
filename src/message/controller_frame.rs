use std::fmt;

use crc16::{State, MODBUS};

use crate::BreachClassification;

const FRAME_LEN: usize = 5;

/// A breach notification as transmitted to the controller.
///
/// The frame format is:
///
/// Start Byte | End Byte | Meaning
/// 0          | 1        | The protocol header `0xfeed`, big endian
/// 2          | 2        | The breach classification code
/// 3          | 4        | A MODBUS CRC over bytes 0-2, little endian
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerFrame {
    classification: BreachClassification,
}

impl ControllerFrame {
    pub const HEADER: u16 = 0xfeed;
    pub const LEN: usize = FRAME_LEN;

    pub fn new(classification: BreachClassification) -> Self {
        Self { classification }
    }

    pub fn classification(&self) -> BreachClassification {
        self.classification
    }

    pub fn to_bytes(&self) -> [u8; FRAME_LEN] {
        let [h0, h1] = Self::HEADER.to_be_bytes();
        let body = [h0, h1, self.classification.code()];
        let [c0, c1] = crc(&body);
        [h0, h1, body[2], c0, c1]
    }

    /// Attempt to parse a frame received from the wire.
    pub fn parse(buffer: &[u8]) -> ParseFrameResult {
        if buffer.len() < 2 {
            return ParseFrameResult::Incomplete;
        }

        if buffer[0..2] != Self::HEADER.to_be_bytes() {
            return ParseFrameResult::Invalid("Unexpected header");
        }

        if buffer.len() < Self::LEN {
            return ParseFrameResult::Incomplete;
        }

        if buffer.len() > Self::LEN {
            return ParseFrameResult::Invalid("Too long");
        }

        if buffer[3..] != crc(&buffer[0..3]) {
            return ParseFrameResult::Invalid("CRC check failed");
        }

        match BreachClassification::try_from(buffer[2]) {
            Ok(classification) => ParseFrameResult::Ok(Self::new(classification)),
            Err(_) => ParseFrameResult::Invalid("Unknown breach classification"),
        }
    }
}

impl fmt::Display for ControllerFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Header: {:x}, Breach Type: {}", Self::HEADER, self.classification.code())
    }
}

#[derive(PartialEq, Eq, Debug)]
pub enum ParseFrameResult {
    Ok(ControllerFrame),
    Incomplete,
    Invalid(&'static str),
}

/// Compute the CRC check value for the given bytes
fn crc(data: &[u8]) -> [u8; 2] {
    State::<MODBUS>::calculate(data).to_le_bytes()
}

#[test]
fn test_to_bytes() {
    let frame = ControllerFrame::new(BreachClassification::TooHigh);
    assert_eq!(hex::encode(frame.to_bytes()), "feed02dca1");
    let frame = ControllerFrame::new(BreachClassification::Normal);
    assert_eq!(hex::encode(frame.to_bytes()), "feed005d60");
}

#[test]
fn test_display() {
    let frame = ControllerFrame::new(BreachClassification::TooLow);
    assert_eq!(frame.to_string(), "Header: feed, Breach Type: 1");
}

#[test]
fn test_parse_frame_happy() {
    let message = hex::decode("feed019ca0").unwrap();
    let result = ControllerFrame::parse(&message[..]);
    assert_eq!(result, ParseFrameResult::Ok(ControllerFrame::new(BreachClassification::TooLow)));
}

#[test]
fn test_parse_frame_incomplete() {
    let message = hex::decode("feed01").unwrap();
    assert_eq!(ControllerFrame::parse(&message[..]), ParseFrameResult::Incomplete);
    assert_eq!(ControllerFrame::parse(&[0xfe]), ParseFrameResult::Incomplete);
}

#[test]
fn test_parse_frame_bad_header() {
    let message = hex::decode("beef019ca0").unwrap();
    let result = ControllerFrame::parse(&message[..]);
    assert_eq!(result, ParseFrameResult::Invalid("Unexpected header"));
}

#[test]
fn test_parse_frame_too_long() {
    let message = hex::decode("feed019ca000").unwrap();
    let result = ControllerFrame::parse(&message[..]);
    assert_eq!(result, ParseFrameResult::Invalid("Too long"));
}

#[test]
fn test_parse_frame_bad_crc() {
    let message = hex::decode("feed019ca1").unwrap();
    let result = ControllerFrame::parse(&message[..]);
    assert_eq!(result, ParseFrameResult::Invalid("CRC check failed"));
}

#[test]
fn test_parse_frame_unknown_classification() {
    let mut message = vec![0xfe, 0xed, 0x07];
    let check = crc(&message);
    message.extend_from_slice(&check);
    let result = ControllerFrame::parse(&message[..]);
    assert_eq!(result, ParseFrameResult::Invalid("Unknown breach classification"));
}

#[test]
fn test_checksum() {
    let payload = [0xfe, 0xed, 0x02];
    assert_eq!(State::<MODBUS>::calculate(&payload), 0xa1dc);
}
