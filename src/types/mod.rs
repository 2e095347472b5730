//! Wire-level types shared by the engine and the C surface
//!
//! Request kinds and status codes are plain integers on the C side; the
//! enums here give them names without restricting what `ai_send` accepts.

use serde::{Deserialize, Serialize};
use std::os::raw::c_int;

/// Envelope written ahead of the text body for binary request kinds
pub const BINARY_SIGNATURE: [u8; 8] = [0xA1, 0x7E, 0x27, 0x07, 0x00, 0x0D, 0x0A, 0x67];

/// Kinds of request understood by the real service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum RequestType {
    Chat = 2,
    Draw = 3,
    Wolfram = 4,
}

impl RequestType {
    pub const ALL: [RequestType; 3] = [Self::Chat, Self::Draw, Self::Wolfram];

    /// Map a raw type code, `None` for codes the service does not define
    pub fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            2 => Some(Self::Chat),
            3 => Some(Self::Draw),
            4 => Some(Self::Wolfram),
            _ => None,
        }
    }

    pub fn as_raw(self) -> c_int {
        self as c_int
    }

    /// Whether responses of this kind carry the binary signature
    pub fn is_binary(self) -> bool {
        matches!(self, Self::Draw | Self::Wolfram)
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chat => write!(f, "chat"),
            Self::Draw => write!(f, "draw"),
            Self::Wolfram => write!(f, "wolfram"),
        }
    }
}

impl std::str::FromStr for RequestType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chat" => Ok(Self::Chat),
            "draw" => Ok(Self::Draw),
            "wolfram" | "math" => Ok(Self::Wolfram),
            _ => Err(format!("Unknown request type: {}", s)),
        }
    }
}

/// Status codes reported by `ai_send` and `ai_status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum AiStatus {
    #[default]
    Success = 0,
    /// Simulated transport failure
    HttpUnknownError = 1,
    /// Null handle handed across the C boundary
    InvalidArgument = -1,
}

impl AiStatus {
    pub fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(Self::Success),
            1 => Some(Self::HttpUnknownError),
            -1 => Some(Self::InvalidArgument),
            _ => None,
        }
    }

    pub fn as_raw(self) -> c_int {
        self as c_int
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl std::fmt::Display for AiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::HttpUnknownError => write!(f, "unknown HTTP error"),
            Self::InvalidArgument => write!(f, "invalid argument"),
        }
    }
}
