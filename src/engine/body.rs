//! Response body rendering
//!
//! A response is an optional binary envelope followed by a one-line JSON
//! record: `{"type":<type>,"status":<status>,"prompt":<prompt>}`.

use serde::{Deserialize, Serialize};
use std::os::raw::c_int;

use crate::config::PromptEscaping;
use crate::error::DummyResult;
use crate::types::{AiStatus, RequestType, BINARY_SIGNATURE};

/// Decoded view of the textual part of a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(rename = "type")]
    pub kind: c_int,
    pub status: c_int,
    pub prompt: String,
}

impl ResponseBody {
    /// Parse a full result buffer, skipping the signature when present
    pub fn parse(result: &[u8]) -> DummyResult<Self> {
        let (_, text) = split_signature(result);
        Ok(serde_json::from_slice(text)?)
    }

    pub fn request_type(&self) -> Option<RequestType> {
        RequestType::from_raw(self.kind)
    }

    pub fn ai_status(&self) -> Option<AiStatus> {
        AiStatus::from_raw(self.status)
    }
}

/// Format the JSON record for one send
pub fn format_body(kind: c_int, status: c_int, prompt: &str, escaping: PromptEscaping) -> String {
    let prompt = match escaping {
        PromptEscaping::Quoted => serde_json::Value::String(prompt.to_owned()).to_string(),
        PromptEscaping::Raw => format!("\"{}\"", prompt),
    };
    format!("{{\"type\":{},\"status\":{},\"prompt\":{}}}", kind, status, prompt)
}

/// Render the complete result buffer.
///
/// The signature is only written for binary kinds on a successful send.
pub fn render(kind: c_int, status: AiStatus, prompt: &str, escaping: PromptEscaping) -> Vec<u8> {
    let body = format_body(kind, status.as_raw(), prompt, escaping);
    let binary = status.is_success() && RequestType::from_raw(kind).is_some_and(RequestType::is_binary);

    let mut out = Vec::with_capacity(body.len() + if binary { BINARY_SIGNATURE.len() } else { 0 });
    if binary {
        out.extend_from_slice(&BINARY_SIGNATURE);
    }
    out.extend_from_slice(body.as_bytes());
    out
}

/// Split a result buffer into its signature (if any) and text
pub fn split_signature(result: &[u8]) -> (Option<&[u8]>, &[u8]) {
    if result.starts_with(&BINARY_SIGNATURE) {
        let (sig, rest) = result.split_at(BINARY_SIGNATURE.len());
        (Some(sig), rest)
    } else {
        (None, result)
    }
}
