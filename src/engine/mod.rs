//! Mock AI handle
//!
//! `MockAi` is the whole state behind one `RJSJAI*`: the token it was
//! created with, the status of the last send, and the bytes that send
//! produced. Nothing is shared between handles.

mod body;

pub use body::*;

use std::os::raw::c_int;

use crate::config::DummyConfig;
use crate::error::{DummyError, DummyResult};
use crate::types::AiStatus;

/// One mock AI session
#[derive(Debug, Clone)]
pub struct MockAi {
    token: String,
    status: AiStatus,
    result: Vec<u8>,
}

impl MockAi {
    /// Create a handle; never fails
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        tracing::debug!(token_len = token.len(), "Mock AI handle created");

        Self {
            token,
            status: AiStatus::Success,
            result: Vec::new(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Status of the most recent send
    pub fn status(&self) -> AiStatus {
        self.status
    }

    /// Bytes produced by the most recent send
    pub fn result(&self) -> &[u8] {
        &self.result
    }

    pub fn result_len(&self) -> usize {
        self.result.len()
    }

    /// Run one request and replace the result buffer.
    ///
    /// Status is recomputed on every call; only `config.expect_error`
    /// decides between success and the simulated HTTP failure.
    pub fn send(&mut self, kind: c_int, prompt: &str, config: &DummyConfig) -> AiStatus {
        self.status = if config.expect_error {
            tracing::warn!(kind, "Simulating unknown HTTP error");
            AiStatus::HttpUnknownError
        } else {
            AiStatus::Success
        };

        self.result = render(kind, self.status, prompt, config.prompt_escaping);

        tracing::debug!(
            kind,
            status = self.status.as_raw(),
            escaping = %config.prompt_escaping,
            result_len = self.result.len(),
            "Request handled"
        );

        self.status
    }

    /// Copy the result into `dest` and return its length.
    ///
    /// With `None` this is a pure length probe.
    pub fn copy_result(&self, dest: Option<&mut [u8]>) -> DummyResult<usize> {
        let len = self.result.len();
        if let Some(dest) = dest {
            if dest.len() < len {
                return Err(DummyError::BufferTooSmall {
                    needed: len,
                    available: dest.len(),
                });
            }
            dest[..len].copy_from_slice(&self.result);
        }
        Ok(len)
    }

    /// Decode the textual part of the current result
    pub fn body(&self) -> DummyResult<ResponseBody> {
        ResponseBody::parse(&self.result)
    }
}
