//! Common test utilities for integration tests
//!
//! `TestHandle` drives the exported C functions the way a C caller would,
//! freeing the handle on drop.

use std::ffi::CString;
use std::os::raw::{c_char, c_int};
use std::ptr;

use rjsjai_dummy::ffi::{self, RJSJAI};

/// Owned handle created through `ai_create`
pub struct TestHandle {
    raw: *mut RJSJAI,
}

impl TestHandle {
    pub fn create(token: &str) -> Self {
        let token = CString::new(token).unwrap();
        let raw = unsafe { ffi::ai_create(token.as_ptr()) };
        assert!(!raw.is_null(), "ai_create returned null");
        Self { raw }
    }

    pub fn raw(&self) -> *mut RJSJAI {
        self.raw
    }

    pub fn send(&self, kind: c_int, prompt: &str) -> c_int {
        let prompt = CString::new(prompt).unwrap();
        unsafe { ffi::ai_send(self.raw, kind, prompt.as_ptr()) }
    }

    pub fn status(&self) -> c_int {
        unsafe { ffi::ai_status(self.raw) }
    }

    /// Length probe with a null destination
    pub fn probe_len(&self) -> c_int {
        unsafe { ffi::ai_result(self.raw, ptr::null_mut()) }
    }

    /// Probe, allocate, copy: the pattern C callers are expected to follow
    pub fn read_result(&self) -> Vec<u8> {
        let len = self.probe_len();
        assert!(len >= 0, "probe returned {}", len);

        let mut buf = vec![0u8; len as usize];
        let copied = unsafe { ffi::ai_result(self.raw, buf.as_mut_ptr() as *mut c_char) };
        assert_eq!(copied, len);
        buf
    }
}

impl Drop for TestHandle {
    fn drop(&mut self) {
        unsafe { ffi::ai_free(self.raw) };
    }
}

/// Expected text body for a send
pub fn expected_body(kind: c_int, status: c_int, prompt: &str) -> String {
    format!("{{\"type\":{},\"status\":{},\"prompt\":\"{}\"}}", kind, status, prompt)
}

/// Cases from the original homework judge: (type, prompt)
pub fn judge_prompts() -> Vec<(c_int, &'static str)> {
    vec![
        (ffi::AI_TYPE_CHAT, "c1"),
        (ffi::AI_TYPE_CHAT, "c2"),
        (ffi::AI_TYPE_CHAT, "c3"),
        (ffi::AI_TYPE_CHAT, "c4"),
        (ffi::AI_TYPE_DRAW, "d1"),
        (ffi::AI_TYPE_DRAW, "d2"),
        (ffi::AI_TYPE_DRAW, "d3"),
        (ffi::AI_TYPE_DRAW, "d4"),
        (ffi::AI_TYPE_WOLFRAM, "m1"),
        (ffi::AI_TYPE_WOLFRAM, "m2"),
        (ffi::AI_TYPE_WOLFRAM, "m3"),
        (ffi::AI_TYPE_WOLFRAM, "m4"),
    ]
}
