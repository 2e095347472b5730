//! C API with the exact symbol names of the real RJSJ AI library
//!
//! Linking this crate's `cdylib`/`staticlib` in place of `librjsjai` gives a
//! homework client the same five entry points, backed by `MockAi`.
//!
//! ```c
//! RJSJAI* ai_create(const char* token);
//! int     ai_send(RJSJAI* ai, int type, const char* prompt);
//! int     ai_status(RJSJAI* ai);
//! int     ai_result(RJSJAI* ai, char* dest);
//! void    ai_free(RJSJAI* ai);
//! ```

use std::borrow::Cow;
use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::ptr;

use crate::config::DummyConfig;
use crate::engine::MockAi;
use crate::types::{AiStatus, RequestType};

/// Opaque handle type as seen from C
#[allow(non_camel_case_types)]
pub type RJSJAI = MockAi;

pub const AI_SUCCESS: c_int = AiStatus::Success as c_int;
pub const AI_ERROR_HTTP_UNKNOWN: c_int = AiStatus::HttpUnknownError as c_int;
pub const AI_INVALID_ARGUMENT: c_int = AiStatus::InvalidArgument as c_int;

pub const AI_TYPE_CHAT: c_int = RequestType::Chat as c_int;
pub const AI_TYPE_DRAW: c_int = RequestType::Draw as c_int;
pub const AI_TYPE_WOLFRAM: c_int = RequestType::Wolfram as c_int;

/// Library version as a static null-terminated string
#[no_mangle]
pub extern "C" fn ai_version() -> *const c_char {
    static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");
    VERSION.as_ptr() as *const c_char
}

/// Create a handle holding `token`.
///
/// A null `token` yields a handle with an empty token. Never returns null.
///
/// # Safety
/// `token` must be null or point to a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn ai_create(token: *const c_char) -> *mut RJSJAI {
    crate::telemetry::init_from_env();

    let token = lossy_str(token);
    Box::into_raw(Box::new(MockAi::new(token)))
}

/// Send a request and return the resulting status.
///
/// The environment is consulted on every call, so toggling
/// `DUMMY_AI_EXPECT_ERROR` between sends takes effect immediately.
///
/// # Safety
/// `ai` must be null or a live handle from `ai_create`. `prompt` must be
/// null or a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn ai_send(ai: *mut RJSJAI, kind: c_int, prompt: *const c_char) -> c_int {
    let Some(ai) = ai.as_mut() else {
        tracing::warn!("ai_send called with null handle");
        return AI_INVALID_ARGUMENT;
    };

    let config = DummyConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring invalid environment configuration");
        DummyConfig {
            expect_error: std::env::var_os(crate::config::ENV_EXPECT_ERROR).is_some(),
            ..Default::default()
        }
    });

    let prompt = lossy_str(prompt);
    ai.send(kind, &prompt, &config).as_raw()
}

/// Status of the most recent send.
///
/// # Safety
/// `ai` must be null or a live handle from `ai_create`.
#[no_mangle]
pub unsafe extern "C" fn ai_status(ai: *mut RJSJAI) -> c_int {
    match ai.as_ref() {
        Some(ai) => ai.status().as_raw(),
        None => {
            tracing::warn!("ai_status called with null handle");
            AI_INVALID_ARGUMENT
        }
    }
}

/// Copy the result into `dest` and return its length in bytes.
///
/// With a null `dest` only the length is returned. No null terminator is
/// written and no capacity is checked: size `dest` from a prior probe.
/// A result longer than `INT_MAX` cannot be reported and is refused with
/// `AI_INVALID_ARGUMENT` without copying.
///
/// # Safety
/// `ai` must be null or a live handle from `ai_create`. A non-null `dest`
/// must be writable for at least the probed length.
#[no_mangle]
pub unsafe extern "C" fn ai_result(ai: *mut RJSJAI, dest: *mut c_char) -> c_int {
    let Some(ai) = ai.as_ref() else {
        tracing::warn!("ai_result called with null handle");
        return AI_INVALID_ARGUMENT;
    };

    let result = ai.result();
    let Some(len) = c_len(result.len()) else {
        tracing::warn!(result_len = result.len(), "ai_result: result does not fit in int");
        return AI_INVALID_ARGUMENT;
    };

    if !dest.is_null() {
        ptr::copy_nonoverlapping(result.as_ptr(), dest as *mut u8, result.len());
    }
    len
}

/// Release a handle; null is a no-op.
///
/// # Safety
/// `ai` must be null or a handle from `ai_create` not yet freed.
#[no_mangle]
pub unsafe extern "C" fn ai_free(ai: *mut RJSJAI) {
    if !ai.is_null() {
        drop(Box::from_raw(ai));
    }
}

/// Length as reported to C; `None` when it does not fit in `int`
fn c_len(len: usize) -> Option<c_int> {
    c_int::try_from(len).ok()
}

unsafe fn lossy_str<'a>(s: *const c_char) -> Cow<'a, str> {
    if s.is_null() {
        Cow::Borrowed("")
    } else {
        CStr::from_ptr(s).to_string_lossy()
    }
}
