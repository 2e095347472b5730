//! C API contract tests
//!
//! These run without `DUMMY_AI_EXPECT_ERROR`; the forced-error path through
//! the environment lives in its own test binary (`tests/expect_error_env.rs`).

use std::ffi::CString;
use std::os::raw::{c_char, c_int};
use std::ptr;

use super::common::*;
use rjsjai_dummy::ffi::{self, RJSJAI};
use rjsjai_dummy::{ResponseBody, BINARY_SIGNATURE};

#[test]
fn test_api_functions_exist() {
    let _create: unsafe extern "C" fn(*const c_char) -> *mut RJSJAI = ffi::ai_create;
    let _send: unsafe extern "C" fn(*mut RJSJAI, c_int, *const c_char) -> c_int = ffi::ai_send;
    let _status: unsafe extern "C" fn(*mut RJSJAI) -> c_int = ffi::ai_status;
    let _result: unsafe extern "C" fn(*mut RJSJAI, *mut c_char) -> c_int = ffi::ai_result;
    let _free: unsafe extern "C" fn(*mut RJSJAI) = ffi::ai_free;
}

#[test]
fn test_create_then_status_is_success() {
    let ai = TestHandle::create("token");
    assert_eq!(ai.status(), ffi::AI_SUCCESS);
}

#[test]
fn test_result_before_send_is_empty() {
    let ai = TestHandle::create("token");
    assert_eq!(ai.probe_len(), 0);
    assert!(ai.read_result().is_empty());
}

#[test]
fn test_chat_body_contains_type_and_status() {
    let ai = TestHandle::create("token");
    let status = ai.send(ffi::AI_TYPE_CHAT, "c1");
    assert_eq!(status, ffi::AI_SUCCESS);

    let result = ai.read_result();
    assert_eq!(
        String::from_utf8(result).unwrap(),
        expected_body(ffi::AI_TYPE_CHAT, ffi::AI_SUCCESS, "c1")
    );
}

#[test]
fn test_binary_kinds_carry_signature() {
    for kind in [ffi::AI_TYPE_DRAW, ffi::AI_TYPE_WOLFRAM] {
        let ai = TestHandle::create("token");
        ai.send(kind, "picture");

        let result = ai.read_result();
        assert_eq!(&result[..8], &BINARY_SIGNATURE);
        assert_eq!(
            &result[8..],
            expected_body(kind, ffi::AI_SUCCESS, "picture").as_bytes()
        );
    }
}

#[test]
fn test_judge_prompts_decode() {
    for (kind, prompt) in judge_prompts() {
        let ai = TestHandle::create("token");
        assert_eq!(ai.send(kind, prompt), ffi::AI_SUCCESS);

        let body = ResponseBody::parse(&ai.read_result()).unwrap();
        assert_eq!(body.kind, kind);
        assert_eq!(body.status, ffi::AI_SUCCESS);
        assert_eq!(body.prompt, prompt);
    }
}

#[test]
fn test_probe_does_not_mutate() {
    let ai = TestHandle::create("token");
    ai.send(ffi::AI_TYPE_CHAT, "probe");

    let before = ai.read_result();
    let len = ai.probe_len();
    assert_eq!(len as usize, before.len());
    assert_eq!(ai.probe_len(), len);
    assert_eq!(ai.read_result(), before);
    assert_eq!(ai.status(), ffi::AI_SUCCESS);
}

#[test]
fn test_round_trip_length() {
    let ai = TestHandle::create("token");
    ai.send(ffi::AI_TYPE_DRAW, "d2");

    let first = ai.probe_len();
    let mut buf = vec![0u8; first as usize + 4];
    let tail = [0x5Au8; 4];
    buf[first as usize..].copy_from_slice(&tail);

    let copied = unsafe { ffi::ai_result(ai.raw(), buf.as_mut_ptr() as *mut c_char) };
    assert_eq!(copied, first);
    assert_eq!(ai.probe_len(), first);

    // Exactly `first` bytes written, no terminator
    assert_eq!(&buf[first as usize..], &tail);
}

#[test]
fn test_second_send_replaces_result() {
    let ai = TestHandle::create("token");
    ai.send(ffi::AI_TYPE_DRAW, "first");
    ai.send(ffi::AI_TYPE_CHAT, "second");

    let result = ai.read_result();
    assert!(!result.starts_with(&BINARY_SIGNATURE));
    assert_eq!(
        String::from_utf8(result).unwrap(),
        expected_body(ffi::AI_TYPE_CHAT, ffi::AI_SUCCESS, "second")
    );
}

#[test]
fn test_null_prompt_is_empty() {
    let ai = TestHandle::create("token");
    let status = unsafe { ffi::ai_send(ai.raw(), ffi::AI_TYPE_CHAT, ptr::null()) };
    assert_eq!(status, ffi::AI_SUCCESS);

    let body = ResponseBody::parse(&ai.read_result()).unwrap();
    assert_eq!(body.prompt, "");
}

#[test]
fn test_prompt_with_quotes_stays_valid_json() {
    let ai = TestHandle::create("token");
    ai.send(ffi::AI_TYPE_CHAT, "he said \"hi\"\tthen left\\");

    let body = ResponseBody::parse(&ai.read_result()).unwrap();
    assert_eq!(body.prompt, "he said \"hi\"\tthen left\\");
}

#[test]
fn test_handles_are_independent() {
    let a = TestHandle::create("a");
    let b = TestHandle::create("b");

    a.send(ffi::AI_TYPE_DRAW, "one");
    assert_eq!(b.probe_len(), 0);

    b.send(ffi::AI_TYPE_CHAT, "two");
    assert!(a.read_result().starts_with(&BINARY_SIGNATURE));
}

#[test]
fn test_create_copies_token() {
    let token = CString::new("secret-token").unwrap();
    let raw = unsafe { ffi::ai_create(token.as_ptr()) };
    drop(token);

    unsafe {
        assert_eq!((*raw).token(), "secret-token");
        ffi::ai_free(raw);
    }
}
