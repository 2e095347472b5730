//! # rjsjai-dummy
//!
//! Offline drop-in mock of the RJSJ AI C library for testing homework
//! clients.
//!
//! The crate builds as a `cdylib`/`staticlib` exporting `ai_create`,
//! `ai_send`, `ai_status`, `ai_result` and `ai_free`, so a C or C++ program
//! can link it in place of the real `librjsjai` and exercise both its success
//! and its error paths deterministically.
//!
//! ## Features
//!
//! - **Same ABI**: identical symbol names and calling convention
//! - **Binary envelope**: draw/wolfram results carry the real 8-byte signature
//! - **Error injection**: `DUMMY_AI_EXPECT_ERROR` forces the unknown HTTP error
//! - **Rust API**: `MockAi` with an injected `DummyConfig` for tests
//!
//! ## Quick Start
//!
//! ```rust
//! use rjsjai_dummy::{DummyConfig, MockAi, RequestType};
//!
//! let mut ai = MockAi::new("token");
//! let status = ai.send(RequestType::Chat.as_raw(), "hello", &DummyConfig::default());
//! assert!(status.is_success());
//! assert_eq!(ai.body().unwrap().prompt, "hello");
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod telemetry;
pub mod types;

pub use config::{DummyConfig, PromptEscaping};
pub use engine::{MockAi, ResponseBody};
pub use error::{DummyError, DummyResult};
pub use types::{AiStatus, RequestType, BINARY_SIGNATURE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
