//! # Types Module
//!
//! Plain data passed into and out of the request pipeline.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Parameters`] | Named request fields (JSON values or file uploads) |
//! | [`InputFile`] | Binary upload; always forces multipart encoding |
//! | [`CallOptions`] | Per-call method, headers, body and multipart flag |
//! | [`ApiEnvelope`] | Decoded `{ ok, result, description, error_code }` response |
//!
//! ## Example
//!
//! ```rust
//! use telegram_bot_api::types::{CallOptions, InputFile, Parameters};
//!
//! let params = Parameters::new()
//!     .with("chat_id", 123456)
//!     .with("photo", InputFile::bytes("logo.png", vec![0u8; 16]).mime("image/png"))
//!     .with("caption", "by file");
//!
//! let options = CallOptions::new().header("x-request-source", "docs");
//! # let _ = (params, options);
//! ```

pub mod envelope;
pub mod options;
pub mod params;
pub mod telegram;

pub use envelope::ApiEnvelope;
pub use options::{Body, CallOptions, FormPart, HttpMethod, MultipartForm, PartValue};
pub use params::{ByteStream, FieldValue, FileSource, InputFile, Parameters};
