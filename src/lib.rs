//! # telegram-bot-api
//!
//! Thin async client for the Telegram Bot API.
//!
//! ## Overview
//!
//! Every endpoint method funnels into one request pipeline:
//!
//! - **Validation**: required parameters are checked before anything touches the network
//! - **Encoding**: field bodies become JSON, or `multipart/form-data` when a file is uploaded;
//!   structured `reply_markup` always travels as a JSON string
//! - **Response checks**: the content type must be `application/json` and the envelope's
//!   `ok` flag must be `true`, otherwise a typed [`Error`] is returned
//!
//! There is no retry, rate limiting or update polling loop; a failed call
//! surfaces immediately.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use telegram_bot_api::{BotApi, InputFile, Parameters};
//!
//! #[tokio::main]
//! async fn main() -> telegram_bot_api::Result<()> {
//!     let api = BotApi::new("123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11")?;
//!
//!     let me = api.get_me(None).await?;
//!     println!("{:?}", me.result);
//!
//!     api.send_message(
//!         Parameters::new().with("chat_id", 123456).with("text", "hello"),
//!         None,
//!     )
//!     .await?;
//!
//!     // A file upload switches the body to multipart.
//!     api.send_photo(
//!         Parameters::new()
//!             .with("chat_id", 123456)
//!             .with("photo", InputFile::path("logo.png")),
//!         None,
//!     )
//!     .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`BotApi`], its builder, the endpoint table and parameter validation |
//! | [`pipeline`] | Body preparation and response validation |
//! | [`transport`] | [`transport::Transport`] seam and the reqwest implementation |
//! | [`types`] | Parameters, files, call options and the response envelope |

pub mod client;
pub mod pipeline;
pub mod transport;
pub mod types;

pub use client::{BotApi, BotApiBuilder, ClientConfig};
pub use types::{ApiEnvelope, Body, CallOptions, FieldValue, HttpMethod, InputFile, Parameters};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
