//! # Request Pipeline
//!
//! Every Bot API call goes through the same stages:
//!
//! ```text
//! CallOptions → prepare → Transport::send → check_content_type → decode → check_envelope
//!      │           │                              │                          │
//!   fields,     JSON or                    must be exactly           ok / Api error /
//!   headers,    multipart                  application/json          MalformedEnvelope
//!   flags       body
//! ```
//!
//! Preparation is a pure function of the options, so the stages before and
//! after the network can be exercised without a server.

pub mod decode;
pub mod prepare;

pub use decode::{check_content_type, check_envelope, decode_response};
pub use prepare::{
    prepare, stringify_fields, PreparedBody, PreparedRequest, JSON_CONTENT_TYPE, MARKUP_FIELD,
};
