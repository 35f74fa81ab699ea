//! Bot API client.
//!
//! Keep the public surface small: [`BotApi`] with one method per endpoint,
//! [`BotApiBuilder`] for configuration. Implementation details are split into
//! submodules under `src/client/`.

pub mod builder;
pub mod config;
pub mod core;
pub mod endpoints;
mod methods;
pub mod validation;

pub use builder::BotApiBuilder;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use self::core::BotApi;
pub use endpoints::{Endpoint, ENDPOINTS};
pub use validation::require;
