//! # Periplus
//!
//! **OpenAPI document builder with content-addressed route shards**
//!
//! Periplus describes an HTTP API as an OpenAPI document built up in code:
//!
//! - **Route shards** – register a path once, refer to it by fingerprint afterwards
//! - **Validated configuration** – server URLs and variable enums are checked up front
//! - **Ordered output** – paths, servers and variables render in declaration order
//! - **Structured logs** – `tracing` events throughout, JSON or pretty output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use periplus::prelude::*;
//!
//! fn main() -> Result<(), PeriplusError> {
//!     let mut api = Periplus::from_loader(
//!         ConfigLoader::new()
//!             .with_file("periplus.toml")?
//!             .with_env_prefix("PERIPLUS"),
//!     )?;
//!     api.init_logging()?;
//!
//!     let (_, home) = api.create_shard("/home");
//!     api.register_operation(&home, HttpMethod::Get, Operation::new().summary("Landing"))?;
//!     api.register_route_operation(&home, "posts", HttpMethod::Get, Operation::new())?;
//!
//!     api.write_document()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!  periplus.toml ─▶ ConfigLoader ─▶ PeriplusConfig ─validate─▶ Periplus
//!                                                               │    │
//!                                          ShardTable ◀─────────┘    └────▶ OpenApi
//!                                 create / resolve / combine        add_operation / write
//! ```

#![warn(missing_docs)]

mod builder;
mod error;

pub use builder::Periplus;
pub use error::{PeriplusError, PeriplusResult};

pub use periplus_config as config;
pub use periplus_docs as docs;
pub use periplus_shards as shards;
pub use periplus_telemetry as telemetry;

/// Prelude module for convenient imports.
///
/// ```rust
/// use periplus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Periplus, PeriplusError, PeriplusResult};

    pub use periplus_config::{
        ApiInfo, ConfigError, ConfigLoader, Contact, PeriplusConfig, ServerDescriptor,
        ServerVariable,
    };

    pub use periplus_docs::{HttpMethod, OpenApi, Operation};

    pub use periplus_shards::{Fingerprint, RoutePath, ShardError, ShardTable};
}
