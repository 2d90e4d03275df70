//! # Periplus Docs
//!
//! OpenAPI document model for periplus.
//!
//! [`DocumentGenerator`] turns a [`PeriplusConfig`](periplus_config::PeriplusConfig)
//! into the document skeleton; operations are then recorded per path with
//! [`OpenApi::add_operation`] and the result rendered with [`OpenApi::to_json`]
//! or [`OpenApi::write_to_file`].
//!
//! ## Quick Start
//!
//! ```rust
//! use periplus_config::{ApiInfo, PeriplusConfig};
//! use periplus_docs::{DocumentGenerator, HttpMethod, Operation};
//!
//! let config = PeriplusConfig::new(ApiInfo::new("Blog", "Blog API", "1.0.0"));
//! let mut doc = DocumentGenerator::from_config(&config).generate();
//!
//! doc.add_operation("/posts", HttpMethod::Get, Operation::new().operation_id("listPosts"));
//!
//! let json = doc.to_json().unwrap();
//! assert!(json.contains("listPosts"));
//! ```

#![warn(missing_docs)]

mod error;
mod generator;
mod openapi;

pub use error::{DocsError, DocsResult};
pub use generator::DocumentGenerator;
pub use openapi::{
    Contact, HttpMethod, Info, OpenApi, Operation, PathItem, Server, ServerVariable,
};
