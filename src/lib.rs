//! Browser enhancement layer for the laz site: up/down voting on content
//! items and an email subscription form, kept in sync with the site API.
//!
//! All behavior lives behind two injected seams so it runs the same under a
//! real browser document and under test fixtures: [`api::Api`] for the HTTP
//! JSON client and [`page::Dom`] for the document surface. The wasm build
//! wires both to the live page in [`boot`]; the native build exposes the
//! same client through the `laz-admin` binary.

pub mod api;
#[cfg(target_arch = "wasm32")]
mod boot;
pub mod consts;
pub mod environment;
pub mod init;
pub mod logging;
pub mod page;
pub mod subscribe;
pub mod vote;

pub use api::{Api, ApiClient, ApiError};
pub use environment::Environment;
