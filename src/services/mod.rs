//! Service Layer
//!
//! Access to the Repo Saga backend over HTTP.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      ApiClient                        │
//! │  generate ──► POST /generate  {url, ...presets}       │
//! │  example  ──► GET  /example                           │
//! │  chat     ──► POST /chat      {message, history, ..}  │
//! └──────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ Result<_, Error::Request> (logged once)
//!                        caller
//! ```

mod api;
mod config;
mod models;

pub use api::*;
pub use config::*;
pub use models::*;
