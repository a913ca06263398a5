//! Repo Saga Client Library
//!
//! Client-side pieces of the Repo Saga Engine, which turns GitHub repositories
//! into poetry and fiction: a persisted, observable locale store with dotted
//! key translation, and an async client for the literature generation API.

pub mod assets;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod states;

pub use error::{Error, Result};
pub use services::{ApiClient, ApiConfig, ChatRole, ChatTurn, LiteraryWork, Presets};
pub use states::{LocaleChanged, LocaleStore, current_locale, set_locale, t};
