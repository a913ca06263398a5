//! State Management Layer
//!
//! Process-wide client state. The locale is the only shared mutable value:
//!
//! ```text
//! set_locale → RwLock write → PreferenceStore::set → LocaleChanged → subscribers
//! ```

mod locale;
mod preferences;

pub use locale::*;
pub use preferences::*;
