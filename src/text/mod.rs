//! Text Module
//!
//! Arabic text handling: diacritic stripping and script validation.

pub mod script;
pub mod tashkeel;

// Re-exports
pub use script::{contains_latin, ensure_no_latin, is_latin_letter, ScriptError};
pub use tashkeel::{count_tashkeel, is_tashkeel, strip_tashkeel};
