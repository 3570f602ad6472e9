//! Script validation
//!
//! Guards the input buffer. Only ASCII Latin letters are rejected; digits,
//! punctuation and every other script pass.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("Latin letters are not allowed")]
    LatinLetters,
}

#[inline]
pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn contains_latin(text: &str) -> bool {
    text.chars().any(is_latin_letter)
}

/// Reject text containing any Latin letter.
///
/// Shared by keystroke entry (one char at a time) and paste (whole payload).
pub fn ensure_no_latin(text: &str) -> Result<(), ScriptError> {
    if contains_latin(text) {
        return Err(ScriptError::LatinLetters);
    }
    Ok(())
}
