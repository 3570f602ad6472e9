//! Tashkeel Remover
//!
//! Strips Arabic diacritics (tashkeel) from pasted or typed text, with a
//! keyboard-driven terminal interface for paste, copy, save and reset.

pub mod app;
pub mod export;
pub mod input;
pub mod text;
pub mod ui;

pub use text::strip_tashkeel;
