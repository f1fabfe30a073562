//! Cross-cutting helpers: storage, formatting, guards, and token parsing.

pub mod format;
pub mod guard;
pub mod history;
pub mod language;
pub mod storage;
pub mod token;
