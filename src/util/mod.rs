//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic. Each one compiles to a no-op (or a test double) outside
//! the `csr` build.

pub mod browser;
pub mod dark_mode;
pub mod schedule;
pub mod scroll;
