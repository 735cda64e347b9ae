//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (`localStorage`, clock,
//! clipboard, dialogs) from page and component logic. Each helper has a
//! non-hydrate fallback so server rendering and native tests compile.

pub mod browser;
pub mod clock;
pub mod storage;
