//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the auth context for the session and report failures back
//! through it, so a rejected token in any component signs the user out.

pub mod dialog;
pub mod organization_form;
pub mod page_header;
pub mod pagination;
pub mod protected;
pub mod url_card;
pub mod url_form;
