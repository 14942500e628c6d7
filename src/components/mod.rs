//! Reusable UI component modules.
//!
//! Components render shared chrome and report surfaces; route-level
//! orchestration stays in `pages`.

pub mod confirm_dialog;
pub mod nav_bar;
pub mod report_panel;
