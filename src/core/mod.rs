//! The record-to-form projection engine and the draft/submission
//! lifecycle. Everything outside this module is glue around it.

pub mod activity;
pub mod fields;
pub mod format;
pub mod merge;
pub mod project;
pub mod record;
pub mod slots;
pub mod submit;
