#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # survey-entities
//!
//! Reusable, agnostic domain entities for the survey-bot service.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod id;
pub mod survey_comment;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
