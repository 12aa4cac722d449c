//! # Validation Checks
//!
//! This module contains the checks that are performed on pull request titles.
//!
//! The checks are organized into submodules:
//! - `schema`: Splits a title into its parts and detects ticket numbers
//! - `commit_type`: Validates the type against the allowed types
//! - `scope`: Validates each scope against short scopes and node display names
//! - `subject`: Validates casing, punctuation, tense and the no-changelog marker
//!
//! These checks are used by the `TitleWarden` to build the list of issues
//! for a title.

pub mod commit_type;
pub mod schema;
pub mod scope;
pub mod subject;
