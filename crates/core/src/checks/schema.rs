//! # Title Schema Parsing
//!
//! This module splits a pull request title into the parts of the
//! conventional-commit-like schema: `type(scope)!: subject`.
//!
//! The structural match does not need to start at the beginning of the title.
//! Ticket numbers are found by a separate scan of the whole title, so a ticket
//! in front of the type is still reported.

use crate::config::CONVENTIONAL_SCHEMA_REGEX;
use crate::rules::TitleRules;

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;

/// The parts of a title that matched the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    /// The type token, e.g. `feat`
    pub commit_type: String,

    /// The raw text between the parentheses, not yet split into scopes
    pub scope: Option<String>,

    /// Whether the `!` breaking change marker is present
    pub breaking: bool,

    /// Everything after `": "`
    pub subject: String,
}

/// The outcome of parsing a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaMatch {
    /// The title contains a ticket number. Nothing else is checked.
    TicketNumber,

    /// The title does not have the expected shape. Nothing else is checked.
    Mismatch,

    /// The title has the expected shape.
    Parsed(ParsedTitle),
}

/// Parses a title against the schema.
///
/// The ticket number scan takes priority over the structural match.
///
/// # Examples
///
/// ```
/// use title_warden_core::checks::schema::{parse_title, SchemaMatch};
/// use title_warden_core::rules::TitleRules;
///
/// let rules = TitleRules::default();
///
/// match parse_title("feat(core)!: Drop legacy API", &rules) {
///     SchemaMatch::Parsed(parsed) => {
///         assert_eq!(parsed.commit_type, "feat");
///         assert_eq!(parsed.scope.as_deref(), Some("core"));
///         assert!(parsed.breaking);
///         assert_eq!(parsed.subject, "Drop legacy API");
///     }
///     other => panic!("unexpected parse result: {:?}", other),
/// }
///
/// assert_eq!(parse_title("feat(core):Drop", &rules), SchemaMatch::Mismatch);
/// assert_eq!(parse_title("feat: Fix n8n-1234", &rules), SchemaMatch::TicketNumber);
/// ```
pub fn parse_title(title: &str, rules: &TitleRules) -> SchemaMatch {
    if rules.contains_ticket_number(title) {
        return SchemaMatch::TicketNumber;
    }

    let Some(captures) = CONVENTIONAL_SCHEMA_REGEX.captures(title) else {
        return SchemaMatch::Mismatch;
    };

    SchemaMatch::Parsed(ParsedTitle {
        commit_type: captures
            .name("type")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        scope: captures.name("scope").map(|m| m.as_str().to_string()),
        breaking: captures.name("breaking").is_some(),
        subject: captures
            .name("subject")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
    })
}
