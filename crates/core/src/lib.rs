//! # Title Warden Core
//!
//! Core validation engine for pull request titles.
//!
//! Title Warden checks that a title follows the `type(scope): Subject`
//! convention and reports every rule it violates:
//! - The title must not contain a ticket number
//! - The `type` must be one of the allowed types
//! - Each `scope` must be a short scope or a known node display name followed
//!   by ` Node`, with a "did you mean" hint for near misses
//! - The subject must start with an uppercase, present tense verb, must not end
//!   with a period and may only end with the `(no-changelog)` marker
//!
//! ## Example Usage
//!
//! ```rust
//! use title_warden_core::TitleWarden;
//!
//! let warden = TitleWarden::new();
//! let names = vec!["Mattermost".to_string()];
//!
//! assert!(warden.validate("feat(Mattermost Node): Add new resource", &names).is_empty());
//!
//! let issues = warden.validate("feat(core, wrong): add feature.", &names);
//! assert_eq!(issues.len(), 3);
//! ```
//!
//! With a name provider:
//!
//! ```rust,no_run
//! use title_warden_core::{provider::StaticDisplayNames, validate_pr_title};
//!
//! async fn check(title: &str) -> bool {
//!     let provider = StaticDisplayNames::new(["Oura", "Mattermost"]);
//!     let issues = validate_pr_title(title, &provider).await;
//!
//!     for issue in &issues {
//!         println!("- {}", issue);
//!     }
//!
//!     issues.is_empty()
//! }
//! ```

use tracing::{debug, info, instrument};

pub mod checks;
pub mod config;
pub mod errors;
pub mod issues;
pub mod provider;
pub mod rules;
pub mod suggest;

use checks::schema::{parse_title, SchemaMatch};
use config::TitleRulesConfig;
use errors::TitleWardenError;
use issues::{Issue, IssueKind, ValidationReport};
use provider::{fetch_display_names, DisplayNameProvider};
use rules::TitleRules;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Validates pull request titles against a set of [`TitleRules`].
///
/// `TitleWarden` holds only immutable state, so one instance can validate
/// any number of titles, including concurrently.
///
/// # Examples
///
/// ```rust
/// use title_warden_core::TitleWarden;
/// use title_warden_core::issues::IssueKind;
///
/// let warden = TitleWarden::new();
///
/// let issues = warden.validate("wrong(core): Implement feature", &[]);
/// assert_eq!(issues.len(), 1);
/// assert_eq!(issues[0].kind, IssueKind::InvalidType);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TitleWarden {
    rules: TitleRules,
}

impl TitleWarden {
    /// Creates a `TitleWarden` with the built-in rules.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: TitleRules) -> Self {
        Self { rules }
    }

    /// Creates a `TitleWarden` from a rule configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`TitleWardenError`] if the configuration is invalid.
    pub fn from_config(config: &TitleRulesConfig) -> Result<Self, TitleWardenError> {
        Ok(Self::with_rules(TitleRules::from_config(config)?))
    }

    pub fn rules(&self) -> &TitleRules {
        &self.rules
    }

    /// Validates a title against the rules.
    ///
    /// A ticket number or a schema mismatch is reported as the only issue.
    /// Otherwise the issues of the type, scope and subject checks are
    /// returned in that order. An empty list means the title is valid.
    ///
    /// # Arguments
    ///
    /// * `title` - The pull request title, used as is
    /// * `display_names` - The known node display names, empty if unknown
    #[instrument(skip(self, display_names), fields(known_names = display_names.len()))]
    pub fn validate(&self, title: &str, display_names: &[String]) -> Vec<Issue> {
        let parsed = match parse_title(title, &self.rules) {
            SchemaMatch::TicketNumber => {
                debug!("Title contains a ticket number");
                return vec![self.rules.issue(IssueKind::TicketNumberPresent)];
            }
            SchemaMatch::Mismatch => {
                debug!("Title does not match the conventional schema");
                return vec![self.rules.issue(IssueKind::ConventionalSchemaMismatch)];
            }
            SchemaMatch::Parsed(parsed) => parsed,
        };

        debug!(
            commit_type = parsed.commit_type.as_str(),
            scope = parsed.scope.as_deref(),
            breaking = parsed.breaking,
            "Parsed title"
        );

        let mut issues = Vec::new();
        issues.extend(checks::commit_type::check_type(
            &parsed.commit_type,
            &self.rules,
        ));
        issues.extend(checks::scope::check_scope(
            parsed.scope.as_deref(),
            &self.rules,
            display_names,
        ));
        issues.extend(checks::subject::check_subject(
            &parsed.subject,
            &self.rules,
        ));

        issues
    }

    /// Fetches the display names once from `provider`, then validates the title.
    ///
    /// A provider failure is logged and validation continues without any
    /// known display names, so every node scope is reported as invalid.
    #[instrument(skip(self, provider))]
    pub async fn validate_with_provider<P>(&self, title: &str, provider: &P) -> Vec<Issue>
    where
        P: DisplayNameProvider + ?Sized,
    {
        let display_names = fetch_display_names(provider).await.unwrap_or_default();
        let issues = self.validate(title, &display_names);

        if issues.is_empty() {
            info!("PR title validated successfully");
        } else {
            info!(issues = issues.len(), "PR title failed validation");
        }

        issues
    }

    /// Like [`TitleWarden::validate_with_provider`], bundling the result with the title.
    pub async fn report<P>(&self, title: &str, provider: &P) -> ValidationReport
    where
        P: DisplayNameProvider + ?Sized,
    {
        let issues = self.validate_with_provider(title, provider).await;
        ValidationReport::new(title, issues)
    }
}

/// Validates a title with the built-in rules and the given name provider.
pub async fn validate_pr_title<P>(title: &str, provider: &P) -> Vec<Issue>
where
    P: DisplayNameProvider + ?Sized,
{
    TitleWarden::new()
        .validate_with_provider(title, provider)
        .await
}
