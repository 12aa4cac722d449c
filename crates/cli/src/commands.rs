/// Pull request title checking commands
pub mod check_title;
/// Configuration management commands
pub mod config_cmd;
