//! Constants used throughout the application.
//!
//! This module contains all constants used in the Daybook application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "daybook";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Your thoughts, your story: a small card-based journal";

// Logging
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Service name attached to the root tracing span.
pub const TRACING_SERVICE_NAME: &str = "daybook";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

// Configuration Keys & Environment Variables
/// Environment variable that seeds the store with demo entries when truthy.
pub const ENV_VAR_SEED_DEMO: &str = "DAYBOOK_SEED_DEMO";
/// Environment variable selecting the log output format.
pub const ENV_VAR_LOG_FORMAT: &str = "DAYBOOK_LOG_FORMAT";
/// Environment variable selecting the default log level.
pub const ENV_VAR_LOG_LEVEL: &str = "DAYBOOK_LOG_LEVEL";
/// Accepted log levels.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// Date/Time Logic
/// Date format used on cards and in the editor header (dd/mm/yyyy).
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

// Editor
/// Presentation id of an editor opened for a new entry.
pub const NEW_ENTRY_PRESENTATION_ID: &str = "new";
/// Prompt shown when a dirty draft is about to be thrown away.
pub const DISCARD_PROMPT: &str = "Are you sure you want to discard changes on this journal?";

// Screens
/// Headline of the empty-state screen.
pub const EMPTY_STATE_TITLE: &str = "Begin Your Journal";
/// Subtitle of the empty-state screen.
pub const EMPTY_STATE_SUBTITLE: &str = "Craft your personal diary, tap the plus icon to begin";
/// Number of body characters shown on a card preview.
pub const CARD_PREVIEW_CHARS: usize = 80;

// Demo Data
/// Date shared by every demo entry, in display format.
pub const DEMO_ENTRY_DATE: &str = "02/09/2024";
/// Titles of the demo entries, paired with their bookmark flag.
pub const DEMO_ENTRIES: &[(&str, bool)] = &[
    ("My Birthday", true),
    ("Today’s Journal", false),
    ("Great Day", false),
];
/// Body text shared by every demo entry.
pub const DEMO_BODY: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Donec odio. Quisque volutpat mattis eros. Nullam malesuada erat ut turpis. Suspendisse urna nibh viverra non semper suscipit posuere.";
