//! Shared constants for the catalogue client.

use std::time::Duration;

/// Records shown per list page.
pub const PAGE_SIZE: usize = 5;

/// How long a status message stays visible before it clears itself.
pub const STATUS_CLEAR_AFTER: Duration = Duration::from_secs(4);

/// Collection path of the backend REST API.
pub const CATALOGUES_PATH: &str = "/api/catalogues";

/// Backend used when `CATALOGUE_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Request timeout used when `CATALOGUE_HTTP_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shown for transport failures; the real cause goes to the log.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when the backend bounced a request to its login page.
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";

/// Empty state of the list view.
pub const NO_RECORDS_MESSAGE: &str = "No catalogues found.";

/// Question asked before a delete is sent.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this catalogue?";

/// Answer to a write action issued while another one is still running.
pub const BUSY_MESSAGE: &str = "A request is already in progress.";

pub const ID_PROMPT: &str = "Enter Catalogue ID:";

pub const INVALID_ID_MESSAGE: &str = "Please enter a valid numeric ID.";
