//! Documentation source: the predefined-roles table in the User Access guide.
//!
//! The guide is a public HTML page; the roles live in the second `<table>`
//! in document order. That positional selector is a fragile coupling to the
//! page layout, so it is isolated here as [`ROLES_TABLE_INDEX`] plus a single
//! extraction step — swapping the selector never touches fetch or compare
//! logic.

use crate::error::{Error, Result};
use crate::html;
use crate::types::{Role, RoleMap};
use std::time::Duration;

/// Fixed URL of the User Access configuration guide (html-single rendering).
const GUIDE_URL: &str = "https://access.redhat.com/documentation/en-us/red_hat_hybrid_cloud_console/1-latest/html-single/user_access_configuration_guide_for_role-based_access_control_rbac/index";

/// The roles table is the second `<table>` on the page.
const ROLES_TABLE_INDEX: usize = 1;

/// Page size limit (the html-single rendering runs to a few MB).
const MAX_BODY_SIZE: u64 = 32 * 1024 * 1024;

/// Per-request timeout so an unresponsive server cannot hang the run.
const TIMEOUT: Duration = Duration::from_secs(60);

/// Expected cells per data row: name, description, platform flag, admin flag.
const ROW_CELLS: usize = 4;

/// Documentation source for predefined roles.
///
/// # Example
///
/// ```no_run
/// use rolecheck::DocsSource;
///
/// let roles = DocsSource::new().fetch_roles().unwrap();
/// println!("{} roles documented", roles.len());
/// ```
pub struct DocsSource {
    /// HTTP agent for requests.
    agent: ureq::Agent,
    /// Page URL to fetch.
    url: String,
}

impl DocsSource {
    /// Create a source pointed at the published guide.
    #[must_use]
    pub fn new() -> Self {
        Self::with_url(GUIDE_URL)
    }

    /// Create a source with a custom page URL (for testing).
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(TIMEOUT))
            .build()
            .new_agent();
        Self {
            agent,
            url: url.into(),
        }
    }

    /// Get the page URL this source fetches.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download the guide and parse the predefined-roles table.
    ///
    /// Fails on any non-success HTTP status or when the page no longer has
    /// a table at the expected position. No retry; errors are terminal.
    pub fn fetch_roles(&self) -> Result<RoleMap> {
        let mut response = self.agent.get(&self.url).call()?;
        let body = response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_SIZE)
            .read_to_string()?;

        let roles = parse_roles_table(&body)?;
        log::info!("Predefined roles from the Customer Portal downloaded successfully");
        Ok(roles)
    }
}

impl Default for DocsSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the predefined-roles table out of the full page body.
///
/// Rows without `<td>` cells (header rows built from `<th>`) are skipped.
/// Each remaining row must carry at least four cells: name, description,
/// platform-default indicator, admin-default indicator. Later rows overwrite
/// earlier ones on a duplicate name.
pub fn parse_roles_table(page: &str) -> Result<RoleMap> {
    let table = html::extract_table(page, ROLES_TABLE_INDEX).ok_or(Error::TableNotFound {
        index: ROLES_TABLE_INDEX,
    })?;

    let mut roles = RoleMap::new();
    for row in html::table_rows(table) {
        let cells = html::row_cells(row);
        if cells.is_empty() {
            continue;
        }
        if cells.len() < ROW_CELLS {
            return Err(Error::InvalidResponse(format!(
                "roles table row has {} cells, expected {ROW_CELLS}",
                cells.len()
            )));
        }
        let name = cells[0].clone();
        roles.insert(
            name.clone(),
            Role {
                name,
                description: cells[1].clone(),
                platform_default: cell_flag(&cells[2]),
                admin_default: cell_flag(&cells[3]),
            },
        );
    }
    Ok(roles)
}

/// Presence-based flag rule for table cells: non-empty trimmed text is
/// `true`.
///
/// A literal "No" therefore reads as `true`. That quirk is inherited from
/// how the table marks the flags (an empty cell versus any text) and is
/// preserved on purpose.
#[must_use]
pub fn cell_flag(cell: &str) -> bool {
    !cell.trim().is_empty()
}
