//! Configuration source: role files in the rbac-config repository.
//!
//! Talks to the GitHub contents API: one listing call for the roles
//! directory, then one call per file. Files are JSON documents carrying a
//! `roles` array; the API wraps file bodies in newline-broken base64.

use crate::error::{Error, Result};
use crate::types::{Role, RoleMap};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// GitHub API base URL.
const API_BASE: &str = "https://api.github.com";

/// Repository holding the role configuration, in "owner/repo" form.
const REPO: &str = "RedHatInsights/rbac-config";

/// Directory of role definition files inside the repository.
const ROLES_PATH: &str = "configs/prod/roles";

/// Branch ref for every contents call. Both the directory listing and the
/// per-file fetches pin this ref, so the two reads cannot come from
/// different branches.
const REF: &str = "master";

/// Environment variable carrying the bearer credential.
const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// API media type.
const ACCEPT: &str = "application/vnd.github.v3+json";

/// Per-request timeout so an unresponsive server cannot hang the run.
const TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration source for predefined roles.
///
/// # Example
///
/// ```no_run
/// use rolecheck::ConfigSource;
///
/// let roles = ConfigSource::from_env().unwrap().fetch_roles().unwrap();
/// println!("{} roles configured", roles.len());
/// ```
pub struct ConfigSource {
    /// HTTP agent for requests.
    agent: ureq::Agent,
    /// GitHub API base URL.
    api_base: String,
    /// Bearer credential.
    token: String,
}

/// One entry of a contents-API directory listing.
#[derive(Debug, Deserialize)]
struct ContentsEntry {
    path: String,
}

/// A contents-API file body.
#[derive(Debug, Deserialize)]
struct FileContent {
    content: String,
}

impl ConfigSource {
    /// Create a source with an explicit token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(token, API_BASE)
    }

    /// Create a source reading the token from `GITHUB_TOKEN`.
    ///
    /// Fails with [`Error::MissingToken`] before any network call when the
    /// variable is absent or empty.
    pub fn from_env() -> Result<Self> {
        let token = require_token(std::env::var(TOKEN_VAR).ok())?;
        Ok(Self::new(token))
    }

    /// Create a source with a custom API base (for testing).
    #[must_use]
    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(TIMEOUT))
            .build()
            .new_agent();
        Self {
            agent,
            api_base: api_base.into(),
            token: token.into(),
        }
    }

    /// Get the current API base URL.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build the URL listing the roles directory.
    fn listing_url(&self) -> String {
        format!("{}/repos/{REPO}/contents/{ROLES_PATH}", self.api_base)
    }

    /// Build the URL for one file path inside the repository.
    fn file_url(&self, path: &str) -> String {
        format!("{}/repos/{REPO}/contents/{path}", self.api_base)
    }

    /// Authenticated GET of a contents-API URL, pinned to [`REF`].
    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        Ok(self
            .agent
            .get(url)
            .query("ref", REF)
            .header("Accept", ACCEPT)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", "rolediff")
            .call()?
            .body_mut()
            .read_json()?)
    }

    /// List the role files, fetch each one, and merge their roles.
    ///
    /// Later files overwrite earlier ones on a name collision. Any failure
    /// while listing, fetching, decoding, or parsing is terminal for the
    /// whole run; partial results are discarded.
    pub fn fetch_roles(&self) -> Result<RoleMap> {
        let listing: Vec<ContentsEntry> = self.get_json(&self.listing_url())?;

        let mut roles = RoleMap::new();
        for entry in listing {
            let file: FileContent = self.get_json(&self.file_url(&entry.path))?;
            merge_encoded_roles(&mut roles, &file.content)?;
        }

        log::info!("Predefined roles from 'rbac-config' downloaded successfully");
        Ok(roles)
    }
}

/// Enforce the credential rule: present and non-empty.
fn require_token(value: Option<String>) -> Result<String> {
    value.filter(|token| !token.is_empty()).ok_or(Error::MissingToken)
}

/// Decode a contents-API `content` payload and merge its roles into `map`.
///
/// GitHub breaks the base64 into newline-separated lines; all ASCII
/// whitespace is stripped before decoding.
pub fn merge_encoded_roles(map: &mut RoleMap, encoded: &str) -> Result<()> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = BASE64.decode(compact)?;
    let file: Value = serde_json::from_slice(&bytes)?;
    merge_file_roles(map, &file)
}

/// Merge the `roles` array of a decoded role file into `map`.
pub fn merge_file_roles(map: &mut RoleMap, file: &Value) -> Result<()> {
    let roles = file
        .get("roles")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::InvalidResponse("role file has no 'roles' array".to_string()))?;

    for role in roles {
        let name = resolve_name(role).ok_or_else(|| {
            Error::InvalidResponse("role entry has neither 'display_name' nor 'name'".to_string())
        })?;
        let description = role
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        map.insert(
            name.clone(),
            Role {
                name,
                description,
                platform_default: json_flag(role.get("platform_default")),
                admin_default: json_flag(role.get("admin_default")),
            },
        );
    }
    Ok(())
}

/// Resolve a role's comparison key: `display_name` when present and
/// non-empty, else `name`.
fn resolve_name(role: &Value) -> Option<String> {
    ["display_name", "name"]
        .iter()
        .filter_map(|key| role.get(key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Truthiness rule for config flag fields: absent, `null`, `false`, `0`,
/// and `""` are `false`; any other present value is `true`.
#[must_use]
pub fn json_flag(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use serde_json::json;

    #[test]
    fn test_listing_url() {
        let source = ConfigSource::new("tok");
        assert_eq!(
            source.listing_url(),
            "https://api.github.com/repos/RedHatInsights/rbac-config/contents/configs/prod/roles"
        );
    }

    #[test]
    fn test_file_url() {
        let source = ConfigSource::new("tok");
        assert_eq!(
            source.file_url("configs/prod/roles/cost.json"),
            "https://api.github.com/repos/RedHatInsights/rbac-config/contents/configs/prod/roles/cost.json"
        );
    }

    #[test]
    fn test_custom_api_base() {
        let source = ConfigSource::with_api_base("tok", "http://localhost:8080");
        assert_eq!(source.api_base(), "http://localhost:8080");
        assert!(source.listing_url().starts_with("http://localhost:8080/repos/"));
    }

    #[test]
    fn test_require_token() {
        assert!(require_token(Some("tok".to_string())).is_ok());
        assert!(matches!(
            require_token(None),
            Err(Error::MissingToken)
        ));
        assert!(matches!(
            require_token(Some(String::new())),
            Err(Error::MissingToken)
        ));
    }

    #[test]
    fn test_resolve_name_prefers_display_name() {
        let role = json!({"display_name": "Admin", "name": "admin_role"});
        assert_eq!(resolve_name(&role).unwrap(), "Admin");
    }

    #[test]
    fn test_resolve_name_falls_back_on_empty_display_name() {
        let role = json!({"display_name": "", "name": "viewer"});
        assert_eq!(resolve_name(&role).unwrap(), "viewer");

        let role = json!({"name": "viewer"});
        assert_eq!(resolve_name(&role).unwrap(), "viewer");
    }

    #[test]
    fn test_resolve_name_missing() {
        assert!(resolve_name(&json!({"description": "x"})).is_none());
    }

    #[test]
    fn test_json_flag_rule() {
        assert!(!json_flag(None));
        assert!(!json_flag(Some(&json!(null))));
        assert!(!json_flag(Some(&json!(false))));
        assert!(!json_flag(Some(&json!(0))));
        assert!(!json_flag(Some(&json!(""))));

        assert!(json_flag(Some(&json!(true))));
        assert!(json_flag(Some(&json!(1))));
        assert!(json_flag(Some(&json!("x"))));
    }

    #[test]
    fn test_merge_file_roles() {
        let file = json!({
            "roles": [
                {
                    "name": "cost-admin",
                    "display_name": "Cost Administrator",
                    "description": "Manage cost data",
                    "platform_default": false,
                    "admin_default": true
                },
                {
                    "name": "viewer",
                    "description": "Read only",
                    "platform_default": "yes"
                }
            ]
        });

        let mut roles = RoleMap::new();
        merge_file_roles(&mut roles, &file).unwrap();
        assert_eq!(roles.len(), 2);

        let admin = &roles["Cost Administrator"];
        assert_eq!(admin.description, "Manage cost data");
        assert!(!admin.platform_default);
        assert!(admin.admin_default);

        let viewer = &roles["viewer"];
        assert!(viewer.platform_default);
        assert!(!viewer.admin_default);
    }

    #[test]
    fn test_merge_file_roles_missing_array() {
        let mut roles = RoleMap::new();
        let err = merge_file_roles(&mut roles, &json!({"permissions": []})).unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[test]
    fn test_later_file_overwrites_earlier() {
        let mut roles = RoleMap::new();
        merge_file_roles(
            &mut roles,
            &json!({"roles": [{"name": "viewer", "description": "old"}]}),
        )
        .unwrap();
        merge_file_roles(
            &mut roles,
            &json!({"roles": [{"name": "viewer", "description": "new"}]}),
        )
        .unwrap();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles["viewer"].description, "new");
    }

    #[test]
    fn test_merge_encoded_roles_tolerates_newlines() {
        let file = json!({"roles": [{"name": "viewer", "description": "Read only"}]});
        let raw = serde_json::to_vec(&file).unwrap();

        // GitHub wraps content in newline-broken base64 lines.
        let encoded = BASE64.encode(&raw);
        let wrapped: String = encoded
            .as_bytes()
            .chunks(60)
            .map(|chunk| format!("{}\n", std::str::from_utf8(chunk).unwrap()))
            .collect();

        let mut roles = RoleMap::new();
        merge_encoded_roles(&mut roles, &wrapped).unwrap();
        assert_eq!(roles["viewer"].description, "Read only");
    }

    #[test]
    fn test_merge_encoded_roles_bad_base64() {
        let mut roles = RoleMap::new();
        let err = merge_encoded_roles(&mut roles, "!!! not base64 !!!").unwrap_err();
        assert!(matches!(err, Error::Base64(_)));
    }
}
