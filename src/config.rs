//! Settings loading
//!
//! Reads the INI settings file (`settings.ini` by default) into a typed
//! [`Settings`] value. All keys live in the `DEFAULT` section; keys placed
//! before any section header are accepted as a fallback.

use crate::error::{Error, Result};
use ini::Ini;
use std::path::{Path, PathBuf};
use url::Url;

/// Default settings file path, relative to the working directory
pub const DEFAULT_SETTINGS_PATH: &str = "settings.ini";

/// Deployment-specific Jira custom field ids
///
/// These vary per tracker installation, so they are settings rather than
/// constants. The defaults match the reference installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomFields {
    /// Field holding the test path (folder)
    pub test_path: String,
    /// Field holding the test type (`"Manual"`)
    pub test_type: String,
    /// Field holding the ordered test steps
    pub test_steps: String,
}

impl Default for CustomFields {
    fn default() -> Self {
        Self {
            test_path: "customfield_12320".to_string(),
            test_type: "customfield_12310".to_string(),
            test_steps: "customfield_12314".to_string(),
        }
    }
}

/// Typed settings for one import run, immutable after load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Tracker base URL, without a trailing slash
    pub url: String,
    /// Project key the tests are created in
    pub project: String,
    /// Path of the input workbook
    pub excel_filepath: PathBuf,
    /// Bearer token for the tracker
    pub token: String,
    /// Custom field ids of the tracker installation
    pub fields: CustomFields,
}

impl Settings {
    /// Load settings from an INI file.
    ///
    /// Required keys: `url`, `project`, `excel_filepath`, `token`. Optional
    /// keys `test_path_field`, `test_type_field`, `test_steps_field` override
    /// the default custom field ids. A missing file or missing required key
    /// is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let ini = Ini::load_from_file(path).map_err(|e| Error::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let required = |key: &'static str| -> Result<String> {
            lookup(&ini, key)
                .map(str::to_string)
                .ok_or(Error::MissingSetting(key))
        };

        let raw_url = required("url")?;
        let parsed = Url::parse(&raw_url).map_err(|e| Error::InvalidUrl {
            url: raw_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl {
                url: raw_url,
                reason: "expected an http(s) url".to_string(),
            });
        }

        let mut fields = CustomFields::default();
        if let Some(id) = lookup(&ini, "test_path_field") {
            fields.test_path = id.to_string();
        }
        if let Some(id) = lookup(&ini, "test_type_field") {
            fields.test_type = id.to_string();
        }
        if let Some(id) = lookup(&ini, "test_steps_field") {
            fields.test_steps = id.to_string();
        }

        Ok(Self {
            // Trailing slashes would break endpoint joins
            url: raw_url.trim_end_matches('/').to_string(),
            project: required("project")?,
            excel_filepath: PathBuf::from(required("excel_filepath")?),
            token: required("token")?,
            fields,
        })
    }
}

/// Look a key up in `[DEFAULT]`, falling back to the sectionless prelude.
fn lookup<'a>(ini: &'a Ini, key: &str) -> Option<&'a str> {
    ini.section(Some("DEFAULT"))
        .and_then(|section| section.get(key))
        .or_else(|| ini.general_section().get(key))
}
