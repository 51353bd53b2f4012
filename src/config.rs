use std::fs;
use std::path::Path;

use rand::seq::IndexedRandom;
use serde::Deserialize;

use crate::error::{DnsError, DnsResult};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "METANET_DNS_CONFIG";

const DESKTOP_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:130.0) Gecko/20100101 Firefox/130.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.6 Safari/605.1.15",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:130.0) Gecko/20100101 Firefox/130.0",
];

/// Everything the tool knows about the portal's markup.
///
/// The link texts belong to the German UI, so `base_url` and the labels
/// have to be changed together.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub base_url: String,
    pub login_form_class: String,
    pub user_field: String,
    pub password_field: String,
    pub domains_link: String,
    pub dns_link: String,
    pub discard_link: String,
    pub save_link: String,
    pub table_class: String,
    pub delete_class: String,
    pub type_field: String,
    pub subdomain_field: String,
    pub value_field: String,
    /// Fixed user agent; a random desktop one is used when unset.
    pub user_agent: Option<String>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: "https://my.metanet.ch/de/".into(),
            login_form_class: "form-login".into(),
            user_field: "loginID".into(),
            password_field: "password".into(),
            domains_link: "Domains".into(),
            dns_link: "DNS-Verwaltung".into(),
            discard_link: "Änderungen verwerfen".into(),
            save_link: "Jetzt speichern".into(),
            table_class: "table-dns-editor".into(),
            delete_class: "delete".into(),
            type_field: "type".into(),
            subdomain_field: "subDomain".into(),
            value_field: "textValue".into(),
            user_agent: None,
        }
    }
}

impl PortalConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn from_file(path: &Path) -> DnsResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| DnsError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|e| DnsError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `path`, else the file named by [`CONFIG_ENV`], else defaults.
    pub fn load(path: Option<&Path>) -> DnsResult<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn user_agent(&self) -> String {
        if let Some(ua) = &self.user_agent {
            return ua.clone();
        }
        DESKTOP_USER_AGENTS
            .choose(&mut rand::rng())
            .map_or_else(|| DESKTOP_USER_AGENTS[0].to_string(), |ua| (*ua).to_string())
    }
}
