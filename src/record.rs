use std::fmt;

use clap::ValueEnum;

use crate::error::{DnsError, DnsResult};

/// Subdomain that ACME DNS-01 challenges are published under.
pub const ACME_CHALLENGE: &str = "_acme-challenge";

/// Record type as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordType {
    #[value(name = "NS")]
    Ns,
    #[value(name = "MX")]
    Mx,
    #[value(name = "TXT")]
    Txt,
    /// TXT record below `_acme-challenge`.
    #[value(name = "ACME")]
    Acme,
}

/// Record type as the portal knows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Ns,
    Mx,
    Txt,
}

impl RecordType {
    #[must_use]
    pub const fn kind(self) -> RecordKind {
        match self {
            Self::Ns => RecordKind::Ns,
            Self::Mx => RecordKind::Mx,
            Self::Txt | Self::Acme => RecordKind::Txt,
        }
    }
}

impl RecordKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ns => "NS",
            Self::Mx => "MX",
            Self::Txt => "TXT",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Command {
    #[default]
    View,
    Add,
    Remove,
}

impl Command {
    #[must_use]
    pub const fn as_upper(self) -> &'static str {
        match self {
            Self::View => "VIEW",
            Self::Add => "ADD",
            Self::Remove => "REMOVE",
        }
    }
}

/// Split a domain key into (domain, subdomain).
///
/// `"*.example.com"` -> `("example.com", "*")`, and a key with two or
/// fewer labels has an empty subdomain.
#[must_use]
pub fn split_key(key: &str) -> (String, String) {
    let labels: Vec<&str> = key.split('.').collect();
    let sublen = labels.len().saturating_sub(2);
    let domain = labels[sublen..].join(".");
    let subdomain = labels[..sublen].join(".");
    (domain, subdomain)
}

/// One validated invocation: what to do with which record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The domain key exactly as given, matched against the table.
    pub key: String,
    pub domain: String,
    /// Subdomain after the ACME rewrite.
    pub subdomain: String,
    pub kind: RecordKind,
    pub command: Command,
    pub value: Option<String>,
}

impl Request {
    /// Derive the key parts and check them against the record type.
    ///
    /// Nothing here touches the network.
    pub fn new(
        key: &str,
        command: Command,
        value: Option<String>,
        record_type: RecordType,
    ) -> DnsResult<Self> {
        let (domain, mut subdomain) = split_key(key);
        if record_type == RecordType::Acme && subdomain.is_empty() && command != Command::View {
            subdomain = ACME_CHALLENGE.to_string();
        }

        let kind = record_type.kind();
        match kind {
            RecordKind::Mx if subdomain == "*" => {
                return Err(DnsError::invalid("subdomain cannot be \"*\""));
            }
            RecordKind::Ns if !subdomain.is_empty() => {
                return Err(DnsError::invalid("subdomain cannot be specified"));
            }
            _ => {}
        }

        Ok(Self {
            key: key.to_string(),
            domain,
            subdomain,
            kind,
            command,
            value: value.filter(|v| !v.is_empty()),
        })
    }

    /// The line echoed before the table is scanned.
    #[must_use]
    pub fn banner(&self) -> String {
        match &self.value {
            Some(value) => format!(
                "{} {}: {} {value}...",
                self.command.as_upper(),
                self.kind,
                self.key
            ),
            None => format!("{} {}: {}...", self.command.as_upper(), self.kind, self.key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_label_key_is_its_own_domain() {
        assert_eq!(split_key("localhost"), ("localhost".into(), String::new()));
    }

    #[test]
    fn acme_keeps_explicit_subdomain() {
        let req = Request::new("www.example.com", Command::Add, None, RecordType::Acme).unwrap();
        assert_eq!(req.subdomain, "www");
        assert_eq!(req.kind, RecordKind::Txt);
    }

    #[test]
    fn empty_value_counts_as_absent() {
        let req = Request::new("example.com", Command::View, Some(String::new()), RecordType::Txt)
            .unwrap();
        assert_eq!(req.value, None);
    }
}
