//! View, add, or remove DNS records through a hoster's web console.
//!
//! There is no API behind this: the tool logs into the customer portal,
//! walks to the DNS editor of a domain, reads the record table and
//! submits the same forms a person would.

pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod hosters;
pub mod record;
pub mod scan;
pub mod table;

pub use config::PortalConfig;
pub use error::{ActionError, BrowseError, DnsError, DnsResult};
pub use hosters::metanet::DNSManager;
pub use hosters::RecordEditor;
pub use record::{Command, RecordKind, RecordType, Request};
pub use scan::{scan, Outcome};
pub use table::DnsRow;
