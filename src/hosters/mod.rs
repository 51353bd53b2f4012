pub mod metanet;

use crate::error::BrowseError;
use crate::record::RecordKind;
use crate::table::DnsRow;

/// The two write operations a hoster's DNS editor offers.
pub trait RecordEditor {
    /// Create a `kind` record for `subdomain` (the bare domain when empty).
    fn add_record(&mut self, kind: RecordKind, subdomain: &str, value: &str) -> Result<(), BrowseError>;

    /// Delete the record shown in `row`.
    fn remove_record(&mut self, row: &DnsRow) -> Result<(), BrowseError>;
}
