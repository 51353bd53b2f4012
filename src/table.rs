use select::document::Document;
use select::predicate::{Class, Name, Predicate};
use tracing::debug;

use crate::error::BrowseError;

/// One line of the DNS editor table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRow {
    pub key: String,
    pub kind: String,
    /// Record value without the surrounding quotes the editor shows.
    pub value: String,
    /// Target of the row's delete link, if it has one.
    pub delete_href: Option<String>,
}

/// Read the rows of the `table.<class>` on a page.
pub fn parse_table(html: &str, class: &str, delete_class: &str) -> Result<Vec<DnsRow>, BrowseError> {
    let document = Document::from(html);
    let table = document
        .find(Name("table").and(Class(class)))
        .next()
        .ok_or_else(|| BrowseError::TableNotFound(class.to_string()))?;

    let mut rows = Vec::new();
    for (nr, tr) in table.find(Name("tr")).enumerate() {
        let Some(th) = tr.find(Name("th")).next() else {
            debug!(row = nr, "skipping row without key cell");
            continue;
        };
        let cols: Vec<_> = tr.find(Name("td")).collect();
        if cols.len() < 3 {
            debug!(row = nr, cells = cols.len(), "skipping short row");
            continue;
        }
        let delete_href = cols.get(3).and_then(|cell| {
            cell.find(Name("a").and(Class(delete_class)))
                .next()
                .and_then(|a| a.attr("href"))
                .map(String::from)
        });
        rows.push(DnsRow {
            key: th.text().trim().to_string(),
            kind: cols[1].text().trim().to_string(),
            value: cols[2].text().trim().trim_matches('"').trim().to_string(),
            delete_href,
        });
    }
    Ok(rows)
}
