//! Matching the requested record against the editor table and carrying
//! out the command on the first row that qualifies.

use tracing::warn;

use crate::error::{ActionError, DnsError, DnsResult};
use crate::hosters::RecordEditor;
use crate::record::{Command, Request};
use crate::table::DnsRow;

/// What a scan ended with.
#[derive(Debug)]
pub enum Outcome {
    NoMatch,
    Viewed(Vec<DnsRow>),
    Added,
    AlreadyPresent(String),
    Removed,
    ActionFailed(ActionError),
}

impl Outcome {
    /// Whether a record was shown or changed.
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Viewed(_) | Self::Added | Self::Removed)
    }

    /// Lines printed for this outcome, ending with a notice when nothing
    /// was shown or changed.
    #[must_use]
    pub fn report(&self, request: &Request) -> Vec<String> {
        let mut lines = match self {
            Self::Viewed(rows) => rows
                .iter()
                .map(|row| {
                    format!(
                        "{} {}: {} = \"{}\"",
                        request.command.as_upper(),
                        request.kind,
                        row.key,
                        row.value
                    )
                })
                .collect(),
            Self::AlreadyPresent(value) => vec![format!("Value \"{value}\" already added.")],
            Self::ActionFailed(e) => vec![format!("ERROR: {e}!")],
            Self::NoMatch | Self::Added | Self::Removed => Vec::new(),
        };
        if !self.is_hit() {
            lines.push("No action performed!".to_string());
        }
        lines
    }
}

/// A row is looked at when its key is the requested one, or for every
/// row when viewing the bare domain.
fn is_candidate(request: &Request, row: &DnsRow) -> bool {
    row.key == request.key || (request.subdomain.is_empty() && request.command == Command::View)
}

fn value_matches(request: &Request, row: &DnsRow) -> bool {
    request.value.as_ref().map_or(true, |v| *v == row.value)
}

/// Walk `rows` in order and apply the request.
///
/// `add` and `remove` act on a single row. A failed add moves on to the
/// next candidate and is only reported if no later row settles the
/// request. A failed remove is final.
pub fn scan<E: RecordEditor + ?Sized>(
    request: &Request,
    rows: &[DnsRow],
    editor: &mut E,
) -> DnsResult<Outcome> {
    let mut viewed = Vec::new();
    let mut failure = None;

    for row in rows {
        if !is_candidate(request, row) || row.kind != request.kind.as_str() {
            continue;
        }
        match request.command {
            Command::View => {
                if value_matches(request, row) {
                    viewed.push(row.clone());
                }
            }
            Command::Add => {
                let Some(value) = request.value.as_deref() else {
                    return Err(DnsError::invalid("no value specified"));
                };
                if row.value == value {
                    return Ok(Outcome::AlreadyPresent(row.value.clone()));
                }
                match editor.add_record(request.kind, &request.subdomain, value) {
                    Ok(()) => return Ok(Outcome::Added),
                    Err(e) => {
                        warn!(key = %row.key, error = %e, "add failed, trying next row");
                        failure = Some(ActionError::Add(request.kind, e));
                    }
                }
            }
            Command::Remove => {
                if value_matches(request, row) {
                    return Ok(match editor.remove_record(row) {
                        Ok(()) => Outcome::Removed,
                        Err(e) => {
                            warn!(key = %row.key, error = %e, "remove failed");
                            Outcome::ActionFailed(ActionError::Remove(request.kind, e))
                        }
                    });
                }
            }
        }
    }

    Ok(if !viewed.is_empty() {
        Outcome::Viewed(viewed)
    } else if let Some(e) = failure {
        Outcome::ActionFailed(e)
    } else {
        Outcome::NoMatch
    })
}
