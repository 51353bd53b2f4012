use tracing::{debug, info, warn};

use crate::browser::Browser;
use crate::config::PortalConfig;
use crate::error::BrowseError;
use crate::hosters::RecordEditor;
use crate::record::RecordKind;
use crate::table::{self, DnsRow};

/// A logged-in session on the Metanet customer portal.
pub struct DNSManager {
    browser: Browser,
    config: PortalConfig,
}

impl DNSManager {
    pub fn login(config: PortalConfig, uid: &str, pwd: &str) -> Result<Self, BrowseError> {
        let mut browser = Browser::new(&config.user_agent())?;
        browser.open(&config.base_url)?;

        let mut form = browser.form_by_class(&config.login_form_class)?;
        form.set(&config.user_field, uid)?;
        form.set(&config.password_field, pwd)?;
        browser.submit(&form)?;
        debug!(uid, "login submitted");

        Ok(Self { browser, config })
    }

    /// Navigate to the DNS editor of `domain` and read its records.
    ///
    /// Unsaved changes left over from an earlier session are discarded
    /// after the table has been read.
    pub fn open_dns_editor(&mut self, domain: &str) -> Result<Vec<DnsRow>, BrowseError> {
        self.browser.follow_link(&self.config.domains_link)?;
        self.browser.follow_link(domain)?;
        self.browser.follow_link(&self.config.dns_link)?;

        let rows = table::parse_table(
            &self.browser.page()?.body,
            &self.config.table_class,
            &self.config.delete_class,
        )?;
        debug!(domain, rows = rows.len(), "dns table read");

        self.discard_changes();
        Ok(rows)
    }

    /// Best effort: a missing link means there is nothing to discard.
    fn discard_changes(&mut self) {
        match self.browser.follow_link(&self.config.discard_link) {
            Ok(()) => info!("discarded pending changes"),
            Err(BrowseError::LinkNotFound(_)) => debug!("no pending changes"),
            Err(e) => warn!(error = %e, "discarding pending changes failed"),
        }
    }

    fn save(&mut self) -> Result<(), BrowseError> {
        self.browser.follow_link(&self.config.save_link)
    }
}

impl RecordEditor for DNSManager {
    fn add_record(&mut self, kind: RecordKind, subdomain: &str, value: &str) -> Result<(), BrowseError> {
        let mut form = self.browser.form_nr(0)?;
        form.set(&self.config.type_field, kind.as_str())?;
        self.browser.submit(&form)?;

        let mut form = self.browser.form_nr(0)?;
        if !subdomain.is_empty() {
            form.set(&self.config.subdomain_field, subdomain)?;
        }
        form.set(&self.config.value_field, value)?;
        self.browser.submit(&form)?;

        self.save()?;
        info!(%kind, subdomain, value, "record added");
        Ok(())
    }

    fn remove_record(&mut self, row: &DnsRow) -> Result<(), BrowseError> {
        let href = row
            .delete_href
            .as_deref()
            .ok_or_else(|| BrowseError::LinkNotFound(format!("a.{}", self.config.delete_class)))?;
        self.browser.open(href)?;

        self.save()?;
        info!(key = %row.key, kind = %row.kind, "record removed");
        Ok(())
    }
}
