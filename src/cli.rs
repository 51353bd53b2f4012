use std::path::PathBuf;

use clap::Parser;

use crate::error::DnsResult;
use crate::record::{Command, RecordType, Request};

#[derive(Debug, Parser)]
#[command(name = "metanet-dns", version)]
#[command(about = "View, add, or remove DNS records")]
pub struct Cli {
    /// User identification (number)
    pub uid: String,

    /// Password
    pub pwd: String,

    /// DOMAIN.TLD, *.DOMAIN.TLD, or SUB.DOMAIN.TLD used as key
    pub domkey: String,

    /// Operation applied
    #[arg(value_enum, default_value_t = Command::View)]
    pub command: Command,

    /// Value to be matched or added
    pub value: Option<String>,

    /// Kind of DNS record
    #[arg(
        short = 't',
        long = "type",
        value_enum,
        default_value_t = RecordType::Txt,
        num_args = 0..=1,
        default_missing_value = "TXT"
    )]
    pub record_type: RecordType,

    /// TOML file overriding the portal settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn request(&self) -> DnsResult<Request> {
        Request::new(
            &self.domkey,
            self.command,
            self.value.clone(),
            self.record_type,
        )
    }
}
