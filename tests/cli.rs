use clap::Parser;
use metanet_tools::cli::Cli;
use metanet_tools::{Command, DnsError, RecordType};

#[test]
fn defaults_to_view_txt() {
    let cli = Cli::try_parse_from(["metanet-dns", "1234", "secret", "example.com"]).unwrap();
    assert_eq!(cli.command, Command::View);
    assert_eq!(cli.record_type, RecordType::Txt);
    assert_eq!(cli.value, None);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn command_and_value_positionals() {
    let cli =
        Cli::try_parse_from(["metanet-dns", "1234", "secret", "example.com", "add", "v1"]).unwrap();
    assert_eq!(cli.command, Command::Add);
    assert_eq!(cli.value.as_deref(), Some("v1"));
}

#[test]
fn type_option_before_or_after_positionals() {
    let before =
        Cli::try_parse_from(["metanet-dns", "-t", "MX", "1", "pw", "*.example.com"]).unwrap();
    let after =
        Cli::try_parse_from(["metanet-dns", "1", "pw", "*.example.com", "--type", "MX"]).unwrap();
    assert_eq!(before.record_type, RecordType::Mx);
    assert_eq!(after.record_type, RecordType::Mx);

    for cli in [before, after] {
        let err = cli.request().unwrap_err();
        assert!(matches!(err, DnsError::InvalidArgument(_)));
    }
}

#[test]
fn bare_type_flag_means_txt() {
    let cli = Cli::try_parse_from(["metanet-dns", "1", "pw", "example.com", "-t"]).unwrap();
    assert_eq!(cli.record_type, RecordType::Txt);
}

#[test]
fn acme_type_is_accepted() {
    let cli =
        Cli::try_parse_from(["metanet-dns", "1", "pw", "example.com", "add", "tok", "-t", "ACME"])
            .unwrap();
    let req = cli.request().unwrap();
    assert_eq!(req.subdomain, "_acme-challenge");
}

#[test]
fn unknown_type_is_rejected() {
    assert!(Cli::try_parse_from(["metanet-dns", "1", "pw", "example.com", "-t", "AAAA"]).is_err());
}

#[test]
fn unknown_command_is_rejected() {
    assert!(Cli::try_parse_from(["metanet-dns", "1", "pw", "example.com", "update"]).is_err());
}

#[test]
fn verbose_counts() {
    let cli = Cli::try_parse_from(["metanet-dns", "-vv", "1", "pw", "example.com"]).unwrap();
    assert_eq!(cli.verbose, 2);
}
