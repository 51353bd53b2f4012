use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use metanet_tools::cli::Cli;
use metanet_tools::{scan, DNSManager, DnsError, DnsResult, PortalConfig, Request};

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, request: &Request) -> DnsResult<()> {
    let config = PortalConfig::load(cli.config.as_deref())?;
    let mut manager = DNSManager::login(config, &cli.uid, &cli.pwd)?;
    let rows = manager.open_dns_editor(&request.domain)?;

    println!("{}", request.banner());
    let outcome = scan(request, &rows, &mut manager)?;
    for line in outcome.report(request) {
        println!("{line}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = cli.request().and_then(|request| run(&cli, &request));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(DnsError::InvalidArgument(message)) => {
            println!("ERROR: {message}!");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
