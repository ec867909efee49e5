use anyhow::Context;
use clap::Parser;
use got_roster::utils::{logger, validation::Validate};
use got_roster::{
    render, CliConfig, House, InMemoryMemberDao, OutputFormat, ReportKind, RosterSource,
    SeedRoster, TomlRoster,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting got-roster CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let report: ReportKind = config.report.parse()?;
    let format: OutputFormat = config.format.parse()?;
    let house: Option<House> = config.house.as_deref().map(str::parse).transpose()?;

    let members = match &config.roster {
        Some(path) => TomlRoster::new(path.clone())
            .load()
            .with_context(|| format!("failed to load roster from {path}"))?,
        None => SeedRoster.load()?,
    };
    tracing::info!("Roster loaded: {} members", members.len());

    let dao = InMemoryMemberDao::new(members);
    let rendered = render(&dao, report, house, format)?;

    match &config.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write report to {path}"))?;
            tracing::info!("✅ Report written to {}", path);
            println!("✅ Report written to {}", path);
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
