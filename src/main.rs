use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use ctir_footer::cache::IndicatorCache;
use ctir_footer::config::{Command, Config, Settings};
use ctir_footer::demo::{content, DemoRunner};
use ctir_footer::hook::HookAdapter;
use ctir_footer::indicator::CommandSource;
use ctir_footer::logging::setup_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Unknown subcommands print usage instead of failing
    let cli = match Config::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.print()?,
                _ => println!("{}", content::USAGE),
            }
            return Ok(());
        }
    };

    // Setup logging
    setup_logging(cli.debug, "warn");

    match cli.command {
        None => println!("{}", content::USAGE),
        Some(Command::Examples) => println!("{}", content::EXAMPLES),
        Some(Command::Demo) => {
            let settings = load_settings(&cli)?;
            let source = CommandSource::from_settings(&settings);
            DemoRunner::new(source, settings.refresh_interval())
                .run()
                .await?;
        }
        Some(Command::Status) => {
            let settings = load_settings(&cli)?;
            let cache = IndicatorCache::new(settings.cache_file(), settings.cache_freshness());
            let hook = HookAdapter::new(CommandSource::from_settings(&settings), cache);
            println!("{}", hook.current_indicator().await);
        }
    }

    Ok(())
}

fn load_settings(cli: &Config) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_ref())?;
    settings.validate();
    Ok(settings)
}
