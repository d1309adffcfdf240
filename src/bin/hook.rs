//! `ctir-footer-hook`: Claude Code tool hook printing the CTIR indicator as JSON

use anyhow::Result;
use tracing::warn;

use ctir_footer::cache::IndicatorCache;
use ctir_footer::config::Settings;
use ctir_footer::hook::HookAdapter;
use ctir_footer::indicator::CommandSource;
use ctir_footer::logging::setup_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    setup_logging(false, "info");

    // A broken config must not cost the host its JSON answer
    let settings = match Settings::load(None) {
        Ok(mut settings) => {
            settings.validate();
            settings
        }
        Err(e) => {
            warn!("Failed to load config, using defaults: {:#}", e);
            Settings::default()
        }
    };

    let cache = IndicatorCache::new(settings.cache_file(), settings.cache_freshness());
    let hook = HookAdapter::new(CommandSource::from_settings(&settings), cache);

    hook.run(std::io::stdin().lock(), std::io::stdout().lock())
        .await
}
