use std::io::{Read, Write};

use anyhow::{Context, Result};
use tracing::{error, info};

use super::types::{HookError, HookInput, HookOutput};
use crate::cache::IndicatorCache;
use crate::indicator::{fetch_or_placeholder, FetchMode, IndicatorSource};

/// Claude Code tool hook: answers every tool event with the current indicator
pub struct HookAdapter<S> {
    source: S,
    cache: IndicatorCache,
}

impl<S: IndicatorSource> HookAdapter<S> {
    /// Create a new HookAdapter
    pub fn new(source: S, cache: IndicatorCache) -> Self {
        Self { source, cache }
    }

    /// Cached indicator while fresh, otherwise a new fetch stored in the cache
    pub async fn current_indicator(&self) -> String {
        if self.cache.is_stale() {
            let indicator = self.refresh().await;
            info!("Updated indicator: {}", indicator);
            return indicator;
        }

        match self.cache.get() {
            Some(cached) => {
                info!("Using cached indicator: {}", cached);
                cached
            }
            None => {
                // Expired or rewritten between the staleness check and the read
                let indicator = self.refresh().await;
                info!("Fallback indicator: {}", indicator);
                indicator
            }
        }
    }

    async fn refresh(&self) -> String {
        let indicator = fetch_or_placeholder(&self.source, FetchMode::Indicator).await;
        self.cache.set(&indicator);
        indicator
    }

    /// Handle one raw hook payload
    pub async fn handle(&self, raw: &str) -> HookOutput {
        let input = match HookInput::parse(raw) {
            Ok(input) => input,
            Err(e) => {
                let err = HookError::from(e);
                error!("JSON decode error: {}", err);
                return HookOutput::failure(&err);
            }
        };

        let tool_name = input.tool_name().to_string();
        info!("Tool used: {}", tool_name);

        let indicator = self.current_indicator().await;

        HookOutput::Indicator {
            ctir_model_indicator: indicator,
            timestamp: self.cache.now(),
            tool_name,
        }
    }

    /// Read the payload from `reader` and write one JSON line to `writer`
    ///
    /// Only a failure to write the answer is returned as an error.
    pub async fn run<R: Read, W: Write>(&self, mut reader: R, mut writer: W) -> Result<()> {
        let mut raw = String::new();
        let output = match reader.read_to_string(&mut raw) {
            Ok(_) => self.handle(&raw).await,
            Err(e) => {
                let err = HookError::from(e);
                error!("Unexpected error: {}", err);
                HookOutput::failure(&err)
            }
        };

        let json = encode(&output);
        writeln!(writer, "{}", json).context("Failed to write hook output")?;
        writer.flush().context("Failed to flush hook output")?;
        Ok(())
    }
}

/// Serialize the output, degrading to a hook-error object
fn encode(output: &HookOutput) -> String {
    match serde_json::to_string(output) {
        Ok(json) => json,
        Err(e) => {
            let err = HookError::Output(e);
            error!("Unexpected error: {}", err);
            serde_json::json!({
                "ctir_model_indicator": err.placeholder(),
                "error": err.to_string(),
            })
            .to_string()
        }
    }
}
