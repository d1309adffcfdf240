use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use tracing::{debug, info};

use super::content;
use crate::indicator::{fetch_or_placeholder, FetchMode, IndicatorSource};
use crate::ui::FooterPanel;

/// Demo loop that redraws the footer panel until Ctrl+C
pub struct DemoRunner<S> {
    source: S,
    interval: Duration,
}

impl<S: IndicatorSource> DemoRunner<S> {
    /// Create a new DemoRunner
    pub fn new(source: S, interval: Duration) -> Self {
        Self { source, interval }
    }

    /// Run until interrupted, then print the farewell
    pub async fn run(&self) -> Result<()> {
        let mut stdout = std::io::stdout();
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        info!("Demo started (refresh every {:?})", self.interval);

        loop {
            tokio::select! {
                res = &mut shutdown => {
                    res.context("Failed to listen for Ctrl+C")?;
                    break;
                }
                res = self.tick(&mut stdout) => res?,
            }
        }

        writeln!(stdout, "{}", content::FAREWELL).context("Failed to write to stdout")?;
        Ok(())
    }

    /// Draw one frame, then wait out the interval
    async fn tick<W: Write>(&self, out: &mut W) -> Result<()> {
        let lines = self.frame(Local::now().naive_local()).await;

        queue!(out, Clear(ClearType::All), MoveTo(0, 0)).context("Failed to clear screen")?;
        for line in &lines {
            writeln!(out, "{}", line).context("Failed to write frame")?;
        }
        writeln!(out, "{}", content::FRAME_HINTS).context("Failed to write frame")?;
        out.flush().context("Failed to flush stdout")?;

        tokio::time::sleep(self.interval).await;
        Ok(())
    }

    /// Fetch indicator and details and render the panel rows
    pub async fn frame(&self, now: NaiveDateTime) -> Vec<String> {
        let indicator = fetch_or_placeholder(&self.source, FetchMode::Indicator).await;

        let details = match self.source.fetch(FetchMode::Details).await {
            Ok(text) => Some(text),
            Err(e) if e.is_offline() => {
                debug!("Details unavailable: {}", e);
                None
            }
            Err(e) => {
                debug!("Details failed: {}", e);
                Some(e.placeholder(FetchMode::Details))
            }
        };

        FooterPanel {
            indicator: &indicator,
            details: details.as_deref(),
            updated_at: now,
        }
        .lines()
    }
}
