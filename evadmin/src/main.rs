use anyhow::{anyhow, Result};

use evadmin::{App, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    settings
        .validate()
        .map_err(|e| anyhow!("invalid configuration: {e}"))?;

    // Logging is initialized in App::run() with buffer support
    App::new(settings).run().await?;

    Ok(())
}
