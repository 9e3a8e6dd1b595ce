use std::sync::Arc;

use wordguard_core::config::Config;

#[tokio::main]
async fn main() -> Result<(), wordguard_core::Error> {
    wordguard_core::logging::init("wordguard")?;

    // Missing credentials abort here, before the dispatcher starts.
    let cfg = Arc::new(Config::load()?);

    wordguard_telegram::router::run_polling(cfg)
        .await
        .map_err(|e| wordguard_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
