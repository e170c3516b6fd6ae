use eyre::{eyre, Result};
use log::{error, info, warn};

use crate::commands::common::create_deployment;
use crate::config::Config;
use crate::seeder::WhitelistSeeder;

pub async fn check(key: Option<&str>, config: &Config) -> Result<()> {
    let accounts = config.get_accounts()?;
    let deployment = create_deployment(key, config).await?;

    let statuses = WhitelistSeeder::new(config.max_in_flight)
        .check(&deployment, &accounts)
        .await?;

    let mut missing = 0;
    let mut errors = 0;
    for (address, status) in &statuses {
        match status {
            Ok(true) => info!("{address}: whitelisted"),
            Ok(false) => {
                missing += 1;
                warn!("{address}: not whitelisted");
            }
            Err(e) => {
                errors += 1;
                error!("{address}: query failed: {e}");
            }
        }
    }
    info!(
        "{} of {} accounts whitelisted",
        statuses.len() - missing - errors,
        statuses.len()
    );

    if errors > 0 {
        return Err(eyre!("{errors} whitelist queries failed"));
    }
    Ok(())
}
