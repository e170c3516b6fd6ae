use eyre::Result;
use log::{error, info};

use crate::commands::common::create_deployment;
use crate::config::Config;
use crate::seeder::WhitelistSeeder;

pub async fn seed(
    key: Option<&str>,
    dry_run: bool,
    max_in_flight: Option<usize>,
    config: &Config,
) -> Result<()> {
    let accounts = config.get_accounts()?;
    let deployment = create_deployment(key, config).await?;
    let seeder = WhitelistSeeder::new(max_in_flight.or(config.max_in_flight));

    if dry_run {
        let planned = seeder.dry_run(&deployment, &accounts).await?;
        for entry in &planned {
            info!(
                "[dry-run] updateWhiteList({}, {}, {})",
                entry.group_id, entry.address, entry.enabled
            );
        }
        info!("[dry-run] {} whitelist updates planned", planned.len());
        return Ok(());
    }

    let report = seeder.seed(&deployment, &accounts).await?;
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(tx_hash) => info!("Whitelisted {}: {tx_hash}", outcome.entry.address),
            Err(e) => error!("Failed to whitelist {}: {e}", outcome.entry.address),
        }
    }
    info!(
        "Whitelist seeding finished: {} succeeded, {} failed",
        report.succeeded(),
        report.failed()
    );

    report.into_result()?;
    Ok(())
}
