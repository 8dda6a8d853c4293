// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use chrono::Utc;
use std::sync::Arc;
use tokio::time::{interval, Duration};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::db::Database;
use crate::matching::messages;

/// Background loop that periodically purges expired chat messages. The read
/// path filters on expiry independently, so the cadence only bounds storage
/// growth; each pass is idempotent.
pub async fn run_reaper(db: Arc<Database>) {
    let config = Config::get();
    if !config.reaper.enabled {
        info!("Expiration reaper is disabled");
        return;
    }

    let period = Duration::from_secs(config.reaper.interval_secs);
    info!("Expiration reaper running every {:?}", period);

    let mut ticker = interval(period);
    loop {
        ticker.tick().await;

        let mut conn = match db.get_connection().await {
            Ok(conn) => conn,
            Err(e) => {
                error!("Expiration reaper could not get a connection: {}", e);
                continue;
            }
        };

        match messages::purge_expired(&mut conn, Utc::now()).await {
            Ok(deleted) => debug!("Expiration reaper pass removed {} messages", deleted),
            Err(e) => error!("Expiration reaper pass failed: {}", e),
        }
    }
}
