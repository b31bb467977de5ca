use anyhow::Context;
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use craftly_promotions::{
    config::Config,
    external::PromotionsApi,
    store::{PromotionStore, StatusFilter},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().context("failed to load configuration")?;
    let page_size = config.page_size;

    let api = PromotionsApi::new(config.api);
    let mut store = PromotionStore::new(api);

    store
        .load()
        .await
        .context("failed to load promotions, please try again")?;

    let stats = store.stats();
    println!(
        "promotions: {} total | {} active | {} upcoming | {} expired",
        stats.all, stats.active, stats.upcoming, stats.expired
    );

    for promotion in store.page_view(StatusFilter::All, None, 1, page_size) {
        let usage = promotion.usage();
        let remaining = usage
            .remaining()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "unlimited".to_string());
        println!(
            "{:<12} {:<24} {:<9} {:>6.1}% used  remaining: {}",
            promotion.id,
            promotion.name,
            promotion.status.to_string(),
            usage.ratio(),
            remaining,
        );
    }

    Ok(())
}
