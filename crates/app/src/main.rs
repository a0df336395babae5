use warehouse_app::{AppConfig, WarehouseManager};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    warehouse_observability::init(&config.log);

    tracing::info!(output = ?config.output, "starting warehouse demo");

    let today = chrono::Local::now().date_naive();
    let mut manager = WarehouseManager::new(config.output);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    manager.run(today, &mut out)?;

    Ok(())
}
