/// Сводка по датасету ArrowHead

use anyhow::Context;

use ts_splits::{load_dataset, DatasetPaths};

fn main() -> anyhow::Result<()> {
    // Инициализация логирования
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let paths = DatasetPaths::arrowhead();
    let data = load_dataset(&paths)
        .with_context(|| format!("Failed to load dataset {}", paths.name()))?;

    let summary = data.summary(paths.name());
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
