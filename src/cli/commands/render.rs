use anyhow::{Context, Result};
use chart::svg::render_view;
use std::path::Path;
use tracing::{info, warn};

use super::load_response;
use crate::config::Settings;

pub async fn render(settings: &Settings, input: &Path, output: Option<&Path>) -> Result<()> {
    let response = load_response(input).await?;
    let config = settings.chart_config();
    let view = chart::derive(&response, &config);

    if let Some(message) = view.message() {
        warn!("Rendering placeholder: {}", message);
    }
    let svg = render_view(&view, &config.dimensions);

    match output {
        Some(path) => {
            tokio::fs::write(path, svg)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Forecast timeline written to {}", path.display());
        }
        None => print!("{svg}"),
    }
    Ok(())
}
