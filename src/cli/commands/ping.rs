use std::time::Duration;

use serde_json::json;

use crate::cli::{utils::output, OutputFormat};
use crate::config;

/// Any HTTP answer counts as reachable; only transport failures mark the upstream down
pub async fn handle(url: Option<String>, output_format: OutputFormat) -> anyhow::Result<()> {
    let url = url.unwrap_or_else(|| config::config().upstream.base_url.clone());
    let client = reqwest::Client::new();

    let (up, detail) = match client.get(&url).timeout(Duration::from_secs(5)).send().await {
        Ok(response) => (true, format!("HTTP {}", response.status().as_u16())),
        Err(e) => (false, e.to_string()),
    };

    let text = format!("{} is {} ({})", url, if up { "up" } else { "down" }, detail);
    output(
        output_format,
        &json!({ "url": url, "status": if up { "up" } else { "down" }, "detail": detail }),
        &text,
    )?;

    if !up {
        anyhow::bail!("upstream {} unreachable", url);
    }
    Ok(())
}
