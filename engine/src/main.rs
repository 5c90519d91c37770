// Replays a recorded field-event script and prints the field after each event
// as one JSON line.
//
// Usage: amount-engine <script.json> [settings.json]
use amount_engine::config::FormatSettings;
use amount_engine::script::ReplayScript;
use anyhow::{anyhow, Context, Result};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let script_path = args
        .next()
        .ok_or_else(|| anyhow!("usage: amount-engine <script.json> [settings.json]"))?;

    let settings = match args.next() {
        Some(path) => FormatSettings::load_from_path(&path)
            .with_context(|| format!("Failed to load settings from '{}'", path))?,
        None => FormatSettings::load_default().context("Failed to load embedded default settings")?,
    };
    info!(?settings, "Loaded format settings.");

    let script = ReplayScript::load_from_path(&script_path)
        .with_context(|| format!("Failed to load replay script '{}'", script_path))?;
    info!(field = %script.field_name, events = script.events.len(), "Replaying script.");

    for step in script.replay(&settings) {
        println!("{}", serde_json::to_string(&step)?);
    }

    Ok(())
}
