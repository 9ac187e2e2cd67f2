use serde_json::Value;

use crate::cli::OutputFormat;

/// Print a JSON document in JSON mode, or the prepared text otherwise
pub fn output(output_format: OutputFormat, json: &Value, text: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(json)?),
        OutputFormat::Text => println!("{}", text),
    }
    Ok(())
}
