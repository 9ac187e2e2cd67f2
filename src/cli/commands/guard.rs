use serde_json::{json, Value};

use crate::cli::{utils::output, OutputFormat};
use crate::guard::{classify, decide, GuardDecision};

pub fn handle(path: &str, with_token: bool, output_format: OutputFormat) -> anyhow::Result<()> {
    let (json, text) = report(path, with_token);
    output(output_format, &json, &text)
}

fn report(path: &str, with_token: bool) -> (Value, String) {
    let class = classify(path);
    let decision = decide(path, with_token);

    let (verdict, location) = match &decision {
        GuardDecision::Allow => ("allow", None),
        GuardDecision::Redirect { location } => ("redirect", Some(location.as_str())),
    };

    let text = match location {
        Some(location) => format!("{} ({}): redirect -> {}", path, class.as_str(), location),
        None => format!("{} ({}): allow", path, class.as_str()),
    };

    let json = json!({
        "path": path,
        "class": class.as_str(),
        "credential": with_token,
        "decision": verdict,
        "location": location,
    });
    (json, text)
}
