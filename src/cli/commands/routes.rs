use serde_json::{json, Value};

use crate::cli::{utils::output, OutputFormat};
use crate::proxy::{ProxyRoute, SessionEffect, ROUTES};

pub fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let (json, text) = report(ROUTES);
    output(output_format, &json, &text)
}

fn report(routes: &[ProxyRoute]) -> (Value, String) {
    let mut text = String::new();
    for route in routes {
        let mut flags = Vec::new();
        if route.requires_credential {
            flags.push("auth");
        }
        if route.preserve_status {
            flags.push("status");
        }
        if route.session == SessionEffect::IssueCookie {
            flags.push("cookie");
        }
        text.push_str(&format!(
            "{:<7} {:<28} -> {:<24} {:<26} [{}]\n",
            route.method.as_str(),
            route.inbound,
            route.upstream,
            route.name,
            flags.join(",")
        ));
    }

    (json!({ "routes": routes }), text.trim_end().to_string())
}
