//! Output formatting for command results.

use serde::Serialize;

use crate::types::TagRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// JSON shape of a lookup answer.
#[derive(Debug, Serialize)]
pub struct LookupResponse<'a> {
    pub symbol: &'a str,
    pub found: bool,
    pub definitions: &'a [TagRecord],
}

/// Render a lookup answer. `definitions` empty means not found.
pub fn render_lookup(symbol: &str, definitions: &[TagRecord], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let response = LookupResponse {
                symbol,
                found: !definitions.is_empty(),
                definitions,
            };
            serde_json::to_string_pretty(&response)
                .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
        }
        OutputFormat::Text => {
            if definitions.is_empty() {
                return format!("\"{symbol}\" has no matches");
            }
            definitions
                .iter()
                .map(TagRecord::location)
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}
