use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::api::ApiResponse;
use crate::cli::OutputFormat;

/// Output a mutation result in the appropriate format
pub fn output_response(output_format: &OutputFormat, action: &str, response: &ApiResponse) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "action": action,
                    "status": response.status,
                    "data": response.data,
                }))?
            );
        }
        OutputFormat::Text => {
            let message = response.message().unwrap_or("");
            if (200..300).contains(&response.status) {
                println!("✓ {} ({})", action, response.status);
            } else {
                eprintln!("✗ {} failed ({}) {}", action, response.status, message);
            }
        }
    }
    Ok(())
}

/// Output a store snapshot in the appropriate format
pub fn output_snapshot(output_format: &OutputFormat, store_name: &str, snapshot: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ store_name: snapshot }))?);
        }
        OutputFormat::Text => {
            let rows = rows_of(snapshot);
            if rows.is_empty() {
                println!("No {} entries", store_name);
            }
            for row in rows {
                println!("{}", summarize(row));
            }
        }
    }
    Ok(())
}

/// Output a success message in the appropriate format
pub fn output_success(output_format: &OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });
            if let (Some(obj), Some(Value::Object(extra))) = (response.as_object_mut(), data) {
                obj.extend(extra);
            }
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Parse a command line value using its wire spelling (`ARW`, `canceled_only`, ...)
pub fn parse_wire<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_value(Value::String(raw.to_string())).map_err(|_| format!("unrecognized value '{}'", raw))
}

// Snapshots are either bare arrays or `{success, message, result}` envelopes
fn rows_of(snapshot: &Value) -> Vec<&Value> {
    let inner = snapshot.get("result").unwrap_or(snapshot);
    match inner {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) if map.is_empty() => Vec::new(),
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

fn summarize(row: &Value) -> String {
    match row {
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| !v.is_object() && !v.is_array())
            .map(|(k, v)| match v {
                Value::String(s) => format!("{}={}", k, s),
                other => format!("{}={}", k, other),
            })
            .collect::<Vec<_>>()
            .join("  "),
        other => other.to_string(),
    }
}
