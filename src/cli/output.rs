//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, RelishArgs};
use crate::error::Result;

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &RelishArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &RelishArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!("{}", "═".repeat(message.chars().count()));
    }

    let value = serde_json::to_value(result)?;
    print_human_value(&value, 0);
    Ok(())
}

/// Print a JSON value as indented human-readable lines.
fn print_human_value(value: &serde_json::Value, indent: usize) {
    let spaces = "  ".repeat(indent);

    match value {
        serde_json::Value::Array(arr) => {
            if arr.is_empty() {
                println!("{spaces}(empty)");
            }
            for (i, item) in arr.iter().enumerate() {
                match item {
                    serde_json::Value::Object(obj) => {
                        let fields: Vec<String> = obj
                            .iter()
                            .map(|(key, val)| format!("{key}: {}", format_value(val)))
                            .collect();
                        let line = fields.join("  ");
                        println!("{spaces}{:>3}. {line}", i + 1);
                    }
                    other => {
                        let formatted = format_value(other);
                        println!("{spaces}{:>3}. {formatted}", i + 1);
                    }
                }
            }
        }
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                        println!("{spaces}{key}:");
                        print_human_value(val, indent + 1);
                        println!();
                    }
                    _ => {
                        let formatted = format_value(val);
                        println!("{spaces}{key}: {formatted}");
                    }
                }
            }
        }
        other => {
            let formatted = format_value(other);
            println!("{spaces}{formatted}");
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &RelishArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
fn output_csv<T: Serialize>(result: &T, _args: &RelishArgs) -> Result<()> {
    let value = serde_json::to_value(result)?;

    match value {
        serde_json::Value::Array(arr) => {
            // Output array as CSV rows
            for (i, item) in arr.iter().enumerate() {
                if i == 0 {
                    // Output header
                    if let Some(obj) = item.as_object() {
                        let headers: Vec<String> = obj.keys().cloned().collect();
                        let header_line = headers.join(",");
                        println!("{header_line}");
                    }
                }

                // Output row
                if let Some(obj) = item.as_object() {
                    let values: Vec<String> = obj.values().map(format_csv_value).collect();
                    let value_line = values.join(",");
                    println!("{value_line}");
                }
            }
        }
        serde_json::Value::Object(obj) => {
            // Output single object as key-value pairs
            println!("key,value");
            for (key, value) in obj {
                let formatted_csv_value = format_csv_value(&value);
                println!("{key},{formatted_csv_value}");
            }
        }
        _ => {
            println!("value");
            let formatted_csv_value = format_csv_value(&value);
            println!("{formatted_csv_value}");
        }
    }

    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.4}"),
            _ => n.to_string(),
        },
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

/// Format a JSON value for CSV output.
fn format_csv_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                let escaped = s.replace('"', "\"\"");
                format!("\"{escaped}\"")
            } else {
                s.clone()
            }
        }
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join("; ");
            format!("\"[{formatted_values}]\"")
        }
        serde_json::Value::Object(_) => "\"[object]\"".to_string(),
        serde_json::Value::Null => "".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_csv_value() {
        assert_eq!(
            format_csv_value(&serde_json::Value::String("test".to_string())),
            "test"
        );
        assert_eq!(
            format_csv_value(&serde_json::Value::String("test,with,commas".to_string())),
            "\"test,with,commas\""
        );
        assert_eq!(
            format_csv_value(&serde_json::Value::Number(serde_json::Number::from(42))),
            "42"
        );
        assert_eq!(format_csv_value(&serde_json::Value::Bool(true)), "true");
        assert_eq!(format_csv_value(&serde_json::Value::Null), "");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(&serde_json::Value::String("test".to_string())),
            "test"
        );
        assert_eq!(
            format_value(&serde_json::Value::Number(serde_json::Number::from(42))),
            "42"
        );
        assert_eq!(format_value(&serde_json::Value::Bool(false)), "false");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
    }

    #[test]
    fn test_format_float_precision() {
        let n = serde_json::Number::from_f64(0.123456).unwrap();
        assert_eq!(format_value(&serde_json::Value::Number(n)), "0.1235");
    }
}
