use serde_json::Value;

/// Print just the headline figure from the output.
///
/// Heuristic: look for the payment fields a deal sheet leads with, then
/// fall back to the first field in the object.
pub fn print_minimal(value: &Value) {
    // Priority list of key output fields
    let priority_keys = [
        "monthly_payment",
        "due_at_signing",
        "amount_financed",
        "total_lease_cost",
        "total_cost",
    ];

    if let Value::Object(map) = value {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        // Compare output: one headline payment per row
        if let Some(Value::Array(rows)) = map.get("results") {
            for row in rows {
                let label = row.get("label").and_then(Value::as_str).unwrap_or("?");
                let payment = row.get("monthly_payment").map(format_minimal);
                println!("{}: {}", label, payment.unwrap_or_default());
            }
            return;
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(value));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
