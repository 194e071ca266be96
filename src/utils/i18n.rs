use std::collections::HashMap;
use std::sync::OnceLock;

const EN: &str = include_str!("../../assets/locales/en.toml");

static TABLE: OnceLock<HashMap<String, String>> = OnceLock::new();

/// Flattens `[section] key = "text"` tables into a single key → text map.
fn parse_table(source: &str) -> HashMap<String, String> {
    let parsed: toml::Table = match toml::from_str(source) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("Failed to parse locale table: {}", e);
            return HashMap::new();
        }
    };

    let mut table = HashMap::new();
    for (_, section) in parsed {
        if let toml::Value::Table(entries) = section {
            for (key, value) in entries {
                if let toml::Value::String(text) = value {
                    table.entry(key).or_insert(text);
                }
            }
        }
    }
    table
}

/// Resolves a message key. Unknown keys resolve to themselves.
pub fn t(key: &str) -> String {
    TABLE
        .get_or_init(|| parse_table(EN))
        .get(key)
        .cloned()
        .unwrap_or_else(|| key.to_string())
}
