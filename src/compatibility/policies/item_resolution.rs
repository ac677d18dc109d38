use crate::compatibility::domain::ComponentOption;
use serde_json::Value;

/// One step of the item resolution chain: a shape predicate and its mapper.
pub struct ItemResolver {
    pub shape: &'static str,
    pub matches: fn(&Value) -> bool,
    pub resolve: fn(&Value) -> ComponentOption,
}

/// ItemResolution policy for turning list entries into select options
///
/// Backends have returned component lists in several shapes. Each entry is
/// tried against the resolvers in order and the first match wins:
/// 1. bare non-empty string
/// 2. `{value, label}` pair
/// 3. object with `name` and no `id`
/// 4. object with `id` and `name`
/// 5. anything else, stringified as JSON
///
/// Every entry resolves to an option whose value and label are non-empty.
pub struct ItemResolution;

impl ItemResolution {
    pub const CHAIN: &'static [ItemResolver] = &[
        ItemResolver {
            shape: "string",
            matches: is_label_string,
            resolve: resolve_label_string,
        },
        ItemResolver {
            shape: "value-label pair",
            matches: is_value_label_pair,
            resolve: resolve_value_label_pair,
        },
        ItemResolver {
            shape: "named",
            matches: is_named,
            resolve: resolve_named,
        },
        ItemResolver {
            shape: "identified",
            matches: is_identified,
            resolve: resolve_identified,
        },
        ItemResolver {
            shape: "fallback",
            matches: any_value,
            resolve: resolve_fallback,
        },
    ];

    /// Resolves a single list entry
    pub fn resolve(item: &Value) -> ComponentOption {
        Self::CHAIN
            .iter()
            .find(|resolver| (resolver.matches)(item))
            .map(|resolver| (resolver.resolve)(item))
            .unwrap_or_else(|| resolve_fallback(item))
    }

    /// Resolves a list payload. Anything that is not a JSON array is treated as empty.
    pub fn resolve_all(payload: &Value) -> Vec<ComponentOption> {
        payload
            .as_array()
            .map(|items| items.iter().map(Self::resolve).collect())
            .unwrap_or_default()
    }
}

/// Non-empty strings and non-zero numbers, as text. Mirrors how list
/// endpoints have signalled "field present".
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

fn field(item: &Value, key: &str) -> Option<String> {
    item.get(key).and_then(truthy_text)
}

fn is_label_string(item: &Value) -> bool {
    matches!(item, Value::String(s) if !s.is_empty())
}

fn resolve_label_string(item: &Value) -> ComponentOption {
    ComponentOption::uniform(item.as_str().unwrap_or_default())
}

fn is_value_label_pair(item: &Value) -> bool {
    field(item, "value").is_some() && field(item, "label").is_some()
}

fn resolve_value_label_pair(item: &Value) -> ComponentOption {
    ComponentOption::new(
        field(item, "value").unwrap_or_default(),
        field(item, "label").unwrap_or_default(),
    )
}

fn is_named(item: &Value) -> bool {
    field(item, "name").is_some() && field(item, "id").is_none()
}

fn resolve_named(item: &Value) -> ComponentOption {
    ComponentOption::uniform(field(item, "name").unwrap_or_default())
}

fn is_identified(item: &Value) -> bool {
    field(item, "id").is_some() && field(item, "name").is_some()
}

fn resolve_identified(item: &Value) -> ComponentOption {
    ComponentOption::new(
        field(item, "id").unwrap_or_default(),
        field(item, "name").unwrap_or_default(),
    )
}

fn any_value(_: &Value) -> bool {
    true
}

fn resolve_fallback(item: &Value) -> ComponentOption {
    ComponentOption::uniform(item.to_string())
}
