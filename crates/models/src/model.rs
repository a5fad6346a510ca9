use anyhow::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Shared behaviour of every Discovery value type: parse from the wire,
/// render back to it.
pub trait DiscoveryModel: Serialize + DeserializeOwned {
    /// Parse a raw service payload
    fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .with_context(|| format!("Failed to parse {}", short_type_name::<Self>()))
    }

    fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .with_context(|| format!("Failed to convert value into {}", short_type_name::<Self>()))
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .with_context(|| format!("Failed to serialize {}", short_type_name::<Self>()))
    }

    /// Indented rendering, used for display and debugging output
    fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .with_context(|| format!("Failed to serialize {}", short_type_name::<Self>()))
    }
}

impl<T> DiscoveryModel for T where T: Serialize + DeserializeOwned {}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
