use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub unit: String,
    #[serde(deserialize_with = "de_stock")]
    pub current_stock: u32,
}

/// A client-local pairing of an item and the quantity about to be reported.
///
/// The item's stock is snapshotted when the line is created so edits can be
/// validated without the catalogue at hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageLineItem {
    pub item_id: i64,
    pub item_name: String,
    pub unit: String,
    pub quantity_used: u32,
    pub current_stock: u32,
}

/// `POST /inventory/usage` body.
#[derive(Debug, Clone, Serialize)]
pub struct UsageReport {
    pub task_id: i64,
    pub items: Vec<UsageEntry>,
    pub used_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageEntry {
    pub item_id: i64,
    pub quantity_used: u32,
}

/// Stock arrives as a whole number, possibly as `10.0` or `"10"` from numeric
/// SQL columns. Negative or fractional values are refused.
fn de_stock<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let n = match &value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match n {
        Some(n) if n >= 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) => Ok(n as u32),
        _ => Err(serde::de::Error::custom(format!(
            "invalid current_stock {}",
            value
        ))),
    }
}
