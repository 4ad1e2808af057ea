//! Run result returned by `POST /run`.
//!
//! The `data` payload has no explicit type tag: which optional section is
//! present decides how it is rendered. Decoding is lenient so that a backend
//! sending an unexpected shape for one section loses that section only,
//! never the whole result.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default, deserialize_with = "text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "section")]
    pub data: Option<RunData>,
    #[serde(default, deserialize_with = "section")]
    pub receipt: Option<Receipt>,
}

impl RunResult {
    /// Failed result synthesized locally when the backend could not be reached
    /// or rejected the request.
    pub fn failed(goal: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            summary: Some("Request failed".to_string()),
            data: Some(RunData {
                error: Some(error.into()),
                ..RunData::default()
            }),
            receipt: Some(Receipt {
                user_goal: Some(goal.to_string()),
                ..Receipt::default()
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(default, deserialize_with = "text")]
    pub agent_label: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub agent_code: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub user_goal: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunData {
    #[serde(default, deserialize_with = "list", skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Vec<String>>,
    #[serde(default, deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub pitch: Option<Pitch>,
    #[serde(default, deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub press_release: Option<PressRelease>,
    #[serde(default, deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    #[serde(default, deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub guidance: Option<Guidance>,
    #[serde(default, deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
    #[serde(default, deserialize_with = "list", skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(default, deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Itinerary>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Sales pitch (SA).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    #[serde(default, deserialize_with = "text")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "list")]
    pub value_props: Option<Vec<String>>,
    #[serde(default, deserialize_with = "text")]
    pub cta: Option<String>,
}

/// Press release outline (PA).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PressRelease {
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub lead: Option<String>,
    #[serde(default, deserialize_with = "list")]
    pub bullet_points: Option<Vec<String>>,
}

/// Seasonal farm plan (FA).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default, deserialize_with = "list")]
    pub crop_rotation: Option<Vec<String>>,
    #[serde(default, deserialize_with = "text")]
    pub soil_test: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub goal_note: Option<String>,
}

/// Wildlife guidance (WA).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Guidance {
    #[serde(default, deserialize_with = "list")]
    pub safety: Option<Vec<String>>,
    #[serde(default, deserialize_with = "list")]
    pub contacts: Option<Vec<String>>,
    #[serde(default, deserialize_with = "text")]
    pub goal_note: Option<String>,
}

/// Service announcements (CA).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    #[serde(default, deserialize_with = "text")]
    pub announcement: Option<String>,
    #[serde(default, deserialize_with = "list")]
    pub schedule: Option<Vec<String>>,
    #[serde(default, deserialize_with = "text")]
    pub goal_note: Option<String>,
}

/// Recreation itinerary (RA).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    #[serde(default, deserialize_with = "list")]
    pub half_day: Option<Vec<String>>,
    #[serde(default, deserialize_with = "list")]
    pub gear: Option<Vec<String>>,
    #[serde(default, deserialize_with = "text")]
    pub goal_note: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient field decoders
// ────────────────────────────────────────────────────────────────────────────

/// Scalar to text. Strings pass through, numbers and booleans are printed,
/// anything else is treated as absent.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Truthiness as the browser saw it: null, false, zero, NaN and "" are false.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Scalar text field. An empty string counts as absent, like a falsy value
/// in the browser.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).filter(|s| !s.is_empty()))
}

/// Arrays only; a non-array value means the list is absent. Null items are
/// rendered as empty strings, nested objects as their JSON text.
fn list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::Null => String::new(),
                    Value::Array(_) | Value::Object(_) => item.to_string(),
                    other => scalar_text(other).unwrap_or_default(),
                })
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Objects only; anything else (including an object that fails to decode)
/// means the section is absent.
fn section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}
