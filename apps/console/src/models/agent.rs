use serde::{Deserialize, Serialize};

/// A service-agent category as listed by the backend's `/agents` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub code: String,
    pub label: String,
}

impl Category {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// The nine built-in agents. Keyword rules and the offline demo dispatch on
/// this enum; codes outside it are still valid categories but can only be
/// reached through an explicit prefix or the `intent` query override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownAgent {
    Ta,
    Sa,
    Pa,
    Fa,
    Wa,
    Ca,
    Ja,
    ArA,
    Ra,
}

impl KnownAgent {
    /// Catalog order of the built-in table. The first entry is the
    /// general-purpose fallback.
    pub const ALL: [KnownAgent; 9] = [
        KnownAgent::Ta,
        KnownAgent::Sa,
        KnownAgent::Pa,
        KnownAgent::Fa,
        KnownAgent::Wa,
        KnownAgent::Ca,
        KnownAgent::Ja,
        KnownAgent::ArA,
        KnownAgent::Ra,
    ];

    pub fn code(self) -> &'static str {
        match self {
            KnownAgent::Ta => "TA",
            KnownAgent::Sa => "SA",
            KnownAgent::Pa => "PA",
            KnownAgent::Fa => "FA",
            KnownAgent::Wa => "WA",
            KnownAgent::Ca => "CA",
            KnownAgent::Ja => "JA",
            KnownAgent::ArA => "ArA",
            KnownAgent::Ra => "RA",
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            KnownAgent::Ta => "IT Agent",
            KnownAgent::Sa => "Sales Agent",
            KnownAgent::Pa => "Press Agent",
            KnownAgent::Fa => "Farming Agent",
            KnownAgent::Wa => "Wildlife Agent",
            KnownAgent::Ca => "Church Agent",
            KnownAgent::Ja => "Job Agent",
            KnownAgent::ArA => "Arts Agent",
            KnownAgent::Ra => "Recreation Agent",
        }
    }

    /// Exact-case lookup. `ARA` is not `ArA`; callers that accept user
    /// spelling normalise before calling this.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_roundtrips_every_known_agent() {
        for agent in KnownAgent::ALL {
            assert_eq!(KnownAgent::from_code(agent.code()), Some(agent));
        }
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert_eq!(KnownAgent::from_code("ARA"), None);
        assert_eq!(KnownAgent::from_code("ta"), None);
    }

    #[test]
    fn test_general_purpose_agent_is_first() {
        assert_eq!(KnownAgent::ALL[0], KnownAgent::Ta);
        assert_eq!(KnownAgent::Ta.default_label(), "IT Agent");
    }

    #[test]
    fn test_category_deserializes_from_agents_payload() {
        let json = r#"[{"code":"SA","label":"Sales"},{"code":"XA","label":"Extra"}]"#;
        let list: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(list[0], Category::new("SA", "Sales"));
        assert_eq!(list[1].code, "XA");
    }
}
