//! Keyword classifier: maps free-text goals onto an agent code.
//!
//! Resolution order:
//! 1. `intent` query override (handled by [`KeywordClassifier::resolve`])
//! 2. explicit `code:` prefix, e.g. `sa: follow up with the co-op`
//! 3. keyword rules, lowest priority first, longest keyword first within a rule
//! 4. the catalog's general-purpose fallback

use std::sync::Arc;

use regex::Regex;
use serde::Serialize;

use crate::intent::catalog::Catalog;
use crate::intent::rules::IntentRule;
use crate::models::KnownAgent;

/// Why a goal was routed to its agent. Surfaced in the `/classify` preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetectionSource {
    QueryOverride,
    PrefixOverride,
    Keyword { keyword: String },
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub code: String,
    pub label: String,
    pub source: DetectionSource,
}

#[derive(Debug)]
enum Matcher {
    /// Multi-word phrase, matched by substring.
    Phrase(String),
    /// Single word, matched at word boundaries.
    Word { keyword: String, pattern: Regex },
}

impl Matcher {
    fn compile(keyword: &str) -> Result<Self, regex::Error> {
        let keyword = keyword.to_lowercase();
        if keyword.contains(' ') {
            Ok(Matcher::Phrase(keyword))
        } else {
            let pattern = Regex::new(&format!(
                r"(?-u:\b){}(?-u:\b)",
                regex::escape(&keyword)
            ))?;
            Ok(Matcher::Word { keyword, pattern })
        }
    }

    fn keyword(&self) -> &str {
        match self {
            Matcher::Phrase(k) => k,
            Matcher::Word { keyword, .. } => keyword,
        }
    }

    fn is_match(&self, lowered: &str) -> bool {
        match self {
            Matcher::Phrase(k) => lowered.contains(k.as_str()),
            Matcher::Word { pattern, .. } => pattern.is_match(lowered),
        }
    }
}

#[derive(Debug)]
struct CompiledRule {
    agent: KnownAgent,
    matchers: Vec<Matcher>,
}

#[derive(Debug)]
pub struct KeywordClassifier {
    prefix: Regex,
    rules: Vec<CompiledRule>,
    catalog: Arc<Catalog>,
}

impl KeywordClassifier {
    /// Compiles `rules` against `catalog`. Rules are ordered by priority
    /// (stable, so equal priorities keep table order) and each rule's
    /// keywords by descending length.
    pub fn new(rules: &[IntentRule], catalog: Arc<Catalog>) -> Result<Self, regex::Error> {
        let mut ordered: Vec<&IntentRule> = rules.iter().collect();
        ordered.sort_by_key(|r| r.priority);

        let rules = ordered
            .into_iter()
            .map(|rule| -> Result<CompiledRule, regex::Error> {
                let mut keywords: Vec<&str> = rule.keywords.to_vec();
                keywords.sort_by(|a, b| b.len().cmp(&a.len()));
                let matchers = keywords
                    .into_iter()
                    .map(Matcher::compile)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(CompiledRule {
                    agent: rule.agent,
                    matchers,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            prefix: Regex::new(r"(?i)^\s*([a-z]{2,3}|ara)\s*:\s*")?,
            rules,
            catalog,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Classifies `goal`, letting a known `query_intent` win outright.
    pub fn resolve(&self, goal: &str, query_intent: Option<&str>) -> Detection {
        match query_intent {
            Some(code) if self.catalog.contains(code) => {
                self.detection(code, DetectionSource::QueryOverride)
            }
            _ => self.classify(goal),
        }
    }

    /// Classifies `text` by explicit prefix, then keywords, then fallback.
    pub fn classify(&self, text: &str) -> Detection {
        if let Some(code) = self.prefix_override(text) {
            return self.detection(&code, DetectionSource::PrefixOverride);
        }

        let lowered = text.to_lowercase();
        for rule in &self.rules {
            if let Some(hit) = rule.matchers.iter().find(|m| m.is_match(&lowered)) {
                return self.detection(
                    rule.agent.code(),
                    DetectionSource::Keyword {
                        keyword: hit.keyword().to_string(),
                    },
                );
            }
        }

        let fallback = self.catalog.fallback();
        Detection {
            code: fallback.code.clone(),
            label: fallback.label.clone(),
            source: DetectionSource::Fallback,
        }
    }

    fn prefix_override(&self, text: &str) -> Option<String> {
        let token = self.prefix.captures(text)?.get(1)?.as_str().to_uppercase();
        if self.catalog.contains(&token) {
            return Some(token);
        }
        let arts = KnownAgent::ArA.code();
        if token == "ARA" && self.catalog.contains(arts) {
            return Some(arts.to_string());
        }
        None
    }

    fn detection(&self, code: &str, source: DetectionSource) -> Detection {
        Detection {
            code: code.to_string(),
            label: self.catalog.label_or_code(code).to_string(),
            source,
        }
    }
}
