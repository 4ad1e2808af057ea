//! Keyword rule table.
//!
//! Priority is the cross-category tie-break: when a goal mentions keywords
//! from several agents, the rule with the lowest priority wins. "outreach"
//! appears under both SA and CA, so it always routes to sales.

use crate::models::KnownAgent;

#[derive(Debug, Clone)]
pub struct IntentRule {
    pub agent: KnownAgent,
    pub priority: u8,
    pub keywords: &'static [&'static str],
}

pub const DEFAULT_RULES: &[IntentRule] = &[
    IntentRule {
        agent: KnownAgent::Pa,
        priority: 0,
        keywords: &[
            "press release",
            "press",
            "media",
            "newsroom",
            "announcement draft",
            "journalist",
        ],
    },
    IntentRule {
        agent: KnownAgent::Ja,
        priority: 1,
        keywords: &[
            "resume",
            "cover letter",
            "job",
            "hiring",
            "interview",
            "career",
            "applicant",
            "application",
        ],
    },
    IntentRule {
        agent: KnownAgent::Ta,
        priority: 2,
        keywords: &[
            "wifi",
            "wi\u{2011}fi",
            "printer",
            "computer",
            "laptop",
            "phone",
            "software",
            "bug",
            "error",
            "troubleshoot",
            "network",
            "router",
        ],
    },
    IntentRule {
        agent: KnownAgent::Sa,
        priority: 3,
        keywords: &[
            "sales",
            "pitch",
            "outreach",
            "customers",
            "lead",
            "prospect",
            "marketing",
            "cta",
        ],
    },
    IntentRule {
        agent: KnownAgent::Fa,
        priority: 4,
        keywords: &[
            "farm",
            "farming",
            "crop",
            "plant",
            "garden",
            "soil",
            "rotation",
            "fertilizer",
        ],
    },
    IntentRule {
        agent: KnownAgent::Wa,
        priority: 5,
        keywords: &[
            "wildlife",
            "bear",
            "deer",
            "raccoon",
            "coyote",
            "snake",
            "animal control",
            "twra",
        ],
    },
    IntentRule {
        agent: KnownAgent::Ca,
        priority: 6,
        keywords: &[
            "church",
            "vespers",
            "worship",
            "outreach",
            "ministry",
            "announcements",
            "sabbath",
            "service",
        ],
    },
    IntentRule {
        agent: KnownAgent::ArA,
        priority: 7,
        keywords: &[
            "art",
            "arts",
            "gallery",
            "exhibit",
            "craft",
            "showcase",
            "paint",
            "sculpt",
            "illustration",
        ],
    },
    IntentRule {
        agent: KnownAgent::Ra,
        priority: 8,
        keywords: &[
            "hike",
            "trail",
            "camp",
            "recreation",
            "kayak",
            "picnic",
            "greenway",
            "overlook",
            "outdoors",
        ],
    },
];
