//! Offline demo backend with canned results so the console stays usable without
//! a reachable agent backend.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::agent_client::{AgentBackend, BackendMode, ClientError};
use crate::intent::Catalog;
use crate::models::run::{Guidance, Itinerary, Outline, Pitch, Plan, PressRelease, Receipt};
use crate::models::{Category, KnownAgent, RunData, RunResult};

pub struct OfflineDemo {
    catalog: Arc<Catalog>,
}

impl OfflineDemo {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    fn result(&self, code: &str, goal: &str, summary: String, data: RunData) -> RunResult {
        RunResult {
            success: true,
            summary: Some(summary),
            data: Some(data),
            receipt: Some(Receipt {
                agent_label: Some(self.catalog.label_or_code(code).to_string()),
                agent_code: Some(code.to_string()),
                user_goal: Some(goal.to_string()),
            }),
        }
    }

    /// Builds the canned result for `code`. Codes outside the built-in set get
    /// the generic next-steps answer.
    pub fn canned(&self, code: &str, goal: &str) -> RunResult {
        let g = if goal.is_empty() { "your request" } else { goal };

        let (summary, data) = match KnownAgent::from_code(code) {
            Some(KnownAgent::Ta) => (
                format!("Outlined troubleshooting for {g}."),
                RunData {
                    steps: Some(vec![
                        format!("Confirm cables, power and connectivity related to \"{g}\"."),
                        "Gather error messages or screenshots for reference.".to_string(),
                        "Apply software updates and restart equipment if issues persist."
                            .to_string(),
                    ]),
                    ..RunData::default()
                },
            ),
            Some(KnownAgent::Sa) => (
                format!("Drafted a sales outreach concept for {g}."),
                RunData {
                    pitch: Some(Pitch {
                        headline: Some(format!("Connect with prospects interested in {g}.")),
                        value_props: Some(strings(&[
                            "Highlight a clear customer benefit that solves their pain point.",
                            "Offer a local success story or testimonial for credibility.",
                            "Include a concise incentive for quick follow up.",
                        ])),
                        cta: Some(
                            "Invite the prospect to schedule a short discovery call this week."
                                .to_string(),
                        ),
                    }),
                    ..RunData::default()
                },
            ),
            Some(KnownAgent::Pa) => (
                format!("Prepared a press release outline for {g}."),
                RunData {
                    press_release: Some(PressRelease {
                        title: Some(format!("Community Update: {g}")),
                        lead: Some(format!(
                            "Sharing the latest news about {g} with local media."
                        )),
                        bullet_points: Some(strings(&[
                            "Key fact or milestone that makes this update timely.",
                            "Quote from a spokesperson describing the impact.",
                            "Next steps or community call to action.",
                        ])),
                    }),
                    ..RunData::default()
                },
            ),
            Some(KnownAgent::Fa) => (
                format!("Compiled a seasonal plan supporting {g}."),
                RunData {
                    plan: Some(Plan {
                        crop_rotation: Some(strings(&[
                            "Warm-season cover crop to rebuild soil organic matter.",
                            "Primary cash crop suited to East Tennessee conditions.",
                            "Cool-season legume to replenish nitrogen.",
                        ])),
                        soil_test: Some(
                            "Collect soil samples from representative beds and send to UT Extension."
                                .to_string(),
                        ),
                        goal_note: Some(
                            "Adjust irrigation and fertilization based on the soil test report."
                                .to_string(),
                        ),
                    }),
                    ..RunData::default()
                },
            ),
            Some(KnownAgent::Wa) => (
                format!("Outlined wildlife response guidance for {g}."),
                RunData {
                    guidance: Some(Guidance {
                        safety: Some(strings(&[
                            "Keep a safe distance and remove attractants like unsecured trash.",
                            "Educate neighbors on when to contact wildlife officers.",
                        ])),
                        contacts: Some(strings(&[
                            "Tennessee Wildlife Resources Agency regional office.",
                            "Local animal control for immediate hazards.",
                        ])),
                        goal_note: Some(
                            "Document sightings, including time and location, to assist responders."
                                .to_string(),
                        ),
                    }),
                    ..RunData::default()
                },
            ),
            Some(KnownAgent::Ca) => (
                format!("Drafted service announcements supporting {g}."),
                RunData {
                    outline: Some(Outline {
                        announcement: Some(format!(
                            "Share the key message about {g} during the upcoming service."
                        )),
                        schedule: Some(vec![
                            "Welcome & opening prayer.".to_string(),
                            format!("Highlight ministry updates connected to {g}."),
                            "Invite members to engage or volunteer.".to_string(),
                        ]),
                        goal_note: Some(
                            "Coordinate with music and AV teams for smooth transitions."
                                .to_string(),
                        ),
                    }),
                    ..RunData::default()
                },
            ),
            Some(KnownAgent::Ja) => (
                format!("Created a job search checklist tailored to {g}."),
                RunData {
                    checklist: Some(vec![
                        "Update resume with measurable achievements and certifications."
                            .to_string(),
                        format!("Identify three local opportunities aligned with {g}."),
                        "Prepare a concise cover letter template emphasizing fit.".to_string(),
                    ]),
                    ..RunData::default()
                },
            ),
            Some(KnownAgent::ArA) => (
                format!("Outlined creative showcase ideas for {g}."),
                RunData {
                    steps: Some(vec![
                        format!("Define the theme and featured artists related to {g}."),
                        "Draft promotional copy for newsletters and social media.".to_string(),
                        "Plan interactive elements to engage visitors.".to_string(),
                    ]),
                    ..RunData::default()
                },
            ),
            Some(KnownAgent::Ra) => (
                format!("Planned a recreation itinerary inspired by {g}."),
                RunData {
                    itinerary: Some(Itinerary {
                        half_day: Some(vec![
                            "Begin with a scenic trail loop and photo stop.".to_string(),
                            format!("Midday picnic featuring local spots tied to {g}."),
                            "Wrap up with a family-friendly optional activity.".to_string(),
                        ]),
                        gear: Some(strings(&[
                            "Weather-appropriate layers and water.",
                            "Trail map or downloaded offline route.",
                            "First-aid kit and charged phone.",
                        ])),
                        goal_note: Some(
                            "Check park advisories for closures or permits.".to_string(),
                        ),
                    }),
                    ..RunData::default()
                },
            ),
            None => (
                format!("Outlined next steps for {g}."),
                RunData {
                    steps: Some(vec![
                        format!("Clarify objectives and constraints for {g}."),
                        "Identify available local resources.".to_string(),
                        "Schedule a follow-up review of progress.".to_string(),
                    ]),
                    ..RunData::default()
                },
            ),
        };

        self.result(code, goal, summary, data)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[async_trait]
impl AgentBackend for OfflineDemo {
    async fn health(&self) -> Result<Value, ClientError> {
        Ok(json!({ "status": "offline" }))
    }

    async fn agents(&self) -> Result<Vec<Category>, ClientError> {
        Ok(self.catalog.categories().to_vec())
    }

    async fn run(&self, code: &str, goal: &str) -> Result<RunResult, ClientError> {
        Ok(self.canned(code, goal))
    }

    fn mode(&self) -> BackendMode {
        BackendMode::Offline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> OfflineDemo {
        OfflineDemo::new(Arc::new(Catalog::default()))
    }

    #[test]
    fn test_each_known_agent_gets_its_own_section() {
        let d = demo();
        let data = |code: &str| d.canned(code, "spring fair").data.unwrap();

        assert!(data("TA").steps.is_some());
        assert!(data("SA").pitch.is_some());
        assert!(data("PA").press_release.is_some());
        assert!(data("FA").plan.is_some());
        assert!(data("WA").guidance.is_some());
        assert!(data("CA").outline.is_some());
        assert!(data("JA").checklist.is_some());
        assert!(data("ArA").steps.is_some());
        assert!(data("RA").itinerary.is_some());
    }

    #[test]
    fn test_unknown_code_uses_default_answer() {
        let result = demo().canned("XA", "sort the shed");
        assert_eq!(
            result.summary.as_deref(),
            Some("Outlined next steps for sort the shed.")
        );
        let receipt = result.receipt.unwrap();
        assert_eq!(receipt.agent_code.as_deref(), Some("XA"));
        // Unknown codes are labelled with themselves.
        assert_eq!(receipt.agent_label.as_deref(), Some("XA"));
    }

    #[test]
    fn test_empty_goal_reads_as_your_request() {
        let result = demo().canned("TA", "");
        assert_eq!(
            result.summary.as_deref(),
            Some("Outlined troubleshooting for your request.")
        );
        assert_eq!(result.receipt.unwrap().user_goal.as_deref(), Some(""));
    }

    #[test]
    fn test_goal_is_woven_into_content() {
        let result = demo().canned("PA", "library reopening");
        let pr = result.data.unwrap().press_release.unwrap();
        assert_eq!(pr.title.as_deref(), Some("Community Update: library reopening"));
    }

    #[test]
    fn test_receipt_uses_catalog_labels() {
        let catalog = Arc::new(Catalog::default().merged(&[Category::new("WA", "Critter Line")]));
        let result = OfflineDemo::new(catalog).canned("WA", "bear");
        assert_eq!(
            result.receipt.unwrap().agent_label.as_deref(),
            Some("Critter Line")
        );
    }

    #[tokio::test]
    async fn test_backend_trait_surface() {
        let d = demo();
        assert_eq!(d.health().await.unwrap()["status"], "offline");
        assert_eq!(d.agents().await.unwrap().len(), 9);
        assert!(d.run("SA", "pies").await.unwrap().success);
        assert_eq!(d.mode(), BackendMode::Offline);
    }
}
