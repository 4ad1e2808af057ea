//! Run result → HTML fragment.
//!
//! The status block is always present; each data section is appended when
//! present, in a fixed order, and several sections may render together.

use askama::Template;

use crate::models::{RunData, RunResult};

/// Values shown when the result's receipt leaves them out.
#[derive(Debug, Clone, Copy)]
pub struct ResultContext<'a> {
    pub detected_label: &'a str,
    pub goal: &'a str,
}

#[derive(Template)]
#[template(
    source = r##"<dl class="kv">
  <dt>Status</dt><dd>{{ status }}</dd>
  <dt>Summary</dt><dd>{{ summary }}</dd>
  <dt>Agent</dt><dd>{{ agent }}</dd>
  <dt>Goal</dt><dd>{{ goal }}</dd>
</dl>
{%- if let Some(data) = run_data %}
{%- if let Some(items) = data.checklist %}
<h3>Checklist</h3>
<ul class="clean">
{%- for item in items %}
  <li>{{ item }}</li>
{%- endfor %}
</ul>
{%- endif %}
{%- if let Some(pitch) = data.pitch %}
<h3>Sales Pitch</h3>
<div><strong>{% if let Some(headline) = pitch.headline %}{{ headline }}{% endif %}</strong></div>
{%- if let Some(items) = pitch.value_props %}
<ul class="clean">
{%- for item in items %}
  <li>{{ item }}</li>
{%- endfor %}
</ul>
{%- endif %}
{%- if let Some(cta) = pitch.cta %}
<div><em>Call to action:</em> {{ cta }}</div>
{%- endif %}
{%- endif %}
{%- if let Some(pr) = data.press_release %}
<h3>Press Release</h3>
<div><strong>{% if let Some(title) = pr.title %}{{ title }}{% else %}Community Update{% endif %}</strong></div>
<p>{% if let Some(lead) = pr.lead %}{{ lead }}{% endif %}</p>
{%- if let Some(items) = pr.bullet_points %}
<ul class="clean">
{%- for item in items %}
  <li>{{ item }}</li>
{%- endfor %}
</ul>
{%- endif %}
{%- endif %}
{%- if let Some(plan) = data.plan %}
<h3>Plan</h3>
{%- if let Some(items) = plan.crop_rotation %}
<div><strong>Crop rotation:</strong></div>
<ul class="clean">
{%- for item in items %}
  <li>{{ item }}</li>
{%- endfor %}
</ul>
{%- endif %}
{%- if let Some(soil_test) = plan.soil_test %}
<div><strong>Soil test:</strong> {{ soil_test }}</div>
{%- endif %}
{%- if let Some(note) = plan.goal_note %}
<div><strong>Note:</strong> {{ note }}</div>
{%- endif %}
{%- endif %}
{%- if let Some(guidance) = data.guidance %}
<h3>Guidance</h3>
{%- if let Some(items) = guidance.safety %}
<div><strong>Safety:</strong></div>
<ul class="clean">
{%- for item in items %}
  <li>{{ item }}</li>
{%- endfor %}
</ul>
{%- endif %}
{%- if let Some(items) = guidance.contacts %}
<div><strong>Contacts:</strong></div>
<ul class="clean">
{%- for item in items %}
  <li>{{ item }}</li>
{%- endfor %}
</ul>
{%- endif %}
{%- if let Some(note) = guidance.goal_note %}
<div><strong>Note:</strong> {{ note }}</div>
{%- endif %}
{%- endif %}
{%- if let Some(outline) = data.outline %}
<h3>Announcements</h3>
{%- if let Some(announcement) = outline.announcement %}
<div><strong>{{ announcement }}</strong></div>
{%- endif %}
{%- if let Some(items) = outline.schedule %}
<div><strong>Schedule:</strong></div>
<ul class="clean">
{%- for item in items %}
  <li>{{ item }}</li>
{%- endfor %}
</ul>
{%- endif %}
{%- if let Some(note) = outline.goal_note %}
<div><strong>Note:</strong> {{ note }}</div>
{%- endif %}
{%- endif %}
{%- if let Some(items) = data.steps %}
<h3>Next Steps</h3>
<ul class="clean">
{%- for item in items %}
  <li>{{ item }}</li>
{%- endfor %}
</ul>
{%- endif %}
{%- if let Some(itinerary) = data.itinerary %}
<h3>Itinerary</h3>
{%- if let Some(items) = itinerary.half_day %}
<div><strong>Half-day plan:</strong></div>
<ul class="clean">
{%- for item in items %}
  <li>{{ item }}</li>
{%- endfor %}
</ul>
{%- endif %}
{%- if let Some(items) = itinerary.gear %}
<div><strong>Gear:</strong></div>
<ul class="clean">
{%- for item in items %}
  <li>{{ item }}</li>
{%- endfor %}
</ul>
{%- endif %}
{%- if let Some(note) = itinerary.goal_note %}
<div><strong>Note:</strong> {{ note }}</div>
{%- endif %}
{%- endif %}
{%- if let Some(error) = data.error %}
<h3>Error</h3>
<div class="error">{{ error }}</div>
{%- endif %}
{%- endif %}"##,
    ext = "html"
)]
struct ResultTemplate<'a> {
    status: &'static str,
    summary: &'a str,
    agent: &'a str,
    goal: &'a str,
    run_data: Option<&'a RunData>,
}

pub fn render_result(result: &RunResult, ctx: ResultContext<'_>) -> askama::Result<String> {
    let receipt = result.receipt.as_ref();
    ResultTemplate {
        status: if result.success {
            "✅ Success"
        } else {
            "❌ Failed"
        },
        summary: result.summary.as_deref().unwrap_or(""),
        agent: receipt
            .and_then(|r| r.agent_label.as_deref())
            .unwrap_or(ctx.detected_label),
        goal: receipt
            .and_then(|r| r.user_goal.as_deref())
            .unwrap_or(ctx.goal),
        run_data: result.data.as_ref(),
    }
    .render()
}
