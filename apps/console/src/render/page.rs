//! Full console page. The result region embeds the fragment produced by
//! [`crate::render::render_result`].

use askama::Template;
use serde::Serialize;

use crate::intent::Detection;

pub const RESULT_PLACEHOLDER: &str = "Results will appear here.";

/// Backend reachability as determined at boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiStatus {
    Connected,
    Offline,
    Unreachable,
}

impl ApiStatus {
    pub fn label(self) -> &'static str {
        match self {
            ApiStatus::Connected => "API Connected",
            ApiStatus::Offline => "Offline Demo Mode",
            ApiStatus::Unreachable => "API Unreachable",
        }
    }

    fn chip_class(self) -> &'static str {
        match self {
            ApiStatus::Connected => "status-chip--ok",
            ApiStatus::Offline => "status-chip--muted",
            ApiStatus::Unreachable => "status-chip--err",
        }
    }
}

pub struct PageView<'a> {
    pub status: ApiStatus,
    /// Backend base URL, or `None` when serving the offline demo.
    pub api_origin: Option<&'a str>,
    pub goal: &'a str,
    /// Marks the goal input invalid after an empty submission.
    pub invalid: bool,
    pub detection: &'a Detection,
    /// Known `intent` override to carry across submissions.
    pub intent_override: Option<&'a str>,
    /// Rendered result fragment, inserted unescaped; `None` shows the placeholder.
    pub result_html: Option<String>,
}

#[derive(Template)]
#[template(
    source = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Goal Console</title>
  <style>{{ style|safe }}</style>
</head>
<body>
  <header>
    <span id="apiStatus" class="status-chip {{ chip }}">{{ status }}</span>
    {% if let Some(base) = api_origin %}<a id="apiOriginLabel" href="{{ base }}">{{ base }}</a>{% else %}<span id="apiOriginLabel">local demo</span>{% endif %}
  </header>
  <main>
    <form id="runForm" method="post" action="/run">
      {% if let Some(intent_code) = intent_override %}<input type="hidden" name="intent" value="{{ intent_code }}">{% endif %}
      <textarea id="goalInput" name="goal" rows="3" placeholder="Describe your goal"{% if invalid %} aria-invalid="true"{% endif %}>{{ goal }}</textarea>
      <p class="detected">Detected: <span id="detectedLabel">{{ label }}</span> <span id="detectedCode">({{ code }})</span></p>
      <button id="runBtn" type="submit">Run <span class="spinner hidden"></span></button>
    </form>
    <form method="get" action="/">
      {% if let Some(intent_code) = intent_override %}<input type="hidden" name="intent" value="{{ intent_code }}">{% endif %}
      <button id="clearBtn" type="submit">Clear</button>
    </form>
    <section id="result">{% if let Some(fragment) = result_html %}{{ fragment|safe }}{% else %}{{ placeholder }}{% endif %}</section>
  </main>
  <script>{{ script|safe }}</script>
</body>
</html>
"##,
    ext = "html"
)]
struct PageTemplate<'a> {
    chip: &'static str,
    status: &'static str,
    api_origin: Option<&'a str>,
    intent_override: Option<&'a str>,
    invalid: bool,
    goal: &'a str,
    label: &'a str,
    code: &'a str,
    result_html: Option<&'a str>,
    placeholder: &'static str,
    style: &'static str,
    script: &'static str,
}

pub fn render_page(view: &PageView<'_>) -> askama::Result<String> {
    PageTemplate {
        chip: view.status.chip_class(),
        status: view.status.label(),
        api_origin: view.api_origin,
        intent_override: view.intent_override,
        invalid: view.invalid,
        goal: view.goal,
        label: &view.detection.label,
        code: &view.detection.code,
        result_html: view.result_html.as_deref(),
        placeholder: RESULT_PLACEHOLDER,
        style: STYLE,
        script: SCRIPT,
    }
    .render()
}

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
.status-chip{padding:.2rem .6rem;border-radius:1rem;font-size:.85rem}\
.status-chip--ok{background:#d4f5dd}.status-chip--muted{background:#eee}.status-chip--err{background:#fbd5d5}\
textarea{width:100%}textarea[aria-invalid=true]{outline:2px solid #d33}\
.kv dt{font-weight:600}.clean{padding-left:1.2rem}.error{color:#b00}.hidden{display:none}";

// Live preview through GET /classify, and a disabled button while a run is in flight.
const SCRIPT: &str = r##"
const goal = document.querySelector("#goalInput");
const form = document.querySelector("#runForm");
const intent = form.querySelector("input[name=intent]");
goal.addEventListener("input", async () => {
  const q = new URLSearchParams({ goal: goal.value });
  if (intent) q.set("intent", intent.value);
  const r = await fetch(`/classify?${q}`);
  if (!r.ok) return;
  const d = await r.json();
  document.querySelector("#detectedLabel").textContent = d.label;
  document.querySelector("#detectedCode").textContent = `(${d.code})`;
});
form.addEventListener("submit", () => {
  const btn = document.querySelector("#runBtn");
  btn.disabled = true;
  btn.querySelector(".spinner").classList.remove("hidden");
});
"##;
