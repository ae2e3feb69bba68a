use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "filename", alias = "documentId", default)]
    pub document_id: Option<String>,
    #[serde(alias = "pageNumber", default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(alias = "sectionTitle", default)]
    pub section_title: Option<String>,
    #[serde(default)]
    pub score: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RecommendationsResponse {
    #[serde(default)]
    pub(super) results: Vec<Recommendation>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Insights {
    #[serde(alias = "keyInsights", default)]
    pub key_insights: Vec<String>,
    #[serde(alias = "didYouKnowFacts", default)]
    pub did_you_know_facts: Vec<String>,
    #[serde(default)]
    pub counterpoints: Vec<String>,
    #[serde(default)]
    pub inspirations: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub citations: Vec<Citation>,
}

impl Insights {
    /// Non-empty categories in display order.
    pub fn sections(&self) -> Vec<(&'static str, &[String])> {
        [
            ("Key insights", self.key_insights.as_slice()),
            ("Did you know?", self.did_you_know_facts.as_slice()),
            ("Counterpoints", self.counterpoints.as_slice()),
            ("Inspirations", self.inspirations.as_slice()),
            ("Examples", self.examples.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Citation {
    #[serde(rename = "filename", alias = "documentId", default)]
    pub document_id: Option<String>,
    #[serde(alias = "pageNumber", default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub snippet: Option<String>,
}

impl Citation {
    pub fn label(&self) -> String {
        let mut label = self
            .document_id
            .clone()
            .unwrap_or_else(|| "Unknown source".to_string());
        if let Some(page) = self.page_number {
            label.push_str(&format!(" p.{page}"));
        }
        if let Some(snippet) = self.snippet.as_deref().filter(|s| !s.trim().is_empty()) {
            label.push_str(" — ");
            label.push_str(snippet.trim());
        }
        label
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PodcastMeta {
    pub url: String,
    #[serde(default)]
    pub parts: Vec<String>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Chapter {
    #[serde(default)]
    pub speaker: String,
    #[serde(alias = "startMs", default)]
    pub start_ms: Option<f64>,
    #[serde(alias = "endMs", default)]
    pub end_ms: Option<f64>,
}

impl PodcastMeta {
    /// Distinct trimmed speaker names in order of first appearance.
    pub fn speakers(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for chapter in &self.chapters {
            let name = chapter.speaker.trim();
            if !name.is_empty() && !seen.iter().any(|s| s == name) {
                seen.push(name.to_string());
            }
        }
        seen
    }

    /// Length of the episode taken from the last chapter carrying a timestamp.
    pub fn total_ms(&self) -> Option<f64> {
        self.chapters
            .iter()
            .rev()
            .find_map(|chapter| chapter.end_ms.or(chapter.start_ms))
    }

    pub fn duration_label(&self) -> String {
        format_duration(self.total_ms())
    }
}

/// `m:ss`, or a placeholder when the duration is unknown.
pub fn format_duration(ms: Option<f64>) -> String {
    match ms {
        Some(ms) if ms.is_finite() && ms > 0.0 => {
            let total_secs = (ms / 1000.0).floor() as u64;
            format!("{}:{:02}", total_secs / 60, total_secs % 60)
        }
        _ => "—:—".to_string(),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublicConfig {
    #[serde(rename = "adobeClientId", alias = "adobe_client_id", default)]
    pub adobe_client_id: Option<String>,
}
