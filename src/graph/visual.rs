//! Visual encoding: pure derivation of render attributes.
//!
//! Everything here is a function of `(snapshot data, DisplayMode)` with no
//! other inputs, so re-deriving after a mode toggle or a snapshot replacement
//! always yields a consistent picture. No memoization: stale visuals computed
//! under a previous snapshot/mode combination cannot leak through.

use serde::{Deserialize, Serialize};

use super::types::{GraphEdge, GraphNode};

/// Session-scoped visual mode for the graph surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Neutral rendering, display name only
    #[default]
    Normal,
    /// Node color encodes the risk score
    RiskHeatmap,
}

impl DisplayMode {
    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "RISK_HEATMAP" | "RISK" | "HEATMAP" => DisplayMode::RiskHeatmap,
            _ => DisplayMode::Normal, // Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Normal => "NORMAL",
            DisplayMode::RiskHeatmap => "RISK_HEATMAP",
        }
    }
}

/// Upper bound of the medium band; strictly above is high risk
pub const HIGH_RISK_THRESHOLD: f64 = 75.0;
/// Upper bound of the low band; strictly above is medium risk
pub const MEDIUM_RISK_THRESHOLD: f64 = 50.0;

/// Three-way risk bucket used by the heatmap encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// Bucket a score; a missing score is treated as 0
    pub fn from_score(score: Option<f64>) -> Self {
        let score = score.unwrap_or(0.0);
        if score > HIGH_RISK_THRESHOLD {
            RiskBand::High
        } else if score > MEDIUM_RISK_THRESHOLD {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }
}

// Palette (fill, border) per encoding
const NEUTRAL: (&str, &str) = ("#E5E7EB", "#6B7280"); // Gray
const LOW_RISK: (&str, &str) = ("#10B981", "#047857"); // Green
const MEDIUM_RISK: (&str, &str) = ("#F59E0B", "#B45309"); // Amber
const HIGH_RISK: (&str, &str) = ("#EF4444", "#B91C1C"); // Red
const EDGE_STROKE: &str = "#9CA3AF"; // Neutral, mode-independent

/// Render attributes for one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeVisual {
    pub fill_color: String,
    pub border_color: String,
    pub label: String,
}

/// Render attributes for one edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeVisual {
    pub label: String,
    pub stroke_color: String,
}

/// Derive a node's render attributes under the given mode.
///
/// Normal mode ignores the risk score entirely. Heatmap mode buckets the
/// score (absent treated as 0) and appends a risk line to the label, with a
/// literal "n/a" when the score is absent.
pub fn node_visual(node: &GraphNode, mode: DisplayMode) -> NodeVisual {
    match mode {
        DisplayMode::Normal => NodeVisual {
            fill_color: NEUTRAL.0.to_string(),
            border_color: NEUTRAL.1.to_string(),
            label: node.display_name.clone(),
        },
        DisplayMode::RiskHeatmap => {
            let (fill, border) = match RiskBand::from_score(node.risk_score) {
                RiskBand::Low => LOW_RISK,
                RiskBand::Medium => MEDIUM_RISK,
                RiskBand::High => HIGH_RISK,
            };
            let risk_line = match node.risk_score {
                Some(score) => format!("risk: {}", score),
                None => "risk: n/a".to_string(),
            };
            NodeVisual {
                fill_color: fill.to_string(),
                border_color: border.to_string(),
                label: format!("{}\n{}", node.display_name, risk_line),
            }
        }
    }
}

/// Derive an edge's render attributes.
///
/// Label priority: ownership percentage, then the edge's own label, then
/// empty. The stroke is fixed and mode-independent.
pub fn edge_visual(edge: &GraphEdge) -> EdgeVisual {
    let label = match (edge.ownership_percentage, &edge.label) {
        (Some(pct), _) => format!("{}%", pct),
        (None, Some(label)) => label.clone(),
        (None, None) => String::new(),
    };
    EdgeVisual {
        label,
        stroke_color: EDGE_STROKE.to_string(),
    }
}
