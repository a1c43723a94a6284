//! Heuristic scoring of probed camera candidates.
//!
//! Every signal is independent and additive; none is authoritative and a
//! missing signal contributes nothing. Label rules are vendor naming
//! conventions and live in one table so they can be extended without
//! touching the resolver.
//!
//! | Signal | Contribution |
//! |--------|--------------|
//! | Focus distance | `10 × value` |
//! | Zoom | `0.1 / (|zoom − 1| + 0.001)` |
//! | Label rules | see [`LABEL_RULES`] |
//! | Max capture width | `max_width / 10000` |

use crate::platform::{TrackCapabilities, TrackSettings};

/// Weight applied to the reported focus distance.
pub const FOCUS_DISTANCE_WEIGHT: f64 = 10.0;
/// Numerator of the zoom proximity term.
pub const ZOOM_WEIGHT: f64 = 0.1;
/// Keeps the zoom term finite at exactly 1.0.
pub const ZOOM_EPSILON: f64 = 0.001;
/// Divisor applied to the maximum capture width.
pub const MAX_WIDTH_DIVISOR: f64 = 10_000.0;

/// A substring rule over the lowercase device label.
#[derive(Debug, Clone, Copy)]
pub struct LabelRule {
    /// Signal name used in logs
    pub name: &'static str,
    /// Rule fires if the label contains any of these
    pub any_of: &'static [&'static str],
    /// ...and none of these
    pub none_of: &'static [&'static str],
    /// Score contribution when the rule fires
    pub weight: f64,
}

impl LabelRule {
    /// Whether the rule fires for an already-lowercased label.
    pub fn matches(&self, label: &str) -> bool {
        self.any_of.iter().any(|p| label.contains(p))
            && !self.none_of.iter().any(|p| label.contains(p))
    }
}

/// Label rules, applied in order. Each contributes at most once.
pub const LABEL_RULES: &[LabelRule] = &[
    LabelRule {
        name: "label_main",
        any_of: &["main"],
        none_of: &[],
        weight: 100.0,
    },
    LabelRule {
        name: "label_wide",
        any_of: &["wide"],
        none_of: &["ultra", "0.6", "0.5"],
        weight: 50.0,
    },
    LabelRule {
        name: "label_ultra_wide",
        any_of: &["ultra", "0.6", "0.5", "0.7"],
        none_of: &[],
        weight: -100.0,
    },
    LabelRule {
        name: "label_telephoto",
        any_of: &["telephoto", "tele"],
        none_of: &[],
        weight: -50.0,
    },
    LabelRule {
        name: "label_back_index_0",
        any_of: &["camera2 0", "back camera 0", "back, 0"],
        none_of: &[],
        weight: 80.0,
    },
    LabelRule {
        name: "label_back_index_1",
        any_of: &["camera2 1", "back camera 1", "back, 1"],
        none_of: &[],
        weight: 30.0,
    },
];

/// Everything observed about one candidate during its probe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbeSignals {
    pub label: String,
    pub focus_distance: Option<f64>,
    pub zoom: Option<f64>,
    pub max_width: Option<f64>,
}

impl ProbeSignals {
    /// Signals derived from the label alone.
    pub fn from_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Combine a label with what a live stream reported.
    pub fn observed(
        label: impl Into<String>,
        settings: &TrackSettings,
        capabilities: &TrackCapabilities,
    ) -> Self {
        Self {
            label: label.into(),
            focus_distance: settings.focus_distance,
            zoom: settings.zoom,
            max_width: capabilities.max_width(),
        }
    }
}

/// One signal's share of a score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub signal: &'static str,
    pub value: f64,
}

/// Total score with its per-signal breakdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreCard {
    pub total: f64,
    pub contributions: Vec<Contribution>,
}

impl ScoreCard {
    fn add(&mut self, signal: &'static str, value: f64) {
        // Non-finite platform values would poison the ordering.
        if !value.is_finite() {
            return;
        }
        self.total += value;
        self.contributions.push(Contribution { signal, value });
    }

    /// Compact `name=value` listing for logs.
    pub fn summary(&self) -> String {
        self.contributions
            .iter()
            .map(|c| format!("{}={:.3}", c.signal, c.value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Score a candidate from its observed signals.
///
/// Pure and deterministic: identical signals always produce an identical
/// total, summed in a fixed order.
pub fn score_signals(signals: &ProbeSignals) -> ScoreCard {
    let mut card = ScoreCard::default();

    if let Some(focus) = signals.focus_distance {
        card.add("focus_distance", focus * FOCUS_DISTANCE_WEIGHT);
    }

    if let Some(zoom) = signals.zoom {
        card.add("zoom", ZOOM_WEIGHT / ((zoom - 1.0).abs() + ZOOM_EPSILON));
    }

    let label = signals.label.to_lowercase();
    for rule in LABEL_RULES.iter().filter(|rule| rule.matches(&label)) {
        card.add(rule.name, rule.weight);
    }

    if let Some(width) = signals.max_width {
        card.add("max_width", width / MAX_WIDTH_DIVISOR);
    }

    card
}
