//! Terminal rendering of screening reports. Presentation only.

use std::fmt::Write;

use crate::feature_encoder::FeatureVector;
use crate::types::prediction::{ScreeningOutcome, ScreeningReport};

const DISCLAIMER: &str = "Important: this result is a statistical prediction, not a medical \
     diagnosis. Mental health conditions are complex and can only be \
     diagnosed by a qualified professional.";

/// Renders a screening report as human-facing text
pub struct ReportRenderer {
    show_details: bool,
}

impl ReportRenderer {
    /// Create a renderer; `show_details` appends the encoded feature
    /// values the way the form UI's expandable section does.
    pub fn new(show_details: bool) -> Self {
        Self { show_details }
    }

    /// Render the report, optionally followed by the encoded features
    pub fn render(&self, report: &ScreeningReport, features: &FeatureVector) -> String {
        let mut out = String::new();

        let percent = report.confidence * 100.0;
        match report.outcome {
            ScreeningOutcome::Positive => {
                writeln!(out, "Result: potential signs of depression").ok();
                writeln!(
                    out,
                    "Based on your answers, the model estimates a {:.2}% likelihood of \
                     depressive symptoms. We strongly encourage you to talk to a \
                     psychologist or mental health professional for a full evaluation.",
                    percent
                )
                .ok();
            }
            ScreeningOutcome::Negative => {
                writeln!(out, "Result: no potential signs of depression").ok();
                writeln!(
                    out,
                    "Based on your answers, the model estimates a {:.2}% likelihood that \
                     you are not experiencing depressive symptoms. Keep looking after \
                     your mental health with a balanced lifestyle.",
                    percent
                )
                .ok();
            }
        }

        writeln!(out).ok();
        writeln!(out, "{}", DISCLAIMER).ok();

        if self.show_details {
            writeln!(out).ok();
            writeln!(out, "Encoded input details:").ok();
            for (name, value) in features.named_values() {
                writeln!(out, "  {:<42} {}", name, value).ok();
            }
        }

        out
    }
}
