//! Detection report panel: verdict header, metric grid, image pair.
//!
//! DESIGN
//! ======
//! Keeps report presentation identical between the analyze result and the
//! history detail view. The panel is pure presentation over one record.

use leptos::prelude::*;

use crate::net::types::DetectionRecord;
use crate::util::format::{format_score, state_tone, tone_class};

/// Renders one detection record as a full report.
#[component]
pub fn ReportPanel(record: DetectionRecord) -> impl IntoView {
    let badge_class = format!("state-badge {}", tone_class(state_tone(&record.state)));
    let scores = [
        ("Confidence", record.confidence),
        ("SSIM", record.ssim),
        ("LPIPS", record.lpips),
        ("RM", record.rm),
        ("PVR", record.pvr),
    ];

    view! {
        <div class="report-panel">
            <div class="report-panel__header">
                <span class="report-panel__label">{record.label_name}</span>
                <span class=badge_class>{record.state}</span>
            </div>
            <dl class="score-grid">
                {scores
                    .into_iter()
                    .map(|(name, value)| {
                        view! {
                            <div class="score-grid__cell">
                                <dt class="score-grid__name">{name}</dt>
                                <dd class="score-grid__value">{format_score(value)}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
            <div class="image-pair">
                <figure class="image-pair__panel">
                    <figcaption>"Original"</figcaption>
                    <img src=record.original_image_url alt="Original image"/>
                </figure>
                <figure class="image-pair__panel">
                    <figcaption>"Heatmap"</figcaption>
                    <img src=record.heatmap_image_url alt="Tampering heatmap"/>
                </figure>
            </div>
        </div>
    }
}
