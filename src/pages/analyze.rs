//! Analyze page: upload an image, read the verdict on the same screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route and works without a session; the server decides
//! whether anonymous analysis is allowed and answers 401 when it is not.

#[cfg(test)]
#[path = "analyze_test.rs"]
mod analyze_test;

use leptos::prelude::*;

use crate::components::report_panel::ReportPanel;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::types::DetectionRecord;

/// The submit control stays disabled until a file is chosen and no upload is
/// in flight.
fn can_submit(has_file: bool, analyzing: bool) -> bool {
    has_file && !analyzing
}

#[cfg(any(test, feature = "hydrate"))]
fn analyze_error_message(error: &ApiError) -> String {
    if error.is_unauthorized() {
        "The server currently requires a login before running an analysis.".to_owned()
    } else {
        error.user_message("Analysis request failed.")
    }
}

/// Static interpretation guide shown under the analyzer.
fn guide_entries() -> &'static [(&'static str, &'static str)] {
    &[
        (
            "SSIM down + LPIPS up (Zone D)",
            "Structure has collapsed and perceptual distance is extreme — the \
             failure pattern. Physical indicators across the image are at \
             their worst, pointing to outright manipulation.",
        ),
        (
            "SSIM down + LPIPS down (Zone B)",
            "Visually natural but structurally divergent — the sleek-fake \
             pattern produced by capable generative models. Inspect the \
             heatmap along object boundaries.",
        ),
        (
            "RM & PVR residual analysis",
            "RM measures overall high-frequency residual strength; PVR flags \
             concentrated noise peaks. A spike in either suggests fine-grained \
             compositing the eye cannot resolve.",
        ),
        (
            "Heatmap hot regions",
            "Red areas are where the model found pixel discontinuities or \
             artificial texture. Read them together with the score grid, not \
             in isolation.",
        ),
    ]
}

/// Static FAQ shown at the bottom of the page.
fn faq_entries() -> &'static [(&'static str, &'static str)] {
    &[
        (
            "How are the Zone A-D risk tiers assigned?",
            "The service combines structural similarity (SSIM) and perceptual \
             quality (LPIPS) into four tiers: Zone A for intact originals, \
             Zone B for refined synthesis that is hard to spot by eye, and \
             Zones C/D for clear physical distortion.",
        ),
        (
            "What do SSIM and LPIPS mean in the report?",
            "SSIM tracks how much of the image's structural skeleton is \
             preserved; LPIPS measures perceived visual naturalness. When the \
             two disagree, precise generative edits are likely.",
        ),
        (
            "What does the red area in the heatmap show?",
            "It is the region the model weighed most heavily as evidence of \
             tampering, typically along object boundaries or unnatural noise.",
        ),
        (
            "My upload does not produce a result.",
            "An expired session or an unstable connection can interrupt the \
             analysis. Log in again, and check that the file is a JPG or PNG.",
        ),
    ]
}

/// Upload form plus inline result report.
#[component]
pub fn AnalyzePage() -> impl IntoView {
    let file_name = RwSignal::new(String::new());
    let analyzing = RwSignal::new(false);
    let result = RwSignal::new(None::<DetectionRecord>);
    let error = RwSignal::new(String::new());
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_pick = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let name = file_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| file.name())
                .unwrap_or_default();
            file_name.set(name);
        }
    };

    let on_analyze = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !can_submit(!file_name.get().is_empty(), analyzing.get()) {
            return;
        }
        error.set(String::new());
        result.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                error.set("Choose an image first.".to_owned());
                return;
            };
            analyzing.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_detection_image(&file).await {
                    Ok(record) => result.set(Some(record)),
                    Err(err) => error.set(analyze_error_message(&err)),
                }
                analyzing.set(false);
            });
        }
    };

    let on_reset = Callback::new(move |()| {
        file_name.set(String::new());
        result.set(None);
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    });

    view! {
        <section class="analyze-hero">
            <p class="eyebrow">"AI Visual Forensics"</p>
            <h1>"Image Analyzer"</h1>
            <p class="muted">
                "Attach an image and request an analysis; the verdict and the \
                 heatmap appear on this screen."
            </p>
        </section>

        <section class="analyze-body">
            <Show
                when=move || result.get().is_some()
                fallback=move || {
                    view! {
                        <form class="upload-form" on:submit=on_analyze>
                            <div class="upload-form__dropzone">
                                <h2>"Attach an image"</h2>
                                <p class="muted">
                                    "Pick one PNG or JPG file, then start the analysis below."
                                </p>
                                <input
                                    node_ref=file_input
                                    type="file"
                                    accept="image/*"
                                    class="upload-form__input"
                                    on:change=on_file_change
                                />
                                <div class="upload-form__picker">
                                    <button class="button" type="button" on:click=on_pick>
                                        "Choose image"
                                    </button>
                                    <span class="muted">
                                        {move || {
                                            let name = file_name.get();
                                            if name.is_empty() { "No file selected".to_owned() } else { name }
                                        }}
                                    </span>
                                </div>
                                <button
                                    class="button button--primary"
                                    type="submit"
                                    disabled=move || !can_submit(!file_name.get().is_empty(), analyzing.get())
                                >
                                    {move || if analyzing.get() { "Analyzing..." } else { "Start Analysis" }}
                                </button>
                            </div>
                            <Show when=move || analyzing.get()>
                                <p class="notice notice--info">"Analyzing image, please wait..."</p>
                            </Show>
                            <Show when=move || !error.get().is_empty()>
                                <p class="notice notice--error">{move || error.get()}</p>
                            </Show>
                        </form>
                    }
                }
            >
                <div class="analyze-result">
                    <div class="analyze-result__header">
                        <h2>"Analysis Result"</h2>
                        <button class="button button--ghost" on:click=move |_| on_reset.run(())>
                            "Analyze another image"
                        </button>
                    </div>
                    {move || result.get().map(|record| view! { <ReportPanel record=record/> })}
                </div>
            </Show>
        </section>

        <section class="guide">
            <p class="eyebrow">"Interpretation Guide"</p>
            <h2>"Reading the report"</h2>
            <div class="guide__grid">
                {guide_entries()
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <article class="guide__card">
                                <h3>{*title}</h3>
                                <p class="muted">{*body}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="notice notice--info">
                "Statistical signals like RM and PVR are never sufficient on \
                 their own. Combine them with model confidence and the heatmap \
                 before drawing a forensic conclusion."
            </p>
        </section>

        <section class="faq">
            <p class="eyebrow">"FAQ"</p>
            <h2>"Frequently asked questions"</h2>
            {faq_entries()
                .iter()
                .map(|(question, answer)| {
                    view! {
                        <details class="faq__item">
                            <summary>{*question}</summary>
                            <p class="muted">{*answer}</p>
                        </details>
                    }
                })
                .collect_view()}
        </section>
    }
}
