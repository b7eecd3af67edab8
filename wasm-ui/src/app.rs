//! Main application component.
//!
//! Owns the single record snapshot, the selected layout, and the export
//! state. Edits arrive as [`Edit`] intents and are applied through the
//! core edit pipeline; the preview re-derives from the new snapshot.
//!
//! Export is a single-flight deferred task: the record+layout pair is
//! captured when the user clicks (so the capture always reflects one
//! consistent pair), a second click while one is in flight is ignored,
//! and the layout tabs are disabled until it completes. Edits made while
//! an export runs merge into the live state via the reducer and apply to
//! the next render, not to the capture already taken.

use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, HtmlAnchorElement, Url};
use yew::prelude::*;

use smartsume::{EXPORT_FILE_NAME, Edit, LayoutId, ResumeRecord, edit, export_pdf};

use crate::components::{EducationForm, ExperienceForm, PersonalForm, ProjectsForm, SkillsForm};
use crate::painter::CanvasRasterizer;
use crate::preview::PreviewPanel;

#[derive(Clone, Copy, PartialEq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Toast-style status line next to the export button.
#[derive(Clone, PartialEq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: &'static str,
}

/// Main application state.
#[derive(Clone, PartialEq)]
pub struct AppState {
    /// Current record snapshot, the single source of truth.
    pub record: ResumeRecord,
    /// Currently selected layout.
    pub layout: LayoutId,
    /// At most one export in flight at a time.
    pub exporting: bool,
    /// Export status, if any.
    pub status: Option<Status>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            record: ResumeRecord::example(),
            layout: LayoutId::Minimalist,
            exporting: false,
            status: None,
        }
    }
}

pub enum Action {
    Edit(Edit),
    SelectLayout(LayoutId),
    ExportStarted,
    ExportFinished(Result<(), String>),
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Action::Edit(intent) => {
                next.record = edit::apply(&next.record, &intent);
            }
            Action::SelectLayout(layout) => {
                // Fenced: the tabs are disabled while exporting, and a
                // stray event cannot change what a capture reflects.
                if !next.exporting {
                    next.layout = layout;
                }
            }
            Action::ExportStarted => {
                next.exporting = true;
                next.status = Some(Status {
                    kind: StatusKind::Info,
                    text: "Preparing PDF…",
                });
            }
            Action::ExportFinished(result) => {
                next.exporting = false;
                next.status = Some(match result {
                    Ok(()) => Status {
                        kind: StatusKind::Success,
                        text: "Your resume has been downloaded",
                    },
                    Err(_) => Status {
                        kind: StatusKind::Error,
                        text: "Export failed. Please try again.",
                    },
                });
            }
        }
        Rc::new(next)
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);

    let on_edit = {
        let state = state.clone();
        Callback::from(move |intent: Edit| state.dispatch(Action::Edit(intent)))
    };

    let on_export = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            if state.exporting {
                return;
            }
            // Capture the pair the export must reflect before yielding.
            let record = state.record.clone();
            let layout = state.layout;
            state.dispatch(Action::ExportStarted);

            let state = state.clone();
            // Deferred so the "Preparing" status paints before the
            // rasterization work blocks the main thread.
            Timeout::new(60, move || {
                let result = CanvasRasterizer::new()
                    .and_then(|rasterizer| export_pdf(&record, layout, &rasterizer))
                    .map_err(|e| e.to_string())
                    .and_then(|bytes| download_pdf(&bytes, EXPORT_FILE_NAME));

                if let Err(err) = &result {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "export failed: {err}"
                    )));
                }
                state.dispatch(Action::ExportFinished(result));
            })
            .forget();
        })
    };

    let status_html = state.status.as_ref().map(|status| {
        let class = match status.kind {
            StatusKind::Info => "status status-info",
            StatusKind::Success => "status status-success",
            StatusKind::Error => "status status-error",
        };
        html! { <span class={class}>{ status.text }</span> }
    });

    html! {
        <div class="app">
            <header class="header">
                <div class="header-left">
                    <h1>{ "smartsume" }</h1>
                    <p class="subtitle">{ "Live Resume Editor" }</p>
                </div>
            </header>

            <main class="main">
                <div class="panel form-panel">
                    <div class="panel-header">
                        <h2>{ "Resume Details" }</h2>
                    </div>
                    <div class="panel-content">
                        <PersonalForm personal={state.record.personal.clone()} on_edit={on_edit.clone()} />
                        <EducationForm entries={state.record.education.clone()} on_edit={on_edit.clone()} />
                        <ExperienceForm entries={state.record.experience.clone()} on_edit={on_edit.clone()} />
                        <SkillsForm entries={state.record.skills.clone()} on_edit={on_edit.clone()} />
                        <ProjectsForm entries={state.record.projects.clone()} on_edit={on_edit.clone()} />
                    </div>
                </div>

                <div class="panel preview-panel">
                    <div class="panel-header">
                        <h2>{ "Resume Preview" }</h2>
                        <div class="preview-actions">
                            { status_html }
                            <button
                                class="export-button"
                                disabled={state.exporting}
                                onclick={on_export}
                            >
                                { if state.exporting { "Exporting…" } else { "Export PDF" } }
                            </button>
                        </div>
                    </div>
                    <div class="layout-tabs">
                        { for LayoutId::ALL.iter().map(|layout| {
                            let selected = *layout == state.layout;
                            let onclick = {
                                let state = state.clone();
                                let layout = *layout;
                                Callback::from(move |_| state.dispatch(Action::SelectLayout(layout)))
                            };
                            html! {
                                <button
                                    class={classes!("layout-tab", selected.then_some("active"))}
                                    disabled={state.exporting}
                                    {onclick}
                                >
                                    { layout.label() }
                                </button>
                            }
                        })}
                    </div>
                    <div class="panel-content preview-content">
                        <PreviewPanel record={state.record.clone()} layout={state.layout} />
                    </div>
                </div>
            </main>

            <footer class="footer">
                <span class="footer-build">
                    { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                </span>
            </footer>
        </div>
    }
}

/// Offer the PDF bytes as a named file download via a temporary object URL.
fn download_pdf(bytes: &[u8], filename: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");

    let blob =
        Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let document = window.document().ok_or_else(|| "no document".to_string())?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "anchor cast failed".to_string())?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}

fn js_err(e: JsValue) -> String {
    format!("{e:?}")
}
