//! Create/edit dialogs for each entity, plus the field and submit helpers
//! they share.
//!
//! DESIGN
//! ======
//! Each modal owns an `RwSignal` of its `state::forms` struct, a `saving`
//! flag and an inline error. Submitting validates locally first; a
//! `FormError` keeps the dialog open with the message and the entered data.
//! A valid payload is sent through [`Submission::send`], which closes the dialog through
//! `on_saved` only after the backend accepted it. Handles are captured in
//! [`Submission`] up front because spawned futures and event handlers run
//! outside the component's reactive owner.
//!
//! Field helpers take plain `fn` accessors into the form struct, so a field
//! is one line at the call site and never captures anything.

pub mod alert;
pub mod announcement;
pub mod assignment;
pub mod collaborator;
pub mod contact;
pub mod patient;
pub mod phone_verification;
pub mod tambo;
pub mod visit;

use std::future::Future;

use leptos::prelude::*;

use crate::components::feedback::Feedback;
use crate::net::error::ApiError;
use crate::state::forms::FormError;

/// Submit state of one dialog: the in-flight flag, the inline error and the
/// toast handle, captured while the dialog is built.
#[derive(Clone, Copy)]
pub struct Submission {
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    feedback: Feedback,
}

impl Default for Submission {
    fn default() -> Self {
        Self::new()
    }
}

impl Submission {
    pub fn new() -> Self {
        Self { saving: RwSignal::new(false), error: RwSignal::new(None), feedback: Feedback::expect() }
    }

    /// Send a validated payload. Clears `saving` before `on_saved` runs,
    /// since the caller usually unmounts the dialog from there.
    pub fn send<Fut>(self, request: Fut, done: &'static str, on_saved: Callback<()>)
    where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let Self { saving, error, feedback } = self;
        saving.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let result = request.await;
            saving.try_set(false);
            match result {
                Ok(()) => {
                    feedback.success(done);
                    on_saved.run(());
                }
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                    feedback.api_error(done, &e);
                }
            }
        });
    }

    /// Show a local validation failure without touching the form data.
    pub fn reject(self, cause: &FormError) {
        log::warn!("form rejected: {cause}");
        self.error.set(Some(cause.to_string()));
        self.feedback.warn(cause.to_string());
    }

    pub fn feedback(self) -> Feedback {
        self.feedback
    }
}

/// Labelled `<input>` bound to a string field.
pub fn text_field<F>(
    label: &'static str,
    kind: &'static str,
    form: RwSignal<F>,
    read: fn(&F) -> String,
    write: fn(&mut F, String),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                type=kind
                prop:value=move || form.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| write(f, value));
                }
            />
        </label>
    }
}

/// Labelled `<textarea>` bound to a string field.
pub fn text_area<F>(
    label: &'static str,
    form: RwSignal<F>,
    read: fn(&F) -> String,
    write: fn(&mut F, String),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="field field--wide">
            <span class="field__label">{label}</span>
            <textarea
                rows="4"
                prop:value=move || form.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| write(f, value));
                }
            ></textarea>
        </label>
    }
}

/// Labelled checkbox bound to a bool field.
pub fn check_field<F>(
    label: &'static str,
    form: RwSignal<F>,
    read: fn(&F) -> bool,
    write: fn(&mut F, bool),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="field field--check">
            <input
                type="checkbox"
                prop:checked=move || form.with(read)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    form.update(|f| write(f, checked));
                }
            />
            <span>{label}</span>
        </label>
    }
}

/// Labelled `<select>` over a fixed list of enum values. Options are keyed by
/// position so labels never need to round-trip.
pub fn enum_select<F, E>(
    label: &'static str,
    values: &'static [E],
    name: fn(E) -> &'static str,
    form: RwSignal<F>,
    read: fn(&F) -> E,
    write: fn(&mut F, E),
) -> impl IntoView
where
    F: Send + Sync + 'static,
    E: Copy + PartialEq + Send + Sync + 'static,
{
    let on_change = move |ev: leptos::ev::Event| {
        let picked = event_target_value(&ev).parse::<usize>().ok().and_then(|i| values.get(i).copied());
        if let Some(value) = picked {
            form.update(|f| write(f, value));
        }
    };
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select on:change=on_change>
                {values
                    .iter()
                    .enumerate()
                    .map(|(i, value)| {
                        let value = *value;
                        view! {
                            <option value=i.to_string() selected=move || form.with(read) == value>
                                {name(value)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Labelled `<select>` over fixed string values stored verbatim.
pub fn str_select<F>(
    label: &'static str,
    values: &'static [&'static str],
    form: RwSignal<F>,
    read: fn(&F) -> String,
    write: fn(&mut F, String),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| write(f, value));
            }>
                <option value="" selected=move || form.with(read).is_empty()>"Seleccione"</option>
                {values
                    .iter()
                    .map(|value| {
                        view! {
                            <option value=*value selected=move || form.with(read) == *value>
                                {*value}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// `<select>` over backend `(id, label)` options with a "Seleccione" entry
/// mapped to id 0.
pub fn id_select<F>(
    label: &'static str,
    options: Signal<Vec<(i64, String)>>,
    form: RwSignal<F>,
    read: fn(&F) -> i64,
    write: fn(&mut F, i64),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select on:change=move |ev| {
                let id = event_target_value(&ev).parse::<i64>().unwrap_or_default();
                form.update(|f| write(f, id));
            }>
                <option value="0" selected=move || form.with(read) == 0>"Seleccione"</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(id, text)| {
                            view! {
                                <option value=id.to_string() selected=move || form.with(read) == id>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

/// Inline error line under the fields.
#[component]
pub fn FormErrorLine(error: RwSignal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <p class="dialog__error">{message}</p> })
}

/// Cancel + submit row. The submit button is disabled while saving or
/// while `blocked` holds.
#[component]
pub fn DialogActions(
    submission: Submission,
    #[prop(into)] blocked: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let saving = submission.saving;
    view! {
        <div class="dialog__actions">
            <button type="button" class="btn" on:click=move |_| on_close.run(())>
                "Cancelar"
            </button>
            <button type="submit" class="btn btn--primary" disabled=move || saving.get() || blocked.get()>
                {move || if saving.get() { "Guardando..." } else { "Guardar" }}
            </button>
        </div>
    }
}
