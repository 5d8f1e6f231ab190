//! Building blocks shared by the CRUD list pages: search box, pager,
//! container-sized page length, and the fetch/delete plumbing around
//! `ListState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every entity page owns a `RwSignal<ListState<T>>`. The helpers here run the
//! backend calls, feed results back into that signal and report failures as
//! toasts through [`Feedback`].

use std::future::Future;

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::dialog::ConfirmDialog;
use crate::components::feedback::Feedback;
use crate::net::error::ApiError;
use crate::state::listing::{ListState, Listable, ModalState, page_size_for_height};

/// Fetch the collection into `list`. `feedback` is captured by the page
/// since reloads also run from spawned futures.
pub fn load_list<T, F, Fut>(list: RwSignal<ListState<T>>, feedback: Feedback, fetch: F)
where
    T: Listable + Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    list.update(ListState::begin_loading);
    leptos::task::spawn_local(async move {
        match fetch().await {
            Ok(items) => {
                list.try_update(|l| l.set_items(items));
            }
            Err(e) => {
                list.try_update(|l| l.set_error(e.user_message()));
                feedback.api_error("list fetch failed", &e);
            }
        }
    });
}

/// Run the confirmed delete, then `reload` on success.
pub fn confirm_delete<T, D, Fut>(list: RwSignal<ListState<T>>, feedback: Feedback, delete: D, reload: Callback<()>)
where
    T: Listable + Send + Sync + 'static,
    D: FnOnce(i64) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let mut id = None;
    list.update(|l| id = l.confirm_delete());
    let Some(id) = id else {
        return;
    };
    leptos::task::spawn_local(async move {
        match delete(id).await {
            Ok(()) => {
                feedback.success("Registro eliminado");
                reload.run(());
            }
            Err(e) => feedback.api_error(&format!("delete {id} failed"), &e),
        }
    });
}

/// Derive the page length from the rendered height of `container`, on mount
/// and whenever the window is resized.
pub fn fit_page_size<T>(list: RwSignal<ListState<T>>, container: NodeRef<Div>)
where
    T: Listable + Send + Sync + 'static,
{
    let apply = move || {
        if let Some(el) = container.get_untracked() {
            let height = f64::from(el.client_height());
            if height > 0.0 {
                list.update(|l| l.set_page_size(page_size_for_height(height)));
            }
        }
    };
    Effect::new(move || {
        if container.get().is_some() {
            apply();
        }
    });
    let handle = window_event_listener(leptos::ev::resize, move |_| apply());
    on_cleanup(move || handle.remove());
}

/// The open modal, memoized so unrelated list updates (paging, resizing)
/// never rebuild a dialog the user is typing into.
pub fn modal_state<T>(list: RwSignal<ListState<T>>) -> Memo<ModalState<T>>
where
    T: Listable + PartialEq + Send + Sync + 'static,
{
    Memo::new(move |_| list.with(|l| l.modal.clone()))
}

/// `on_saved` for a page's dialog: close it, then refetch.
pub fn close_and_reload<T>(list: RwSignal<ListState<T>>, reload: Callback<()>) -> Callback<()>
where
    T: Listable + Send + Sync + 'static,
{
    Callback::new(move |()| {
        list.update(ListState::close_modal);
        reload.run(());
    })
}

/// Page heading with the search box and the "new" button.
#[component]
pub fn ListToolbar<T>(
    list: RwSignal<ListState<T>>,
    #[prop(into)] title: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] new_label: String,
) -> impl IntoView
where
    T: Listable + Send + Sync + 'static,
{
    view! {
        <div class="list-page__header">
            <h2>{title}</h2>
            <SearchBox list=list placeholder=placeholder/>
            <button class="btn btn--primary" on:click=move |_| list.update(ListState::open_create)>
                {new_label}
            </button>
        </div>
    }
}

/// Current page of the filtered rows with per-row actions. `cells` renders
/// one string per header; `viewable` adds a read-only "Ver" action. The page
/// length follows the table container's height.
#[component]
pub fn EntityTable<T>(
    list: RwSignal<ListState<T>>,
    headers: &'static [&'static str],
    cells: fn(&T) -> Vec<String>,
    #[prop(optional)] viewable: bool,
) -> impl IntoView
where
    T: Listable + Send + Sync + 'static,
{
    let container = NodeRef::<Div>::new();
    fit_page_size(list, container);

    let rows = move || {
        list.with(ListState::page_items)
            .into_iter()
            .map(|record| {
                let id = record.record_id();
                let row = cells(&record).into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view();
                let view_button = viewable.then(|| {
                    let record = record.clone();
                    view! {
                        <button
                            class="btn btn--icon"
                            title="Ver"
                            on:click=move |_| list.update(|l| l.open_view(record.clone()))
                        >
                            "👁"
                        </button>
                    }
                });
                view! {
                    <tr>
                        {row}
                        <td class="table__actions">
                            {view_button}
                            <button
                                class="btn btn--icon"
                                title="Editar"
                                on:click=move |_| list.update(|l| l.open_edit(record.clone()))
                            >
                                "✏️"
                            </button>
                            <button
                                class="btn btn--icon btn--danger"
                                title="Eliminar"
                                disabled=id.is_none()
                                on:click=move |_| {
                                    if let Some(id) = id {
                                        list.update(|l| l.request_delete(id));
                                    }
                                }
                            >
                                "🗑️"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="list-page__table" node_ref=container>
            <ListStatus list=list/>
            <table class="table">
                <thead>
                    <tr>
                        {headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Pager list=list/>
        </div>
    }
}

/// Delete confirmation bound to the list's pending delete.
#[component]
pub fn DeleteConfirm<T>(list: RwSignal<ListState<T>>, #[prop(into)] message: String, on_confirm: Callback<()>) -> impl IntoView
where
    T: Listable + Send + Sync + 'static,
{
    view! {
        <ConfirmDialog
            open=Signal::derive(move || list.with(|l| l.pending_delete().is_some()))
            message=message
            on_confirm=on_confirm
            on_cancel=Callback::new(move |()| list.update(ListState::cancel_delete))
        />
    }
}

/// Search input bound to the list's term.
#[component]
pub fn SearchBox<T>(list: RwSignal<ListState<T>>, #[prop(into)] placeholder: String) -> impl IntoView
where
    T: Listable + Send + Sync + 'static,
{
    view! {
        <input
            class="list-page__search"
            type="search"
            placeholder=placeholder
            prop:value=move || list.with(|l| l.term().to_owned())
            on:input=move |ev| list.update(|l| l.set_term(event_target_value(&ev)))
        />
    }
}

/// Previous/next pager with the "page N of M" label.
#[component]
pub fn Pager<T>(list: RwSignal<ListState<T>>) -> impl IntoView
where
    T: Listable + Send + Sync + 'static,
{
    view! {
        <div class="pager">
            <button
                class="btn pager__prev"
                disabled=move || list.with(|l| l.page() <= 1)
                on:click=move |_| list.update(ListState::prev_page)
            >
                "Anterior"
            </button>
            <span class="pager__label">
                {move || list.with(|l| format!("Página {} de {}", l.page(), l.page_count()))}
            </span>
            <button
                class="btn pager__next"
                disabled=move || list.with(|l| l.page() >= l.page_count())
                on:click=move |_| list.update(ListState::next_page)
            >
                "Siguiente"
            </button>
        </div>
    }
}

/// Loading/error/empty placeholder shown above the table.
#[component]
pub fn ListStatus<T>(list: RwSignal<ListState<T>>) -> impl IntoView
where
    T: Listable + Send + Sync + 'static,
{
    move || {
        list.with(|l| {
            if l.loading {
                Some(view! { <p class="list-page__status">"Cargando..."</p> }.into_any())
            } else if let Some(error) = &l.error {
                Some(view! { <p class="list-page__status list-page__status--error">{error.clone()}</p> }.into_any())
            } else if l.filtered_count() == 0 {
                Some(view! { <p class="list-page__status">"No hay registros."</p> }.into_any())
            } else {
                None
            }
        })
    }
}
