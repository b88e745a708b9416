//! Delete Button Component
//!
//! Trash-can button on each list row.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};
use todo_sync::{RequestState, TodoId};

use crate::context::AppContext;

const TRASH_ICON_PATH: &str = "M11 2H9c0-.55-.45-1-1-1H5c-.55 0-1 .45-1 1H2c-.55 0-1 .45-1 1v1c0 .55.45 1 1 1v9c0 .55.45 1 1 1h7c.55 0 1-.45 1-1V5c.55 0 1-.45 1-1V3c0-.55-.45-1-1-1zm-1 12H3V5h1v8h1V5h1v8h1V5h1v8h1V5h1v9zm1-10H2V3h9v1z";

/// Deletes the todo `id` and filters it out of the cached list.
///
/// On success the row (and this button) unmounts, so the final state
/// update may land on a disposed signal; `try_update` makes that a no-op.
#[component]
pub fn DeleteButton(id: TodoId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (request, set_request) = signal(RequestState::Idle);

    let delete_todo = move |ev: MouseEvent| {
        ev.stop_propagation();
        if !set_request.try_update(RequestState::begin).unwrap_or(false) {
            return;
        }

        let sync = ctx.sync();
        let id = id.clone();
        spawn_local(async move {
            let outcome = sync.delete(&id).await;
            match &outcome {
                Ok(todo) => info!("Deleted todo {} ({})", todo.id, todo.name),
                Err(e) => warn!("Deleting todo {} failed: {}", id, e),
            }
            set_request.try_update(|state| state.finish(&outcome));
        });
    };

    let button_title = move || {
        request
            .with(|state| state.error().map(|e| format!("Delete failed: {}", e)))
            .unwrap_or_else(|| "Delete this item".to_string())
    };

    view! {
        <button
            class=move || if request.with(RequestState::is_in_flight) { "remove-item pending" } else { "remove-item" }
            title=button_title
            aria-label="Delete this item"
            on:click=delete_todo
        >
            <svg viewBox="0 0 14 16" class="delete-icon">
                <title>"Delete this item"</title>
                <path fill-rule="evenodd" d=TRASH_ICON_PATH />
            </svg>
        </button>
    }
}
