//! Add Todo Form Component
//!
//! Single required input; submitting creates a todo and appends it to the
//! cached list.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};
use todo_sync::RequestState;

use crate::context::AppContext;

#[component]
pub fn AddTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_name, set_new_name) = signal(String::new());
    let (request, set_request) = signal(RequestState::Idle);

    let add_todo = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.trim().is_empty() {
            return;
        }
        if !set_request.try_update(RequestState::begin).unwrap_or(false) {
            return;
        }

        let sync = ctx.sync();
        spawn_local(async move {
            let outcome = sync.create(&name).await;
            match &outcome {
                Ok(todo) => {
                    info!("Created todo {}", todo.id);
                    set_new_name.try_set(String::new());
                }
                // Input keeps its text so the user can resubmit
                Err(e) => warn!("Creating todo failed: {}", e),
            }
            set_request.try_update(|state| state.finish(&outcome));
        });
    };

    view! {
        <form on:submit=add_todo>
            <input
                required
                name="add-item"
                placeholder="Add new item"
                class="form-input add-item"
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            {move || request.with(|state| state.error().map(str::to_string)).map(|message| view! {
                <p class="form-error">{format!("Could not add item: {}", message)}</p>
            })}
        </form>
    }
}
