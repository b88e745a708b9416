//! Todo List Component
//!
//! Renders the cached list, or the loading/error indicator while the list
//! query has not succeeded.

use leptos::prelude::*;
use todo_sync::ListStatus;

use crate::components::DeleteButton;
use crate::context::AppContext;
use crate::store::{store_status, store_todos};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    move || match store_status(&store) {
        ListStatus::Loading => view! { <p>"Loading..."</p> }.into_any(),
        ListStatus::Error => view! { <p>"Error :("</p> }.into_any(),
        ListStatus::Ready => view! {
            <ul class="list">
                <For
                    each=move || store_todos(&store)
                    key=|todo| todo.id.clone()
                    children=move |todo| {
                        view! {
                            <li class="list-item">
                                {todo.name}
                                <DeleteButton id=todo.id />
                            </li>
                        }
                    }
                />
            </ul>
        }.into_any(),
    }
}
