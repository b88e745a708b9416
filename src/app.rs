//! Todo List App
//!
//! Page layout: heading, add form, and the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;
use reactive_stores::Store;
use todo_sync::{GraphQlClient, Synchronizer};

use crate::components::{AddTodoForm, TodoList};
use crate::config;
use crate::context::AppContext;
use crate::store::{StoreCache, TodoState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(TodoState::default());
    let client = GraphQlClient::new(config::client_config());
    info!("Using GraphQL endpoint {}", client.endpoint());

    let ctx = AppContext::new(Synchronizer::new(client, StoreCache::new(store)), store);
    provide_context(ctx.clone());

    // Initial list query
    Effect::new(move |_| {
        let ctx = ctx.clone();
        spawn_local(async move {
            ctx.load().await;
        });
    });

    view! {
        <div class="app">
            <h1 class="main-heading">"TODO List"</h1>
            <div class="form-wrapper">
                <div>
                    <AddTodoForm />
                </div>
                <div class="results">
                    <TodoList />
                </div>
            </div>
        </div>
    }
}
