//! Clear List Button Component
//!
//! Asks through `window.confirm` before emptying the list.

use leptos::prelude::*;

use packing_list::PackingListActions;

use crate::context::use_app_context;
use crate::prompt::BrowserPrompt;
use crate::store::use_packing_store;

#[component]
pub fn ClearListButton() -> impl IntoView {
    let ctx = use_app_context();
    let mut store = use_packing_store();

    let on_click = move |_: web_sys::MouseEvent| {
        let message = ctx.config.with_value(|config| config.confirm_message.clone());
        if !store.clear_with(&BrowserPrompt, &message) {
            tracing::debug!("clear declined");
        }
    };

    view! { <button on:click=on_click>"Clear list"</button> }
}
