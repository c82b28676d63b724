//! Add Item Form Component
//!
//! Quantity selector plus description input. Empty submissions are
//! dropped without feedback.

use leptos::prelude::*;

use packing_list::{ItemDraft, PackingListActions};

use crate::context::use_app_context;
use crate::store::use_packing_store;

#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let mut store = use_packing_store();
    let config = ctx.config.get_value();
    let default_quantity = config.default_quantity;

    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(default_quantity);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft::new(description.get(), quantity.get());
        match draft.build(ctx.next_id()) {
            Ok(item) => {
                store.add_item(item);
                set_description.set(String::new());
                set_quantity.set(default_quantity);
            }
            Err(err) => tracing::debug!(%err, "submission ignored"),
        }
    };

    view! {
        <form class="add-form" on:submit=on_submit>
            <h3>"What do you need for your 😍 trip?"</h3>
            <select
                prop:value=move || quantity.get().to_string()
                on:change={move |ev| match event_target_value(&ev).parse::<u32>() {
                    Ok(value) => set_quantity.set(value),
                    Err(err) => tracing::warn!(%err, "unexpected quantity option"),
                }}
            >
                {config.quantity_options().map(|n| view! {
                    <option value=n.to_string()>{n}</option>
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="Item..."
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
