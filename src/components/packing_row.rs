//! Packing Row Component
//!
//! One list entry: packed checkbox, "{quantity} {description}" label and a
//! delete button.

use leptos::prelude::*;

use packing_list::{Item, PackingListActions};

use crate::store::use_packing_store;

#[component]
pub fn PackingRow(item: Item) -> impl IntoView {
    let mut store = use_packing_store();

    let id = item.id;
    let packed = item.packed;
    let label = item.label();

    view! {
        <li class=if packed { "item-row packed" } else { "item-row" }>
            <input
                type="checkbox"
                prop:checked=packed
                on:change=move |_| store.toggle_item(id)
            />
            <span class="item-text">{label}</span>
            <button class="delete-btn" on:click=move |_| store.delete_item(id)>"❌"</button>
        </li>
    }
}
