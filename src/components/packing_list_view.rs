//! Packing List View Component
//!
//! Renders the sorted projection of the list. The sort key is local to
//! this component and never reaches the store.

use leptos::prelude::*;

use packing_list::{PackingListActions, SortKey};

use crate::components::{ClearListButton, PackingRow, SortSelect};
use crate::store::use_packing_store;

#[component]
pub fn PackingListView() -> impl IntoView {
    let store = use_packing_store();
    let (sort_key, set_sort_key) = signal(SortKey::Input);

    let rows = move || store.sorted_view(sort_key.get()).items().to_vec();

    view! {
        <div class="list">
            <ul>
                <For
                    each=rows
                    // packed is part of the key so a toggle re-renders the row
                    key=|item| (item.id, item.packed)
                    children=move |item| view! { <PackingRow item=item /> }
                />
            </ul>

            <div class="actions">
                <SortSelect sort_key=sort_key set_sort_key=set_sort_key />
                <ClearListButton />
            </div>
        </div>
    }
}
