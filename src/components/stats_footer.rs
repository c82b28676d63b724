//! Stats Footer Component

use leptos::prelude::*;

use packing_list::{PackingListActions, Summary};

use crate::store::use_packing_store;

#[component]
pub fn StatsFooter() -> impl IntoView {
    let store = use_packing_store();

    move || match store.stats() {
        Summary::Empty => view! {
            <p class="stats"><em>{Summary::Empty.to_string()}</em></p>
        }
        .into_any(),
        summary => view! {
            <footer class="stats"><em>{summary.to_string()}</em></footer>
        }
        .into_any(),
    }
}
