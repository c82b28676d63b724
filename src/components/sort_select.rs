//! Sort Select Component

use leptos::prelude::*;

use packing_list::SortKey;

#[component]
pub fn SortSelect(
    sort_key: ReadSignal<SortKey>,
    set_sort_key: WriteSignal<SortKey>,
) -> impl IntoView {
    view! {
        <select
            prop:value=move || sort_key.get().as_str()
            on:change={move |ev| match event_target_value(&ev).parse::<SortKey>() {
                Ok(key) => set_sort_key.set(key),
                Err(err) => tracing::warn!(%err, "unexpected sort option"),
            }}
        >
            {SortKey::ALL.iter().map(|key| view! {
                <option value=key.as_str()>{key.label()}</option>
            }).collect_view()}
        </select>
    }
}
