//! Far Away Frontend App
//!
//! Single column: logo, entry form, list, stats footer.

use leptos::prelude::*;

use crate::collate::LocaleCollator;
use crate::components::{AddItemForm, Logo, PackingListView, StatsFooter};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::PackingStore;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(PackingStore::new(LocaleCollator::new(config.locale.clone())));
    provide_context(AppContext::new(config));

    view! {
        <div class="app">
            <Logo />
            <AddItemForm />
            <PackingListView />
            <StatsFooter />
        </div>
    }
}
