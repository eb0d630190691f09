use crate::domain::a001_customer::store::CustomerStore;
use crate::domain::a001_customer::ui::page::CustomerPage;
use crate::layout::Shell;
use crate::shared::notification::{NotificationHost, NotificationService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Shared customer collection, read by the list and written by the data actions.
    provide_context(CustomerStore::new());

    // Toasts for the whole app
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <Shell>
                <CustomerPage />
            </Shell>
            <NotificationHost />
        </ConfigProvider>
    }
}
