use crate::shared::icons::icon;
use leptos::prelude::*;

/// Main application shell: top bar with the product name, content below.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |               Content                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="top-header">
                <div class="top-header__brand">
                    {icon("customers")}
                    <span class="top-header__title">"Customer Admin"</span>
                </div>
            </header>
            <div class="app-body">
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
