//! Authenticated console pages.
//!
//! Table, menu and category management screens talk to backend endpoints
//! outside this crate; here each page is a titled shell inside the shared
//! console layout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionContext;

#[component]
fn ConsoleLayout(title: &'static str, children: Children) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let error = RwSignal::new(None::<String>);

    // Clearing presence is enough: the outlet sends protected routes to /login.
    let on_logout = move |_| {
        if let Err(e) = session.clear() {
            log::warn!("admin logout could not clear storage: {e}");
            error.set(Some(e.to_string()));
        }
    };

    view! {
        <div class="console-page">
            <header class="console-page__header toolbar">
                <span class="toolbar__title">{title}</span>
                <nav class="toolbar__nav">
                    <A href="/dashboard">"Dashboard"</A>
                    <A href="/tables">"Tables"</A>
                    <A href="/menus">"Menus"</A>
                    <A href="/categories">"Categories"</A>
                </nav>
                <span class="toolbar__spacer"></span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="console-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <main class="console-page__body">{children()}</main>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Dashboard">
            <p>"Live orders by table."</p>
        </ConsoleLayout>
    }
}

#[component]
pub fn TablesPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Tables">
            <p>"Tables, QR codes and active sessions."</p>
        </ConsoleLayout>
    }
}

#[component]
pub fn MenusPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Menus">
            <p>"Menu items, prices and availability."</p>
        </ConsoleLayout>
    }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Categories">
            <p>"Menu categories and display order."</p>
        </ConsoleLayout>
    }
}
