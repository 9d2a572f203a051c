//! Ordering screens shown once a table session exists.
//!
//! Menu browsing, cart and order tracking call backend endpoints outside this
//! crate; each page here is a titled shell inside the shared table layout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::{SessionContext, table_number};

#[component]
fn TableLayout(title: &'static str, children: Children) -> impl IntoView {
    let session = expect_context::<SessionContext>();

    // The backend call is best-effort; the local session is cleared either
    // way and the outlet sends the tab back to the scanner.
    let on_end = move |_| {
        let token = session.current().map(|s| s.session_token);
        leptos::task::spawn_local(async move {
            if let Some(token) = token {
                if let Err(e) = crate::net::api::logout(&token).await {
                    log::warn!("table logout failed: {e}");
                }
            }
            if let Err(e) = session.clear() {
                log::warn!("table session could not be cleared: {e}");
            }
        });
    };

    view! {
        <div class="table-page">
            <header class="table-page__header">
                <span class="table-page__title">{title}</span>
                <span class="table-page__table">
                    {move || table_number(session).map(|n| format!("Table {n}")).unwrap_or_default()}
                </span>
                <nav class="table-page__nav">
                    <A href="/menu">"Menu"</A>
                    <A href="/order">"Order"</A>
                    <A href="/order-status">"Status"</A>
                </nav>
                <button class="btn table-page__end" on:click=on_end>
                    "End Session"
                </button>
            </header>
            <main class="table-page__body">{children()}</main>
        </div>
    }
}

#[component]
pub fn MenuPage() -> impl IntoView {
    view! {
        <TableLayout title="Menu">
            <p>"Browse the menu by category."</p>
        </TableLayout>
    }
}

#[component]
pub fn OrderPage() -> impl IntoView {
    view! {
        <TableLayout title="Order">
            <p>"Review your cart and place the order."</p>
        </TableLayout>
    }
}

#[component]
pub fn OrderStatusPage() -> impl IntoView {
    view! {
        <TableLayout title="Order Status">
            <p>"Track orders placed from this table."</p>
        </TableLayout>
    }
}
