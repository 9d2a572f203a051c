//! Root application component with routing and context providers.

use std::sync::Arc;

use gate::outlet::{GuardedOutlet, Shell};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;

use crate::state::session::SessionContext;
use crate::{pages, routes};

/// Root application component.
///
/// Opens the tab's session, provides it to every page, and hands routing to
/// the guarded outlet.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::open();
    if let Some(e) = session.storage_error() {
        log::warn!("table session storage unreadable, starting signed out: {e}");
    }
    provide_context(session);

    let body = match routes::navigator().and_then(|navigator| Shell::new(navigator, pages::registry())) {
        Ok(shell) => {
            let shell = Arc::new(shell);
            view! {
                <Router>
                    <GuardedOutlet shell=shell present=session.presence()/>
                </Router>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("customer route table rejected: {e}");
            view! { <p class="app-error">{format!("Route table invalid: {e}")}</p> }.into_any()
        }
    };

    view! {
        <Title text="Table Order"/>
        {body}
    }
}
