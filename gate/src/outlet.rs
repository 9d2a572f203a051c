//! Leptos bindings: the guarded outlet rendered inside `<Router>`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both apps mount one [`GuardedOutlet`] as the only child of their router.
//! It re-runs the navigator whenever the location or session presence
//! changes, replaces the location on redirects, and renders the registered
//! view otherwise.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::guard::{Navigator, Outcome};
use crate::route::{RouteError, RouteTarget};
use crate::views::ViewRegistry;

/// Navigator plus the views its routes render.
pub struct Shell {
    navigator: Navigator,
    views: ViewRegistry<ViewFn>,
}

impl Shell {
    /// # Errors
    ///
    /// [`RouteError::UnknownRoute`] naming the first view route with no
    /// registered view.
    pub fn new(navigator: Navigator, views: ViewRegistry<ViewFn>) -> Result<Self, RouteError> {
        let names = navigator
            .table()
            .entries()
            .iter()
            .filter(|entry| entry.target == RouteTarget::View)
            .map(|entry| entry.name);
        if let Some(&name) = views.missing(names).first() {
            return Err(RouteError::UnknownRoute(name));
        }
        Ok(Self { navigator, views })
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    fn outcome(&self, path: &str, present: bool) -> Outcome {
        self.navigator.navigate(path, present).unwrap_or_else(|e| {
            log::error!("navigation failed: {e}");
            Outcome::NotFound
        })
    }
}

fn not_found() -> AnyView {
    view! { <p class="not-found">"Page not found."</p> }.into_any()
}

/// Render the current location through the guard.
#[component]
pub fn GuardedOutlet(shell: Arc<Shell>, #[prop(into)] present: Signal<bool>) -> impl IntoView {
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let resolver = Arc::clone(&shell);
    let outcome = Memo::new(move |_| pathname.with(|path| resolver.outcome(path, present.get())));

    Effect::new(move || {
        if let Outcome::Redirect(to) = outcome.get() {
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match outcome.get() {
        Outcome::Render(entry) => shell.views.resolve(entry.name).map_or_else(not_found, |view| view.run()),
        Outcome::Redirect(_) => ().into_any(),
        Outcome::NotFound => not_found(),
    }
}
