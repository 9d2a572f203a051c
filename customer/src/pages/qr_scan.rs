//! Table entry page.
//!
//! A table's QR code links here with `?code=…`; the code is submitted as soon
//! as the page loads. Typing the code by hand works the same way.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::api::TableLoginRequest;
use crate::state::session::SessionContext;

#[component]
pub fn QrScanPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let query = use_query_map();
    let code = RwSignal::new(query.with_untracked(|q| q.get("code")).unwrap_or_default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = move || {
        if busy.get_untracked() {
            return;
        }
        let request = match TableLoginRequest::from_code(&code.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Opening table session...".to_owned());

        leptos::task::spawn_local(async move {
            match crate::net::api::login(&request).await {
                // The outlet moves to the menu once presence flips.
                Ok(resp) => match session.establish(resp.into()) {
                    Ok(()) => info.set(String::new()),
                    Err(e) => info.set(format!("Could not save session: {e}")),
                },
                Err(e) => info.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    if !code.get_untracked().trim().is_empty() {
        submit();
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    view! {
        <div class="scan-page">
            <div class="scan-card">
                <h1>"Welcome"</h1>
                <p class="scan-card__subtitle">"Scan the QR code on your table to start ordering."</p>
                <form class="scan-form" on:submit=on_submit>
                    <input
                        class="scan-input"
                        type="text"
                        placeholder="Table code"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <button class="scan-button" type="submit" disabled=move || busy.get()>
                        "Start"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="scan-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
