//! Toast stack rendering the `NotifyState` queue.

use leptos::prelude::*;

use crate::state::notify::{NotifyState, Toast};

/// Renders queued toasts; each removes itself after its kind's lifetime.
#[component]
pub fn Toasts() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For
                each=move || notify.get().toasts
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast notify=notify/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, notify: RwSignal<NotifyState>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        let lifetime = toast.kind.lifetime();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(lifetime).await;
            notify.update(|n| n.dismiss(id));
        });
    }

    view! {
        <div class=toast.kind.css_class()>
            <span class="toast__message">{toast.message}</span>
            <button class="btn toast__close" on:click=move |_| notify.update(|n| n.dismiss(id))>
                "Close"
            </button>
        </div>
    }
}
