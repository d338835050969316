use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Detail overlay. Closes on the dismiss button, a click on the backdrop or Escape.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional subtitle under the title
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let theme = crate::shared::theme::use_theme();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div
                class=theme.class("modal", "modal modal--dark")
                role="dialog"
                aria-modal="true"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{title}</h2>
                        {subtitle.map(|s| view! { <div class="modal-subtitle">{s}</div> })}
                    </div>
                    <button
                        class="button button--icon modal__close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
