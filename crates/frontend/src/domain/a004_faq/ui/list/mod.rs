//! FAQ accordion. Any number of answers may be expanded at once.

use crate::shared::catalog_state::CatalogController;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::icons::icon;
use crate::shared::list_utils::Highlight;
use contracts::domain::a004_faq::aggregate::Faq;
use contracts::shared::catalog::Choice;
use leptos::prelude::*;
use std::collections::HashSet;

#[component]
fn FaqItem(
    faq: &'static Faq,
    #[prop(into)]
    query: Signal<String>,
    expanded: RwSignal<HashSet<&'static str>>,
) -> impl IntoView {
    let is_open = move || expanded.with(|set| set.contains(faq.id));
    let toggle = move |_| {
        expanded.update(|set| {
            if !set.remove(faq.id) {
                set.insert(faq.id);
            }
        })
    };
    let panel_id = format!("faq-{}", faq.id);
    let answer_id = panel_id.clone();

    view! {
        <div class="faq-item" class:faq-item-open=is_open>
            <button
                type="button"
                class="faq-item__question"
                aria-expanded=move || is_open().to_string()
                aria-controls=panel_id
                on:click=toggle
            >
                <span class="faq-item__topic">{faq.topic.label()}</span>
                <span class="faq-item__text"><Highlight text=faq.question query=query /></span>
                <span class="faq-item__chevron">{icon("chevron-down")}</span>
            </button>
            <Show when=is_open>
                <div class="faq-item__answer" id=answer_id.clone()>
                    <Highlight text=faq.answer query=query />
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn FaqAccordion(controller: CatalogController<Faq>) -> impl IntoView {
    let query = controller.search_text();
    let expanded = RwSignal::new(HashSet::<&'static str>::new());

    move || {
        let visible = controller.visible.get();
        if visible.is_empty() {
            view! {
                <EmptyState
                    message="No questions match your search."
                    on_reset=Callback::new(move |_| controller.reset())
                />
            }
            .into_any()
        } else {
            view! {
                <div class="faq-list">
                    {visible
                        .into_iter()
                        .map(|faq| view! { <FaqItem faq=faq query=query expanded=expanded /> })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
    }
}
