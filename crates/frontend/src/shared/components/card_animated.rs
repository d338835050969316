//! Thaw [`Card`] with the `card-appear` entrance animation from `site.css`.
//!
//! Grids pass an increasing `delay_ms` to get a staggered reveal:
//! ```rust,ignore
//! <CardAnimated delay_ms=0>...</CardAnimated>
//! <CardAnimated delay_ms=60>...</CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Step between consecutive cards of a grid.
pub const STAGGER_MS: u32 = 60;
/// Cards beyond this index appear without extra delay.
const MAX_STAGGERED: usize = 8;

/// Animation delay for the card at `index` in a grid.
pub fn stagger_delay(index: usize) -> u32 {
    index.min(MAX_STAGGERED) as u32 * STAGGER_MS
}

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra classes appended to `site-card`.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "site-card".to_string()
    } else {
        format!("site-card {}", class)
    };

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
