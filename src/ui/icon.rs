use leptos::prelude::*;

/// Diagonal "open" arrow shown on hover of service and approach cards
#[component]
pub fn ArrowUpRight(
    /// Pixel size of the square icon
    #[prop(default = 24)]
    size: u32,
) -> impl IntoView {
    view! {
        <svg width=size height=size viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <path d="M7 17L17 7" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
            <path d="M7 7H17V17" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
        </svg>
    }
}
