//! Fixed header with desktop navigation and the mobile overlay menu.

use leptos::prelude::*;

use crate::core::animation::presets;
use crate::core::content::{NAV_ITEMS, STUDIO_NAME};
use crate::core::{HeaderState, NavItem, SectionNavigator};
use crate::ui::animated::Reveal;
use crate::ui::platform::{DomNavigator, use_mounted, use_scroll_state};

const BAR_BASE: &str = "transition-all duration-500";
const BAR_SCROLLED: &str = "bg-background/80 backdrop-blur-lg border-b border-black/5";

#[component]
pub fn Header() -> impl IntoView {
    let state = RwSignal::new(HeaderState::default());
    let scroll = use_scroll_state();
    let mounted = use_mounted();

    Effect::new(move |_| {
        let scroll = scroll.get();
        state.update(|header| header.scroll = scroll);
    });

    let menu_open = Signal::derive(move || state.with(|header| header.menu_open));
    let navigate = move |item: NavItem| {
        state.update(|header| {
            header.on_nav_click(&DomNavigator, &item);
        });
    };

    let bar = presets::HEADER_BAR.descriptor("header", 0);
    let bar_style = move || bar.style(mounted.get());
    let bar_class = move || {
        if state.with(HeaderState::is_scrolled) {
            format!("{BAR_BASE} {BAR_SCROLLED}")
        } else {
            format!("{BAR_BASE} bg-transparent")
        }
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50" style=bar_style>
            <div class=bar_class>
                <div class="container-custom">
                    <div class="flex items-center justify-between py-6">
                        <button
                            class="bp-logo cursor-pointer"
                            aria-label="Back to top"
                            on:click=move |_| DomNavigator.scroll_to_top()
                        >
                            <span class="font-playfair text-2xl font-semibold">{STUDIO_NAME}</span>
                        </button>

                        <nav class="hidden md:flex items-center space-x-8">
                            {NAV_ITEMS
                                .iter()
                                .copied()
                                .enumerate()
                                .map(|(index, item)| {
                                    view! {
                                        <Reveal spec=presets::HEADER_NAV index=index active=mounted>
                                            <button
                                                class="bp-underline text-sm font-medium transition-smooth hover:text-secondary"
                                                on:click=move |_| navigate(item)
                                            >
                                                {item.label}
                                            </button>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </nav>

                        <Reveal spec=presets::MENU_TOGGLE active=mounted class="md:hidden">
                            <button
                                class=move || {
                                    if menu_open.get() {
                                        "relative w-6 h-6 focus:outline-none bp-menu-open"
                                    } else {
                                        "relative w-6 h-6 focus:outline-none"
                                    }
                                }
                                aria-label="Menu"
                                aria-expanded=move || menu_open.get().to_string()
                                on:click=move |_| state.update(HeaderState::toggle_menu)
                            >
                                <span class="bp-bar bp-bar-top" />
                                <span class="bp-bar bp-bar-middle" />
                                <span class="bp-bar bp-bar-bottom" />
                            </button>
                        </Reveal>
                    </div>
                </div>
            </div>
        </header>

        <MobileOverlay open=menu_open on_navigate=Callback::new(navigate) />
    }
}

/// Full-screen navigation for narrow viewports. Entries replay their
/// staggered rise each time the overlay opens.
#[component]
fn MobileOverlay(#[prop(into)] open: Signal<bool>, on_navigate: Callback<NavItem>) -> impl IntoView {
    view! {
        <div
            class=move || {
                if open.get() {
                    "bp-overlay fixed inset-0 z-40 bg-background/95 backdrop-blur-lg md:hidden opacity-100"
                } else {
                    "bp-overlay fixed inset-0 z-40 bg-background/95 backdrop-blur-lg md:hidden opacity-0 pointer-events-none"
                }
            }
            aria-hidden=move || (!open.get()).to_string()
        >
            <div class="flex items-center justify-center h-full">
                <nav class="text-center">
                    {NAV_ITEMS
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(index, item)| {
                            view! {
                                <Reveal spec=presets::OVERLAY_NAV index=index active=open>
                                    <button
                                        class="block text-3xl font-playfair font-medium mb-8 transition-smooth hover:text-secondary"
                                        on:click=move |_| on_navigate.run(item)
                                    >
                                        {item.label}
                                    </button>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </div>
    }
}
