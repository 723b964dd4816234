use chrono::Datelike;
use leptos::prelude::*;

use crate::core::animation::presets;
use crate::core::content::{FOOTER_BLURB, NAV_ITEMS, SOCIAL_LINKS, STUDIO_NAME, social_initial};
use crate::ui::animated::FadeUpOnce;
use crate::ui::platform::scroll_to;

fn copyright_line(year: i32) -> String {
    format!("\u{a9} {year} {STUDIO_NAME}. All rights reserved.")
}

/// Read on the server; the browser hydrates with the serialized value.
async fn copyright_year() -> i32 {
    chrono::Local::now().year()
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = Resource::new(|| (), |_| copyright_year());

    view! {
        <footer class="bg-primary text-background py-16">
            <div class="container-custom">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12 mb-12">
                    <FadeUpOnce step=0 class="md:col-span-2">
                        <h3 class="font-playfair text-4xl md:text-5xl font-medium mb-6">{STUDIO_NAME}</h3>
                        <p class="text-background/70 text-lg max-w-xl">{FOOTER_BLURB}</p>
                    </FadeUpOnce>

                    <FadeUpOnce step=1>
                        <h4 class="text-background/50 text-sm uppercase tracking-wider mb-8">"Navigation"</h4>
                        <nav class="space-y-4">
                            {NAV_ITEMS
                                .iter()
                                .copied()
                                .map(|item| view! {
                                    <button
                                        class="bp-hover-nudge block text-background/70 hover:text-background transition-smooth"
                                        on:click=move |_| scroll_to(item.target_id())
                                    >
                                        {item.label}
                                    </button>
                                })
                                .collect_view()}
                        </nav>
                    </FadeUpOnce>
                </div>

                <FadeUpOnce step=1 class="border-t border-background/20 pt-8">
                    <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                        <div class="flex items-center gap-8">
                            <Suspense>
                                <p class="text-background/50 text-sm">
                                    {move || year.get().map(copyright_line)}
                                </p>
                            </Suspense>
                            // Legal pages are not published yet.
                            <div class="flex items-center gap-6">
                                <button class="text-background/50 hover:text-background transition-smooth text-sm">
                                    "Privacy Policy"
                                </button>
                                <button class="text-background/50 hover:text-background transition-smooth text-sm">
                                    "Terms of Service"
                                </button>
                            </div>
                        </div>

                        <div class="flex items-center gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| view! {
                                    <button
                                        class="bp-hover-rise w-10 h-10 border border-background/20 rounded-full flex items-center justify-center text-background/50 hover:text-background hover:border-background/40 transition-smooth"
                                        aria-label=*social
                                    >
                                        <span class="text-xs">{social_initial(social)}</span>
                                    </button>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </FadeUpOnce>

                <FadeUpOnce step=2 class="mt-12 text-center">
                    <div class="inline-block" style=presets::SLOWER_SPIN.style() aria-hidden="true">
                        <div class="w-8 h-8 border border-background/20 rounded-full flex items-center justify-center">
                            <div class="w-2 h-2 bg-background/30 rounded-full" />
                        </div>
                    </div>
                </FadeUpOnce>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2026), "\u{a9} 2026 BlinkPath. All rights reserved.");
    }

    #[tokio::test]
    async fn test_copyright_year_is_local_year() {
        assert_eq!(copyright_year().await, chrono::Local::now().year());
    }
}
