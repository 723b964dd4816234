use leptos::prelude::*;

use crate::core::animation::{LoopAnimation, presets};
use crate::core::content::{HERO_HEADLINE, HERO_SUBTITLE, split_words};
use crate::core::SectionId;
use crate::ui::animated::Reveal;
use crate::ui::common::{ButtonVariant, ScrollButton};
use crate::ui::platform::{scroll_to, use_mounted};

/// Full-height opening banner. The headline rises word by word once the
/// page is mounted.
#[component]
pub fn Hero() -> impl IntoView {
    let mounted = use_mounted();
    let words = split_words(HERO_HEADLINE);

    view! {
        <section class="min-h-screen flex items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0 opacity-5" aria-hidden="true">
                <div class="absolute inset-0 bg-gradient-to-br from-primary/20 to-transparent" />
                <div class="absolute top-1/4 left-1/4 w-96 h-96 rounded-full bg-primary/10 blur-3xl" />
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 rounded-full bg-primary/10 blur-3xl" />
            </div>

            <div class="container-custom relative z-10">
                <div class="text-center max-w-6xl mx-auto">
                    <h1 class="heading-hero text-primary mb-16">
                        {words
                            .into_iter()
                            .enumerate()
                            .map(|(index, word)| {
                                view! {
                                    <Reveal
                                        spec=presets::HERO_WORDS
                                        index=index
                                        active=mounted
                                        inline=true
                                        class="mr-4 md:mr-6"
                                    >
                                        {word}
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </h1>

                    <Reveal spec=presets::HERO_COPY index=0 active=mounted>
                        <p class="text-body text-secondary max-w-2xl mx-auto mb-12">{HERO_SUBTITLE}</p>
                    </Reveal>

                    <Reveal spec=presets::HERO_COPY index=1 active=mounted>
                        <div class="flex flex-col sm:flex-row items-center justify-center gap-6">
                            <ScrollButton target=SectionId::Work.as_str()>"View Our Work"</ScrollButton>
                            <ScrollButton target=SectionId::Contact.as_str() variant=ButtonVariant::Outline>
                                "Start a Project"
                            </ScrollButton>
                        </div>
                    </Reveal>
                </div>
            </div>

            <ScrollIndicator active=mounted />

            <div
                class="absolute top-1/4 right-8 w-2 h-2 bg-primary rounded-full opacity-30"
                style=LoopAnimation::combined(&[presets::SLOW_SPIN, presets::SWELL])
                aria-hidden="true"
            />
            <div
                class="absolute bottom-1/3 left-8 w-3 h-3 bg-primary rounded-full opacity-20"
                style=LoopAnimation::combined(&[presets::REVERSE_SPIN, presets::SHRINK])
                aria-hidden="true"
            />
        </section>
    }
}

/// "Scroll" hint that bobs forever and jumps to the work section on click.
#[component]
fn ScrollIndicator(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class="absolute bottom-8 left-1/2 -translate-x-1/2 cursor-pointer group"
            on:click=move |_| scroll_to(SectionId::Work.as_str())
        >
            <Reveal spec=presets::HERO_SCROLL_HINT active=active>
                <div class="flex flex-col items-center" style=presets::SCROLL_INDICATOR.style()>
                    <span class="text-xs text-secondary uppercase tracking-wider mb-4 group-hover:text-primary transition-smooth">
                        "Scroll"
                    </span>
                    <div class="w-px h-12 bg-secondary group-hover:bg-primary transition-smooth" />
                </div>
            </Reveal>
        </div>
    }
}
