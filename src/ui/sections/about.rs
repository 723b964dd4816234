use leptos::html::Div;
use leptos::prelude::*;

use crate::core::animation::presets;
use crate::core::content::{ABOUT_INTRO, FLOWING_TEXT, PRINCIPLES, split_words};
use crate::core::viewport::starts;
use crate::core::{SectionId, ViewportPolicy};
use crate::ui::animated::{FadeUpOnce, Reveal, SectionHeading};
use crate::ui::common::ScrollButton;
use crate::ui::platform::{use_entrance, use_entrance_at};

/// Section (04): principles, the flowing statement and a call to action.
#[component]
pub fn AboutSection() -> impl IntoView {
    let principles = NodeRef::<Div>::new();
    let principles_active = use_entrance(principles, ViewportPolicy::Toggle);

    let flowing = NodeRef::<Div>::new();
    let flowing_active = use_entrance_at(flowing, ViewportPolicy::Toggle, starts::FLOWING_TEXT);

    view! {
        <section id=SectionId::About.as_str() class="section-padding bg-background">
            <div class="container-custom">
                <SectionHeading intro=ABOUT_INTRO />

                <div node_ref=principles class="grid grid-cols-1 md:grid-cols-2 gap-8 lg:gap-12 mb-24">
                    {PRINCIPLES
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(index, principle)| {
                            view! {
                                <Reveal spec=presets::PRINCIPLE_CARDS index=index active=principles_active>
                                    <div class="bp-hover-lift group">
                                        <div class="mb-6">
                                            <span class="text-caption text-secondary font-mono">
                                                {principle.caption()}
                                            </span>
                                        </div>
                                        <h3 class="font-playfair text-xl font-medium text-primary mb-4 group-hover:text-secondary transition-smooth">
                                            {principle.title}
                                        </h3>
                                        <p class="text-secondary text-sm leading-relaxed">
                                            {principle.description}
                                        </p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <div node_ref=flowing class="max-w-5xl mx-auto">
                    <p class="text-2xl md:text-3xl lg:text-4xl font-playfair font-medium text-primary leading-relaxed">
                        {split_words(FLOWING_TEXT)
                            .into_iter()
                            .enumerate()
                            .map(|(index, word)| {
                                view! {
                                    <Reveal
                                        spec=presets::FLOWING_WORDS
                                        index=index
                                        active=flowing_active
                                        inline=true
                                        class="mr-3 md:mr-4"
                                    >
                                        {word}
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </p>
                </div>

                <FadeUpOnce step=3 class="text-center mt-20">
                    <ScrollButton target=SectionId::Contact.as_str()>"Contact us"</ScrollButton>
                </FadeUpOnce>

                <FadeUpOnce step=1 class="relative mt-24 overflow-hidden">
                    <div class="w-full h-px bg-gradient-to-r from-transparent via-border to-transparent" />
                </FadeUpOnce>
            </div>
        </section>
    }
}
