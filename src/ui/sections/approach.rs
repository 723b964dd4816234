use leptos::html::Div;
use leptos::prelude::*;

use crate::core::animation::presets;
use crate::core::content::{APPROACH_INTRO, APPROACH_QUOTE, APPROACHES};
use crate::core::{SectionId, ViewportPolicy};
use crate::ui::animated::{FadeUpOnce, Reveal, SectionHeading};
use crate::ui::icon::ArrowUpRight;
use crate::ui::platform::use_entrance;

/// Section (03): engagement models.
#[component]
pub fn ApproachSection() -> impl IntoView {
    let grid = NodeRef::<Div>::new();
    let active = use_entrance(grid, ViewportPolicy::Toggle);

    view! {
        <section id=SectionId::Approach.as_str() class="section-padding bg-border/30">
            <div class="container-custom">
                <SectionHeading intro=APPROACH_INTRO />

                <div node_ref=grid class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    {APPROACHES
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(index, approach)| {
                            view! {
                                <Reveal spec=presets::APPROACH_CARDS index=index active=active>
                                    <div class="bp-hover-lift-scale bg-background p-8 lg:p-12 group cursor-pointer">
                                        <div class="mb-8">
                                            <span class="text-caption text-secondary font-mono">
                                                {approach.caption()}
                                            </span>
                                        </div>
                                        <h3 class="font-playfair text-2xl font-medium text-primary mb-6 group-hover:text-secondary transition-smooth">
                                            {approach.title}
                                        </h3>
                                        <p class="text-secondary text-sm leading-relaxed mb-8">
                                            {approach.description}
                                        </p>
                                        <div class="bp-hover-nudge flex items-center text-secondary opacity-0 group-hover:opacity-100 transition-smooth">
                                            <span class="text-xs uppercase tracking-wider mr-3">"Learn More"</span>
                                            <ArrowUpRight size=16 />
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <FadeUpOnce step=2 class="text-center mt-20">
                    <p class="font-playfair text-xl text-secondary italic max-w-3xl mx-auto">
                        {APPROACH_QUOTE}
                    </p>
                </FadeUpOnce>
            </div>
        </section>
    }
}
