use leptos::html::Div;
use leptos::prelude::*;

use crate::core::animation::presets;
use crate::core::content::{ContentCard, WORK_INTRO, WORKS};
use crate::core::{SectionId, ViewportPolicy};
use crate::ui::animated::{FadeUpOnce, Reveal, SectionHeading};
use crate::ui::common::{Button, ButtonVariant};
use crate::ui::platform::use_entrance;

/// Section (01): portfolio grid.
#[component]
pub fn WorkSection() -> impl IntoView {
    let grid = NodeRef::<Div>::new();
    let active = use_entrance(grid, ViewportPolicy::Toggle);

    view! {
        <section id=SectionId::Work.as_str() class="section-padding bg-background">
            <div class="container-custom">
                <SectionHeading intro=WORK_INTRO />

                <div node_ref=grid class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {WORKS
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(index, work)| {
                            view! {
                                <Reveal spec=presets::WORK_CARDS index=index active=active>
                                    <WorkCard work=work />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                // No archive page exists yet; the button is presentational.
                <FadeUpOnce step=2 class="text-center mt-16">
                    <Button variant=ButtonVariant::Outline>"View All Work"</Button>
                </FadeUpOnce>
            </div>
        </section>
    }
}

#[component]
fn WorkCard(work: ContentCard) -> impl IntoView {
    view! {
        <article class="bp-hover-lift group cursor-pointer">
            <div class="relative overflow-hidden mb-6">
                {work.image_url.map(|src| view! {
                    <img
                        src=src
                        alt=work.title
                        loading="lazy"
                        class="w-full aspect-[4/3] object-cover transition-smooth group-hover:scale-105"
                    />
                })}
                <div class="absolute inset-0 bg-black/20 opacity-0 group-hover:opacity-100 transition-smooth" />
            </div>
            <div>
                <h3 class="font-playfair text-xl font-medium text-primary mb-2 group-hover:text-secondary transition-smooth">
                    {work.title}
                </h3>
                <p class="text-secondary text-sm mb-4">{work.description}</p>
                <div class="flex flex-wrap gap-2">
                    {work
                        .tags
                        .iter()
                        .map(|tag| view! {
                            <span class="text-xs text-muted bg-border px-3 py-1 rounded-full">{*tag}</span>
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
