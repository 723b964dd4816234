use leptos::html::Div;
use leptos::prelude::*;

use crate::core::animation::presets;
use crate::core::content::{SERVICES, SERVICES_INTRO};
use crate::core::{SectionId, ViewportPolicy};
use crate::ui::animated::{FadeUpOnce, Reveal, SectionHeading};
use crate::ui::icon::ArrowUpRight;
use crate::ui::platform::use_entrance;

/// Copies of the title strip laid end to end in the marquee.
const MARQUEE_COPIES: usize = 3;

/// Section (02): numbered services and the scrolling title strip.
#[component]
pub fn ServicesSection() -> impl IntoView {
    let list = NodeRef::<Div>::new();
    let active = use_entrance(list, ViewportPolicy::Toggle);

    view! {
        <section id=SectionId::Services.as_str() class="section-padding bg-background">
            <div class="container-custom">
                <SectionHeading intro=SERVICES_INTRO />

                <div node_ref=list class="space-y-12">
                    {SERVICES
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(index, service)| {
                            view! {
                                <Reveal spec=presets::SERVICE_ITEMS index=index active=active>
                                    <div class="bp-hover-shift group">
                                        <div class="flex items-start gap-8 md:gap-16 border-b border-border pb-12">
                                            <div class="text-caption text-secondary font-mono">
                                                {service.caption()}
                                            </div>
                                            <div class="flex-1">
                                                <h3 class="font-playfair text-2xl md:text-3xl font-medium text-primary mb-6 group-hover:text-secondary transition-smooth">
                                                    {service.title}
                                                </h3>
                                                <p class="text-body text-secondary max-w-4xl">
                                                    {service.description}
                                                </p>
                                            </div>
                                            <div class="bp-hover-nudge hidden md:block text-secondary opacity-0 group-hover:opacity-100 transition-smooth">
                                                <ArrowUpRight />
                                            </div>
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <FadeUpOnce step=1 class="mt-20 overflow-hidden">
                    <div
                        class="flex items-center gap-8 whitespace-nowrap"
                        style=presets::MARQUEE.style()
                        aria-hidden="true"
                    >
                        {(0..MARQUEE_COPIES)
                            .map(|_| view! {
                                <div class="flex items-center gap-8">
                                    {SERVICES
                                        .iter()
                                        .map(|service| view! {
                                            <span class="text-sm text-muted font-medium">
                                                {format!("{} \u{2022}", service.title)}
                                            </span>
                                        })
                                        .collect_view()}
                                </div>
                            })
                            .collect_view()}
                    </div>
                </FadeUpOnce>
            </div>
        </section>
    }
}
