//! Building blocks that apply entrance descriptors to markup.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::animation::{EntranceSpec, presets};
use crate::core::content::SectionIntro;
use crate::core::ViewportPolicy;
use crate::core::viewport::starts;
use crate::ui::platform::{use_entrance, use_entrance_at};

/// Wraps children in an element animated by `spec` at position `index`.
#[component]
pub fn Reveal(
    /// Entrance template
    spec: EntranceSpec,
    /// Position in the staggered list
    #[prop(default = 0)]
    index: usize,
    /// When true the element transitions to its end pose
    #[prop(into)]
    active: Signal<bool>,
    /// Extra classes for the wrapper
    #[prop(default = "")]
    class: &'static str,
    /// Render as an inline-block span instead of a div
    #[prop(default = false)]
    inline: bool,
    children: Children,
) -> impl IntoView {
    let descriptor = spec.descriptor(format!("reveal-{index}"), index);
    let style = move || descriptor.style(active.get());

    if inline {
        view! {
            <span class=format!("inline-block will-change-transform {class}") style=style>
                {children()}
            </span>
        }
        .into_any()
    } else {
        view! {
            <div class=format!("will-change-transform {class}") style=style>
                {children()}
            </div>
        }
        .into_any()
    }
}

/// Numbered section header: "(NN)" slides in, title and lead fade up.
///
/// The number toggles at 70% of the viewport and reverses on scroll-back;
/// title and lead play once per mount.
#[component]
pub fn SectionHeading(intro: SectionIntro) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let active = use_entrance(node, ViewportPolicy::Once);
    let number_active = use_entrance_at(node, ViewportPolicy::Toggle, starts::SECTION_NUMBER);

    view! {
        <div node_ref=node class="flex items-start mb-20">
            <Reveal spec=presets::SECTION_NUMBER active=number_active class="section-number mr-16">
                <span class="text-caption text-secondary">{format!("({})", intro.number)}</span>
            </Reveal>
            <div class="flex-1">
                <Reveal spec=presets::FADE_UP index=0 active=active>
                    <h2 class="heading-section text-primary mb-8">
                        {format!("\u{2022} {}", intro.title)}
                    </h2>
                </Reveal>
                {intro.lead.map(|lead| view! {
                    <Reveal spec=presets::FADE_UP index=1 active=active>
                        <p class="text-body text-secondary max-w-3xl">{lead}</p>
                    </Reveal>
                })}
            </div>
        </div>
    }
}

/// Block that fades up once when it first scrolls into view.
#[component]
pub fn FadeUpOnce(
    /// Delay step; 0 = 200ms, 1 = 400ms, ...
    #[prop(default = 0)]
    step: usize,
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let active = use_entrance(node, ViewportPolicy::Once);

    view! {
        <div node_ref=node class=class>
            <Reveal spec=presets::FADE_UP index=step active=active>
                {children()}
            </Reveal>
        </div>
    }
}
