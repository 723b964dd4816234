use leptos::prelude::*;

/// Site-wide component classes and the keyframes behind every
/// [`LoopAnimation`](crate::core::LoopAnimation).
///
/// Loops animate the individual `translate`/`rotate`/`scale` properties so
/// they compose with the `transform` set by entrance descriptors.
#[component]
pub fn SiteStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .container-custom {
                width: 100%;
                max-width: 80rem;
                margin-left: auto;
                margin-right: auto;
                padding-left: 1.5rem;
                padding-right: 1.5rem;
            }
            @media (min-width: 1024px) {
                .container-custom { padding-left: 3rem; padding-right: 3rem; }
            }
            .section-padding { padding-top: 8rem; padding-bottom: 8rem; }

            .font-playfair { font-family: "Playfair Display", Georgia, serif; }
            .heading-hero {
                font-family: "Playfair Display", Georgia, serif;
                font-size: clamp(2.5rem, 7vw, 6rem);
                line-height: 1.05;
                font-weight: 500;
                letter-spacing: -0.02em;
            }
            .heading-section {
                font-family: "Playfair Display", Georgia, serif;
                font-size: clamp(2rem, 4.5vw, 3.75rem);
                line-height: 1.1;
                font-weight: 500;
            }
            .text-body { font-size: 1.125rem; line-height: 1.75; }
            .text-caption { font-size: 0.875rem; letter-spacing: 0.05em; }
            .transition-smooth { transition: all 0.5s cubic-bezier(0.215, 0.61, 0.355, 1); }

            /* Buttons */
            .bp-btn {
                padding: 1rem 2rem;
                font-weight: 500;
                border-radius: 0;
                cursor: pointer;
                transition: all 0.3s ease-out;
            }
            .bp-btn:hover { scale: 1.05; }
            .bp-btn:active { scale: 0.95; }
            .bp-btn-solid {
                background-color: var(--color-primary);
                color: var(--color-background);
            }
            .bp-btn-solid:hover { background-color: var(--color-accent-hover); }
            .bp-btn-outline {
                border: 1px solid var(--color-primary);
                color: var(--color-primary);
                background-color: transparent;
            }
            .bp-btn-outline:hover {
                background-color: var(--color-primary);
                color: var(--color-background);
            }

            /* Hover motion */
            .bp-hover-lift, .bp-hover-lift-scale, .bp-hover-nudge, .bp-hover-shift, .bp-hover-rise {
                transition: translate 0.3s ease-out, scale 0.3s ease-out;
            }
            .bp-hover-lift:hover { translate: 0 -10px; }
            .bp-hover-lift-scale:hover { translate: 0 -10px; scale: 1.02; }
            .bp-hover-nudge:hover { translate: 10px 0; }
            .bp-hover-shift:hover { translate: 20px 0; }
            .bp-hover-rise:hover { translate: 0 -2px; }
            .bp-logo { transition: scale 0.3s ease-out; }
            .bp-logo:hover { scale: 1.05; }
            .bp-logo:active { scale: 0.95; }

            /* Header nav underline */
            .bp-underline { position: relative; }
            .bp-underline::after {
                content: "";
                position: absolute;
                left: 0;
                bottom: -0.25rem;
                width: 0;
                height: 2px;
                background-color: var(--color-primary);
                transition: width 0.3s;
            }
            .bp-underline:hover::after { width: 100%; }

            /* Hamburger bars morph into a cross */
            .bp-bar {
                position: absolute;
                left: 0;
                display: block;
                height: 2px;
                width: 1.5rem;
                background-color: var(--color-primary);
                transition: all 0.3s ease-out;
            }
            .bp-bar-top { translate: 0 -8px; }
            .bp-bar-bottom { translate: 0 8px; }
            .bp-menu-open .bp-bar-top { translate: 0 0; rotate: 45deg; }
            .bp-menu-open .bp-bar-middle { opacity: 0; }
            .bp-menu-open .bp-bar-bottom { translate: 0 0; rotate: -45deg; }

            .bp-overlay { transition: opacity 0.3s ease-out; }

            /* Decorative loops */
            @keyframes bp-bob {
                from { translate: 0 0; }
                to { translate: 0 10px; }
            }
            @keyframes bp-spin {
                to { rotate: 360deg; }
            }
            @keyframes bp-spin-reverse {
                to { rotate: -360deg; }
            }
            @keyframes bp-swell {
                0%, 100% { scale: 1; }
                50% { scale: 1.1; }
            }
            @keyframes bp-shrink {
                0%, 100% { scale: 1; }
                50% { scale: 0.8; }
            }
            @keyframes bp-marquee {
                from { translate: -100px 0; }
                to { translate: -2000px 0; }
            }

            @media (prefers-reduced-motion: reduce) {
                *, *::before, *::after {
                    animation-duration: 0.01ms !important;
                    animation-iteration-count: 1 !important;
                    transition-duration: 0.01ms !important;
                }
            }
            "#
        </style>
    }
}
