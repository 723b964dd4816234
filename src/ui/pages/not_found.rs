//! Not found page component
//!
//! A 404 page for any path other than the site root.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::STUDIO_NAME;
use crate::ui::styles::SiteStyles;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="min-h-screen bg-background flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <span class="text-caption text-secondary">"(404)"</span>

                <h1 class="heading-section text-primary mt-6 mb-4">"Page Not Found"</h1>

                <p class="text-body text-secondary mb-12 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="bp-btn bp-btn-solid inline-block">
                    "Back to the studio"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="font-playfair text-sm text-secondary">{STUDIO_NAME}</p>
            </div>

            <SiteStyles />
        </div>
    }
}
