//! The single-page site, assembled in document order.

use leptos::prelude::*;

use crate::ui::sections::{
    AboutSection, ApproachSection, ContactSection, Footer, Header, Hero, ServicesSection, WorkSection,
};
use crate::ui::styles::SiteStyles;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background text-primary">
            <Header />
            <main>
                <Hero />
                <WorkSection />
                <ServicesSection />
                <ApproachSection />
                <AboutSection />
                <ContactSection />
            </main>
            <Footer />

            <SiteStyles />
        </div>
    }
}
