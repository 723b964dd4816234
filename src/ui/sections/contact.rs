//! Contact section: the enquiry form and its acknowledgment view.
//!
//! The visible state lives in a `RwSignal<ContactFormState>` that mirrors the
//! [`ContactFlow`] owned by this section. The flow (and its reset timer) only
//! exists in the browser; it is torn down with the section.

use leptos::ev::SubmitEvent;
use leptos::html::Div;
use leptos::prelude::*;

use crate::core::animation::presets;
use crate::core::content::{CONTACT_LEAD, CONTACT_THANKS_BODY, CONTACT_THANKS_TITLE, CONTACT_TITLE};
use crate::core::{ContactField, ContactFormState, FormPhase, SectionId, ViewportPolicy};
use crate::ui::animated::{FadeUpOnce, Reveal};
use crate::ui::common::{Button, FormField, TextAreaField};
use crate::ui::platform::{use_entrance, use_mounted};

#[cfg(not(feature = "ssr"))]
use crate::core::{ContactFlow, ContactSubmission};
#[cfg(not(feature = "ssr"))]
use crate::ui::platform::BrowserScheduler;

/// Handle to the section's contact flow; cheap to copy into event handlers.
#[derive(Clone, Copy)]
struct ContactController {
    #[cfg(not(feature = "ssr"))]
    flow: StoredValue<ContactFlow<BrowserScheduler>, LocalStorage>,
}

impl ContactController {
    fn new(form: RwSignal<ContactFormState>) -> Self {
        #[cfg(not(feature = "ssr"))]
        {
            let flow = StoredValue::new_local(ContactFlow::new(
                BrowserScheduler,
                move |state: &ContactFormState| form.set(state.clone()),
            ));
            on_cleanup(move || {
                let _ = flow.try_update_value(ContactFlow::teardown);
            });
            Self { flow }
        }

        #[cfg(feature = "ssr")]
        {
            let _ = form;
            Self {}
        }
    }

    fn update(&self, field: ContactField, value: String) {
        #[cfg(not(feature = "ssr"))]
        {
            self.flow.update_value(|flow| flow.update(field, value));
        }

        #[cfg(feature = "ssr")]
        {
            let _ = (field, value);
        }
    }

    fn submit(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            match self.flow.try_update_value(|flow| flow.submit()) {
                Some(Ok(submission)) => deliver(submission),
                Some(Err(err)) => leptos::logging::warn!("contact form not submitted: {err}"),
                None => {}
            }
        }
    }
}

/// Fire-and-forget delivery to the contact endpoint. The acknowledgment is
/// already on screen; failures only reach the console.
#[cfg(not(feature = "ssr"))]
fn deliver(submission: ContactSubmission) {
    use gloo_net::http::Request;
    use leptos::task::spawn_local;

    spawn_local(async move {
        let request = match Request::post("/api/contact").json(&submission) {
            Ok(request) => request,
            Err(err) => {
                leptos::logging::warn!("could not encode contact enquiry: {err}");
                return;
            }
        };

        match request.send().await {
            Ok(response) if response.ok() => leptos::logging::log!("contact enquiry delivered"),
            Ok(response) => {
                leptos::logging::warn!("contact endpoint answered {}", response.status())
            }
            Err(err) => leptos::logging::warn!("contact enquiry not delivered: {err}"),
        }
    });
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());
    let controller = ContactController::new(form);
    let submitted = move || form.with(|state| state.phase() == FormPhase::Submitted);

    view! {
        <section id=SectionId::Contact.as_str() class="section-padding bg-background">
            <div class="container-custom">
                <Show
                    when=submitted
                    fallback=move || view! { <ContactForm form=form controller=controller /> }
                >
                    <ContactThanks />
                </Show>

                <Ornament />
            </div>
        </section>
    }
}

#[component]
fn ContactForm(form: RwSignal<ContactFormState>, controller: ContactController) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let active = use_entrance(container, ViewportPolicy::Toggle);

    let on_input = Callback::new(move |(field, value): (ContactField, String)| {
        controller.update(field, value)
    });
    let value_of =
        move |field: ContactField| Signal::derive(move || form.with(|state| state.get(field).to_owned()));

    view! {
        <div class="text-center mb-16">
            <FadeUpOnce step=0>
                <h2 class="heading-section text-primary mb-8">{format!("\u{2022} {CONTACT_TITLE}")}</h2>
            </FadeUpOnce>
            <FadeUpOnce step=1>
                <p class="text-xl text-secondary max-w-2xl mx-auto">{CONTACT_LEAD}</p>
            </FadeUpOnce>
        </div>

        <div node_ref=container class="max-w-2xl mx-auto">
            <form
                class="space-y-8"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    controller.submit();
                }
            >
                <Reveal spec=presets::FORM_ELEMENTS index=0 active=active>
                    <div class="bp-hover-nudge">
                        <FormField field=ContactField::Name value=value_of(ContactField::Name) on_input=on_input />
                    </div>
                </Reveal>
                <Reveal spec=presets::FORM_ELEMENTS index=1 active=active>
                    <div class="bp-hover-nudge">
                        <FormField
                            field=ContactField::Email
                            input_type="email"
                            value=value_of(ContactField::Email)
                            on_input=on_input
                        />
                    </div>
                </Reveal>
                <Reveal spec=presets::FORM_ELEMENTS index=2 active=active>
                    <div class="bp-hover-nudge">
                        <FormField field=ContactField::Company value=value_of(ContactField::Company) on_input=on_input />
                    </div>
                </Reveal>
                <Reveal spec=presets::FORM_ELEMENTS index=3 active=active>
                    <div class="bp-hover-nudge">
                        <TextAreaField field=ContactField::Project value=value_of(ContactField::Project) on_input=on_input />
                    </div>
                </Reveal>
                <Reveal spec=presets::FORM_ELEMENTS index=4 active=active>
                    <Button button_type="submit">"Send message"</Button>
                </Reveal>
            </form>
        </div>
    }
}

#[component]
fn ContactThanks() -> impl IntoView {
    let mounted = use_mounted();

    view! {
        <Reveal spec=presets::FADE_UP active=mounted class="text-center max-w-2xl mx-auto">
            <h2 class="heading-section text-primary mb-8">{CONTACT_THANKS_TITLE}</h2>
            <p class="text-body text-secondary">{CONTACT_THANKS_BODY}</p>
        </Reveal>
    }
}

/// Ring with a dot circling inside it.
#[component]
fn Ornament() -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let active = use_entrance(node, ViewportPolicy::Once);
    let entrance = presets::ORNAMENT.descriptor("contact-ornament", 0);

    view! {
        <div node_ref=node class="mt-24 text-center" aria-hidden="true">
            <div style=move || entrance.style(active.get())>
                <div class="inline-flex items-center justify-center w-16 h-16 border border-border rounded-full">
                    <div class="w-2 h-2 bg-primary rounded-full" style=presets::SLOW_SPIN.style() />
                </div>
            </div>
        </div>
    }
}
