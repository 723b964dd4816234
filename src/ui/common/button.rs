use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the primary color
    Solid,
    /// Primary-colored border, fills on hover
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Solid => "bp-btn bp-btn-solid",
            ButtonVariant::Outline => "bp-btn bp-btn-outline",
        }
    }
}

/// Call-to-action button with the studio's press/hover scaling
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Solid)]
    variant: ButtonVariant,
    /// Click handler; buttons without one are purely decorative
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    /// HTML button type
    #[prop(default = "button")]
    button_type: &'static str,
    /// Button content (text or elements)
    children: Children,
    /// Accessible label when the content is not descriptive
    #[prop(optional)]
    aria_label: Option<&'static str>,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=variant.class()
            aria-label=aria_label
            on:click=move |_| {
                if let Some(callback) = on_click.as_ref() {
                    callback.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Button that smoothly scrolls to a page section
#[component]
pub fn ScrollButton(
    /// DOM id of the target section
    target: &'static str,
    #[prop(default = ButtonVariant::Solid)]
    variant: ButtonVariant,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            variant=variant
            on_click=move |_| crate::ui::platform::scroll_to(target)
        >
            {children()}
        </Button>
    }
}
