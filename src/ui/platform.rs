//! Browser glue: smooth scrolling, scroll and viewport listeners, timers.
//!
//! Every listener registered here is owned by the component that asked for it
//! and released in that component's `on_cleanup`, so no callback can fire
//! against a view that has been torn down. On the server all of this is inert.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::timer::Scheduler;
use crate::core::{ScrollOutcome, ScrollState, SectionNavigator, StartLine, ViewportPolicy};

/// [`SectionNavigator`] backed by the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomNavigator;

impl SectionNavigator for DomNavigator {
    fn scroll_to_section(&self, id: &str) -> ScrollOutcome {
        #[cfg(not(feature = "ssr"))]
        {
            let element = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(id));

            if let Some(element) = element {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                return ScrollOutcome::Scrolled;
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = id;
        }
        ScrollOutcome::Missing
    }

    fn scroll_to_top(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    }
}

/// Scroll to a section, ignoring a missing target.
pub fn scroll_to(id: &str) {
    let _ = DomNavigator.scroll_to_section(id);
}

/// [`Scheduler`] on top of `setTimeout`; dropping the handle clears the timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(not(feature = "ssr"))]
impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule_once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, callback)
    }
}

#[cfg(feature = "ssr")]
impl Scheduler for BrowserScheduler {
    type Handle = ();

    // Nothing is ever submitted during server rendering.
    fn schedule_once(&self, _delay_ms: u32, _callback: Box<dyn FnOnce()>) -> Self::Handle {}
}

/// Header scroll state, updated on every window scroll event.
pub fn use_scroll_state() -> ReadSignal<ScrollState> {
    let (state, set_state) = signal(ScrollState::default());

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let current = || {
            web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .map(ScrollState::from_offset)
                .unwrap_or_default()
        };

        // The page may be restored mid-scroll; sync once after hydration.
        Effect::new(move |_| set_state.set(current()));

        let handle = window_event_listener(scroll, move |_| set_state.set(current()));
        on_cleanup(move || handle.remove());
    }

    #[cfg(feature = "ssr")]
    {
        let _ = set_state;
    }

    state
}

/// `true` from the first animation frame after the component is mounted.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            request_animation_frame(move || set_mounted.set(true));
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = set_mounted;
    }

    mounted
}

#[cfg(not(feature = "ssr"))]
mod observer {
    use leptos::wasm_bindgen::JsCast;
    use leptos::wasm_bindgen::closure::Closure;

    use crate::core::Intersection;

    type Callback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

    /// An attached IntersectionObserver; disconnects when dropped.
    pub struct ViewportWatch {
        observer: web_sys::IntersectionObserver,
        _callback: Callback,
    }

    impl ViewportWatch {
        pub fn observe(
            element: &web_sys::Element,
            root_margin: &str,
            mut on_change: impl FnMut(Intersection) + 'static,
        ) -> Option<Self> {
            let callback: Callback = Closure::new(
                move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        let root_top = entry.root_bounds().map_or(0.0, |root| root.top());
                        on_change(Intersection::classify(
                            entry.is_intersecting(),
                            entry.bounding_client_rect().top(),
                            root_top,
                        ));
                    }
                },
            );

            let init = web_sys::IntersectionObserverInit::new();
            init.set_root_margin(root_margin);
            init.set_threshold(&leptos::wasm_bindgen::JsValue::from_f64(0.0));

            let observer = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &init,
            )
            .ok()?;
            observer.observe(element);

            Some(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for ViewportWatch {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

/// `true` while the entrance attached to `target` should show its end pose.
///
/// Driven by an IntersectionObserver on `target` and an
/// [`EntranceTrigger`](crate::core::EntranceTrigger) with the given policy.
/// If the element never mounts nothing is attached.
pub fn use_entrance(target: NodeRef<Div>, policy: ViewportPolicy) -> ReadSignal<bool> {
    use_entrance_at(target, policy, policy.default_start())
}

/// [`use_entrance`] with an explicit start line.
pub fn use_entrance_at(
    target: NodeRef<Div>,
    policy: ViewportPolicy,
    start: StartLine,
) -> ReadSignal<bool> {
    let (active, set_active) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::{EntranceTrigger, Playback};
        use observer::ViewportWatch;

        let watch = StoredValue::new_local(None::<ViewportWatch>);

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            let element: &web_sys::Element = element.as_ref();
            let mut trigger = EntranceTrigger::new(policy);
            let margin = start.root_margin();
            let attached = ViewportWatch::observe(element, &margin, move |change| {
                match trigger.on_intersection(change) {
                    Some(Playback::Play) => set_active.set(true),
                    Some(Playback::Reverse) => set_active.set(false),
                    None => {}
                }
            });
            if attached.is_none() {
                leptos::logging::warn!("IntersectionObserver unavailable; showing content statically");
                set_active.set(true);
            }
            // Replacing the previous watch disconnects it.
            watch.set_value(attached);
        });

        on_cleanup(move || watch.set_value(None));
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (target, policy, start, set_active);
    }

    active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_navigator_reports_missing() {
        assert_eq!(DomNavigator.scroll_to_section("work"), ScrollOutcome::Missing);
        DomNavigator.scroll_to_top();
    }

    #[test]
    fn test_server_scheduler_never_fires() {
        let fired = std::rc::Rc::new(std::cell::Cell::new(false));
        let flag = fired.clone();
        BrowserScheduler.schedule_once(0, Box::new(move || flag.set(true)));
        assert!(!fired.get());
    }
}
