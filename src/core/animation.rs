//! Declarative animation descriptors
//!
//! Every motion on the site is described as data: a target, a start and end
//! [`Pose`], a duration, a delay and an [`Easing`]. The browser drives them as
//! CSS transitions (entrances) or keyframe animations (infinite loops), so the
//! descriptors carry their own CSS rendering.
//!
//! # Example
//!
//! ```
//! use blinkpath::core::animation::{EntranceSpec, Easing, Pose, Stagger};
//! use std::time::Duration;
//!
//! let spec = EntranceSpec::new(
//!     Pose::hidden().offset_y(50.0),
//!     Duration::from_millis(600),
//!     Easing::Power3Out,
//!     Stagger::new(Duration::ZERO, Duration::from_millis(100)),
//! );
//!
//! let timeline = spec.timeline(["a", "b", "c"]);
//! assert_eq!(timeline.len(), 3);
//! assert!(timeline[0].delay < timeline[2].delay);
//! ```

use std::fmt::Write;
use std::time::Duration;

/// Easing curves used by the site, named after the curves designers asked for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
    Power2Out,
    Power2InOut,
    Power3Out,
}

impl Easing {
    /// CSS timing function for this curve.
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            // cubic out
            Easing::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Easing::Power2InOut => "cubic-bezier(0.645, 0.045, 0.355, 1)",
            // quartic out
            Easing::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)",
        }
    }
}

/// Visual state of an element at one end of an animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Pose {
    /// Fully visible, untransformed.
    pub const IDENTITY: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    /// Transparent, otherwise untransformed.
    pub const fn hidden() -> Self {
        Pose {
            opacity: 0.0,
            ..Pose::IDENTITY
        }
    }

    pub const fn offset_x(self, x: f64) -> Self {
        Pose { x, ..self }
    }

    pub const fn offset_y(self, y: f64) -> Self {
        Pose { y, ..self }
    }

    pub const fn scaled(self, scale: f64) -> Self {
        Pose { scale, ..self }
    }

    pub const fn rotated(self, rotate: f64) -> Self {
        Pose { rotate, ..self }
    }

    /// Render as `opacity` and `transform` declarations.
    pub fn css(&self) -> String {
        let mut out = format!("opacity: {};", self.opacity);
        let mut transforms = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            transforms.push(format!("translate3d({}px, {}px, 0)", self.x, self.y));
        }
        if self.scale != 1.0 {
            transforms.push(format!("scale({})", self.scale));
        }
        if self.rotate != 0.0 {
            transforms.push(format!("rotate({}deg)", self.rotate));
        }
        if transforms.is_empty() {
            out.push_str(" transform: none;");
        } else {
            let _ = write!(out, " transform: {};", transforms.join(" "));
        }
        out
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::IDENTITY
    }
}

/// Per-item incremental delay across a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub start: Duration,
    pub step: Duration,
}

impl Stagger {
    pub const fn new(start: Duration, step: Duration) -> Self {
        Self { start, step }
    }

    /// All items start together after `start`.
    pub const fn none(start: Duration) -> Self {
        Self {
            start,
            step: Duration::ZERO,
        }
    }

    /// Delay of the item at `index`.
    pub fn delay(&self, index: usize) -> Duration {
        self.start + self.step * index as u32
    }
}

/// One animation of one target.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDescriptor {
    pub target: String,
    pub from: Pose,
    pub to: Pose,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl AnimationDescriptor {
    /// Inline style for the element.
    ///
    /// When `active` the element transitions towards `to` after its delay.
    /// When inactive it transitions back to `from` immediately, which plays
    /// the entrance in reverse.
    pub fn style(&self, active: bool) -> String {
        let (pose, delay) = if active {
            (&self.to, self.delay)
        } else {
            (&self.from, Duration::ZERO)
        };
        let timing = format!(
            "{}ms {} {}ms",
            self.duration.as_millis(),
            self.easing.css(),
            delay.as_millis()
        );
        format!(
            "{} transition: opacity {timing}, transform {timing};",
            pose.css()
        )
    }
}

/// Template for a staggered entrance applied to a list of targets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceSpec {
    pub from: Pose,
    pub to: Pose,
    pub duration: Duration,
    pub easing: Easing,
    pub stagger: Stagger,
}

impl EntranceSpec {
    /// Entrance from `from` to the identity pose.
    pub const fn new(from: Pose, duration: Duration, easing: Easing, stagger: Stagger) -> Self {
        Self {
            from,
            to: Pose::IDENTITY,
            duration,
            easing,
            stagger,
        }
    }

    pub const fn to(self, to: Pose) -> Self {
        Self { to, ..self }
    }

    /// Descriptor for the item at `index`.
    pub fn descriptor(&self, target: impl Into<String>, index: usize) -> AnimationDescriptor {
        AnimationDescriptor {
            target: target.into(),
            from: self.from,
            to: self.to,
            duration: self.duration,
            delay: self.stagger.delay(index),
            easing: self.easing,
        }
    }

    /// One descriptor per target, in order. Empty input yields an empty timeline.
    pub fn timeline<I, T>(&self, targets: I) -> Vec<AnimationDescriptor>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        targets
            .into_iter()
            .enumerate()
            .map(|(index, target)| self.descriptor(target, index))
            .collect()
    }
}

/// Infinite decorative animation backed by a CSS `@keyframes` rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopAnimation {
    /// Name of the keyframes rule.
    pub keyframes: &'static str,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
    /// Play forwards then backwards on alternate iterations.
    pub yoyo: bool,
}

impl LoopAnimation {
    pub const fn new(keyframes: &'static str, duration: Duration, easing: Easing) -> Self {
        Self {
            keyframes,
            duration,
            delay: Duration::ZERO,
            easing,
            yoyo: false,
        }
    }

    pub const fn yoyo(self) -> Self {
        Self { yoyo: true, ..self }
    }

    pub const fn delayed(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// Value for the CSS `animation` shorthand.
    pub fn css_value(&self) -> String {
        format!(
            "{} {}ms {} {}ms infinite {}",
            self.keyframes,
            self.duration.as_millis(),
            self.easing.css(),
            self.delay.as_millis(),
            if self.yoyo { "alternate" } else { "normal" }
        )
    }

    /// Inline `animation` declaration.
    pub fn style(&self) -> String {
        format!("animation: {};", self.css_value())
    }

    /// Combine several loops on one element (e.g. rotate and pulse).
    pub fn combined(loops: &[LoopAnimation]) -> String {
        let values: Vec<String> = loops.iter().map(LoopAnimation::css_value).collect();
        format!("animation: {};", values.join(", "))
    }
}

/// Timings used across the site.
pub mod presets {
    use super::*;

    const fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    /// Hero headline words: rise 100px, 0.8s, 0.1s stagger after 0.5s.
    pub const HERO_WORDS: EntranceSpec = EntranceSpec::new(
        Pose::hidden().offset_y(100.0),
        ms(800),
        Easing::Power3Out,
        Stagger::new(ms(500), ms(100)),
    );

    pub const WORK_CARDS: EntranceSpec = EntranceSpec::new(
        Pose::hidden().offset_y(100.0),
        ms(800),
        Easing::Power3Out,
        Stagger::new(Duration::ZERO, ms(200)),
    );

    pub const SERVICE_ITEMS: EntranceSpec = EntranceSpec::new(
        Pose::hidden().offset_y(50.0),
        ms(600),
        Easing::Power3Out,
        Stagger::new(Duration::ZERO, ms(100)),
    );

    pub const APPROACH_CARDS: EntranceSpec = EntranceSpec::new(
        Pose::hidden().offset_y(80.0),
        ms(800),
        Easing::Power3Out,
        Stagger::new(Duration::ZERO, ms(200)),
    );

    pub const PRINCIPLE_CARDS: EntranceSpec = EntranceSpec::new(
        Pose::hidden().offset_y(60.0),
        ms(600),
        Easing::Power3Out,
        Stagger::new(Duration::ZERO, ms(150)),
    );

    pub const FLOWING_WORDS: EntranceSpec = EntranceSpec::new(
        Pose::hidden().offset_y(30.0),
        ms(800),
        Easing::Power2Out,
        Stagger::new(Duration::ZERO, ms(50)),
    );

    pub const FORM_ELEMENTS: EntranceSpec = EntranceSpec::new(
        Pose::hidden().offset_y(50.0),
        ms(600),
        Easing::Power3Out,
        Stagger::new(Duration::ZERO, ms(100)),
    );

    /// Header bar sliding down on first display.
    pub const HEADER_BAR: EntranceSpec = EntranceSpec::new(
        Pose::IDENTITY.offset_y(-100.0),
        ms(600),
        Easing::EaseOut,
        Stagger::none(Duration::ZERO),
    );

    pub const HEADER_NAV: EntranceSpec = EntranceSpec::new(
        Pose::hidden().offset_y(-20.0),
        ms(600),
        Easing::EaseOut,
        Stagger::new(ms(100), ms(50)),
    );

    pub const OVERLAY_NAV: EntranceSpec = EntranceSpec::new(
        Pose::hidden().offset_y(50.0),
        ms(300),
        Easing::EaseOut,
        Stagger::new(Duration::ZERO, ms(100)),
    );

    /// Section number sliding in from the left.
    pub const SECTION_NUMBER: EntranceSpec = EntranceSpec::new(
        Pose::hidden().offset_x(-50.0),
        ms(800),
        Easing::EaseOut,
        Stagger::none(Duration::ZERO),
    );

    /// Headings and copy fading up, one delay step per line.
    pub const FADE_UP: EntranceSpec = EntranceSpec::new(
        Pose::hidden().offset_y(30.0),
        ms(800),
        Easing::EaseOut,
        Stagger::new(ms(200), ms(200)),
    );

    /// Hero subtitle (1.2s) then CTA row (1.4s).
    pub const HERO_COPY: EntranceSpec = EntranceSpec::new(
        Pose::hidden().offset_y(30.0),
        ms(800),
        Easing::EaseOut,
        Stagger::new(ms(1200), ms(200)),
    );

    pub const HERO_SCROLL_HINT: EntranceSpec = EntranceSpec::new(
        Pose::hidden(),
        ms(800),
        Easing::EaseOut,
        Stagger::none(ms(2000)),
    );

    pub const MENU_TOGGLE: EntranceSpec = EntranceSpec::new(
        Pose::hidden(),
        ms(600),
        Easing::EaseOut,
        Stagger::none(ms(300)),
    );

    /// Decorative ornaments growing into place.
    pub const ORNAMENT: EntranceSpec = EntranceSpec::new(
        Pose::hidden().scaled(0.8),
        ms(1000),
        Easing::EaseOut,
        Stagger::none(ms(800)),
    );

    pub const SCROLL_INDICATOR: LoopAnimation =
        LoopAnimation::new("bp-bob", ms(1500), Easing::Power2InOut).yoyo();

    pub const SLOW_SPIN: LoopAnimation = LoopAnimation::new("bp-spin", ms(20_000), Easing::Linear);
    pub const SLOWER_SPIN: LoopAnimation = LoopAnimation::new("bp-spin", ms(30_000), Easing::Linear);
    pub const REVERSE_SPIN: LoopAnimation =
        LoopAnimation::new("bp-spin-reverse", ms(25_000), Easing::Linear);
    pub const SWELL: LoopAnimation = LoopAnimation::new("bp-swell", ms(4000), Easing::EaseInOut);
    pub const SHRINK: LoopAnimation = LoopAnimation::new("bp-shrink", ms(3000), Easing::EaseInOut);
    pub const MARQUEE: LoopAnimation = LoopAnimation::new("bp-marquee", ms(30_000), Easing::Linear);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delays() {
        let stagger = Stagger::new(Duration::from_millis(500), Duration::from_millis(100));
        assert_eq!(stagger.delay(0), Duration::from_millis(500));
        assert_eq!(stagger.delay(3), Duration::from_millis(800));
    }

    #[test]
    fn test_timeline_empty_targets() {
        let targets: Vec<String> = Vec::new();
        assert!(presets::WORK_CARDS.timeline(targets).is_empty());
    }

    #[test]
    fn test_timeline_five_cards_strictly_increasing() {
        let timeline = presets::WORK_CARDS.timeline(["a", "b", "c", "d", "e"]);

        assert_eq!(timeline.len(), 5);
        for pair in timeline.windows(2) {
            assert!(pair[0].delay < pair[1].delay);
            assert_eq!(pair[1].delay - pair[0].delay, Duration::from_millis(200));
        }
        assert_eq!(timeline[4].target, "e");
    }

    #[test]
    fn test_pose_css_identity() {
        assert_eq!(Pose::IDENTITY.css(), "opacity: 1; transform: none;");
    }

    #[test]
    fn test_pose_css_transformed() {
        let pose = Pose::hidden().offset_y(100.0).scaled(0.8).rotated(45.0);
        assert_eq!(
            pose.css(),
            "opacity: 0; transform: translate3d(0px, 100px, 0) scale(0.8) rotate(45deg);"
        );
    }

    #[test]
    fn test_descriptor_style_active_uses_delay() {
        let desc = presets::HERO_WORDS.descriptor("word-2", 2);
        let style = desc.style(true);

        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("800ms cubic-bezier(0.165, 0.84, 0.44, 1) 700ms"));
    }

    #[test]
    fn test_descriptor_style_inactive_reverses_without_delay() {
        let desc = presets::HERO_WORDS.descriptor("word-2", 2);
        let style = desc.style(false);

        assert!(style.starts_with("opacity: 0; transform: translate3d(0px, 100px, 0);"));
        assert!(style.contains(" 0ms,"));
    }

    #[test]
    fn test_loop_css() {
        assert_eq!(
            presets::SCROLL_INDICATOR.style(),
            "animation: bp-bob 1500ms cubic-bezier(0.645, 0.045, 0.355, 1) 0ms infinite alternate;"
        );
    }

    #[test]
    fn test_hero_copy_follows_headline() {
        assert_eq!(
            presets::HERO_COPY.descriptor("subtitle", 0).delay,
            Duration::from_millis(1200)
        );
        assert_eq!(
            presets::HERO_COPY.descriptor("cta", 1).delay,
            Duration::from_millis(1400)
        );
        assert_eq!(
            presets::HERO_SCROLL_HINT.descriptor("hint", 0).delay,
            Duration::from_secs(2)
        );
    }

    #[test]
    fn test_section_heading_steps() {
        let title = presets::FADE_UP.descriptor("title", 0);
        let lead = presets::FADE_UP.descriptor("lead", 1);
        assert_eq!(title.delay, Duration::from_millis(200));
        assert_eq!(lead.delay, Duration::from_millis(400));
        assert_eq!(presets::SECTION_NUMBER.from.x, -50.0);
    }

    #[test]
    fn test_combined_loops() {
        let spin = LoopAnimation::new("bp-spin", Duration::from_secs(20), Easing::Linear);
        let pulse = LoopAnimation::new("bp-pulse", Duration::from_secs(4), Easing::EaseInOut);

        assert_eq!(
            LoopAnimation::combined(&[spin, pulse]),
            "animation: bp-spin 20000ms linear 0ms infinite normal, bp-pulse 4000ms ease-in-out 0ms infinite normal;"
        );
    }
}
