//! Viewport-driven entrance triggering.
//!
//! An [`EntranceTrigger`] receives intersection notifications for one
//! container and decides whether the children should play forwards, play in
//! reverse, or be left alone.

/// How an entrance reacts to the container leaving and re-entering the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportPolicy {
    /// Play once the container's top crosses the start line; reverse only when
    /// the user scrolls back up above it.
    #[default]
    Toggle,
    /// Play the first time the container is visible, then never again.
    Once,
}

impl ViewportPolicy {
    /// Start line used when a section does not pick its own.
    pub fn default_start(self) -> StartLine {
        match self {
            ViewportPolicy::Toggle => StartLine::Percent(80),
            ViewportPolicy::Once => StartLine::Visible,
        }
    }
}

/// Where the container's top has to reach before an entrance plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartLine {
    /// As soon as any part of the container is on screen.
    Visible,
    /// Percentage of the viewport height, measured from the top.
    Percent(u8),
}

impl StartLine {
    /// IntersectionObserver `rootMargin` that moves the viewport's bottom edge
    /// up to this line.
    pub fn root_margin(self) -> String {
        match self {
            StartLine::Visible => "0px".to_string(),
            StartLine::Percent(percent) => {
                format!("0px 0px -{}% 0px", 100 - u32::from(percent.min(100)))
            }
        }
    }
}

/// Start lines of the entrances that do not use their policy's default.
pub mod starts {
    use super::StartLine;

    pub const SECTION_NUMBER: StartLine = StartLine::Percent(70);
    pub const FLOWING_TEXT: StartLine = StartLine::Percent(85);
}

/// One intersection notification, with the side the container left from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intersection {
    Entered,
    /// Scrolled past: the container is now above the viewport.
    LeftAbove,
    /// Scrolled back: the container is below the start line again.
    LeftBelow,
}

impl Intersection {
    /// Classify an observer entry from the container's top edge and the top
    /// edge of the (margin-adjusted) root, both in viewport coordinates.
    pub fn classify(intersecting: bool, top: f64, root_top: f64) -> Self {
        if intersecting {
            Intersection::Entered
        } else if top > root_top {
            Intersection::LeftBelow
        } else {
            Intersection::LeftAbove
        }
    }
}

/// Direction in which an entrance should run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Play,
    Reverse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntranceTrigger {
    policy: ViewportPolicy,
    active: bool,
    played: bool,
}

impl EntranceTrigger {
    pub fn new(policy: ViewportPolicy) -> Self {
        Self {
            policy,
            active: false,
            played: false,
        }
    }

    pub fn policy(&self) -> ViewportPolicy {
        self.policy
    }

    /// Whether the children currently sit at their end pose.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed an intersection notification. Returns the playback to start, if any.
    ///
    /// A toggled container that is already above the viewport (for example
    /// after a reload mid-page) counts as played.
    pub fn on_intersection(&mut self, change: Intersection) -> Option<Playback> {
        use Intersection::*;

        match (self.policy, change, self.active) {
            (_, Entered, true) | (_, LeftAbove, true) | (_, LeftBelow, false) => None,
            (ViewportPolicy::Once, Entered, false) if self.played => None,
            (ViewportPolicy::Once, LeftAbove, false) => None,
            (_, Entered, false) | (ViewportPolicy::Toggle, LeftAbove, false) => {
                self.active = true;
                self.played = true;
                Some(Playback::Play)
            }
            (ViewportPolicy::Once, LeftBelow, true) => None,
            (ViewportPolicy::Toggle, LeftBelow, true) => {
                self.active = false;
                Some(Playback::Reverse)
            }
        }
    }
}
