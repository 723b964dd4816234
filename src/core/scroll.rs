//! Header scroll state derived from the window's vertical offset.

/// Offset (in CSS pixels) past which the header switches to its solid treatment.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Transient scroll state, recomputed on every scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub scrolled_past_threshold: bool,
}

impl ScrollState {
    /// Derive the state from a vertical scroll offset.
    ///
    /// Pure function of the offset: no hysteresis, so direction and velocity
    /// of the scroll have no influence.
    pub fn from_offset(offset: f64) -> Self {
        Self {
            scrolled_past_threshold: offset > SCROLL_THRESHOLD_PX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_of_page_is_not_scrolled() {
        assert!(!ScrollState::from_offset(0.0).scrolled_past_threshold);
        assert_eq!(ScrollState::default(), ScrollState::from_offset(0.0));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!ScrollState::from_offset(50.0).scrolled_past_threshold);
        assert!(ScrollState::from_offset(50.5).scrolled_past_threshold);
        assert!(ScrollState::from_offset(51.0).scrolled_past_threshold);
    }

    #[test]
    fn test_independent_of_direction() {
        let offsets = [0.0, 120.0, 49.0, 51.0, 10.0, 800.0, 50.0];
        for offset in offsets {
            assert_eq!(
                ScrollState::from_offset(offset).scrolled_past_threshold,
                offset > 50.0,
                "offset {offset}"
            );
        }
    }

    #[test]
    fn test_negative_offsets_from_overscroll() {
        // Elastic overscroll on macOS/iOS reports negative offsets
        assert!(!ScrollState::from_offset(-30.0).scrolled_past_threshold);
    }
}
