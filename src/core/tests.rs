#[cfg(test)]
mod tests {
    use crate::core::animation::presets;
    use crate::core::contact::{ContactError, ContactField, ContactFlow, FormPhase, RESET_DELAY_MS};
    use crate::core::content::{self, NAV_ITEMS, WORKS};
    use crate::core::navigation::testing::RecordingNavigator;
    use crate::core::timer::testing::ManualScheduler;
    use crate::core::{
        EntranceTrigger, HeaderState, Intersection, Playback, ScrollOutcome, ViewportPolicy,
    };
    use std::time::Duration;

    #[test]
    fn test_every_nav_item_reaches_a_rendered_section() {
        let nav = RecordingNavigator::with_sections(&["work", "services", "approach", "about", "contact"]);
        let mut header = HeaderState::default();

        for item in NAV_ITEMS.iter() {
            header.toggle_menu();
            assert_eq!(header.on_nav_click(&nav, item), ScrollOutcome::Scrolled);
            assert!(!header.menu_open);
        }

        assert_eq!(nav.request_count(), NAV_ITEMS.len());
    }

    #[test]
    fn test_nav_on_partial_page_only_scrolls_to_existing() {
        let nav = RecordingNavigator::with_sections(&["contact"]);
        let mut header = HeaderState::default();

        let outcomes: Vec<ScrollOutcome> = NAV_ITEMS
            .iter()
            .map(|item| header.on_nav_click(&nav, item))
            .collect();

        assert_eq!(
            outcomes.iter().filter(|o| **o == ScrollOutcome::Scrolled).count(),
            1
        );
        assert_eq!(nav.requests.borrow().as_slice(), ["contact"]);
    }

    #[test]
    fn test_work_grid_entrance_on_first_intersection() {
        let mut trigger = EntranceTrigger::new(ViewportPolicy::Toggle);
        assert_eq!(trigger.on_intersection(Intersection::Entered), Some(Playback::Play));

        let timeline = presets::WORK_CARDS.timeline(WORKS.iter().map(|w| w.title));

        assert_eq!(timeline.len(), 5);
        let delays: Vec<Duration> = timeline.iter().map(|d| d.delay).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(delays[4], Duration::from_millis(800));
        assert_eq!(timeline[0].target, "Everstream Analytics");
    }

    #[test]
    fn test_hero_words_start_after_half_a_second() {
        let words = content::split_words(content::HERO_HEADLINE);
        let timeline = presets::HERO_WORDS.timeline(words);

        assert_eq!(timeline[0].delay, Duration::from_millis(500));
        assert_eq!(timeline.last().unwrap().delay, Duration::from_millis(1600));
    }

    #[test]
    fn test_contact_round_trip_with_virtual_clock() {
        let scheduler = ManualScheduler::new();
        let mut flow = ContactFlow::new(scheduler.clone(), |_| {});

        assert_eq!(
            flow.submit(),
            Err(ContactError::MissingField(ContactField::Name))
        );

        for field in ContactField::ALL {
            flow.update(field, format!("{field} value"));
        }
        flow.update(ContactField::Email, "hello@studio.design");

        let submission = flow.submit().expect("all fields filled");
        assert_eq!(submission.validate(), Ok(()));
        assert_eq!(flow.phase(), FormPhase::Submitted);

        scheduler.advance(u64::from(RESET_DELAY_MS));

        let state = flow.state();
        assert_eq!(state.phase(), FormPhase::Editing);
        assert!(ContactField::ALL.iter().all(|f| state.get(*f).is_empty()));
    }
}
