// SPDX-License-Identifier: MPL-2.0
//! Randomised toggle/tick sequences against the comments disclosure.

use iced_feed::ui::disclosure::{Controller, Phase, SizePolicy};
use proptest::prelude::*;
use std::time::{Duration, Instant};

const DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy)]
enum Step {
    Toggle { after_ms: u64 },
    Tick { after_ms: u64 },
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0u64..400).prop_map(|after_ms| Step::Toggle { after_ms }),
        (0u64..400).prop_map(|after_ms| Step::Tick { after_ms }),
    ]
}

fn controller(comments: usize) -> Controller {
    Controller::new(SizePolicy::default(), comments, DURATION)
}

fn run(controller: &mut Controller, start: Instant, steps: &[Step]) -> Instant {
    let mut now = start;
    for step in steps {
        match *step {
            Step::Toggle { after_ms } => {
                now += Duration::from_millis(after_ms);
                controller.toggle(now);
            }
            Step::Tick { after_ms } => {
                now += Duration::from_millis(after_ms);
                controller.tick(now);
            }
        }
    }
    now
}

proptest! {
    #[test]
    fn state_stays_consistent_for_any_sequence(
        steps in prop::collection::vec(step(), 0..40),
        comments in 0usize..12,
    ) {
        let mut controller = controller(comments);
        let mut now = Instant::now();

        for step in steps {
            now = run(&mut controller, now, &[step]);

            let progress = controller.progress();
            prop_assert!((0.0..=1.0).contains(&progress));
            prop_assert_eq!(controller.height_factor(), controller.rotation_factor());
            prop_assert_eq!(
                controller.is_content_mounted(),
                controller.phase() != Phase::Closed
            );
            match controller.phase() {
                Phase::Closed => prop_assert_eq!(progress, 0.0),
                Phase::Open => prop_assert_eq!(progress, 1.0),
                Phase::Opening | Phase::Closing => prop_assert!(controller.is_animating()),
            }
        }
    }

    #[test]
    fn toggle_burst_settles_by_parity(
        gaps in prop::collection::vec(0u64..300, 0..15),
    ) {
        let mut controller = controller(3);
        let steps: Vec<_> = gaps.iter().map(|&after_ms| Step::Toggle { after_ms }).collect();

        let end = run(&mut controller, Instant::now(), &steps);
        controller.tick(end + DURATION * 2);

        let expected = if gaps.len() % 2 == 1 { Phase::Open } else { Phase::Closed };
        prop_assert_eq!(controller.phase(), expected);
        prop_assert!(!controller.is_animating());
    }

    #[test]
    fn retargeting_never_shrinks_progress(
        elapsed_ms in 0u64..600,
        before in 0usize..10,
        after in 0usize..10,
    ) {
        let mut controller = controller(before);
        let t0 = Instant::now();
        controller.toggle(t0);
        controller.tick(t0 + Duration::from_millis(elapsed_ms));
        let progress = controller.progress();

        controller.set_comment_count(after);
        controller.tick(t0 + Duration::from_millis(elapsed_ms + 16));

        prop_assert!(controller.progress() >= progress);
        prop_assert_eq!(
            controller.target_height(),
            SizePolicy::default().target_height(after)
        );
    }

    #[test]
    fn cancelled_controller_never_changes(
        before in prop::collection::vec(step(), 0..10),
        after in prop::collection::vec(step(), 0..20),
    ) {
        let mut controller = controller(2);
        let now = run(&mut controller, Instant::now(), &before);
        controller.cancel();
        let phase = controller.phase();
        let progress = controller.progress();
        let mounted = controller.is_content_mounted();

        run(&mut controller, now, &after);

        prop_assert_eq!(controller.phase(), phase);
        prop_assert_eq!(controller.progress(), progress);
        prop_assert_eq!(controller.is_content_mounted(), mounted);
        prop_assert!(!controller.is_animating());
    }
}
