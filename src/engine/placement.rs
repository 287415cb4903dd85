//! Target placement geometry
//!
//! The play area is a rectangle in whatever units the presentation layer
//! reports (terminal cells for the bundled UI). The target is a square
//! anchored by its top-left corner; a valid anchor keeps the whole box
//! inside the area and below the dead zone, the top band reserved for the
//! score/timer readout.

use glam::IVec2;
use rand::Rng;

use crate::consts::DEAD_ZONE_FRACTION;

/// The usable screen region plus the target's square extent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayArea {
    /// Width in play-area units
    pub width: i32,
    /// Height in play-area units
    pub height: i32,
    /// Side length of the target's bounding box
    pub target_size: i32,
}

impl PlayArea {
    /// Caller contract: positive dimensions and a target that fits both of
    /// them. Violations are fatal in debug builds; release builds fall back
    /// to the clamping in [`PlayArea::spawn_window`].
    pub fn new(width: i32, height: i32, target_size: i32) -> Self {
        debug_assert!(
            width > 0 && height > 0,
            "degenerate play area {width}x{height}"
        );
        debug_assert!(
            target_size > 0 && target_size <= width && target_size <= height,
            "target size {target_size} does not fit a {width}x{height} area"
        );
        Self {
            width,
            height,
            target_size,
        }
    }

    /// Top edge of the placement band; rows above it are the dead zone
    pub fn dead_zone_bottom(&self) -> i32 {
        (self.height as f32 * DEAD_ZONE_FRACTION).round() as i32
    }

    /// Window of valid top-left anchors for the target.
    ///
    /// Each upper bound is clamped to keep the half-open range non-empty, so
    /// a draw never panics: an oversized target collapses onto `x = 0` and
    /// `y = dead_zone_bottom()`.
    pub fn spawn_window(&self) -> SpawnWindow {
        let x_min = 0;
        let y_min = self.dead_zone_bottom();
        SpawnWindow {
            x_min,
            x_max: (self.width - self.target_size).max(x_min + 1),
            y_min,
            y_max: (self.height - self.target_size).max(y_min + 1),
        }
    }
}

/// Half-open ranges of valid target anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnWindow {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl SpawnWindow {
    /// Draw an anchor uniformly from the window
    pub fn sample(&self, rng: &mut impl Rng) -> IVec2 {
        IVec2::new(
            rng.random_range(self.x_min..self.x_max),
            rng.random_range(self.y_min..self.y_max),
        )
    }

    /// Check an anchor against the window
    pub fn contains(&self, pos: IVec2) -> bool {
        (self.x_min..self.x_max).contains(&pos.x) && (self.y_min..self.y_max).contains(&pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_window_for_reference_area() {
        // 400x800 with a 150 target: x in [0, 250), y in [160, 650)
        let w = PlayArea::new(400, 800, 150).spawn_window();
        assert_eq!((w.x_min, w.x_max), (0, 250));
        assert_eq!((w.y_min, w.y_max), (160, 650));
    }

    #[test]
    fn test_dead_zone_rounds_to_nearest() {
        // 0.2 * 25 = 5.0, 0.2 * 23 = 4.6 (up), 0.2 * 22 = 4.4 (down)
        assert_eq!(PlayArea::new(80, 25, 3).dead_zone_bottom(), 5);
        assert_eq!(PlayArea::new(80, 23, 3).dead_zone_bottom(), 5);
        assert_eq!(PlayArea::new(80, 22, 3).dead_zone_bottom(), 4);
    }

    #[test]
    fn test_oversized_target_collapses_window() {
        // Bypasses `new` - release builds can reach this geometry
        let area = PlayArea {
            width: 100,
            height: 100,
            target_size: 150,
        };
        let w = area.spawn_window();
        assert_eq!((w.x_min, w.x_max), (0, 1));
        assert_eq!((w.y_min, w.y_max), (20, 21));

        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(w.sample(&mut rng), IVec2::new(0, 20));
    }

    #[test]
    fn test_dead_zone_squeeze_collapses_y() {
        // Target fits both dimensions but the dead zone eats the whole
        // vertical band: y collapses onto dead_zone_bottom()
        let area = PlayArea::new(40, 10, 9);
        let w = area.spawn_window();
        assert_eq!(w.y_min, 2);
        assert_eq!(w.y_max, 3);
    }

    #[test]
    fn test_sample_stays_inside_window() {
        let w = PlayArea::new(120, 40, 6).spawn_window();
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..500 {
            let p = w.sample(&mut rng);
            assert!(w.contains(p), "sampled {p} outside {w:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_sample_within_placement_bounds(
            width in 10..400i32,
            height in 10..400i32,
            size in 1..10i32,
            seed in any::<u64>(),
        ) {
            let area = PlayArea::new(width, height, size);
            // Exclude geometries where the dead zone swallows the whole
            // vertical band; those fall under the collapse rule instead
            prop_assume!(area.dead_zone_bottom() <= height - size);

            let w = area.spawn_window();
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..32 {
                let p = w.sample(&mut rng);
                prop_assert!(0 <= p.x && p.x <= width - size);
                prop_assert!(area.dead_zone_bottom() <= p.y && p.y <= height - size);
            }
        }

        #[test]
        fn prop_collapsed_window_still_samples(
            width in 1..60i32,
            height in 1..60i32,
            size in 1..120i32,
            seed in any::<u64>(),
        ) {
            let area = PlayArea { width, height, target_size: size };
            let w = area.spawn_window();
            let mut rng = Pcg32::seed_from_u64(seed);
            let p = w.sample(&mut rng);
            prop_assert!(w.contains(p));
        }
    }
}
