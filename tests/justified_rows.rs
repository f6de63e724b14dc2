//! Property sweeps over the justified-row partition.
//!
//! Deterministic strips (LCG-generated dimensions, periodic undecoded
//! images and group breaks) are laid out across a grid of container
//! widths, margins, and height caps, and every layout is checked against
//! the numeric contract:
//!
//! - every unclamped row fills the container width to within flooring
//!   tolerance, and never exceeds it
//! - every row height respects the cap, clamped rows sit exactly on it
//! - every image lands in exactly one row, in strip order
//! - repeated passes over unchanged input are identical

use rowfill::{GalleryImage, Justify, NaturalSize, Placement};

// ---- Deterministic strip generation ----

struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

/// A strip with varied aspect ratios, some undecoded images, and a group
/// break every `group_period` images.
fn strip(seed: u64, len: usize, group_period: usize) -> Vec<GalleryImage> {
    let mut rng = Lcg(seed);
    (0..len)
        .map(|i| {
            let size = if i % 7 == 6 {
                NaturalSize::undecoded()
            } else {
                let w = 50 + (rng.next() % 400) as u32;
                let h = 50 + (rng.next() % 400) as u32;
                NaturalSize::new(w, h)
            };
            if i > 0 && i % group_period == 0 {
                GalleryImage::detached(size)
            } else {
                GalleryImage::new(size)
            }
        })
        .collect()
}

fn aspect_of(img: &GalleryImage) -> f64 {
    img.size.aspect()
}

// ---- Contract checks ----

fn check_layout(justify: &Justify, width: u32, images: &[GalleryImage], placements: &[Placement]) {
    // Coverage: one placement per image, in strip order.
    assert_eq!(placements.len(), images.len());
    for (i, p) in placements.iter().enumerate() {
        assert_eq!(p.index, i, "strip order broken at {i}");
    }

    let cap = justify.max_height as f64;
    let margin = justify.margin as f64;

    // Group rows by row id. Row ids are contiguous and non-decreasing.
    let row_count = placements.last().map_or(0, |p| p.row + 1);
    for row in 0..row_count {
        let members: Vec<&Placement> = placements.iter().filter(|p| p.row == row).collect();
        assert!(!members.is_empty(), "empty row {row}");

        // Uniform height and single group per row.
        let h = members[0].height;
        for p in &members {
            assert_eq!(p.height, h, "row {row} height not uniform");
            assert_eq!(p.group, members[0].group, "row {row} spans groups");
        }

        // Width follows aspect at the row height.
        for p in &members {
            let expected = h * aspect_of(&images[p.index]);
            assert!(
                (p.width - expected).abs() < 1e-9,
                "row {row} image {} width {} != h·aspect {expected}",
                p.index,
                p.width
            );
        }

        // Height bound and fill.
        let fill: f64 =
            members.iter().map(|p| p.width).sum::<f64>() + members.len() as f64 * margin;
        if h == cap {
            // Clamped row: may underfill, or overflow for a lone oversized
            // image.
            continue;
        }
        assert!(h < cap, "row {row} height {h} exceeds cap {cap}");
        assert!(
            fill <= width as f64 + 1e-9,
            "row {row} overflows: {fill} > {width}"
        );
        assert!(
            width as f64 - fill < 0.5,
            "row {row} underfills: {fill} vs {width}"
        );
    }
}

// ---- Sweeps ----

#[test]
fn partition_contract_across_parameter_grid() {
    let widths = [240, 630, 1280];
    let margins = [0, 4, 10];
    let caps = [120, 200, 340];

    for (case, &width) in widths.iter().enumerate() {
        let images = strip(0x5eed + case as u64, 40, 11);
        for &margin in &margins {
            for &cap in &caps {
                let justify = Justify::new(margin, cap);
                let placements = justify.align(Some(width), &images).unwrap();
                check_layout(&justify, width, &images, &placements);
            }
        }
    }
}

#[test]
fn repeated_passes_are_identical() {
    let images = strip(42, 25, 9);
    let justify = Justify::new(10, 200);
    let first = justify.align(Some(630), &images).unwrap();
    let second = justify.align(Some(630), &images).unwrap();
    assert_eq!(first, second);
}

#[test]
fn worked_example_end_to_end() {
    // W=630, margin=10, cap=200, aspects [1.5, 1.0, 1.33, 1.77, 0.75].
    // Smallest fitting prefix is k=3: (630 − 30) / 3.83 ≈ 156.657; the
    // remainder never drops below the cap and clamps to 200.
    let images = [
        GalleryImage::new(NaturalSize::new(300, 200)),
        GalleryImage::new(NaturalSize::new(400, 400)),
        GalleryImage::new(NaturalSize::new(133, 100)),
        GalleryImage::new(NaturalSize::new(177, 100)),
        GalleryImage::new(NaturalSize::new(300, 400)),
    ];
    let justify = Justify::new(10, 200);
    let placements = justify.align(Some(630), &images).unwrap();

    assert_eq!(
        placements.iter().map(|p| p.row).collect::<Vec<_>>(),
        [0, 0, 0, 1, 1]
    );
    assert_eq!(placements[0].height, 156.657);
    assert_eq!(placements[3].height, 200.0);
    assert_eq!(placements[0].width, 156.657 * 1.5);
    assert_eq!(placements[3].width, 200.0 * 1.77);
    check_layout(&justify, 630, &images, &placements);
}

#[test]
fn layout_converges_as_images_decode() {
    // Start fully undecoded, decode one image per pass (as load events
    // would), re-aligning each time. Every intermediate layout satisfies
    // the contract, and the final pass equals a one-shot layout of the
    // decoded strip.
    let decoded = strip(7, 12, 100);
    let justify = Justify::new(10, 170);

    let mut current: Vec<GalleryImage> = decoded
        .iter()
        .map(|img| GalleryImage {
            size: NaturalSize::undecoded(),
            connected: img.connected,
        })
        .collect();

    for i in 0..current.len() {
        current[i].size = decoded[i].size;
        let placements = justify.align(Some(800), &current).unwrap();
        check_layout(&justify, 800, &current, &placements);
    }

    let final_pass = justify.align(Some(800), &current).unwrap();
    let one_shot = justify.align(Some(800), &decoded).unwrap();
    assert_eq!(final_pass, one_shot);
}

#[test]
fn resize_only_changes_width_input() {
    // The constraint carries no container state: the same strip at two
    // widths gives independent, contract-satisfying layouts.
    let images = strip(99, 30, 8);
    let justify = Justify::new(10, 200);
    for width in [320, 630, 1024, 1920] {
        let placements = justify.align(Some(width), &images).unwrap();
        check_layout(&justify, width, &images, &placements);
    }
}

// ---- Debounced recompute driver ----

mod debounced {
    use super::*;
    use rowfill::{Debounce, Trigger};
    use std::time::{Duration, Instant};

    /// Drive a synthetic event timeline against the debounce and count
    /// full layout passes.
    fn run(events: &[(u64, Trigger)], poll_until_ms: u64) -> usize {
        let images = strip(3, 20, 100);
        let justify = Justify::new(10, 200);
        let mut debounce = Debounce::default();
        let start = Instant::now();
        let mut passes = 0;

        let mut events = events.iter().peekable();
        for ms in 0..=poll_until_ms {
            let now = start + Duration::from_millis(ms);
            while let Some(&&(at, trigger)) = events.peek() {
                if at > ms {
                    break;
                }
                debounce.note(trigger, now);
                events.next();
            }
            if debounce.take_due(now) {
                justify.align(Some(630), &images).unwrap();
                passes += 1;
            }
        }
        passes
    }

    #[test]
    fn image_load_burst_collapses_to_one_pass() {
        // 50 load events inside 10ms → exactly one layout pass.
        let events: Vec<(u64, Trigger)> = (0..50)
            .map(|i| (i / 5, Trigger::ImageLoaded))
            .collect();
        assert_eq!(run(&events, 500), 1);
    }

    #[test]
    fn pageshow_runs_without_waiting_for_the_window() {
        assert_eq!(run(&[(0, Trigger::PageShow)], 5), 1);
    }

    #[test]
    fn distinct_bursts_each_get_a_pass() {
        let mut events: Vec<(u64, Trigger)> =
            (0..10).map(|i| (i, Trigger::ImageLoaded)).collect();
        events.push((400, Trigger::Resize));
        assert_eq!(run(&events, 800), 2);
    }
}
