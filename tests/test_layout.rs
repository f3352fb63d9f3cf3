mod common;

use common::{content_height, content_width, label, BlockFont};
use iconlabel::fit::{fit, LineFitter, MAX_FONT_SIZE, MIN_FONT_SIZE};
use iconlabel::prelude::*;

const SAMPLES: &[&[&str]] = &[
    &["HELLO"],
    &["A"],
    &["AB", "CD"],
    &["TEAM", "ALPHA"],
    &["I", "LOVE", "RUST"],
    &["A", "B", "C", "D"],
    &["ABCDEFGH", "IJKLMNOP", "QRSTUVWX", "YZ123456"],
    &["Q&A", "2024", "R+D"],
];

fn engine() -> LayoutEngine<BlockFont> {
    LayoutEngine::new(BlockFont)
}

#[test]
fn test_one_placement_per_line() {
    for &lines in SAMPLES {
        let placements = engine().layout(&label(lines));
        assert_eq!(placements.len(), lines.len());

        // order is preserved: each placement is below the previous one
        for pair in placements.windows(2) {
            assert!(pair[0].center_y < pair[1].center_y, "{lines:?}");
        }
    }
}

#[test]
fn test_lines_do_not_overlap() {
    for &lines in SAMPLES {
        let plan = engine().plan(&label(lines));

        for pair in plan.placements.windows(2) {
            let gap = pair[1].top() - pair[0].bottom();
            assert!(gap >= 0.0, "{lines:?}: overlap of {}", -gap);
            assert!((gap - plan.gap).abs() < 1e-3, "{lines:?}");
        }
    }
}

#[test]
fn test_stack_is_vertically_centered() {
    let center = CanvasSpec::STANDARD.content_area().center_y();

    for &lines in SAMPLES {
        let placements = engine().layout(&label(lines));
        let top = placements.first().unwrap().top();
        let bottom = placements.last().unwrap().bottom();

        assert!(((top + bottom) / 2.0 - center).abs() <= 1.0, "{lines:?}");
    }
}

#[test]
fn test_equal_lines_centroid_is_centered() {
    let center = CanvasSpec::STANDARD.content_area().center_y();
    let placements = engine().layout(&label(&["ABCD", "EFGH", "IJKL"]));

    let weight: f32 = placements.iter().map(LinePlacement::height).sum();
    let centroid = placements
        .iter()
        .map(|p| p.center_y * p.height())
        .sum::<f32>()
        / weight;

    assert!((centroid - center).abs() <= 1.0);
}

#[test]
fn test_lines_are_horizontally_centered() {
    for &lines in SAMPLES {
        for placement in engine().layout(&label(lines)) {
            assert_eq!(placement.center_x, 200.0);
        }
    }
}

#[test]
fn test_lines_fit_width() {
    for &lines in SAMPLES {
        let plan = engine().plan(&label(lines));

        for (line, &size) in lines.iter().zip(&plan.fitted_sizes) {
            let width = BlockFont.measure(line, size as f32).width;
            assert!(width <= content_width(), "{line} @ {size}px before scaling");
        }
        for placement in &plan.placements {
            assert!(placement.width() <= content_width(), "{lines:?} after scaling");
            assert!(placement.left() >= 10.0 && placement.right() <= 390.0);
        }
    }
}

#[test]
fn test_single_line_is_not_downscaled() {
    let plan = engine().plan(&label(&["HELLO"]));
    assert_eq!(plan.scale, 1.0);
    assert_eq!(plan.gap, 0.0);

    let [placement] = plan.placements.as_slice() else {
        panic!("expected exactly one placement");
    };
    assert_eq!((placement.center_x, placement.center_y), (200.0, 200.0));

    // largest size that fits the content width
    assert_eq!(placement.size, plan.fitted_sizes[0]);
    assert!(BlockFont.measure("HELLO", placement.size as f32).width <= content_width());
    assert!(BlockFont.measure("HELLO", (placement.size + 1) as f32).width > content_width());
}

#[test]
fn test_full_label_is_downscaled_uniformly() {
    let lines = ["ABCDEFGH", "IJKLMNOP", "QRSTUVWX", "YZ123456"];
    let plan = engine().plan(&label(&lines));

    assert!(plan.scale < 1.0);
    assert!(plan.total_height <= content_height());

    for (placement, &fitted) in plan.placements.iter().zip(&plan.fitted_sizes) {
        let expected = (fitted as f32 * plan.scale).floor() as u32;
        assert_eq!(placement.size, expected.max(MIN_FONT_SIZE));
    }

    let top = plan.placements[0].top();
    let bottom = plan.placements[3].bottom();
    assert!(top >= 10.0 && bottom <= 390.0);
}

#[test]
fn test_downscale_only_when_needed() {
    for &lines in SAMPLES {
        let plan = engine().plan(&label(lines));
        let sizes = plan.placements.iter().map(|p| p.size).collect::<Vec<_>>();

        if plan.scale == 1.0 {
            assert_eq!(sizes, plan.fitted_sizes, "{lines:?}");
        } else {
            assert!(sizes.iter().zip(&plan.fitted_sizes).all(|(s, f)| s <= f));
            assert!(plan.total_height <= content_height(), "{lines:?}");
        }
    }
}

#[test]
fn test_mixed_lengths_downscale_keeps_ratio() {
    // "I" is fitted at the maximum size, the longer lines smaller; scaling is uniform, so the
    // short line stays the largest
    let plan = engine().plan(&label(&["I", "LOVE", "RUST"]));
    assert!(plan.scale < 1.0);

    let sizes = plan.placements.iter().map(|p| p.size).collect::<Vec<_>>();
    assert!(sizes[0] > sizes[1]);
    assert_eq!(sizes[1], sizes[2]);
}

#[test]
fn test_fit_picks_largest_size() {
    let size = fit(&BlockFont, "ABCDEFGH", 380.0, MAX_FONT_SIZE, MIN_FONT_SIZE);
    assert!(BlockFont.measure("ABCDEFGH", size as f32).width <= 380.0);
    assert!(BlockFont.measure("ABCDEFGH", (size + 1) as f32).width > 380.0);

    // never grows past the start size
    assert_eq!(fit(&BlockFont, "I", 380.0, MAX_FONT_SIZE, MIN_FONT_SIZE), MAX_FONT_SIZE);

    // falls back to the minimum size when nothing fits
    assert_eq!(fit(&BlockFont, "WWWWWWWW", 5.0, MAX_FONT_SIZE, MIN_FONT_SIZE), MIN_FONT_SIZE);
}

#[test]
fn test_inverted_size_range() {
    // a minimum above the start size is lowered to it
    assert_eq!(fit(&BlockFont, "WWWWWWWW", 5.0, 20, 50), 20);
    assert_eq!(fit(&BlockFont, "I", 380.0, 20, 50), 20);

    let fitter = LineFitter::new(&BlockFont, 380.0).with_size_range(50, 20);
    assert_eq!(fitter.fit("I").size, 50);
    let narrow = LineFitter::new(&BlockFont, 5.0).with_size_range(50, 20);
    assert_eq!(narrow.fit("WWWWWWWW").size, 20);
}

#[test]
fn test_line_fitter_measures_at_fitted_size() {
    let fitted = LineFitter::new(&BlockFont, 100.0).fit("ABC");

    assert_eq!(fitted.text, "ABC");
    assert_eq!(fitted.metrics, BlockFont.measure("ABC", fitted.size as f32));
    assert!(fitted.metrics.width <= 100.0);
}

#[test]
fn test_layout_is_deterministic() {
    let label = label(&["TEAM", "ALPHA"]);
    assert_eq!(engine().plan(&label), engine().plan(&label));
}
