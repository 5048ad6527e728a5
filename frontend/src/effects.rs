//! Scroll progress to visual parameter mappers.
//!
//! Everything here is plain arithmetic over a progress value in `[0, 1]`;
//! components feed in what [`crate::scroll`] measured and turn the result
//! into inline styles.

use crate::scroll::clamp01;

/// Progress through segment `index` of `total` equal slices of `[0, 1]`,
/// in `[0, 1]`. Zero slices means nothing ever starts.
pub fn segment_progress(total: usize, index: usize, progress: f64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let span = 1.0 / total as f64;
    let start = index as f64 * span;
    clamp01((progress - start) / span)
}

/// Percentage of line `index` (of `total`) rendered in the foreground color.
///
/// Lines fill one after another: line `i + 1` stays at 0 until line `i`
/// has reached 100.
pub fn line_fill(total: usize, index: usize, progress: f64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let span = 1.0 / total as f64;
    let start = index as f64 * span;
    let end = (index + 1) as f64 * span;

    if progress < start {
        return 0.0;
    }
    if progress > end {
        return 100.0;
    }
    ((progress - start) / span * 100.0).clamp(0.0, 100.0)
}

/// Clip for the foreground copy of a line: show `[0%, fill%]` from the left.
pub fn fill_clip_path(fill: f64) -> String {
    format!("clip-path: inset(0 {}% 0 0);", 100.0 - fill.clamp(0.0, 100.0))
}

/// Where a card sits in the sticky stack for a given scroll progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    /// Entrance offset in px, `travel` when the card has not started, 0 once seated.
    pub translate_y: f64,
    pub z_index: usize,
    /// Sticky `top` in px at the default root font size.
    pub top: f64,
    /// Part of `top` contributed by the peeking cards above this one.
    pub peek_offset: f64,
}

impl CardPlacement {
    /// The base offset is emitted in rem so it follows the root font size;
    /// only the peek strips stay in px.
    pub fn style(&self) -> String {
        let base_rem = (self.top - self.peek_offset) / ROOT_FONT_PX;
        format!(
            "transform: translate3d(0, {:.2}px, 0); z-index: {}; top: calc({}rem + {}px);",
            self.translate_y, self.z_index, base_rem, self.peek_offset
        )
    }
}

/// Browser default root font size, used to convert between rem and px.
pub const ROOT_FONT_PX: f64 = 16.0;

/// Sticky card stack: later cards rest higher and cover earlier ones, each
/// predecessor leaving `peek` px of its header visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStack {
    pub total: usize,
    pub peek: f64,
    pub base_offset: f64,
    pub travel: f64,
}

impl CardStack {
    pub const PEEK: f64 = 72.0;
    /// 6rem at the default 16px root size.
    pub const BASE_OFFSET: f64 = 6.0 * ROOT_FONT_PX;
    pub const TRAVEL: f64 = 400.0;

    pub fn new(total: usize) -> Self {
        Self {
            total,
            peek: Self::PEEK,
            base_offset: Self::BASE_OFFSET,
            travel: Self::TRAVEL,
        }
    }

    pub fn peek_offset(&self, index: usize) -> f64 {
        let above = self.total.saturating_sub(1).saturating_sub(index);
        above as f64 * self.peek
    }

    pub fn resting_top(&self, index: usize) -> f64 {
        self.base_offset + self.peek_offset(index)
    }

    pub fn placement(&self, index: usize, progress: f64) -> CardPlacement {
        let card_progress = segment_progress(self.total, index, progress);
        CardPlacement {
            translate_y: (1.0 - card_progress) * self.travel,
            z_index: index,
            top: self.resting_top(index),
            peek_offset: self.peek_offset(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn fill_matches_worked_example() {
        assert!(approx(line_fill(4, 1, 0.4), 60.0));
    }

    #[test]
    fn fill_is_zero_before_and_full_after_segment() {
        assert_eq!(line_fill(4, 2, 0.1), 0.0);
        assert_eq!(line_fill(4, 2, 0.49), 0.0);
        assert_eq!(line_fill(4, 0, 0.3), 100.0);
        assert_eq!(line_fill(4, 3, 1.0), 100.0);
        assert_eq!(line_fill(4, 0, 0.0), 0.0);
    }

    #[test]
    fn fill_is_linear_inside_segment() {
        assert!(approx(line_fill(2, 0, 0.25), 50.0));
        assert!(approx(line_fill(2, 1, 0.75), 50.0));
    }

    #[test]
    fn next_line_waits_for_previous() {
        for step in 0..=1000 {
            let p = step as f64 / 1000.0;
            for i in 0..3 {
                if line_fill(4, i + 1, p) > 0.0 {
                    assert_eq!(line_fill(4, i, p), 100.0, "p={p} line={i}");
                }
            }
        }
    }

    #[test]
    fn total_fill_never_regresses_as_scroll_advances() {
        for total in 1..=6 {
            let mut previous = 0.0;
            for step in 0..=500 {
                let p = step as f64 / 500.0;
                let sum: f64 = (0..total).map(|i| line_fill(total, i, p)).sum();
                assert!(sum + 1e-9 >= previous, "total={total} p={p}");
                previous = sum;

                let seated: f64 = (0..total)
                    .map(|i| segment_progress(total, i, p))
                    .sum();
                assert!(seated <= total as f64);
            }
        }
    }

    #[test]
    fn zero_lines_is_well_defined() {
        assert_eq!(line_fill(0, 0, 0.5), 0.0);
        assert_eq!(segment_progress(0, 0, 0.5), 0.0);
    }

    #[test]
    fn clip_path_hides_the_unfilled_rest() {
        assert_eq!(fill_clip_path(60.0), "clip-path: inset(0 40% 0 0);");
        assert_eq!(fill_clip_path(140.0), "clip-path: inset(0 0% 0 0);");
    }

    #[test]
    fn stack_offsets_match_worked_example() {
        let stack = CardStack { total: 3, peek: 72.0, base_offset: 96.0, travel: 400.0 };
        let tops: Vec<f64> = (0..3).map(|i| stack.placement(i, 0.0).top).collect();
        assert_eq!(tops, vec![240.0, 168.0, 96.0]);
    }

    #[test]
    fn stack_offsets_strictly_decrease() {
        let stack = CardStack::new(5);
        for i in 1..5 {
            assert!(stack.resting_top(i - 1) > stack.resting_top(i));
        }
    }

    #[test]
    fn later_cards_stack_above() {
        let stack = CardStack::new(3);
        assert_eq!(stack.placement(0, 0.5).z_index, 0);
        assert_eq!(stack.placement(2, 0.5).z_index, 2);
    }

    #[test]
    fn cards_enter_from_travel_distance() {
        let stack = CardStack::new(3);
        assert!(approx(stack.placement(0, 0.0).translate_y, 400.0));
        assert!(approx(stack.placement(1, 0.5).translate_y, 200.0));
        assert!(approx(stack.placement(2, 1.0).translate_y, 0.0));
        assert!(approx(stack.placement(2, 0.2).translate_y, 400.0));
    }

    #[test]
    fn single_card_has_constant_offset() {
        let stack = CardStack::new(1);
        assert_eq!(stack.placement(0, 0.3).top, CardStack::BASE_OFFSET);
        let empty = CardStack::new(0);
        assert_eq!(empty.resting_top(0), CardStack::BASE_OFFSET);
        assert_eq!(empty.placement(0, 0.7).translate_y, CardStack::TRAVEL);
    }

    #[test]
    fn placement_renders_inline_style() {
        let style = CardPlacement { translate_y: 120.0, z_index: 1, top: 168.0, peek_offset: 72.0 }.style();
        assert_eq!(
            style,
            "transform: translate3d(0, 120.00px, 0); z-index: 1; top: calc(6rem + 72px);"
        );
    }

    #[test]
    fn base_offset_scales_with_root_font_size() {
        let stack = CardStack::new(3);
        assert_eq!(CardStack::BASE_OFFSET, 6.0 * ROOT_FONT_PX);
        assert!(stack.placement(0, 0.0).style().ends_with("top: calc(6rem + 144px);"));
        assert!(stack.placement(2, 1.0).style().ends_with("top: calc(6rem + 0px);"));
    }
}
