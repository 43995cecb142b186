//! Responsive carousel controller
//!
//! Tracks a clamped page index over a fixed-length collection. The viewport
//! width is injected by the host, so the controller can be driven from a
//! terminal resize stream, a test, or anything else that knows its width.

use std::ops::Range;

use tracing::debug;

use super::breakpoints::Breakpoints;

/// Paging state for one carousel
///
/// Invariant: `0 <= current_index <= max_index()` after every public call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselController {
    total_items: usize,
    items_per_view: usize,
    current_index: usize,
    viewport_width: u32,
    breakpoints: Breakpoints,
}

impl CarouselController {
    /// Create a controller with the default breakpoint table
    pub fn new(total_items: usize, viewport_width: u32) -> Self {
        Self::with_breakpoints(total_items, viewport_width, Breakpoints::default())
    }

    /// Create a controller with a custom breakpoint table
    pub fn with_breakpoints(total_items: usize, viewport_width: u32, breakpoints: Breakpoints) -> Self {
        Self {
            total_items,
            items_per_view: breakpoints.items_per_view(viewport_width),
            current_index: 0,
            viewport_width,
            breakpoints,
        }
    }

    /// Create a controller sized to a content slice
    pub fn for_items<T>(items: &[T], viewport_width: u32, breakpoints: Breakpoints) -> Self {
        Self::with_breakpoints(items.len(), viewport_width, breakpoints)
    }

    #[inline]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    #[inline]
    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Highest reachable index: `max(0, total_items - items_per_view)`
    #[inline]
    pub fn max_index(&self) -> usize {
        self.total_items.saturating_sub(self.items_per_view)
    }

    /// Recompute items per view for a new viewport width and re-clamp
    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
        let items_per_view = self.breakpoints.items_per_view(width);
        if items_per_view != self.items_per_view {
            debug!(
                width,
                from = self.items_per_view,
                to = items_per_view,
                "carousel items per view changed"
            );
            self.items_per_view = items_per_view;
        }
        self.clamp_index();
    }

    /// Swap the breakpoint table, keeping the current viewport width
    pub fn set_breakpoints(&mut self, breakpoints: Breakpoints) {
        self.breakpoints = breakpoints;
        self.set_viewport_width(self.viewport_width);
    }

    /// Replace the collection length (e.g. after content reload) and re-clamp
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.clamp_index();
    }

    /// Step back one item; no-op at the first position
    pub fn go_previous(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Step forward one item; no-op at the last position
    pub fn go_next(&mut self) {
        self.current_index = (self.current_index + 1).min(self.max_index());
    }

    /// Jump to a position, clamping out-of-range targets
    pub fn go_to(&mut self, index: usize) {
        self.current_index = index.min(self.max_index());
    }

    #[inline]
    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    #[inline]
    pub fn can_go_next(&self) -> bool {
        self.current_index < self.max_index()
    }

    /// Horizontal track translation (percent of the viewport) for the current index
    pub fn visible_offset_percent(&self) -> f64 {
        self.current_index as f64 * (100.0 / self.items_per_view as f64)
    }

    /// Number of dot indicators; always at least one
    #[inline]
    pub fn page_indicator_count(&self) -> usize {
        self.max_index() + 1
    }

    /// Indices of the items currently on screen
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.current_index.min(self.total_items);
        let end = (self.current_index + self.items_per_view).min(self.total_items);
        start..end
    }

    fn clamp_index(&mut self) {
        let max = self.max_index();
        if self.current_index > max {
            debug!(from = self.current_index, to = max, "carousel index clamped");
            self.current_index = max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: u32 = 1280;
    const TABLET: u32 = 900;
    const MOBILE: u32 = 375;

    #[test]
    fn test_starts_at_zero() {
        let carousel = CarouselController::new(5, DESKTOP);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.items_per_view(), 3);
        assert!(!carousel.can_go_previous());
        assert!(carousel.can_go_next());
    }

    #[test]
    fn test_seven_items_three_per_view() {
        let mut carousel = CarouselController::new(7, DESKTOP);
        assert_eq!(carousel.max_index(), 4);
        assert_eq!(carousel.page_indicator_count(), 5);

        for _ in 0..4 {
            carousel.go_next();
        }
        assert_eq!(carousel.current_index(), 4);
        assert!(!carousel.can_go_next());

        carousel.go_next();
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn test_go_previous_at_zero_is_noop() {
        let mut carousel = CarouselController::new(4, MOBILE);
        carousel.go_previous();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_empty_collection() {
        let mut carousel = CarouselController::new(0, DESKTOP);
        assert_eq!(carousel.max_index(), 0);
        assert!(!carousel.can_go_previous());
        assert!(!carousel.can_go_next());
        assert_eq!(carousel.page_indicator_count(), 1);
        assert_eq!(carousel.visible_offset_percent(), 0.0);
        assert_eq!(carousel.visible_range(), 0..0);

        carousel.go_next();
        carousel.go_to(3);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_fewer_items_than_view() {
        let carousel = CarouselController::new(2, DESKTOP);
        assert_eq!(carousel.page_indicator_count(), 1);
        assert!(!carousel.can_go_next());
        assert_eq!(carousel.visible_range(), 0..2);
    }

    #[test]
    fn test_shrinking_viewport_keeps_index() {
        let mut carousel = CarouselController::new(7, DESKTOP);
        carousel.go_to(4);
        carousel.set_viewport_width(MOBILE);
        assert_eq!(carousel.items_per_view(), 1);
        assert_eq!(carousel.current_index(), 4);
        assert_eq!(carousel.max_index(), 6);
    }

    #[test]
    fn test_growing_viewport_clamps_index() {
        let mut carousel = CarouselController::new(7, MOBILE);
        carousel.go_to(6);
        assert_eq!(carousel.current_index(), 6);

        carousel.set_viewport_width(TABLET);
        assert_eq!(carousel.current_index(), 5);

        carousel.set_viewport_width(DESKTOP);
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut carousel = CarouselController::new(10, TABLET);
        carousel.go_to(100);
        assert_eq!(carousel.current_index(), 8);
        carousel.go_to(3);
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn test_offset_percent() {
        let mut carousel = CarouselController::new(9, DESKTOP);
        assert_eq!(carousel.visible_offset_percent(), 0.0);
        carousel.go_next();
        carousel.go_next();
        let step = 100.0 / 3.0;
        assert!((carousel.visible_offset_percent() - 2.0 * step).abs() < 1e-9);

        carousel.set_viewport_width(TABLET);
        assert!((carousel.visible_offset_percent() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_visible_range_follows_index() {
        let mut carousel = CarouselController::new(5, TABLET);
        carousel.go_next();
        assert_eq!(carousel.visible_range(), 1..3);
        carousel.go_to(99);
        assert_eq!(carousel.visible_range(), 3..5);
    }

    #[test]
    fn test_set_total_items_clamps() {
        let mut carousel = CarouselController::new(8, MOBILE);
        carousel.go_to(7);
        carousel.set_total_items(3);
        assert_eq!(carousel.current_index(), 2);
        carousel.set_total_items(0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_for_items_uses_slice_length() {
        let posts = ["a", "b", "c", "d"];
        let carousel = CarouselController::for_items(&posts, MOBILE, Breakpoints::default());
        assert_eq!(carousel.total_items(), 4);
        assert_eq!(carousel.page_indicator_count(), 4);
    }

    #[test]
    fn test_custom_breakpoints_reclamp() {
        let mut carousel = CarouselController::new(6, TABLET);
        carousel.go_to(4);
        carousel.set_breakpoints(Breakpoints {
            tablet_items: 4,
            ..Default::default()
        });
        assert_eq!(carousel.items_per_view(), 4);
        assert_eq!(carousel.current_index(), 2);
    }
}
