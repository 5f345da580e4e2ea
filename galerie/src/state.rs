//! GalleryState: page metrics, scroll tracking, and the materialized
//! cell window.

use std::collections::HashMap;
use std::ops::Range;

use iced::widget::image;
use iced::widget::scrollable::{self, Id as ScrollableId};

use crate::config::GalleryConfig;
use crate::message::DeliveryTicket;

/// Current page for a scroll offset: `floor((offset + width / 2) / width)`,
/// clamped to `[0, total - 1]`. A non-positive width maps to page 0, which
/// also guards the division.
pub fn page_at_offset(offset: f32, width: f32, total: usize) -> usize {
    if total == 0 || width <= 0.0 {
        return 0;
    }
    let raw = ((offset + width / 2.0) / width).floor();
    if raw <= 0.0 {
        return 0;
    }
    (raw as usize).min(total - 1)
}

/// Content of one materialized cell.
#[derive(Debug, Clone)]
pub enum CellContent {
    /// Request issued, busy indicator showing.
    Pending,
    /// Image delivered and displayed.
    Ready(image::Handle),
}

/// One materialized page slot. Slots are evicted when their page leaves the
/// window, so a slot's identity does not follow a page index over time; the
/// generation ties deliveries to the materialization that requested them.
#[derive(Debug, Clone)]
pub struct CellSlot {
    pub generation: u64,
    pub content: CellContent,
}

impl CellSlot {
    pub fn is_pending(&self) -> bool {
        matches!(self.content, CellContent::Pending)
    }
}

/// Scroll and window bookkeeping for a gallery. Pure state: tasks and
/// futures live in [`Gallery`](crate::Gallery).
#[derive(Debug, Clone)]
pub struct GalleryState {
    // Content
    pub total_pages: usize,

    // Layout. Page width doubles as the viewport width and scroll stride.
    pub page_width: f32,
    pub page_height: f32,

    // Scrolling
    pub scroll_x: f32,
    pub current_page: usize,
    pub scrollable_id: ScrollableId,

    // Windowing
    pub overscan: usize,
    pub visible_range: Range<usize>,
    pub slots: HashMap<usize, CellSlot>,

    next_generation: u64,
}

impl GalleryState {
    pub fn new(config: &GalleryConfig) -> Self {
        let mut state = Self {
            total_pages: 0,
            page_width: config.page_width,
            page_height: config.page_height,
            scroll_x: 0.0,
            current_page: 0,
            scrollable_id: ScrollableId::unique(),
            overscan: config.overscan,
            visible_range: 0..0,
            slots: HashMap::new(),
            next_generation: 0,
        };
        state.recompute_visible_range();
        state
    }

    /// Scroll offset where page `page` is left-aligned.
    pub fn offset_for_page(&self, page: usize) -> f32 {
        page as f32 * self.page_width
    }

    /// Right-most reachable offset.
    pub fn max_scroll(&self) -> f32 {
        self.total_pages.saturating_sub(1) as f32 * self.page_width
    }

    /// Dot count for the indicator: zero hides it for 0 or 1 pages.
    pub fn indicator_page_count(&self) -> usize {
        if self.total_pages > 1 {
            self.total_pages
        } else {
            0
        }
    }

    /// Set the absolute scroll offset and re-derive page and window.
    pub fn set_scroll_x(&mut self, x: f32) {
        self.scroll_x = x.clamp(0.0, self.max_scroll());
        self.current_page = page_at_offset(self.scroll_x, self.page_width, self.total_pages);
        self.recompute_visible_range();
    }

    /// Handle a viewport report from the scroll surface. Tracks viewport
    /// width so the page stride follows actual layout.
    pub fn update_scroll(&mut self, viewport: scrollable::Viewport) {
        let width = viewport.bounds().width;
        if width > 0.0 && (width - self.page_width).abs() > 0.5 {
            self.page_width = width;
        }
        self.set_scroll_x(viewport.absolute_offset().x);
    }

    /// Host-driven resize. Keeps the current page in place by re-deriving
    /// the offset from it.
    pub fn update_dimensions(&mut self, page_width: f32, page_height: f32) {
        self.page_width = page_width;
        self.page_height = page_height;
        self.scroll_x = self
            .offset_for_page(self.current_page)
            .clamp(0.0, self.max_scroll());
        self.recompute_visible_range();
    }

    /// Replace the page count, dropping every slot. The current page is
    /// clamped and the offset re-derived from it.
    pub fn reset(&mut self, total: usize) {
        self.total_pages = total;
        self.slots.clear();
        if total == 0 {
            self.current_page = 0;
            self.scroll_x = 0.0;
        } else {
            self.current_page = self.current_page.min(total - 1);
            self.scroll_x = self.offset_for_page(self.current_page);
        }
        self.recompute_visible_range();
    }

    /// Reconcile the slot map with the visible range: evict slots that left
    /// the window and materialize pending slots for pages that entered it.
    /// Returns a ticket for every newly materialized slot; the caller issues
    /// the matching image requests.
    pub fn sync_window(&mut self) -> Vec<DeliveryTicket> {
        let range = self.visible_range.clone();
        self.slots.retain(|index, _| {
            let keep = range.contains(index);
            if !keep {
                log::trace!("recycling page {index}");
            }
            keep
        });

        let mut created = Vec::new();
        for index in range {
            if !self.slots.contains_key(&index) {
                self.next_generation += 1;
                let generation = self.next_generation;
                self.slots.insert(
                    index,
                    CellSlot {
                        generation,
                        content: CellContent::Pending,
                    },
                );
                created.push(DeliveryTicket { index, generation });
            }
        }
        created
    }

    /// Apply a delivery. Returns `false` when the ticket no longer matches
    /// the slot's generation (stale delivery for a recycled page) or the
    /// slot is gone.
    pub fn accept(&mut self, ticket: DeliveryTicket, handle: image::Handle) -> bool {
        match self.slots.get_mut(&ticket.index) {
            Some(slot) if slot.generation == ticket.generation => {
                slot.content = CellContent::Ready(handle);
                true
            }
            _ => false,
        }
    }

    /// Whether any materialized cell is still waiting for its image.
    pub fn has_pending(&self) -> bool {
        self.slots.values().any(CellSlot::is_pending)
    }

    fn recompute_visible_range(&mut self) {
        if self.total_pages == 0 || self.page_width <= 0.0 {
            self.visible_range = 0..0;
            return;
        }
        let first = (self.scroll_x / self.page_width).floor() as usize;
        let last = ((self.scroll_x + self.page_width - 1e-3) / self.page_width).floor() as usize;
        let start = first.saturating_sub(self.overscan).min(self.total_pages);
        let end = (last + 1 + self.overscan).min(self.total_pages);
        self.visible_range = start..end.max(start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(total: usize) -> GalleryState {
        let mut s = GalleryState::new(&GalleryConfig::new(100.0, 80.0));
        s.reset(total);
        s
    }

    #[test]
    fn visible_range_includes_overscan_neighbours() {
        let mut s = state(10);
        s.set_scroll_x(300.0);
        assert_eq!(s.current_page, 3);
        assert_eq!(s.visible_range, 2..5);
    }

    #[test]
    fn visible_range_spans_both_pages_mid_swipe() {
        let mut s = state(10);
        s.set_scroll_x(350.0);
        assert_eq!(s.visible_range, 2..6);
    }

    #[test]
    fn window_clamps_at_both_ends() {
        let mut s = state(3);
        s.set_scroll_x(0.0);
        assert_eq!(s.visible_range, 0..2);
        s.set_scroll_x(s.max_scroll());
        assert_eq!(s.visible_range, 1..3);
    }

    #[test]
    fn sync_window_materializes_each_page_once() {
        let mut s = state(5);
        let first = s.sync_window();
        assert_eq!(first.len(), s.visible_range.len());
        assert!(s.sync_window().is_empty());
    }

    #[test]
    fn eviction_bumps_the_generation() {
        let mut s = state(10);
        let tickets = s.sync_window();
        let old = tickets
            .iter()
            .find(|t| t.index == 0)
            .copied()
            .expect("page 0 starts materialized");

        // Scroll far enough that page 0 is recycled, then come back.
        s.set_scroll_x(500.0);
        s.sync_window();
        s.set_scroll_x(0.0);
        let fresh = s.sync_window();
        let renewed = fresh
            .iter()
            .find(|t| t.index == 0)
            .copied()
            .expect("page 0 rematerialized");

        assert!(renewed.generation > old.generation);
        assert!(!s.accept(old, test_handle()));
        assert!(s.accept(renewed, test_handle()));
    }

    fn test_handle() -> image::Handle {
        image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }
}
