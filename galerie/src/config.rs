//! Static configuration for a gallery instance.

use iced::ContentFit;

/// Layout and behavior knobs for a [`Gallery`](crate::Gallery).
///
/// Content fit is part of the configuration and is handed to every cell at
/// view time; there is no process-wide content mode.
#[derive(Debug, Clone, Copy)]
pub struct GalleryConfig {
    /// Width of one page in logical pixels. Also the scroll stride.
    pub page_width: f32,
    /// Height of one page in logical pixels.
    pub page_height: f32,
    /// How a cell scales its image inside the page bounds.
    pub content_fit: ContentFit,
    /// Pages kept materialized on each side of the visible range.
    pub overscan: usize,
    /// Duration of the snap tween, in milliseconds.
    pub snap_duration_ms: u64,
    /// How long the scroll offset must rest before a snap is committed,
    /// in milliseconds.
    pub settle_delay_ms: u64,
    /// Master switch for the dot indicator. Even when enabled the indicator
    /// stays hidden for galleries of zero or one page.
    pub show_indicator: bool,
    /// Diameter of one indicator dot.
    pub dot_size: f32,
    /// Gap between indicator dots.
    pub dot_spacing: f32,
}

impl GalleryConfig {
    /// Defaults for a gallery of the given page size.
    pub const fn new(page_width: f32, page_height: f32) -> Self {
        Self {
            page_width,
            page_height,
            content_fit: ContentFit::Contain,
            overscan: 1,
            snap_duration_ms: 220,
            settle_delay_ms: 120,
            show_indicator: true,
            dot_size: 8.0,
            dot_spacing: 8.0,
        }
    }

    /// Replace the content fit applied to every cell.
    pub fn content_fit(mut self, fit: ContentFit) -> Self {
        self.content_fit = fit;
        self
    }

    /// Replace the overscan window.
    pub fn overscan(mut self, pages: usize) -> Self {
        self.overscan = pages;
        self
    }

    /// Disable the dot indicator entirely.
    pub fn without_indicator(mut self) -> Self {
        self.show_indicator = false;
        self
    }
}
