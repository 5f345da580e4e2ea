//! The gallery component: owns state, the snap animation, and the weak
//! source reference; turns messages into state changes and tasks.

use std::fmt;
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::{Element, Subscription, Task};

use crate::animator::SnapAnimation;
use crate::config::GalleryConfig;
use crate::message::{DeliveryTicket, GalleryMessage};
use crate::source::ImageSource;
use crate::state::GalleryState;
use crate::view;

/// Offsets closer to a page boundary than this are considered aligned.
const SNAP_EPSILON: f32 = 0.5;

/// Animation clock period while snapping or loading.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// A paged image gallery backed by an external [`ImageSource`].
///
/// The source is held weakly. When it is dropped the gallery keeps its last
/// page count until the next [`reload`](Self::reload), which then observes
/// an absent source and resets to zero pages.
pub struct Gallery {
    config: GalleryConfig,
    state: GalleryState,
    snap: SnapAnimation,
    source: Option<Weak<dyn ImageSource>>,

    /// Set when free scrolling stopped reporting; a snap is committed once
    /// the offset has rested for the configured delay.
    settle_at: Option<Instant>,
    epoch: Instant,
    spinner_phase: f32,
}

impl Gallery {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            state: GalleryState::new(&config),
            config,
            snap: SnapAnimation::new(),
            source: None,
            settle_at: None,
            epoch: Instant::now(),
            spinner_phase: 0.0,
        }
    }

    /// Associate an image source and reload from it.
    pub fn set_source(&mut self, source: &Arc<dyn ImageSource>) -> Task<GalleryMessage> {
        self.source = Some(Arc::downgrade(source));
        self.reload()
    }

    /// Re-query the page count, drop every cell, and request the visible
    /// window again. An absent or dropped source yields zero pages.
    pub fn reload(&mut self) -> Task<GalleryMessage> {
        let count = self.live_source().map(|s| s.count()).unwrap_or(0);
        log::debug!("reloading gallery with {count} pages");
        self.snap.cancel();
        self.settle_at = None;
        self.state.reset(count);

        let restore = scrollable::scroll_to(
            self.state.scrollable_id.clone(),
            AbsoluteOffset {
                x: self.state.scroll_x,
                y: 0.0,
            },
        );
        Task::batch([restore, self.request_window()])
    }

    /// Number of pages obtained from the source at the last reload.
    pub fn page_count(&self) -> usize {
        self.state.total_pages
    }

    /// Page currently closest to the viewport center.
    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    /// Widget state, exposed for inspection and tests.
    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    /// Whether a snap is running or any visible cell is still loading.
    pub fn is_busy(&self) -> bool {
        self.snap.is_active() || self.settle_at.is_some() || self.state.has_pending()
    }

    /// Scroll to `page`. Out-of-range targets are ignored.
    pub fn scroll_to(&mut self, page: usize, animated: bool) -> Task<GalleryMessage> {
        if page >= self.state.total_pages {
            log::debug!(
                "scroll_to({page}) ignored, gallery has {} pages",
                self.state.total_pages
            );
            return Task::none();
        }
        let target = self.state.offset_for_page(page);
        self.settle_at = None;
        if animated {
            self.snap.start(self.state.scroll_x, target, self.config.snap_duration_ms);
            return Task::none();
        }
        self.snap.cancel();
        self.state.set_scroll_x(target);
        Task::batch([self.apply_offset(target), self.request_window()])
    }

    /// Animated step to the next page, clamped at the end.
    pub fn next_page(&mut self) -> Task<GalleryMessage> {
        let next = self.state.current_page + 1;
        if next >= self.state.total_pages {
            return Task::none();
        }
        self.scroll_to(next, true)
    }

    /// Animated step to the previous page, clamped at the start.
    pub fn previous_page(&mut self) -> Task<GalleryMessage> {
        match self.state.current_page.checked_sub(1) {
            Some(previous) => self.scroll_to(previous, true),
            None => Task::none(),
        }
    }

    /// Host-driven resize of the page surface.
    pub fn update_dimensions(&mut self, page_width: f32, page_height: f32) -> Task<GalleryMessage> {
        self.snap.cancel();
        self.settle_at = None;
        self.state.update_dimensions(page_width, page_height);
        Task::batch([
            self.apply_offset(self.state.scroll_x),
            self.request_window(),
        ])
    }

    pub fn update(&mut self, message: GalleryMessage) -> Task<GalleryMessage> {
        match message {
            GalleryMessage::Scrolled(viewport) => {
                self.state.update_scroll(viewport);
                if !self.snap.is_active() {
                    // Restarted on every report; commits once reports stop.
                    self.settle_at = Some(Instant::now());
                }
                self.request_window()
            }
            GalleryMessage::DotPressed(page) => self.scroll_to(page, true),
            GalleryMessage::CellPressed(index) => {
                if let Some(source) = self.live_source() {
                    source.on_tap(index);
                }
                Task::none()
            }
            GalleryMessage::Delivered { ticket, result } => {
                match result {
                    Ok(handle) => {
                        if !self.state.accept(ticket, handle) {
                            log::debug!(
                                "dropped stale delivery for page {} (generation {})",
                                ticket.index,
                                ticket.generation
                            );
                        }
                    }
                    Err(error) => {
                        // The cell keeps its busy indicator; a rebind of the
                        // page issues a fresh request.
                        log::warn!("image for page {} failed to load: {error}", ticket.index);
                    }
                }
                Task::none()
            }
            GalleryMessage::Tick(now) => self.tick(now),
        }
    }

    pub fn view(&self) -> Element<'_, GalleryMessage> {
        view::gallery(&self.state, &self.config, self.spinner_phase)
    }

    /// Animation clock, active only while there is something to animate.
    pub fn subscription(&self) -> Subscription<GalleryMessage> {
        if self.is_busy() {
            iced::time::every(TICK_INTERVAL).map(GalleryMessage::Tick)
        } else {
            Subscription::none()
        }
    }

    fn tick(&mut self, now: Instant) -> Task<GalleryMessage> {
        self.spinner_phase = now.saturating_duration_since(self.epoch).as_secs_f32();

        if let Some(offset) = self.snap.tick() {
            self.state.set_scroll_x(offset);
            return Task::batch([self.apply_offset(offset), self.request_window()]);
        }

        if let Some(since) = self.settle_at {
            let rested = now.saturating_duration_since(since)
                >= Duration::from_millis(self.config.settle_delay_ms);
            if rested {
                self.settle_at = None;
                let target = self.state.offset_for_page(self.state.current_page);
                if self.state.total_pages > 0 && (self.state.scroll_x - target).abs() > SNAP_EPSILON
                {
                    self.snap
                        .start(self.state.scroll_x, target, self.config.snap_duration_ms);
                }
            }
        }

        Task::none()
    }

    /// Move the scroll surface to an absolute offset.
    fn apply_offset(&self, x: f32) -> Task<GalleryMessage> {
        scrollable::scroll_to(self.state.scrollable_id.clone(), AbsoluteOffset { x, y: 0.0 })
    }

    /// Reconcile the cell window and request images for pages that just
    /// entered it. With no live source, nothing is materialized.
    fn request_window(&mut self) -> Task<GalleryMessage> {
        let Some(source) = self.live_source() else {
            return Task::none();
        };
        let requests: Vec<_> = self
            .state
            .sync_window()
            .into_iter()
            .map(|ticket| self.request_image(&source, ticket))
            .collect();
        Task::batch(requests)
    }

    fn request_image(
        &self,
        source: &Arc<dyn ImageSource>,
        ticket: DeliveryTicket,
    ) -> Task<GalleryMessage> {
        let source = Arc::clone(source);
        let DeliveryTicket { index, .. } = ticket;
        Task::perform(
            async move { source.image(index).await },
            move |result| GalleryMessage::Delivered { ticket, result },
        )
    }

    fn live_source(&self) -> Option<Arc<dyn ImageSource>> {
        self.source.as_ref().and_then(Weak::upgrade)
    }
}

impl fmt::Debug for Gallery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gallery")
            .field("state", &self.state)
            .field("snap", &self.snap)
            .field("has_source", &self.source.is_some())
            .finish_non_exhaustive()
    }
}
