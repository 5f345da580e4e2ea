//! Messages produced by the gallery's interactions and deliveries.

use std::time::Instant;

use iced::widget::image;
use iced::widget::scrollable;

use crate::source::SourceError;

/// Correlates an image request with the cell slot that issued it.
///
/// The generation is bumped every time a page is (re)materialized, so a
/// delivery for a recycled slot compares unequal and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeliveryTicket {
    /// Page the image was requested for.
    pub index: usize,
    /// Slot generation at request time.
    pub generation: u64,
}

/// Internal gallery messages. Hosts wrap these in their own message type
/// with `Element::map` / `Task::map`.
#[derive(Debug, Clone)]
pub enum GalleryMessage {
    /// The scroll surface reported a new viewport.
    Scrolled(scrollable::Viewport),
    /// An indicator dot was pressed.
    DotPressed(usize),
    /// A page cell was pressed.
    CellPressed(usize),
    /// A source resolved (or failed) an image request.
    Delivered {
        ticket: DeliveryTicket,
        result: Result<image::Handle, SourceError>,
    },
    /// Animation clock, emitted only while snapping, settling, or loading.
    Tick(Instant),
}
