//! Element-construction tests: each view helper must build a valid element
//! for representative states.

use std::sync::Arc;

use async_trait::async_trait;
use galerie::{
    CellContent, CellSlot, Gallery, GalleryConfig, GalleryMessage, ImageSource, SourceError,
    cell, indicator, spinner,
};
use iced::Element;
use iced::widget::canvas::Canvas;
use iced::widget::image;

fn config() -> GalleryConfig {
    GalleryConfig::new(320.0, 200.0)
}

struct TwoImages;

#[async_trait]
impl ImageSource for TwoImages {
    fn count(&self) -> usize {
        2
    }

    async fn image(&self, index: usize) -> Result<image::Handle, SourceError> {
        if index >= 2 {
            return Err(SourceError::OutOfRange(index));
        }
        Ok(image::Handle::from_rgba(1, 1, vec![0, 128, 255, 255]))
    }
}

#[test]
fn empty_gallery_view_builds() {
    let gallery = Gallery::new(config());
    let element: Element<GalleryMessage> = gallery.view();
    drop(element);
}

#[test]
fn populated_gallery_view_builds() {
    let source: Arc<dyn ImageSource> = Arc::new(TwoImages);
    let mut gallery = Gallery::new(config());
    let _ = gallery.set_source(&source);

    let element: Element<GalleryMessage> = gallery.view();
    drop(element);
}

#[test]
fn page_dots_build_for_each_count() {
    for (total, current) in [(0, 0), (2, 1), (9, 4)] {
        let element: Element<GalleryMessage> = indicator::page_dots(total, current, &config());
        drop(element);
    }
}

#[test]
fn cells_build_in_both_states() {
    let pending = CellSlot {
        generation: 1,
        content: CellContent::Pending,
    };
    let ready = CellSlot {
        generation: 2,
        content: CellContent::Ready(image::Handle::from_rgba(1, 1, vec![9, 9, 9, 255])),
    };

    for slot in [None, Some(&pending), Some(&ready)] {
        let element: Element<GalleryMessage> =
            cell::cell(slot, 0, &config(), 0.25, 320.0, 200.0);
        drop(element);
    }
}

#[test]
fn spinner_canvas_builds() {
    let element: Element<GalleryMessage> =
        Canvas::new(spinner::BusySpinner::new(1.5)).into();
    drop(element);
}
