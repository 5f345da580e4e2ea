//! Paging and indicator properties: page derivation from the scroll
//! offset, clamping, and programmatic navigation bounds.

use std::thread;
use std::time::{Duration, Instant};

use galerie::{Gallery, GalleryConfig, GalleryMessage, GalleryState, page_at_offset};

const PAGE_WIDTH: f32 = 100.0;
const PAGE_HEIGHT: f32 = 80.0;

fn config() -> GalleryConfig {
    GalleryConfig::new(PAGE_WIDTH, PAGE_HEIGHT)
}

fn state_with_pages(total: usize) -> GalleryState {
    let mut state = GalleryState::new(&config());
    state.reset(total);
    state
}

#[test]
fn page_tracks_the_nearest_boundary() {
    // floor((offset + width / 2) / width) over a grid of offsets.
    for total in [2usize, 4, 9] {
        for step in 0..(total * 10) {
            let offset = step as f32 * (PAGE_WIDTH / 10.0);
            let expected = (((offset + PAGE_WIDTH / 2.0) / PAGE_WIDTH).floor() as usize)
                .min(total - 1);
            assert_eq!(
                page_at_offset(offset, PAGE_WIDTH, total),
                expected,
                "offset {offset} with {total} pages"
            );
        }
    }
}

#[test]
fn page_is_zero_for_zero_width() {
    assert_eq!(page_at_offset(250.0, 0.0, 5), 0);
    assert_eq!(page_at_offset(250.0, -1.0, 5), 0);
}

#[test]
fn page_is_zero_for_empty_gallery() {
    assert_eq!(page_at_offset(250.0, PAGE_WIDTH, 0), 0);
}

#[test]
fn page_clamps_to_the_last_index() {
    assert_eq!(page_at_offset(10_000.0, PAGE_WIDTH, 4), 3);
}

#[test]
fn half_page_threshold_flips_the_page() {
    let mut state = state_with_pages(4);
    state.set_scroll_x(149.0);
    assert_eq!(state.current_page, 1);
    state.set_scroll_x(150.0);
    assert_eq!(state.current_page, 2);
}

#[test]
fn indicator_shows_only_above_one_page() {
    assert_eq!(state_with_pages(0).indicator_page_count(), 0);
    assert_eq!(state_with_pages(1).indicator_page_count(), 0);
    assert_eq!(state_with_pages(2).indicator_page_count(), 2);
    assert_eq!(state_with_pages(7).indicator_page_count(), 7);
}

#[test]
fn dot_target_is_page_times_width() {
    let state = state_with_pages(5);
    for page in 0..5 {
        assert_eq!(state.offset_for_page(page), page as f32 * PAGE_WIDTH);
    }
}

#[test]
fn scroll_beyond_the_last_page_is_a_no_op() {
    let mut gallery = Gallery::new(config());
    let source = galerie_test_support::arc_source(4);
    let _ = gallery.set_source(&source);
    let _ = gallery.scroll_to(2, false);
    assert_eq!(gallery.current_page(), 2);

    let _ = gallery.scroll_to(4, false);
    let _ = gallery.scroll_to(99, true);
    assert_eq!(gallery.current_page(), 2);
    assert_eq!(gallery.state().scroll_x, 200.0);
}

#[test]
fn scroll_on_an_empty_gallery_is_a_no_op() {
    let mut gallery = Gallery::new(config());
    let _ = gallery.scroll_to(0, false);
    assert_eq!(gallery.current_page(), 0);
    assert_eq!(gallery.state().scroll_x, 0.0);
}

#[test]
fn dot_press_lands_exactly_on_the_target_offset() {
    let mut gallery = Gallery::new(config());
    let source = galerie_test_support::arc_source(4);
    let _ = gallery.set_source(&source);

    let _ = gallery.update(GalleryMessage::DotPressed(2));
    assert!(gallery.is_busy());

    // Let the snap tween run out, then deliver one clock tick.
    thread::sleep(Duration::from_millis(300));
    let _ = gallery.update(GalleryMessage::Tick(Instant::now()));

    assert_eq!(gallery.state().scroll_x, 200.0);
    assert_eq!(gallery.current_page(), 2);
}

#[test]
fn page_steps_clamp_at_both_ends() {
    let mut gallery = Gallery::new(config());
    let source = galerie_test_support::arc_source(3);
    let _ = gallery.set_source(&source);

    let _ = gallery.previous_page();
    assert_eq!(gallery.current_page(), 0);

    let _ = gallery.scroll_to(2, false);
    let _ = gallery.next_page();
    thread::sleep(Duration::from_millis(300));
    let _ = gallery.update(GalleryMessage::Tick(Instant::now()));
    assert_eq!(gallery.current_page(), 2);
}

mod galerie_test_support {
    use std::sync::Arc;

    use async_trait::async_trait;
    use galerie::{ImageSource, SourceError};
    use iced::widget::image;

    /// Source with `count` single-pixel images, resolved immediately.
    pub struct SolidSource {
        count: usize,
    }

    #[async_trait]
    impl ImageSource for SolidSource {
        fn count(&self) -> usize {
            self.count
        }

        async fn image(&self, index: usize) -> Result<image::Handle, SourceError> {
            if index >= self.count {
                return Err(SourceError::OutOfRange(index));
            }
            Ok(image::Handle::from_rgba(1, 1, vec![40, 40, 40, 255]))
        }
    }

    pub fn arc_source(count: usize) -> Arc<dyn ImageSource> {
        Arc::new(SolidSource { count })
    }
}
