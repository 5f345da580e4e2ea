//! View builder for the gallery: a windowed page row inside a horizontal
//! scroll surface, with the dot indicator overlaid bottom center.

use iced::widget::{Space, container, row, scrollable, stack};
use iced::{Alignment, Element, Length, Padding};

use crate::cell;
use crate::config::GalleryConfig;
use crate::indicator;
use crate::message::GalleryMessage;
use crate::state::GalleryState;

/// Distance between the indicator dots and the bottom edge.
const INDICATOR_INSET: f32 = 14.0;

pub fn gallery<'a>(
    state: &'a GalleryState,
    config: &GalleryConfig,
    spinner_phase: f32,
) -> Element<'a, GalleryMessage> {
    let width = state.page_width;
    let height = state.page_height;

    // Only pages inside the window are materialized; spacers stand in for
    // the rest so the content width and scroll offsets stay correct.
    let range = state.visible_range.clone();
    let mut pages = row![].spacing(0.0);

    if range.start > 0 {
        let lead = range.start as f32 * width;
        pages = pages.push(Space::with_width(Length::Fixed(lead)));
    }

    for index in range.clone() {
        pages = pages.push(cell::cell(
            state.slots.get(&index),
            index,
            config,
            spinner_phase,
            width,
            height,
        ));
    }

    if range.end < state.total_pages {
        let trail = (state.total_pages - range.end) as f32 * width;
        pages = pages.push(Space::with_width(Length::Fixed(trail)));
    }

    let surface = scrollable(pages)
        .id(state.scrollable_id.clone())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0.0).scroller_width(0.0),
        ))
        .on_scroll(GalleryMessage::Scrolled)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height));

    let dots = indicator::page_dots(state.indicator_page_count(), state.current_page, config);
    let overlay = container(dots)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::End)
        .padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: INDICATOR_INSET,
            left: 0.0,
        });

    stack![surface, overlay]
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .into()
}
