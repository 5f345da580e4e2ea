//! Dot indicator mirroring the scroll position, one dot per page.

use iced::widget::{Space, container, mouse_area, row};
use iced::{Alignment, Element, Length};

use crate::config::GalleryConfig;
use crate::message::GalleryMessage;
use crate::theme;

/// Build the dot row. `total` comes from
/// [`GalleryState::indicator_page_count`](crate::GalleryState::indicator_page_count),
/// which is zero for galleries of 0 or 1 pages; those render nothing, as
/// does a configuration with the indicator switched off.
pub fn page_dots<'a>(
    total: usize,
    current: usize,
    config: &GalleryConfig,
) -> Element<'a, GalleryMessage> {
    if total == 0 || !config.show_indicator {
        return container(Space::with_height(0.0)).into();
    }

    let mut dots = row![]
        .spacing(config.dot_spacing)
        .align_y(Alignment::Center);

    for page in 0..total {
        let active = page == current;
        let dot = container(Space::new(config.dot_size, config.dot_size))
            .style(theme::dot(active, config.dot_size));
        dots = dots.push(
            mouse_area(dot).on_press(GalleryMessage::DotPressed(page)),
        );
    }

    dots.into()
}
