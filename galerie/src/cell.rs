//! One page cell: the image once delivered, a busy spinner until then.

use iced::widget::canvas::Canvas;
use iced::widget::{container, image, mouse_area};
use iced::{Alignment, Element, Length};

use crate::config::GalleryConfig;
use crate::message::GalleryMessage;
use crate::spinner::BusySpinner;
use crate::state::{CellContent, CellSlot};
use crate::theme;

const SPINNER_SIZE: f32 = 36.0;

/// Build the cell for page `index`. A missing slot renders the same as a
/// pending one so spacer-adjacent pages cannot flash empty.
pub fn cell<'a>(
    slot: Option<&'a CellSlot>,
    index: usize,
    config: &GalleryConfig,
    spinner_phase: f32,
    width: f32,
    height: f32,
) -> Element<'a, GalleryMessage> {
    let content: Element<'a, GalleryMessage> = match slot {
        Some(CellSlot {
            content: CellContent::Ready(handle),
            ..
        }) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(config.content_fit)
            .into(),
        _ => busy_placeholder(spinner_phase),
    };

    let frame = container(content)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .clip(true)
        .style(theme::cell_frame);

    mouse_area(frame)
        .on_press(GalleryMessage::CellPressed(index))
        .into()
}

fn busy_placeholder<'a>(spinner_phase: f32) -> Element<'a, GalleryMessage> {
    let spinner = Canvas::new(BusySpinner::new(spinner_phase))
        .width(Length::Fixed(SPINNER_SIZE))
        .height(Length::Fixed(SPINNER_SIZE));

    container(spinner)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(theme::placeholder)
        .into()
}
