//! Synchronous demo: four generated images, delivered the moment they are
//! requested.

use std::sync::Arc;

use async_trait::async_trait;
use galerie::theme::GalleryTheme;
use galerie::{Gallery, GalleryConfig, GalleryMessage, ImageSource, SourceError};
use galerie_demos::{gradient_handle, init_logging};
use iced::widget::image;
use iced::{ContentFit, Element, Size, Subscription, Task};

fn main() -> iced::Result {
    init_logging();

    iced::application("Galerie: Embedded Images", App::update, App::view)
        .subscription(App::subscription)
        .theme(|_| GalleryTheme::theme())
        .window_size(Size::new(520.0, 380.0))
        .run_with(App::new)
}

/// In-memory source; every image exists before the gallery asks for it.
struct EmbeddedSource {
    handles: Vec<image::Handle>,
}

impl EmbeddedSource {
    fn new() -> Self {
        let ramps: [([u8; 3], [u8; 3]); 4] = [
            ([0x1f, 0x6f, 0xeb], [0x04, 0x0a, 0x1c]),
            ([0xe8, 0x55, 0x3d], [0x27, 0x06, 0x02]),
            ([0x2e, 0xa0, 0x43], [0x02, 0x1c, 0x0a]),
            ([0x8a, 0x3f, 0xc8], [0x14, 0x04, 0x20]),
        ];
        let handles = ramps
            .iter()
            .map(|(top, bottom)| gradient_handle(520, 340, *top, *bottom))
            .collect();
        Self { handles }
    }
}

#[async_trait]
impl ImageSource for EmbeddedSource {
    fn count(&self) -> usize {
        self.handles.len()
    }

    async fn image(&self, index: usize) -> Result<image::Handle, SourceError> {
        self.handles
            .get(index)
            .cloned()
            .ok_or(SourceError::OutOfRange(index))
    }

    fn on_tap(&self, index: usize) {
        log::info!("tapped image at index {index}");
    }
}

struct App {
    gallery: Gallery,
    // The gallery only holds a weak reference; the app owns the source.
    _source: Arc<dyn ImageSource>,
}

#[derive(Debug, Clone)]
enum Message {
    Gallery(GalleryMessage),
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let source: Arc<dyn ImageSource> = Arc::new(EmbeddedSource::new());
        let mut gallery =
            Gallery::new(GalleryConfig::new(480.0, 340.0).content_fit(ContentFit::Cover));
        let boot = gallery.set_source(&source);

        (
            Self {
                gallery,
                _source: source,
            },
            boot.map(Message::Gallery),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => self.gallery.update(message).map(Message::Gallery),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        iced::widget::center(self.gallery.view().map(Message::Gallery)).into()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.gallery.subscription().map(Message::Gallery)
    }
}
