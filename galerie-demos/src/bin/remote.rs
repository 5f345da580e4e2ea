//! Asynchronous demo: images fetched over HTTP while the gallery shows its
//! busy indicator. A request that fails is logged and never delivers, so
//! the affected page keeps spinning until it is recycled and retried.

use std::sync::Arc;

use async_trait::async_trait;
use galerie::theme::GalleryTheme;
use galerie::{Gallery, GalleryConfig, GalleryMessage, ImageSource, SourceError};
use galerie_demos::{decode_handle, init_logging};
use iced::widget::image;
use iced::{ContentFit, Element, Size, Subscription, Task};

fn main() -> iced::Result {
    init_logging();

    iced::application("Galerie: Remote Images", App::update, App::view)
        .subscription(App::subscription)
        .theme(|_| GalleryTheme::theme())
        .window_size(Size::new(520.0, 380.0))
        .run_with(App::new)
}

/// Fetches each image with a single GET, no retry.
struct RemoteSource {
    client: reqwest::Client,
    urls: Vec<String>,
}

impl RemoteSource {
    fn new() -> Self {
        let urls = [
            "https://picsum.photos/id/1015/600/400",
            "https://picsum.photos/id/1025/600/400",
            "https://picsum.photos/id/1039/600/400",
            "https://picsum.photos/id/1074/600/400",
            "https://picsum.photos/id/1084/600/400",
        ]
        .map(str::to_string)
        .to_vec();

        Self {
            client: reqwest::Client::new(),
            urls,
        }
    }
}

#[async_trait]
impl ImageSource for RemoteSource {
    fn count(&self) -> usize {
        self.urls.len()
    }

    async fn image(&self, index: usize) -> Result<image::Handle, SourceError> {
        let url = self
            .urls
            .get(index)
            .ok_or(SourceError::OutOfRange(index))?
            .clone();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|error| SourceError::Network(error.to_string()))?;
        if !response.status().is_success() {
            return Err(SourceError::Network(format!(
                "HTTP {} for {url}",
                response.status()
            )));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|error| SourceError::Network(error.to_string()))?;

        decode_handle(&bytes)
    }

    fn on_tap(&self, index: usize) {
        log::info!("tapped image at index {index}");
    }
}

struct App {
    gallery: Gallery,
    _source: Arc<dyn ImageSource>,
}

#[derive(Debug, Clone)]
enum Message {
    Gallery(GalleryMessage),
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let source: Arc<dyn ImageSource> = Arc::new(RemoteSource::new());
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
