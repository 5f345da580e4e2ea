//! Declarative demo: the gallery's geometry, content fit, and image list
//! come from a JSON manifest instead of code. Entries may be file paths or
//! http(s) URLs.

use std::sync::Arc;

use async_trait::async_trait;
use galerie::theme::GalleryTheme;
use galerie::{Gallery, GalleryMessage, ImageSource, SourceError};
use galerie_demos::manifest::{self, Manifest};
use galerie_demos::{decode_handle, init_logging};
use iced::widget::image;
use iced::{Element, Size, Subscription, Task};

/// Fallback used when no manifest file is found on disk.
const SAMPLE_MANIFEST: &str = include_str!("../../manifest.json");

fn main() -> iced::Result {
    init_logging();

    let manifest = match Manifest::discover(std::env::args().nth(1)) {
        Some(path) => match Manifest::load(&path) {
            Ok(manifest) => manifest,
            Err(error) => {
                log::error!("failed to load manifest: {error:#}");
                sample_manifest()
            }
        },
        None => {
            log::info!("no manifest found, using the bundled sample");
            sample_manifest()
        }
    };

    let window = Size::new(manifest.page_width + 40.0, manifest.page_height + 40.0);

    iced::application(|app: &App| app.title.clone(), App::update, App::view)
        .subscription(App::subscription)
        .theme(|_| GalleryTheme::theme())
        .window_size(window)
        .run_with(move || App::new(manifest))
}

fn sample_manifest() -> Manifest {
    serde_json::from_str(SAMPLE_MANIFEST).expect("bundled manifest is valid")
}

/// Resolves manifest entries, local or remote.
struct ManifestSource {
    client: reqwest::Client,
    entries: Vec<String>,
}

impl ManifestSource {
    fn new(entries: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            entries,
        }
    }
}

#[async_trait]
impl ImageSource for ManifestSource {
    fn count(&self) -> usize {
        self.entries.len()
    }

    async fn image(&self, index: usize) -> Result<image::Handle, SourceError> {
        let entry = self
            .entries
            .get(index)
            .ok_or(SourceError::OutOfRange(index))?
            .clone();

        let bytes = if manifest::is_remote(&entry) {
            let response = self
                .client
                .get(&entry)
                .send()
                .await
                .map_err(|error| SourceError::Network(error.to_string()))?;
            if !response.status().is_success() {
                return Err(SourceError::Network(format!(
                    "HTTP {} for {entry}",
                    response.status()
                )));
            }
            response
                .bytes()
                .await
                .map_err(|error| SourceError::Network(error.to_string()))?
                .to_vec()
        } else {
            tokio::fs::read(&entry)
                .await
                .map_err(|error| SourceError::Io(error.to_string()))?
        };

        decode_handle(&bytes)
    }

    fn on_tap(&self, index: usize) {
        if let Some(entry) = self.entries.get(index) {
            log::info!("tapped {entry}");
        }
    }
}

struct App {
    title: String,
    gallery: Gallery,
    _source: Arc<dyn ImageSource>,
}

#[derive(Debug, Clone)]
enum Message {
    Gallery(GalleryMessage),
}

impl App {
    fn new(manifest: Manifest) -> (Self, Task<Message>) {
        let config = manifest.gallery_config();
        let source: Arc<dyn ImageSource> = Arc::new(ManifestSource::new(manifest.images.clone()));
        let mut gallery = Gallery::new(config);
        let boot = gallery.set_source(&source);

        (
            Self {
                title: manifest.title,
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
