//! Galerie: a paged image gallery widget for iced.
//!
//! The gallery shows one image per page in a horizontally scrolled surface
//! with a dot indicator, and obtains its images lazily from an external
//! [`ImageSource`]. Sources may resolve images synchronously or after an
//! asynchronous wait; results re-enter the update loop as messages and are
//! matched against a delivery ticket so that late results for recycled
//! pages are dropped instead of populating the wrong cell.
//!
//! Notes
//! - The gallery does not own its source. It holds a `Weak` reference and
//!   behaves as an empty gallery once the source is dropped.
//! - Hosts embed the widget the usual Elm way: route [`GalleryMessage`]
//!   through [`Gallery::update`], compose [`Gallery::view`], and merge
//!   [`Gallery::subscription`] into their own.

pub mod animator;
pub mod cell;
pub mod config;
pub mod gallery;
pub mod indicator;
pub mod message;
pub mod source;
pub mod spinner;
pub mod state;
pub mod theme;
pub mod view;

pub use config::GalleryConfig;
pub use gallery::Gallery;
pub use message::{DeliveryTicket, GalleryMessage};
pub use source::{ImageSource, SourceError};
pub use state::{CellContent, CellSlot, GalleryState, page_at_offset};
