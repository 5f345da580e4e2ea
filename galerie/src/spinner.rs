//! Canvas-drawn busy indicator: a rotating open arc.

use std::f32::consts::TAU;

use iced::widget::canvas::{self, Geometry, LineCap, Path, Program, Stroke};
use iced::{Radians, Rectangle, Renderer, Theme, mouse};

use crate::theme::GalleryTheme;

/// Rotations per second.
const SPEED: f32 = 0.9;
/// Fraction of the circle covered by the arc.
const SWEEP: f32 = 0.75;
const STROKE_WIDTH: f32 = 3.0;

/// Spinner program. The phase is the gallery's animation clock in seconds;
/// the arc angle is derived from it, so the spinner only moves while the
/// gallery is ticking.
#[derive(Debug, Clone, Copy)]
pub struct BusySpinner {
    phase: f32,
}

impl BusySpinner {
    pub fn new(phase: f32) -> Self {
        Self { phase }
    }
}

impl<Message> Program<Message> for BusySpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = (bounds.width.min(bounds.height) / 2.0) - STROKE_WIDTH;

        let start = Radians(self.phase * SPEED * TAU);
        let end = start + Radians(SWEEP * TAU);
        let arc = Path::new(|builder| {
            builder.arc(canvas::path::Arc {
                center,
                radius,
                start_angle: start,
                end_angle: end,
            });
        });

        frame.stroke(
            &arc,
            Stroke {
                line_cap: LineCap::Round,
                ..Stroke::default()
                    .with_color(GalleryTheme::SPINNER)
                    .with_width(STROKE_WIDTH)
            },
        );

        vec![frame.into_geometry()]
    }
}
