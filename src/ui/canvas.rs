use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, fill, Fill, Path, Program};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use crate::color::parse_css_color;
use crate::config::{PREVIEW_BLUR_STEPS, PREVIEW_BOX_SIZE, PREVIEW_FALLBACK_COLOR};
use crate::state::{ShadowLayer, ShadowParams};
use crate::Message;

const BACKGROUND: Color = Color::from_rgb(0.91, 0.92, 0.94);
const BOX_COLOR: Color = Color::WHITE;

/// Live preview of the layered shadow on a sample box
///
/// Canvas fills have no real blur, so each layer is approximated by a stack
/// of translucent rectangles that step from the inner to the outer edge of
/// the blur band. Dragging on the preview moves the active layer's offset.
pub struct ShadowPreview<'a> {
    /// Layers in paint order, straight from the store
    pub layers: &'a [ShadowLayer],
    /// Parameters of the active layer, used as the drag origin
    pub active: Option<&'a ShadowParams>,
}

impl<'a> Program<Message> for ShadowPreview<'a> {
    type State = DragState;

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKGROUND);

        let sample = sample_box(bounds.size());

        // The first layer in CSS paints on top, so draw back to front
        for layer in self.layers.iter().rev() {
            if layer.params.inset {
                continue;
            }
            for shape in shadow_shapes(&layer.params, sample, PREVIEW_BLUR_STEPS) {
                if let ShadowShape::Outer { rect, color } = shape {
                    frame.fill_rectangle(rect.position(), rect.size(), color);
                }
            }
        }

        frame.fill_rectangle(sample.position(), sample.size(), BOX_COLOR);

        for layer in self.layers.iter().rev() {
            if !layer.params.inset {
                continue;
            }
            for shape in shadow_shapes(&layer.params, sample, PREVIEW_BLUR_STEPS) {
                if let ShadowShape::Inset { hole, color } = shape {
                    let path = Path::new(|builder| {
                        builder.rectangle(sample.position(), sample.size());
                        if let Some(hole) = hole {
                            builder.rectangle(hole.position(), hole.size());
                        }
                    });
                    frame.fill(
                        &path,
                        Fill {
                            style: canvas::Style::Solid(color),
                            rule: fill::Rule::EvenOdd,
                        },
                    );
                }
            }
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            // Mouse button press - start dragging the active layer
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let (Some(pos), Some(active)) = (cursor.position_over(bounds), self.active) {
                    state.origin = Some(pos);
                    state.start_offset = (active.x, active.y);
                    return (canvas::event::Status::Captured, None);
                }
            }

            // Mouse button release - stop dragging
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.origin.take().is_some() {
                    return (canvas::event::Status::Captured, None);
                }
            }

            // Mouse move - follow the cursor while dragging
            canvas::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if let Some(origin) = state.origin {
                    let (x, y) = state.start_offset;
                    let message = Message::OffsetDragged(
                        (x + position.x - origin.x).round(),
                        (y + position.y - origin.y).round(),
                    );
                    return (canvas::event::Status::Captured, Some(message));
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if state.origin.is_some() {
            mouse::Interaction::Grabbing
        } else if self.active.is_some() && cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// State for drag interactions
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Cursor position where the drag started
    pub origin: Option<Point>,
    /// Active layer offset when the drag started
    pub start_offset: (f32, f32),
}

/// One filled step of a layer's approximation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadowShape {
    /// Rectangle painted behind the box
    Outer { rect: Rectangle, color: Color },
    /// The box minus `hole`; no hole means the whole box is shaded
    Inset { hole: Option<Rectangle>, color: Color },
}

/// The sample box, centered in the canvas
pub fn sample_box(canvas: Size) -> Rectangle {
    let side = PREVIEW_BOX_SIZE.min(canvas.width).min(canvas.height);
    Rectangle {
        x: (canvas.width - side) / 2.0,
        y: (canvas.height - side) / 2.0,
        width: side,
        height: side,
    }
}

/// Break one layer into filled steps
///
/// Hidden layers produce nothing. `steps` rings span the blur band, which is
/// centered on the spread edge like a CSS blur.
pub fn shadow_shapes(params: &ShadowParams, sample: Rectangle, steps: usize) -> Vec<ShadowShape> {
    if !params.visible {
        return Vec::new();
    }

    let base = parse_css_color(&params.color).unwrap_or(PREVIEW_FALLBACK_COLOR);
    let blur = params.blur.max(0.0);
    let steps = if blur > 0.0 { steps.max(1) } else { 1 };

    // Stacking `steps` fills of alpha `a` gives the layer's alpha in the core
    let step_alpha = 1.0 - (1.0 - base.a).powf(1.0 / steps as f32);
    let color = Color { a: step_alpha, ..base };

    let shifted = Rectangle {
        x: sample.x + params.x,
        y: sample.y + params.y,
        ..sample
    };

    (0..steps)
        .filter_map(|step| {
            let t = if steps == 1 { 0.5 } else { step as f32 / (steps - 1) as f32 };
            // From the outer edge of the blur band (t = 0) to the inner edge (t = 1)
            let band = blur / 2.0 - blur * t;

            if params.inset {
                let hole = grow(shifted, -(params.spread + band))
                    .and_then(|hole| hole.intersection(&sample));
                Some(ShadowShape::Inset { hole, color })
            } else {
                grow(shifted, params.spread + band).map(|rect| ShadowShape::Outer { rect, color })
            }
        })
        .collect()
}

/// Grow (or shrink, for negative amounts) a rectangle on every side
fn grow(rect: Rectangle, amount: f32) -> Option<Rectangle> {
    let width = rect.width + amount * 2.0;
    let height = rect.height + amount * 2.0;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Rectangle {
        x: rect.x - amount,
        y: rect.y - amount,
        width,
        height,
    })
}
