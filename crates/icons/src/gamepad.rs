//! Gamepad glyph: shell, two sticks, a D-pad and four face buttons

use painting::{
    BODY_GRAY, BUTTON_BLUE, BUTTON_GREEN, BUTTON_RED, BUTTON_YELLOW, Canvas, Color, DPAD_GRAY,
    PixelFormat, Point, Rect, STICK_GRAY,
};
use tracing::debug;

/// Face buttons as (unit offset from the cluster center, color):
/// top, left, right, bottom
const BUTTONS: [((i32, i32), Color); 4] = [
    ((0, -1), BUTTON_GREEN),
    ((-1, 0), BUTTON_BLUE),
    ((1, 0), BUTTON_RED),
    ((0, 1), BUTTON_YELLOW),
];

/// Extra gap between a stick and the body edge
const STICK_GAP: i32 = 2;

/// Every coordinate of the gamepad glyph, derived from the canvas size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamepadLayout {
    pub size: i32,
    pub padding: i32,
    pub body_width: i32,
    pub body_height: i32,
    pub body_y: i32,
    pub stick_radius: i32,
    pub left_stick: Point,
    pub right_stick: Point,
    pub dpad_center: Point,
    pub dpad_size: i32,
    pub button_radius: i32,
    pub button_center: Point,
}

impl GamepadLayout {
    pub fn new(size: u32) -> Self {
        let size = size as i32;

        let padding = size / 10;
        let body_width = size - 2 * padding;
        // 0.6 of the width, floored
        let body_height = body_width * 3 / 5;
        let body_y = (size - body_height) / 2;

        let stick_radius = (size / 10).max(2);
        let stick_y = body_y + body_height / 2;
        let left_stick = Point::new(padding + body_height / 2 + stick_radius + STICK_GAP, stick_y);
        let right_stick = Point::new(
            size - padding - body_height / 2 - stick_radius - STICK_GAP,
            stick_y,
        );

        let upper_row = body_y + body_height / 3;
        let dpad_center = Point::new(
            padding + body_height / 3 + stick_radius + STICK_GAP,
            upper_row,
        );
        let dpad_size = (size / 12).max(2);

        let button_radius = (size / 16).max(1);
        let button_center = Point::new(
            size - padding - body_height / 3 - stick_radius - STICK_GAP,
            upper_row,
        );

        Self {
            size,
            padding,
            body_width,
            body_height,
            body_y,
            stick_radius,
            left_stick,
            right_stick,
            dpad_center,
            dpad_size,
            button_radius,
            button_center,
        }
    }

    pub fn body(&self) -> Rect {
        let inset = self.body_height / 3;
        Rect::new(
            self.padding + inset,
            self.body_y,
            self.size - self.padding - inset,
            self.body_y + self.body_height,
        )
    }

    pub fn sticks(&self) -> [Rect; 2] {
        [
            Rect::around(self.left_stick, self.stick_radius),
            Rect::around(self.right_stick, self.stick_radius),
        ]
    }

    /// Horizontal then vertical bar of the D-pad cross
    pub fn dpad(&self) -> [Rect; 2] {
        let Point { x, y } = self.dpad_center;
        let long = self.dpad_size;
        let short = self.dpad_size / 2;
        [
            Rect::new(x - long, y - short, x + long, y + short),
            Rect::new(x - short, y - long, x + short, y + long),
        ]
    }

    /// Button boxes and colors in top, left, right, bottom order
    pub fn buttons(&self) -> [(Rect, Color); 4] {
        let spread = self.button_radius * 3;
        BUTTONS.map(|((dx, dy), color)| {
            let center = Point::new(
                self.button_center.x + dx * spread,
                self.button_center.y + dy * spread,
            );
            (Rect::around(center, self.button_radius), color)
        })
    }

    /// Every box handed to a drawing call, in draw order
    pub fn shapes(&self) -> Vec<Rect> {
        let mut shapes = vec![self.body()];
        shapes.extend(self.sticks());
        shapes.extend(self.dpad());
        shapes.extend(self.buttons().map(|(rect, _)| rect));
        shapes
    }
}

/// Render the gamepad glyph on a transparent RGBA canvas
pub fn render_gamepad(size: u32) -> Canvas {
    let layout = GamepadLayout::new(size);
    debug!("render_gamepad: size={} layout={:?}", size, layout);

    let mut canvas = Canvas::new(size, PixelFormat::Rgba);

    if let Some(region) = canvas.fill_ellipse(layout.body(), BODY_GRAY) {
        debug!("  body region {:?}", region);
    }
    for stick in layout.sticks() {
        canvas.fill_ellipse(stick, STICK_GRAY);
    }
    for bar in layout.dpad() {
        canvas.fill_rect(bar, DPAD_GRAY);
    }
    let touched = layout
        .buttons()
        .into_iter()
        .filter_map(|(button, color)| canvas.fill_ellipse(button, color))
        .count();
    debug!("  {} buttons painted", touched);

    canvas
}
