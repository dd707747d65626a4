#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const YELLOW: Color = Color::rgb(255, 255, 102);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const RED: Color = Color::rgb(139, 0, 0);
pub const GRAY: Color = Color::rgb(128, 128, 128);

/// Horizontal placement of a line of text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// Text starts at `(x, y)`
    TopLeft { x: i32, y: i32 },
    /// Text is centred on the playfield's vertical axis at row `y`
    CentredAt { y: i32 },
}

/// Drawing surface for one frame. Coordinates are playfield pixels;
/// nothing is visible until `present`.
pub trait Canvas {
    fn clear(&mut self, color: Color) -> crossterm::Result<()>;
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> crossterm::Result<()>;
    fn draw_text(&mut self, text: &str, color: Color, anchor: Anchor) -> crossterm::Result<()>;
    fn present(&mut self) -> crossterm::Result<()>;
}

#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear(Color),
        Rect { x: i32, y: i32, w: i32, h: i32, color: Color },
        Text { text: String, color: Color, anchor: Anchor },
        Present,
    }

    /// Keeps every call so screen tests can inspect a frame.
    #[derive(Default)]
    pub struct RecordingCanvas {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingCanvas {
        pub fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn rects(&self) -> Vec<(i32, i32, Color)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Rect { x, y, color, .. } => Some((*x, *y, *color)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, color: Color) -> crossterm::Result<()> {
            self.calls.clear();
            self.calls.push(DrawCall::Clear(color));
            Ok(())
        }

        fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> crossterm::Result<()> {
            self.calls.push(DrawCall::Rect { x, y, w, h, color });
            Ok(())
        }

        fn draw_text(&mut self, text: &str, color: Color, anchor: Anchor) -> crossterm::Result<()> {
            self.calls.push(DrawCall::Text { text: text.to_string(), color, anchor });
            Ok(())
        }

        fn present(&mut self) -> crossterm::Result<()> {
            self.calls.push(DrawCall::Present);
            Ok(())
        }
    }
}
