use crate::error::FrameError;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;

pub const BACKGROUND: Color = Color::RGBA(0xFF, 0xFF, 0xFF, 0xFF);
pub const RECT_COLOR: Color = Color::RGBA(0xFF, 0x00, 0xFF, 0xFF);
// x, y, width, height
pub const RECT: (i32, i32, u32, u32) = (0, 0, 100, 100);

/// Draw primitives the scene needs from a rendering surface.
pub trait SceneTarget {
    fn set_draw_color(&mut self, color: Color);
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect) -> Result<(), String>;
    fn present(&mut self);
}

impl SceneTarget for WindowCanvas {
    fn set_draw_color(&mut self, color: Color) {
        WindowCanvas::set_draw_color(self, color);
    }

    fn clear(&mut self) {
        WindowCanvas::clear(self);
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), String> {
        WindowCanvas::fill_rect(self, rect)
    }

    fn present(&mut self) {
        WindowCanvas::present(self);
    }
}

pub fn update_scene<T: SceneTarget>(target: &mut T) -> Result<(), FrameError> {
    target.set_draw_color(BACKGROUND);
    target.clear();
    Ok(())
}

pub fn draw_scene<T: SceneTarget>(target: &mut T) -> Result<(), FrameError> {
    let (x, y, w, h) = RECT;
    target.set_draw_color(RECT_COLOR);
    target
        .fill_rect(Rect::new(x, y, w, h))
        .map_err(FrameError::Draw)
}

pub fn present_scene<T: SceneTarget>(target: &mut T) -> Result<(), FrameError> {
    target.present();
    Ok(())
}
