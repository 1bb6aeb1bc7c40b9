use crate::error::FrameError;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::{Keycode, Mod};
use sdl2::video::{FullscreenType, Window, WindowPos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    F1,
    F2,
    Other,
}

/// The subset of platform events the shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoEvent {
    Quit,
    // window id
    WindowClose(u32),
    KeyDown {
        key: Key,
        // modifier state is exactly right shift, nothing else held
        right_shift_only: bool,
    },
}

impl IoEvent {
    pub fn from_sdl(event: &Event) -> Option<IoEvent> {
        match event {
            Event::Quit { .. } => Some(IoEvent::Quit),
            Event::Window {
                window_id,
                win_event: WindowEvent::Close,
                ..
            } => Some(IoEvent::WindowClose(*window_id)),
            Event::KeyDown {
                keycode: Some(keycode),
                keymod,
                ..
            } => {
                let key = match *keycode {
                    Keycode::Escape => Key::Escape,
                    Keycode::F1 => Key::F1,
                    Keycode::F2 => Key::F2,
                    _ => Key::Other,
                };
                Some(IoEvent::KeyDown {
                    key,
                    right_shift_only: *keymod == Mod::RSHIFTMOD,
                })
            }
            _ => None,
        }
    }
}

/// Window-manager commands issued by the event pump.
pub trait WindowControl {
    fn id(&self) -> u32;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), FrameError>;
    fn center(&mut self);
    fn restore(&mut self);
    fn maximize(&mut self);
    fn set_fullscreen(&mut self, mode: FullscreenType) -> Result<(), FrameError>;
}

impl WindowControl for Window {
    fn id(&self) -> u32 {
        Window::id(self)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), FrameError> {
        self.set_size(width, height)
            .map_err(|e| FrameError::Window(format!("set_size: {e}")))
    }

    fn center(&mut self) {
        self.set_position(WindowPos::Centered, WindowPos::Centered);
    }

    fn restore(&mut self) {
        Window::restore(self);
    }

    fn maximize(&mut self) {
        Window::maximize(self);
    }

    fn set_fullscreen(&mut self, mode: FullscreenType) -> Result<(), FrameError> {
        Window::set_fullscreen(self, mode)
            .map_err(|e| FrameError::Window(format!("set_fullscreen: {e}")))
    }
}

/// Sticky window-mode flags. The window is created maximized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMode {
    pub is_maximized: bool,
    pub is_fullscreen: bool,
}

impl Default for WindowMode {
    fn default() -> Self {
        WindowMode {
            is_maximized: true,
            is_fullscreen: false,
        }
    }
}

fn restore_default_geometry<W: WindowControl>(
    window: &mut W,
    (width, height): (u32, u32),
) -> Result<(), FrameError> {
    window.resize(width, height)?;
    window.center();
    window.restore();
    Ok(())
}

impl WindowMode {
    /// F1. Leaves fullscreen first if needed, then flips between maximized and
    /// the default geometry. Both steps can run on the same key press.
    pub fn toggle_maximized<W: WindowControl>(
        &mut self,
        window: &mut W,
        default_size: (u32, u32),
    ) -> Result<(), FrameError> {
        if self.is_fullscreen {
            window.set_fullscreen(FullscreenType::Off)?;
            self.is_fullscreen = false;
        }

        if self.is_maximized {
            restore_default_geometry(window, default_size)?;
            self.is_maximized = false;
        } else {
            window.maximize();
            self.is_maximized = true;
        }
        Ok(())
    }

    /// F2. Flips between fullscreen-desktop and the default geometry.
    pub fn toggle_fullscreen<W: WindowControl>(
        &mut self,
        window: &mut W,
        default_size: (u32, u32),
    ) -> Result<(), FrameError> {
        if self.is_fullscreen {
            window.set_fullscreen(FullscreenType::Off)?;
            self.is_maximized = false;
            self.is_fullscreen = false;
            restore_default_geometry(window, default_size)?;
        } else {
            window.set_fullscreen(FullscreenType::Desktop)?;
            self.is_maximized = false;
            self.is_fullscreen = true;
        }
        Ok(())
    }
}

pub struct PumpOptions {
    pub default_size: (u32, u32),
    pub idle_when_unchanged: bool,
}

/// Drains `events` to the end, updating the quit flag and window mode.
/// Neither a quit request nor a failing window command stops the drain; the
/// first command error is returned once the batch is consumed.
pub fn process_io_events<W, I>(
    events: I,
    window: &mut W,
    mode: &mut WindowMode,
    opts: &PumpOptions,
    is_quit: &mut bool,
    is_gui_idle: &mut bool,
) -> Result<(), FrameError>
where
    W: WindowControl,
    I: IntoIterator<Item = IoEvent>,
{
    let mut changed = false;
    let mut first_err = None;

    for event in events {
        match event {
            IoEvent::Quit => {
                *is_quit = true;
                changed = true;
            }
            IoEvent::WindowClose(id) if id == window.id() => {
                *is_quit = true;
                changed = true;
            }
            IoEvent::KeyDown {
                key: Key::Escape,
                right_shift_only: true,
            } => {
                *is_quit = true;
                changed = true;
            }
            IoEvent::KeyDown { key: Key::F1, .. } => {
                if let Err(e) = mode.toggle_maximized(window, opts.default_size) {
                    first_err.get_or_insert(e);
                }
                changed = true;
            }
            IoEvent::KeyDown { key: Key::F2, .. } => {
                if let Err(e) = mode.toggle_fullscreen(window, opts.default_size) {
                    first_err.get_or_insert(e);
                }
                changed = true;
            }
            _ => {}
        }
    }

    if opts.idle_when_unchanged && !changed {
        *is_gui_idle = true;
    }
    first_err.map_or(Ok(()), Err)
}
