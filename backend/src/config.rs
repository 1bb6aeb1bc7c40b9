use std::num::NonZeroU32;

pub const DEFAULT_TITLE: &str = "SDL Window (No OpenGL)";
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

const fn fps(v: u32) -> NonZeroU32 {
    match NonZeroU32::new(v) {
        Some(v) => v,
        None => panic!("frame rate must be non-zero"),
    }
}

/// Target frame rates for frames with and without meaningful input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRate {
    pub busy: NonZeroU32,
    pub idle: NonZeroU32,
}

impl FrameRate {
    pub const DEFAULT: FrameRate = FrameRate {
        busy: fps(60),
        idle: fps(5),
    };

    /// Returns `None` if either rate is zero.
    pub fn new(busy: u32, idle: u32) -> Option<FrameRate> {
        Some(FrameRate {
            busy: NonZeroU32::new(busy)?,
            idle: NonZeroU32::new(idle)?,
        })
    }

    pub fn select(&self, is_gui_idle: bool) -> NonZeroU32 {
        if is_gui_idle {
            self.idle
        } else {
            self.busy
        }
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub title: String,
    /// Restored (non-maximized, windowed) size.
    pub width: u32,
    pub height: u32,
    pub frame_rate: FrameRate,
    /// Treat a frame whose events changed nothing as idle.
    pub idle_when_unchanged: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frame_rate: FrameRate::DEFAULT,
            idle_when_unchanged: false,
        }
    }
}

impl ShellConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: FrameRate) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn with_idle_when_unchanged(mut self, enabled: bool) -> Self {
        self.idle_when_unchanged = enabled;
        self
    }

    pub fn default_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
