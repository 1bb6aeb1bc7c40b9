use crate::config::ShellConfig;
use crate::error::{FrameError, InitError};
use crate::events::{self, IoEvent, PumpOptions, WindowMode};
use crate::limiter::{FrameRateLimiter, SdlClock};
use crate::scene;
use sdl2::render::WindowCanvas;

/// The application window: SDL context, one window with its renderer, and
/// the sticky window-mode state.
///
/// Field order is teardown order: renderer and window first, SDL last.
pub struct System {
    pub canvas: WindowCanvas,
    pub event_pump: sdl2::EventPump,
    pub timer: sdl2::TimerSubsystem,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl_context: sdl2::Sdl,
    pub config: ShellConfig,
    mode: WindowMode,
}

fn logged(err: InitError) -> InitError {
    log::error!("{err} ({})", err.reason());
    err
}

impl System {
    pub fn new(config: ShellConfig) -> Result<System, InitError> {
        let sdl_init = |reason: String| logged(InitError::SdlInit { reason });

        let sdl_context = sdl2::init().map_err(sdl_init)?;
        let video_subsystem = sdl_context.video().map_err(sdl_init)?;
        let timer = sdl_context.timer().map_err(sdl_init)?;
        let event_pump = sdl_context.event_pump().map_err(sdl_init)?;

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .position_centered()
            .resizable()
            .maximized()
            .allow_highdpi()
            .build()
            .map_err(|e| {
                logged(InitError::CreateWindow {
                    reason: e.to_string(),
                })
            })?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| {
                logged(InitError::CreateRenderer {
                    reason: e.to_string(),
                })
            })?;

        log::info!("SDL version {}", sdl2::version::version());

        Ok(System {
            canvas,
            event_pump,
            timer,
            video_subsystem,
            sdl_context,
            config,
            mode: WindowMode::default(),
        })
    }

    /// Runs frames until a quit is requested. Frame errors are logged and the
    /// loop carries on.
    pub fn run_frame_loop(&mut self) {
        let mut clock = SdlClock::new(self.timer.clone());
        let mut is_quit = false;

        while !is_quit {
            let mut limiter = FrameRateLimiter::new(&mut clock, self.config.frame_rate);
            if let Err(e) = self.process_io_events(&mut is_quit, limiter.is_gui_idle_mut()) {
                log::warn!("event handling: {e}");
            }
            if let Err(e) = self.render_frame() {
                log::warn!("rendering: {e}");
            }
        }
        log::debug!("frame loop finished");
    }

    pub fn process_io_events(
        &mut self,
        is_quit: &mut bool,
        is_gui_idle: &mut bool,
    ) -> Result<(), FrameError> {
        let opts = PumpOptions {
            default_size: self.config.default_size(),
            idle_when_unchanged: self.config.idle_when_unchanged,
        };
        let events = self
            .event_pump
            .poll_iter()
            .filter_map(|event| IoEvent::from_sdl(&event));

        events::process_io_events(
            events,
            self.canvas.window_mut(),
            &mut self.mode,
            &opts,
            is_quit,
            is_gui_idle,
        )
    }

    pub fn render_frame(&mut self) -> Result<(), FrameError> {
        scene::update_scene(&mut self.canvas)?;
        scene::draw_scene(&mut self.canvas)?;
        scene::present_scene(&mut self.canvas)
    }
}

impl Drop for System {
    fn drop(&mut self) {
        log::debug!("destroying renderer and window, shutting down SDL");
    }
}
