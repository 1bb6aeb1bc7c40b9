use thiserror::Error;

/// Fatal failures while bringing the window up. The display text is fixed,
/// the SDL reason is kept alongside for logging.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Failure: SDL_Init")]
    SdlInit { reason: String },
    #[error("Failure: SDL_CreateWindow")]
    CreateWindow { reason: String },
    #[error("Failure: SDL_CreateRenderer")]
    CreateRenderer { reason: String },
}

impl InitError {
    pub fn reason(&self) -> &str {
        match self {
            InitError::SdlInit { reason }
            | InitError::CreateWindow { reason }
            | InitError::CreateRenderer { reason } => reason,
        }
    }
}

/// Non-fatal failures raised while running a single frame.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("window command failed: {0}")]
    Window(String),
    #[error("draw call failed: {0}")]
    Draw(String),
}
