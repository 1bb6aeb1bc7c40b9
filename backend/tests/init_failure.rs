use backend::config::ShellConfig;
use backend::error::InitError;
use backend::system::System;

fn expect_sdl_init_failure() {
    match System::new(ShellConfig::default()) {
        Err(e @ InitError::SdlInit { .. }) => {
            assert_eq!(e.to_string(), "Failure: SDL_Init");
            assert!(!e.reason().is_empty());
        }
        Err(e) => panic!("wrong failure: {e}"),
        Ok(_) => panic!("video init should have failed"),
    }
}

#[test]
fn unknown_video_driver_fails_sdl_init() {
    std::env::set_var("SDL_VIDEODRIVER", "no-such-driver");

    expect_sdl_init_failure();
    // nothing from the first attempt is left holding SDL up
    expect_sdl_init_failure();
}
