use backend::config::ShellConfig;
use backend::system::System;
use env_logger::Env;

// Initialization failures go to stdout; the exit status is 0 either way.
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut system = match System::new(ShellConfig::default()) {
        Ok(s) => s,
        Err(e) => {
            println!("{e}");
            return;
        }
    };
    system.run_frame_loop();
}
