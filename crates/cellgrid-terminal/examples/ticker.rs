//! Small demo: scrolls a tick log and recolors a marker cell on each frame.
//!
//! Run with: `RUST_LOG=cellgrid_terminal=debug cargo run --example ticker`
//! (log output goes to stderr, so redirect it to keep the screen clean).

use cellgrid_terminal::{Color, Command, Screen, ScreenConfig, ScreenError};
use std::fmt::Write as _;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ScreenError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = ScreenConfig::new(40, 8)
        .at(2, 1)
        .colors(Color::gray(24), Color::new(220, 220, 200));
    let mut screen = Screen::stdout(config)?;

    for tick in 0..60u32 {
        screen.apply(Command::set_fg(80, 200, 120))?;
        if writeln!(screen, "tick {tick:>3}").is_err() {
            break;
        }

        let hue = (tick * 4 % 256) as u8;
        screen
            .apply(Command::set_color(Color::new(255, hue, 0), Color::gray(24)))?
            .apply(Command::plot(39, 0, '*'))?
            .apply(Command::flush())?;

        thread::sleep(Duration::from_millis(50));
    }

    Ok(())
}
