//! Boing entry point
//!
//! A graphical shell (window, sprites, audio device, keyboard) is expected
//! to drive `App` at a fixed frame rate. Without one, this binary runs the
//! AI-vs-AI exhibition headless for a stretch of frames and logs what
//! happens, which doubles as a smoke test of the whole core.

use boing::services::{LogSoundService, NullRenderer, SoundService};
use boing::{App, FrameInput};

/// Frames to simulate (one minute at 60 fps)
const DEMO_FRAMES: u32 = 3600;

fn main() {
    env_logger::init();
    log::info!("Boing starting (headless exhibition mode)");

    let mut sounds = LogSoundService;
    let mut renderer = NullRenderer;

    // The shell owns music; failures inside the sound service stay there
    sounds.play_music("theme");

    let mut app = App::new(rand::random());
    let input = FrameInput::default();

    for frame in 0..DEMO_FRAMES {
        app.update(&input, &mut sounds);
        app.draw(&mut renderer);

        if frame % 600 == 599 {
            let [left, right] = app.game().scores();
            log::info!(
                "frame {}: exhibition score {left} - {right}, ball speed {}",
                frame + 1,
                app.game().ball.speed
            );
        }
    }

    let [left, right] = app.game().scores();
    log::info!("exhibition finished: {left} - {right}");
}
