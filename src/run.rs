use navni::prelude::*;
use ui::Game;

/// Backend update rate, `n` counts frames at this rate.
const FRAMES_PER_SECOND: f32 = 60.0;

/// Largest terminal the game will lay itself out for.
const MAX_SIZE: [u32; 2] = [240, 80];

pub fn run(
    g: &mut Game,
    b: &mut dyn Backend,
    n: u32,
) -> Option<StackOp<Game>> {
    let [w, h] = b.char_resolution(MAX_SIZE[0], MAX_SIZE[1]);
    if w > 0 && h > 0 {
        g.resize(w, h);
    }

    g.handle_key(b.keypress());
    if !g.is_running() {
        log::info!("Main game loop ended");
        return Some(StackOp::Pop);
    }

    g.update(n as f32 / FRAMES_PER_SECOND);
    g.render();
    g.draw(b);

    None
}
