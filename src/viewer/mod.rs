mod card;
mod engine;
mod texture_loader;

use anyhow::Result;
use raylib::prelude::*;
use tracing::info;

use cardstack::constants::*;
use cardstack::data::Deck;

use crate::config::ShowArgs;
use engine::{CardStackEngine, Engine};

pub fn run(deck: Deck, args: &ShowArgs) -> Result<()> {
    let title = format!("cardstack - {}", deck.section.name());
    let mut engine = CardStackEngine::new(deck, !args.no_auto)?;

    let (mut rl, thread) = raylib::init()
        .size(args.width.unwrap_or(RENDER_WIDTH / 2), args.height.unwrap_or(RENDER_HEIGHT / 2))
        .title(&title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape closes the lightbox, Q closes the window
    rl.set_exit_key(Some(KeyboardKey::KEY_Q));

    engine.initialize(&mut rl, &thread)?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        engine.update(&rl, dt);

        let mut d = rl.begin_drawing(&thread);
        engine.draw(&mut d);
    }

    info!("viewer closed");
    Ok(())
}
