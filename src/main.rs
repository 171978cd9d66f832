//! Maze Muncher: steer through the maze, eat every pellet, dodge the
//! ghosts. A fixed 50ms step drives the whole simulation; rendering
//! happens once per step from whatever state the world is in.

use std::time::{Duration, Instant};

use sdl2::pixels::Color;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod collision;
mod config;
mod entity;
mod error;
mod input;
mod render;
mod text;
mod tilemap;
mod world;

use crate::error::{GameError, GameResult};
use crate::input::{GameAction, InputSystem};
use crate::render::SpriteSet;
use crate::world::World;

fn main() -> GameResult {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Fresh seed per session, logged so a run can be replayed.
    let seed: u64 = rand::random();
    info!(
        seed,
        board_width = config::BOARD_WIDTH,
        board_height = config::BOARD_HEIGHT,
        "starting maze muncher"
    );

    let mut world = World::new(seed)?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Maze Muncher", config::BOARD_WIDTH, config::BOARD_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;
    let texture_creator = canvas.texture_creator();
    let sprites = SpriteSet::load(&texture_creator);

    let mut event_pump = sdl_context.event_pump()?;
    let input = InputSystem::new();
    let tick_interval = Duration::from_millis(config::TICK_INTERVAL_MS);

    'running: loop {
        let tick_start = Instant::now();

        for action in input.poll_events(&mut event_pump) {
            match action {
                GameAction::Quit => break 'running,
                GameAction::Steer(direction) => world.request_direction(direction),
                GameAction::Restart => world.restart(),
            }
        }

        world.tick();

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        render::draw_world(&mut canvas, &world, &sprites)?;
        canvas.present();

        // Sleep away whatever is left of the 50ms step.
        if let Some(remaining) = tick_interval.checked_sub(tick_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    Ok(())
}
