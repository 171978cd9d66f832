//! Frame drawing.
//!
//! One [`draw_world`] call paints everything straight from world state:
//! walls, then pellets, then the chase. Sprites load from `assets/` when
//! the files exist; anything missing falls back to a flat colored
//! rectangle, so the game runs with no assets at all.

use std::path::Path;

use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use tracing::{info, warn};

use crate::collision::Collidable;
use crate::entity::{Direction, Entity, EntityKind, GhostColor};
use crate::text;
use crate::world::World;

/// One optional texture per drawable look. The player has one slot per
/// facing. Pellets are not here; they are always flat white squares.
pub struct SpriteSet<'a> {
    wall: Option<Texture<'a>>,
    player_up: Option<Texture<'a>>,
    player_down: Option<Texture<'a>>,
    player_left: Option<Texture<'a>>,
    player_right: Option<Texture<'a>>,
    blue: Option<Texture<'a>>,
    orange: Option<Texture<'a>>,
    pink: Option<Texture<'a>>,
    red: Option<Texture<'a>>,
}

impl<'a> SpriteSet<'a> {
    /// Loads whichever sprite files exist under `assets/`. Each missing
    /// or undecodable file gets one warning here and its look falls back
    /// to a flat color. With no `assets/` directory at all, skip the
    /// per-file noise and note the fallback once.
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>) -> SpriteSet<'a> {
        if !Path::new("assets").is_dir() {
            info!("no assets directory, drawing flat colors");
            return SpriteSet {
                wall: None,
                player_up: None,
                player_down: None,
                player_left: None,
                player_right: None,
                blue: None,
                orange: None,
                pink: None,
                red: None,
            };
        }
        SpriteSet {
            wall: load_sprite(texture_creator, "assets/wall.png"),
            player_up: load_sprite(texture_creator, "assets/player_up.png"),
            player_down: load_sprite(texture_creator, "assets/player_down.png"),
            player_left: load_sprite(texture_creator, "assets/player_left.png"),
            player_right: load_sprite(texture_creator, "assets/player_right.png"),
            blue: load_sprite(texture_creator, "assets/ghost_blue.png"),
            orange: load_sprite(texture_creator, "assets/ghost_orange.png"),
            pink: load_sprite(texture_creator, "assets/ghost_pink.png"),
            red: load_sprite(texture_creator, "assets/ghost_red.png"),
        }
    }

    /// The texture for this entity's current look, if one loaded. The
    /// player's sprite follows its facing.
    fn sprite_for(&self, entity: &Entity) -> Option<&Texture<'a>> {
        match entity.kind {
            EntityKind::Wall => self.wall.as_ref(),
            EntityKind::Player => match entity.facing() {
                Direction::Up => self.player_up.as_ref(),
                Direction::Down => self.player_down.as_ref(),
                Direction::Left => self.player_left.as_ref(),
                Direction::Right => self.player_right.as_ref(),
            },
            EntityKind::Ghost(GhostColor::Blue) => self.blue.as_ref(),
            EntityKind::Ghost(GhostColor::Orange) => self.orange.as_ref(),
            EntityKind::Ghost(GhostColor::Pink) => self.pink.as_ref(),
            EntityKind::Ghost(GhostColor::Red) => self.red.as_ref(),
            EntityKind::Pellet => None,
        }
    }
}

fn load_sprite<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Option<Texture<'a>> {
    match texture_creator.load_texture(path) {
        Ok(texture) => Some(texture),
        Err(error) => {
            warn!(path, %error, "sprite unavailable, using flat color");
            None
        }
    }
}

fn fallback_color(kind: EntityKind) -> Color {
    match kind {
        EntityKind::Wall => Color::RGB(70, 130, 180),
        EntityKind::Pellet => Color::RGB(255, 255, 255),
        EntityKind::Player => Color::RGB(255, 255, 0),
        EntityKind::Ghost(GhostColor::Blue) => Color::RGB(0, 191, 255),
        EntityKind::Ghost(GhostColor::Orange) => Color::RGB(255, 165, 0),
        EntityKind::Ghost(GhostColor::Pink) => Color::RGB(255, 105, 180),
        EntityKind::Ghost(GhostColor::Red) => Color::RGB(255, 0, 0),
    }
}

fn hud_line(score: u32, lives: u32, game_over: bool) -> String {
    if game_over {
        format!("Game Over: {score}")
    } else {
        format!("x{lives} Score: {score}")
    }
}

fn draw_entity(
    canvas: &mut Canvas<Window>,
    entity: &Entity,
    sprites: &SpriteSet,
) -> Result<(), String> {
    let dest = entity.bounds();
    match sprites.sprite_for(entity) {
        Some(texture) => canvas.copy(texture, None, dest)?,
        None => {
            canvas.set_draw_color(fallback_color(entity.kind));
            canvas.fill_rect(dest)?;
        }
    }
    Ok(())
}

/// Paints one full frame: maze, entities, HUD. The caller clears and
/// presents around this.
pub fn draw_world(
    canvas: &mut Canvas<Window>,
    world: &World,
    sprites: &SpriteSet,
) -> Result<(), String> {
    for wall in world.walls() {
        draw_entity(canvas, wall, sprites)?;
    }
    for pellet in world.pellets() {
        draw_entity(canvas, pellet, sprites)?;
    }
    for ghost in world.ghosts() {
        draw_entity(canvas, ghost, sprites)?;
    }
    draw_entity(canvas, world.player(), sprites)?;

    let line = hud_line(world.score(), world.lives(), world.is_game_over());
    text::draw_text(canvas, &line, 16, 10, Color::RGB(255, 255, 255), 2)
}
