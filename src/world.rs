//! World state and the tick rules.
//!
//! World owns every entity on the board plus score, lives and the
//! game-over flag. One `tick` advances the whole simulation in a fixed
//! order: player move, player-vs-wall, ghosts (catch, move, bounce),
//! pellets, reload-when-cleared. The renderer only ever reads.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info, trace};

use crate::collision::{self, Collidable};
use crate::config;
use crate::entity::{Direction, Entity, EntityKind};
use crate::error::MapError;
use crate::tilemap;

/// Uniform pick from the four facings, matching the bounce rules: the
/// pick is not validated against walls.
fn random_facing(rng: &mut StdRng) -> Direction {
    Direction::ALL[rng.gen_range(0..4)]
}

/// The entire game state.
///
/// Collections hold map-scan order (row-major over the grid), which fixes
/// every order-dependent rule: the first wall hit blocks, the last
/// overlapping pellet is the one removed.
pub struct World {
    walls: Vec<Entity>,
    pellets: Vec<Entity>,
    ghosts: Vec<Entity>,
    player: Entity,
    score: u32,
    lives: u32,
    game_over: bool,
    rng: StdRng,
    rows: Vec<String>,
}

impl World {
    /// Builds a world over the shipped maze.
    pub fn new(seed: u64) -> Result<World, MapError> {
        Self::from_rows(&config::TILE_MAP, seed)
    }

    /// Builds a world over a custom grid. The grid must pass the same
    /// shape validation as the shipped one.
    pub fn from_rows(rows: &[&str], seed: u64) -> Result<World, MapError> {
        let rows: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let (walls, pellets, ghosts, player) = Self::build_entities(&rows, &mut rng)?;

        Ok(World {
            walls,
            pellets,
            ghosts,
            player,
            score: 0,
            lives: config::STARTING_LIVES,
            game_over: false,
            rng,
            rows,
        })
    }

    /// Scans the grid into fresh entity collections.
    ///
    /// Ghosts come back with a random facing so they wander immediately,
    /// on the first load and on every reload alike.
    fn build_entities(
        rows: &[String],
        rng: &mut StdRng,
    ) -> Result<(Vec<Entity>, Vec<Entity>, Vec<Entity>, Entity), MapError> {
        let refs: Vec<&str> = rows.iter().map(|r| r.as_str()).collect();
        let spawns = tilemap::parse(&refs)?;

        let tile = config::TILE_SIZE;
        let walls = spawns
            .walls
            .iter()
            .map(|&(x, y)| Entity::new(EntityKind::Wall, x, y, tile, tile))
            .collect();
        let pellets = spawns
            .pellets
            .iter()
            .map(|&(x, y)| {
                Entity::new(
                    EntityKind::Pellet,
                    x + config::PELLET_OFFSET,
                    y + config::PELLET_OFFSET,
                    config::PELLET_SIZE,
                    config::PELLET_SIZE,
                )
            })
            .collect();
        let ghosts = spawns
            .ghosts
            .iter()
            .map(|&(color, (x, y))| {
                let mut ghost = Entity::new(EntityKind::Ghost(color), x, y, tile, tile);
                ghost.set_facing(random_facing(rng));
                ghost
            })
            .collect();
        let (px, py) = spawns.player;
        let player = Entity::new(EntityKind::Player, px, py, tile, tile);

        Ok((walls, pellets, ghosts, player))
    }

    /// Rebuilds all collections from the grid. Score, lives and game-over
    /// are untouched; entity positions come back at spawn.
    pub fn load_map(&mut self) -> Result<(), MapError> {
        let (walls, pellets, ghosts, player) = Self::build_entities(&self.rows, &mut self.rng)?;
        self.walls = walls;
        self.pellets = pellets;
        self.ghosts = ghosts;
        self.player = player;
        Ok(())
    }

    /// Steers the player toward `facing`, if a wall does not block the
    /// turn. A successful turn also steps the player once (see
    /// [`Entity::try_set_direction`]). Ignored once the game is over.
    pub fn request_direction(&mut self, facing: Direction) {
        if self.game_over {
            return;
        }
        self.player.try_set_direction(facing, &self.walls);
    }

    /// Advances the world by one fixed step. Does nothing once the game
    /// is over.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }

        // Player moves first; any wall hit undoes the whole step.
        self.player.advance();
        if collision::hits_any(&self.player.bounds(), &self.walls) {
            self.player.undo_advance();
        }

        for i in 0..self.ghosts.len() {
            // Catch check happens before this ghost moves.
            if collision::overlaps(&self.ghosts[i].bounds(), &self.player.bounds()) {
                self.lives -= 1;
                if self.lives == 0 {
                    self.game_over = true;
                    info!(score = self.score, "game over");
                    return;
                }
                info!(lives = self.lives, "player caught, back to spawn");
                self.reset_positions();
            }

            let ghost = &mut self.ghosts[i];
            ghost.advance();

            // Board edges clamp each axis on its own; a clamped ghost
            // turns somewhere random. The pick is unchecked, so it may
            // face straight back into the edge and re-roll next tick.
            let max_x = config::BOARD_WIDTH as i32 - ghost.width as i32;
            let max_y = config::BOARD_HEIGHT as i32 - ghost.height as i32;
            if ghost.x < 0 {
                ghost.x = 0;
                ghost.set_facing(random_facing(&mut self.rng));
            } else if ghost.x > max_x {
                ghost.x = max_x;
                ghost.set_facing(random_facing(&mut self.rng));
            }
            if ghost.y < 0 {
                ghost.y = 0;
                ghost.set_facing(random_facing(&mut self.rng));
            } else if ghost.y > max_y {
                ghost.y = max_y;
                ghost.set_facing(random_facing(&mut self.rng));
            }

            // Wall bounce: undo the step, turn somewhere random. Every
            // overlapping wall re-rolls independently, no early break.
            for wall in &self.walls {
                if collision::overlaps(&ghost.bounds(), &wall.bounds()) {
                    ghost.undo_advance();
                    ghost.set_facing(random_facing(&mut self.rng));
                }
            }
        }

        // Every overlapping pellet scores, only the last one in scan
        // order is removed. Two can overlap at once when the player
        // crosses a tile boundary between neighbors; the earlier pellet
        // then survives in place.
        let eaten = collision::overlapping_indices(&self.player.bounds(), &self.pellets);
        if !eaten.is_empty() {
            self.score += config::PELLET_SCORE * eaten.len() as u32;
            if let Some(&last) = eaten.last() {
                self.pellets.remove(last);
            }
            trace!(score = self.score, "pellet eaten");
        }

        if self.pellets.is_empty() {
            info!(score = self.score, "board cleared, reloading maze");
            match self.load_map() {
                Ok(()) => self.reset_positions(),
                Err(err) => {
                    error!(error = %err, "reload failed, ending session");
                    self.game_over = true;
                }
            }
        }
    }

    /// Starts a fresh session after a game over: full reload, counters
    /// back to their starting values. Ignored while a game is running.
    pub fn restart(&mut self) {
        if !self.game_over {
            return;
        }
        match self.load_map() {
            Ok(()) => {
                self.reset_positions();
                self.lives = config::STARTING_LIVES;
                self.score = 0;
                self.game_over = false;
                info!("restarting session");
            }
            Err(err) => {
                error!(error = %err, "restart failed");
            }
        }
    }

    /// Puts the player and every ghost back on their spawn tiles.
    /// Facings and velocities are kept, so everyone resumes moving in
    /// the direction they were already going.
    fn reset_positions(&mut self) {
        self.player.reset();
        for ghost in &mut self.ghosts {
            ghost.reset();
        }
    }

    pub fn walls(&self) -> &[Entity] {
        &self.walls
    }

    pub fn pellets(&self) -> &[Entity] {
        &self.pellets
    }

    pub fn ghosts(&self) -> &[Entity] {
        &self.ghosts
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}
