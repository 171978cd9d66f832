//! Entities: one rectangle type for everything on the board.
//!
//! Walls, pellets, ghosts and the player are all the same struct; what
//! varies is the `EntityKind` tag (which the renderer keys sprites on) and
//! which methods the world calls. Only ghosts and the player ever move.

use sdl2::rect::Rect;

use crate::collision::{self, Collidable};
use crate::config;

/// The four cardinal facings. An entity's velocity is always derived from
/// its facing, never set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All facings, in the order random picks index into.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Velocity vector for this facing: one step along the facing axis,
    /// zero on the other.
    pub fn velocity(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -config::STEP),
            Direction::Down => (0, config::STEP),
            Direction::Left => (-config::STEP, 0),
            Direction::Right => (config::STEP, 0),
        }
    }
}

/// Ghost sprite variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostColor {
    Blue,
    Orange,
    Pink,
    Red,
}

/// What an entity is, and therefore how it is drawn and which tick rules
/// apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Wall,
    Pellet,
    Ghost(GhostColor),
    Player,
}

/// An axis-aligned rectangle on the board.
///
/// `spawn` is the position the entity was created at; `reset` returns it
/// there without touching facing or velocity, which is why a player who
/// just lost a life keeps gliding in its old direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub kind: EntityKind,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    spawn_x: i32,
    spawn_y: i32,
    velocity_x: i32,
    velocity_y: i32,
    facing: Direction,
}

impl Entity {
    /// Creates an entity at `(x, y)`, which also becomes its spawn point.
    /// Every entity starts facing up with the matching velocity.
    pub fn new(kind: EntityKind, x: i32, y: i32, width: u32, height: u32) -> Entity {
        let facing = Direction::Up;
        let (velocity_x, velocity_y) = facing.velocity();
        Entity {
            kind,
            x,
            y,
            width,
            height,
            spawn_x: x,
            spawn_y: y,
            velocity_x,
            velocity_y,
            facing,
        }
    }

    /// Current facing.
    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Spawn position as `(x, y)`.
    pub fn spawn(&self) -> (i32, i32) {
        (self.spawn_x, self.spawn_y)
    }

    /// Sets the facing and recomputes velocity from it, with no wall check.
    /// This is the unchecked path ghost bounces use.
    pub fn set_facing(&mut self, facing: Direction) {
        self.facing = facing;
        let (vx, vy) = facing.velocity();
        self.velocity_x = vx;
        self.velocity_y = vy;
    }

    /// Moves one step along the current facing.
    pub fn advance(&mut self) {
        self.x += self.velocity_x;
        self.y += self.velocity_y;
    }

    /// Undoes the step `advance` just took. Only valid while the facing
    /// (and therefore velocity) is unchanged since that advance.
    pub fn undo_advance(&mut self) {
        self.x -= self.velocity_x;
        self.y -= self.velocity_y;
    }

    /// Returns the entity to its spawn position. Facing and velocity are
    /// deliberately left as they were.
    pub fn reset(&mut self) {
        self.x = self.spawn_x;
        self.y = self.spawn_y;
    }

    /// Attempts to turn toward `facing`.
    ///
    /// The new facing is applied and the entity tentatively steps once in
    /// that direction. If the step lands in a wall, position, facing and
    /// velocity all revert and this returns false. If the step is clear it
    /// stands: a successful turn moves the entity one step as a side
    /// effect, which is what lets the player cut corners mid-tile.
    pub fn try_set_direction(&mut self, facing: Direction, walls: &[Entity]) -> bool {
        let previous = self.facing;
        self.set_facing(facing);
        self.advance();

        if collision::hits_any(&self.bounds(), walls) {
            self.undo_advance();
            self.set_facing(previous);
            return false;
        }

        true
    }
}

impl Collidable for Entity {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
