//! Compile-time game configuration.
//!
//! Everything tunable lives here as constants: the board geometry, tick
//! cadence, scoring, and the maze layout itself. There is deliberately no
//! runtime configuration (no files, no flags); the maze is a fixed asset
//! compiled into the binary.

/// Maze width in tiles.
pub const COLUMN_COUNT: usize = 19;
/// Maze height in tiles.
pub const ROW_COUNT: usize = 21;
/// Edge length of one tile in pixels.
pub const TILE_SIZE: u32 = 32;

/// Board width in pixels.
pub const BOARD_WIDTH: u32 = COLUMN_COUNT as u32 * TILE_SIZE;
/// Board height in pixels.
pub const BOARD_HEIGHT: u32 = ROW_COUNT as u32 * TILE_SIZE;

/// Fixed timestep between world ticks, in milliseconds (20 ticks per second).
pub const TICK_INTERVAL_MS: u64 = 50;

/// Distance every moving entity covers per tick, in pixels.
pub const STEP: i32 = TILE_SIZE as i32 / 4;

/// Lives at the start of a session and after a restart.
pub const STARTING_LIVES: u32 = 3;
/// Score awarded per pellet eaten.
pub const PELLET_SCORE: u32 = 10;

/// Pellet edge length in pixels.
pub const PELLET_SIZE: u32 = 4;
/// Pellet offset from its tile origin, both axes (centers the 4x4 pellet).
pub const PELLET_OFFSET: i32 = 14;

/// The maze. One character per tile, row-major:
/// `X` wall, ` ` floor with a pellet, `O` bare floor,
/// `b`/`o`/`p`/`r` ghost starts (blue, orange, pink, red), `P` player start.
///
/// The `O` gaps on rows 7, 9 and 11 are the side tunnels; nothing clamps
/// the player there, so it can briefly leave the board just like ghosts
/// bounce off its edges.
pub const TILE_MAP: [&str; ROW_COUNT] = [
    "XXXXXXXXXXXXXXXXXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X                 X",
    "X XX X XXXXX X XX X",
    "X    X       X    X",
    "XXXX XXXX XXXX XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXrXX X XXXX",
    "O       bpo       O",
    "XXXX X XXXXX X XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXXXX X XXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X  X     P     X  X",
    "XX X X XXXXX X X XX",
    "X    X   X   X    X",
    "X XXXXXX X XXXXXX X",
    "X                 X",
    "XXXXXXXXXXXXXXXXXXX",
];
