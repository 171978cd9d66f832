//! Tile grid parsing: ASCII rows in, spawn positions out.
//!
//! The scan is row-major, top-left to bottom-right, and the spawn lists
//! keep that order. Everything downstream that cares about iteration order
//! (first wall hit, last pellet eaten) resolves against this scan order.

use crate::config;
use crate::entity::GhostColor;
use crate::error::MapError;

/// Semantic meaning of one grid character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    /// Floor that spawns a pellet.
    Pellet,
    /// Bare floor, spawns nothing. Unrecognized characters land here too.
    Floor,
    Ghost(GhostColor),
    PlayerStart,
}

impl Tile {
    fn from_char(c: char) -> Tile {
        match c {
            'X' => Tile::Wall,
            ' ' => Tile::Pellet,
            'b' => Tile::Ghost(GhostColor::Blue),
            'o' => Tile::Ghost(GhostColor::Orange),
            'p' => Tile::Ghost(GhostColor::Pink),
            'r' => Tile::Ghost(GhostColor::Red),
            'P' => Tile::PlayerStart,
            _ => Tile::Floor,
        }
    }
}

/// Tile-origin pixel positions for every spawnable thing in a grid, in
/// scan order. Pellet positions are tile origins here; the world applies
/// the centering offset when it builds the entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSpawns {
    pub walls: Vec<(i32, i32)>,
    pub pellets: Vec<(i32, i32)>,
    pub ghosts: Vec<(GhostColor, (i32, i32))>,
    pub player: (i32, i32),
}

/// Scans a grid into spawn positions, validating its shape first.
///
/// The grid must be exactly `ROW_COUNT` rows of `COLUMN_COUNT` characters
/// and contain at least one player start. If it contains more than one,
/// the last in scan order wins silently.
pub fn parse(rows: &[&str]) -> Result<MapSpawns, MapError> {
    if rows.len() != config::ROW_COUNT {
        return Err(MapError::RowCount {
            found: rows.len(),
            expected: config::ROW_COUNT,
        });
    }

    for (row, line) in rows.iter().enumerate() {
        if line.len() != config::COLUMN_COUNT {
            return Err(MapError::RowWidth {
                row,
                found: line.len(),
                expected: config::COLUMN_COUNT,
            });
        }
    }

    let mut walls = Vec::new();
    let mut pellets = Vec::new();
    let mut ghosts = Vec::new();
    let mut player = None;

    for (row, line) in rows.iter().enumerate() {
        for (col, c) in line.chars().enumerate() {
            let x = col as i32 * config::TILE_SIZE as i32;
            let y = row as i32 * config::TILE_SIZE as i32;

            match Tile::from_char(c) {
                Tile::Wall => walls.push((x, y)),
                Tile::Pellet => pellets.push((x, y)),
                Tile::Ghost(color) => ghosts.push((color, (x, y))),
                Tile::PlayerStart => player = Some((x, y)),
                Tile::Floor => {}
            }
        }
    }

    let player = player.ok_or(MapError::MissingPlayerStart)?;

    Ok(MapSpawns {
        walls,
        pellets,
        ghosts,
        player,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped_rows() -> Vec<&'static str> {
        config::TILE_MAP.to_vec()
    }

    fn count_chars(rows: &[&str], target: char) -> usize {
        rows.iter()
            .map(|row| row.chars().filter(|&c| c == target).count())
            .sum()
    }

    #[test]
    fn test_parse_shipped_map() {
        let rows = shipped_rows();
        let spawns = parse(&rows).unwrap();

        assert_eq!(count_chars(&rows, 'P'), 1);
        assert_eq!(spawns.player, (9 * 32, 15 * 32));
        assert_eq!(spawns.walls.len(), count_chars(&rows, 'X'));
        assert_eq!(spawns.pellets.len(), count_chars(&rows, ' '));
        assert_eq!(spawns.ghosts.len(), 4);
    }

    #[test]
    fn test_ghosts_in_scan_order() {
        // Red sits a row above the other three, so it scans first.
        let spawns = parse(&shipped_rows()).unwrap();
        let colors: Vec<GhostColor> = spawns.ghosts.iter().map(|(c, _)| *c).collect();

        assert_eq!(
            colors,
            vec![
                GhostColor::Red,
                GhostColor::Blue,
                GhostColor::Pink,
                GhostColor::Orange,
            ]
        );
        assert_eq!(spawns.ghosts[0].1, (9 * 32, 8 * 32));
    }

    #[test]
    fn test_walls_in_scan_order() {
        let spawns = parse(&shipped_rows()).unwrap();

        assert_eq!(spawns.walls.first(), Some(&(0, 0)));
        assert_eq!(spawns.walls.last(), Some(&(18 * 32, 20 * 32)));
    }

    #[test]
    fn test_wrong_row_count() {
        let mut rows = shipped_rows();
        rows.truncate(20);

        assert_eq!(
            parse(&rows),
            Err(MapError::RowCount {
                found: 20,
                expected: 21,
            })
        );
    }

    #[test]
    fn test_wrong_row_width() {
        let mut rows = shipped_rows();
        rows[3] = "X X";

        assert_eq!(
            parse(&rows),
            Err(MapError::RowWidth {
                row: 3,
                found: 3,
                expected: 19,
            })
        );
    }

    #[test]
    fn test_missing_player_start() {
        let mut rows = shipped_rows();
        rows[15] = "X  X           X  X";

        assert_eq!(parse(&rows), Err(MapError::MissingPlayerStart));
    }

    #[test]
    fn test_last_player_start_wins() {
        let mut rows = shipped_rows();
        rows[19] = "X        P        X";

        let spawns = parse(&rows).unwrap();
        assert_eq!(spawns.player, (9 * 32, 19 * 32));
    }

    #[test]
    fn test_unknown_char_spawns_nothing() {
        let mut rows = shipped_rows();
        let pellets_before = parse(&shipped_rows()).unwrap().pellets.len();

        // Swap one pellet floor for an unknown character.
        rows[19] = "X?                X";

        let spawns = parse(&rows).unwrap();
        assert_eq!(spawns.pellets.len(), pellets_before - 1);
        assert_eq!(spawns.walls.len(), count_chars(&rows, 'X'));
    }
}
