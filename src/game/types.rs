//! Core value types for the game: positions, directions, the player, the
//! grid, the aggregate [`World`], and the command/outcome enums that flow
//! between the parser, the step engine, and the session loop.

use crate::game::errors::GameError;

/// A cell coordinate. `x` is the row (grows downward), `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step away along `(dx, dy)`. May be out of bounds;
    /// only [`World::place`] decides whether it is accepted.
    pub fn offset(self, (dx, dy): (i32, i32)) -> Position {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The four grid-aligned movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The `(dx, dy)` unit delta for this direction. `Up` decreases the row
    /// index, `Down` increases it.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// The player: a name fixed at session start and a current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub pos: Position,
}

impl Player {
    pub fn new(name: impl Into<String>, pos: Position) -> Self {
        Self {
            name: name.into(),
            pos,
        }
    }

    /// A copy of this player at a different position.
    pub fn at(&self, pos: Position) -> Player {
        Player {
            name: self.name.clone(),
            pos,
        }
    }
}

/// A square bounded grid. Holds no per-cell state; the only operations that
/// matter are bounds checking and rendering markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    empty_marker: char,
    player_marker: char,
}

impl Grid {
    /// Grid with the default `-`/`x` markers.
    pub fn new(size: i32) -> Self {
        Self::with_markers(size, '-', 'x')
    }

    pub fn with_markers(size: i32, empty_marker: char, player_marker: char) -> Self {
        Self {
            size,
            empty_marker,
            player_marker,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// True iff both coordinates are in `[0, size)`.
    pub fn within_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size && pos.y >= 0 && pos.y < self.size
    }
}

/// The complete game state threaded through the session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    pub player: Player,
    pub grid: Grid,
}

impl World {
    /// A fresh world with the named player at the origin.
    pub fn new(name: impl Into<String>, grid: Grid) -> Self {
        Self {
            player: Player::new(name, Position::new(0, 0)),
            grid,
        }
    }

    /// Replace the player, accepting the change only when the new position
    /// is inside the grid. Every position mutation goes through here; this
    /// is what keeps the in-bounds invariant.
    pub fn place(&self, player: Player) -> Result<World, GameError> {
        if self.grid.within_bounds(player.pos) {
            Ok(World {
                player,
                grid: self.grid.clone(),
            })
        } else {
            Err(GameError::InvalidDirection)
        }
    }

    /// Render the grid with `\n` between rows.
    pub fn render(&self) -> String {
        self.render_with("\n")
    }

    /// Render the grid as rows of space-separated markers, the player's cell
    /// marked, with the separator bracketing the output on both ends.
    pub fn render_with(&self, sep: &str) -> String {
        let rows: Vec<String> = (0..self.grid.size)
            .map(|x| {
                (0..self.grid.size)
                    .map(|y| {
                        if self.player.pos == Position::new(x, y) {
                            self.grid.player_marker.to_string()
                        } else {
                            self.grid.empty_marker.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        format!("{}{}{}", sep, rows.join(sep), sep)
    }
}

/// One classified input line. Parsing is total: malformed input becomes one
/// of the `Missing`/`Unknown` variants rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    Quit,
    Move(Direction),
    MissingDirection,
    UnknownDirection,
    UnknownCommand,
}

/// The result of applying one command to a world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Carry on with a new world and nothing to print.
    Continue(World),
    /// Carry on with the world unchanged, printing a message.
    ContinueWithMessage(String),
    /// Print a farewell and end the session.
    Stop(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_unit_vectors() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }

    #[test]
    fn place_rejects_every_out_of_bounds_position() {
        let world = World::new("tester", Grid::new(20));
        for x in -1..=20 {
            for y in -1..=20 {
                let pos = Position::new(x, y);
                let inside = (0..20).contains(&x) && (0..20).contains(&y);
                let result = world.place(world.player.at(pos));
                assert_eq!(result.is_ok(), inside, "position {:?}", pos);
            }
        }
    }

    #[test]
    fn place_failure_leaves_world_untouched() {
        let world = World::new("tester", Grid::new(20));
        let before = world.clone();
        let result = world.place(world.player.at(Position::new(-1, 0)));
        assert!(matches!(result, Err(GameError::InvalidDirection)));
        assert_eq!(world, before);
    }

    #[test]
    fn render_marks_the_player_cell() {
        let grid = Grid::new(3);
        let world = World::new("tester", grid);
        let world = world
            .place(world.player.at(Position::new(1, 2)))
            .expect("in bounds");
        assert_eq!(world.render(), "\n- - -\n- - x\n- - -\n");
    }

    #[test]
    fn render_uses_the_injected_separator() {
        let world = World::new("tester", Grid::new(2));
        assert_eq!(world.render_with("|"), "|x -|- -|");
    }
}
