
use serde::{Deserialize, Serialize};

use crate::Placement;

/// The bonus printed on a board cell. `Start` marks where the first word
/// must pass; it carries no multiplier of its own.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Premium {
    Normal,
    DoubleLetter,
    DoubleWord,
    TripleLetter,
    TripleWord,
    Start,
}

/// One board cell. `cross_check` flags the tiles put down by the most
/// recent insertion, the only ones premiums and bonuses apply to.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    #[serde(rename = "type")]
    pub premium: Premium,
    pub value: Option<char>,
    pub wild: bool,
    pub cross_check: bool,
}

impl Tile {
    pub fn new(premium: Premium) -> Self {
        Self { premium, value: None, wild: false, cross_check: false }
    }
}

// (x, y, premium) triplets of the standard 15x15 layout
const STANDARD_PREMIUMS: [(usize, usize, Premium); 61] = [
    (3, 0, Premium::TripleWord),
    (6, 0, Premium::TripleLetter),
    (8, 0, Premium::TripleLetter),
    (11, 0, Premium::TripleWord),
    (2, 1, Premium::DoubleLetter),
    (5, 1, Premium::DoubleWord),
    (9, 1, Premium::DoubleWord),
    (12, 1, Premium::DoubleLetter),
    (1, 2, Premium::DoubleLetter),
    (4, 2, Premium::DoubleLetter),
    (10, 2, Premium::DoubleLetter),
    (13, 2, Premium::DoubleLetter),
    (0, 3, Premium::TripleWord),
    (3, 3, Premium::TripleLetter),
    (7, 3, Premium::DoubleWord),
    (11, 3, Premium::TripleLetter),
    (14, 3, Premium::TripleWord),
    (2, 4, Premium::DoubleLetter),
    (6, 4, Premium::DoubleLetter),
    (8, 4, Premium::DoubleLetter),
    (12, 4, Premium::DoubleLetter),
    (1, 5, Premium::DoubleWord),
    (5, 5, Premium::TripleLetter),
    (9, 5, Premium::TripleLetter),
    (13, 5, Premium::DoubleWord),
    (0, 6, Premium::TripleLetter),
    (4, 6, Premium::DoubleLetter),
    (10, 6, Premium::DoubleLetter),
    (14, 6, Premium::TripleLetter),
    (3, 7, Premium::DoubleWord),
    (7, 7, Premium::Start),
    (11, 7, Premium::DoubleWord),
    (0, 8, Premium::TripleLetter),
    (4, 8, Premium::DoubleLetter),
    (10, 8, Premium::DoubleLetter),
    (14, 8, Premium::TripleLetter),
    (1, 9, Premium::DoubleWord),
    (5, 9, Premium::TripleLetter),
    (9, 9, Premium::TripleLetter),
    (13, 9, Premium::DoubleWord),
    (2, 10, Premium::DoubleLetter),
    (6, 10, Premium::DoubleLetter),
    (8, 10, Premium::DoubleLetter),
    (12, 10, Premium::DoubleLetter),
    (0, 11, Premium::TripleWord),
    (3, 11, Premium::TripleLetter),
    (7, 11, Premium::DoubleWord),
    (11, 11, Premium::TripleLetter),
    (14, 11, Premium::TripleWord),
    (1, 12, Premium::DoubleLetter),
    (4, 12, Premium::DoubleLetter),
    (10, 12, Premium::DoubleLetter),
    (13, 12, Premium::DoubleLetter),
    (2, 13, Premium::DoubleLetter),
    (5, 13, Premium::DoubleWord),
    (9, 13, Premium::DoubleWord),
    (12, 13, Premium::DoubleLetter),
    (3, 14, Premium::TripleWord),
    (6, 14, Premium::TripleLetter),
    (8, 14, Premium::TripleLetter),
    (11, 14, Premium::TripleWord),
];

/// The playing board, a dense row-major grid of tiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// A board of the given dimensions without any premium cell.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::new(Premium::Normal); width * height],
        }
    }

    /// The standard 15x15 board.
    pub fn standard() -> Self {
        let mut grid = Grid::empty(15, 15);
        for &(x, y, premium) in STANDARD_PREMIUMS.iter() {
            grid.tile_mut(x, y).premium = premium;
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile(&self, x: usize, y: usize) -> &Tile {
        debug_assert!(x < self.width && y < self.height);
        &self.tiles[y * self.width + x]
    }

    pub fn tile_mut(&mut self, x: usize, y: usize) -> &mut Tile {
        debug_assert!(x < self.width && y < self.height);
        &mut self.tiles[y * self.width + x]
    }

    /// The maximal run of letters through `(x, y)`, or an empty string when
    /// that cell holds no letter.
    pub fn get_word(&self, mut x: usize, mut y: usize, horizontal: bool) -> String {
        let mut word = String::new();
        if self.tile(x, y).value.is_none() {
            return word;
        }
        if horizontal {
            while x > 0 && self.tile(x - 1, y).value.is_some() {
                x -= 1;
            }
            while x < self.width {
                match self.tile(x, y).value {
                    Some(value) => word.push(value),
                    None => break,
                }
                x += 1;
            }
        } else {
            while y > 0 && self.tile(x, y - 1).value.is_some() {
                y -= 1;
            }
            while y < self.height {
                match self.tile(x, y).value {
                    Some(value) => word.push(value),
                    None => break,
                }
                y += 1;
            }
        }
        word
    }

    /// Plays a placement: walks from its origin along its direction, skips
    /// the cells already filled and drops the next letter on each empty one.
    /// The newly placed tiles are the only ones left with `cross_check` set.
    pub fn insert(&mut self, placement: &Placement) {
        self.reset_cross_checks();
        let mut index = 0;
        let mut x = placement.x;
        let mut y = placement.y;
        while index < placement.letters.len() && x < self.width && y < self.height {
            let tile = self.tile_mut(x, y);
            if tile.value.is_none() {
                let letter = placement.letters[index];
                index += 1;
                tile.cross_check = true;
                tile.value = Some(letter.value);
                tile.wild = letter.wild;
            }
            if placement.horizontal {
                x += 1;
            } else {
                y += 1;
            }
        }
    }

    pub fn reset_cross_checks(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.cross_check = false;
        }
    }
}

#[test]
fn standard_layout() {
    let grid = Grid::standard();
    assert_eq!(grid.width(), 15);
    assert_eq!(grid.height(), 15);
    assert_eq!(grid.tile(7, 7).premium, Premium::Start);
    assert_eq!(grid.tile(3, 0).premium, Premium::TripleWord);
    assert_eq!(grid.tile(11, 7).premium, Premium::DoubleWord);
    assert_eq!(grid.tile(5, 5).premium, Premium::TripleLetter);
    assert_eq!(grid.tile(6, 4).premium, Premium::DoubleLetter);
    assert_eq!(grid.tile(0, 0).premium, Premium::Normal);

    let triple_words = (0..15)
        .flat_map(|y| (0..15).map(move |x| (x, y)))
        .filter(|&(x, y)| grid.tile(x, y).premium == Premium::TripleWord)
        .count();
    assert_eq!(triple_words, 8);
}

#[test]
fn word_extraction() {
    use crate::{Letter, Placement};

    let mut grid = Grid::standard();
    grid.insert(&Placement::new(7, 7, true, Letter::from_word("MONKEY")));
    grid.insert(&Placement::new(9, 5, false, Letter::from_word("MOKEY")));
    grid.insert(&Placement::new(7, 8, false, Letter::from_word("ONKEY")));

    assert_eq!(grid.get_word(7, 7, true), "MONKEY");
    assert_eq!(grid.get_word(7, 7, false), "MONKEY");
    assert_eq!(grid.get_word(12, 7, true), "MONKEY");
    assert_eq!(grid.get_word(7, 12, false), "MONKEY");
    assert_eq!(grid.get_word(13, 7, true), "");
    assert_eq!(grid.get_word(7, 13, false), "");
}

#[test]
fn insert_skips_filled_cells() {
    use crate::{Letter, Placement};

    let mut grid = Grid::empty(9, 9);
    grid.insert(&Placement::new(2, 4, true, Letter::from_word("ONE")));
    // shares the N already on the board
    grid.insert(&Placement::new(3, 3, false, Letter::from_word("TWO")));

    assert_eq!(grid.get_word(3, 3, false), "TNWO");
    assert_eq!(grid.tile(3, 4).value, Some('N'));
    assert!(!grid.tile(3, 4).cross_check);
    assert_eq!(grid.get_word(2, 4, true), "ONE");
}

#[test]
fn insert_marks_only_new_tiles() {
    use crate::{Letter, Placement};

    let mut grid = Grid::empty(9, 9);
    grid.insert(&Placement::new(1, 1, true, Letter::from_word("AXE")));
    assert!(grid.tile(1, 1).cross_check);
    assert!(grid.tile(3, 1).cross_check);

    grid.insert(&Placement::new(1, 1, false, Letter::from_word("GO")));
    assert!(!grid.tile(1, 1).cross_check);
    assert!(!grid.tile(3, 1).cross_check);
    assert!(grid.tile(1, 2).cross_check);
    assert!(grid.tile(1, 3).cross_check);
    assert_eq!(grid.get_word(1, 1, false), "AGO");
}

#[test]
fn insert_stops_at_the_edge() {
    use crate::{Letter, Placement};

    let mut grid = Grid::empty(5, 5);
    grid.insert(&Placement::new(3, 2, true, Letter::from_word("TOAD")));
    assert_eq!(grid.get_word(3, 2, true), "TO");
    assert_eq!(grid.get_word(0, 2, true), "");
}

#[test]
fn empty_cell_yields_empty_word() {
    let grid = Grid::empty(3, 3);
    assert_eq!(grid.get_word(1, 1, true), "");
    assert_eq!(grid.get_word(1, 1, false), "");
}

#[test]
fn tile_serialization() {
    let grid = Grid::standard();
    let value = serde_json::to_value(grid.tile(5, 1)).unwrap();
    assert_eq!(value["type"], "double_word");
    assert_eq!(value["value"], serde_json::Value::Null);
    assert_eq!(value["wild"], false);

    let data = serde_json::to_string(&grid).unwrap();
    let back: Grid = serde_json::from_str(&data).unwrap();
    assert_eq!(back.width(), 15);
    assert_eq!(back.tile(7, 7).premium, Premium::Start);
}
