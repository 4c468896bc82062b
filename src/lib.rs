
pub mod bag;
pub mod grid;
pub mod score_rules;
pub mod solver;
pub mod trie;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use bag::Bag;
pub use grid::{Grid, Premium, Tile};
pub use solver::rack::Rack;
pub use solver::SolutionBuilder;
pub use trie::Trie;

/// Number of letters a player holds between moves.
pub const RACK_LENGTH: usize = 7;

/// The rack character standing for a blank tile.
pub const WILD_LETTER: char = ' ';

/// A playable character. `wild` marks a letter played with a blank tile:
/// it spells like the chosen letter but is worth zero points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Letter {
    pub value: char,
    pub wild: bool,
}

impl Letter {
    pub fn from_word(word: &str) -> Vec<Letter> {
        word.chars().map(|value| Letter { value, wild: false }).collect()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A candidate move: the cell where the word starts, its direction and the
/// letters to put down. Letters already on the board are not repeated, the
/// board fills the gaps when the placement is inserted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub horizontal: bool,
    pub letters: Vec<Letter>,
}

impl Placement {
    pub fn new(x: usize, y: usize, horizontal: bool, letters: Vec<Letter>) -> Self {
        Self { x, y, horizontal, letters }
    }

    fn key_cmp(&self, other: &Placement) -> Ordering {
        self.x
            .cmp(&other.x)
            .then_with(|| self.y.cmp(&other.y))
            .then_with(|| self.letters.cmp(&other.letters))
            .then_with(|| {
                // a lone letter belongs to both directions at once
                if self.letters.len() == 1 {
                    Ordering::Equal
                } else {
                    self.horizontal.cmp(&other.horizontal)
                }
            })
    }
}

impl PartialEq for Placement {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl Eq for Placement {}

impl PartialOrd for Placement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Placement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key_cmp(other)
    }
}

/// A placement together with the points it would earn. Orders by score
/// first so a sorted collection keeps the best candidate at the end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPlacement {
    #[serde(flatten)]
    pub placement: Placement,
    pub score: i32,
}

impl PartialEq for ScoredPlacement {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.placement == other.placement
    }
}

impl Eq for ScoredPlacement {}

impl PartialOrd for ScoredPlacement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredPlacement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.placement.key_cmp(&other.placement))
    }
}

// comparing against a bare placement ignores the score
impl PartialEq<Placement> for ScoredPlacement {
    fn eq(&self, other: &Placement) -> bool {
        self.placement == *other
    }
}

impl PartialEq<ScoredPlacement> for Placement {
    fn eq(&self, other: &ScoredPlacement) -> bool {
        *self == other.placement
    }
}

impl PartialOrd<Placement> for ScoredPlacement {
    fn partial_cmp(&self, other: &Placement) -> Option<Ordering> {
        self.placement.partial_cmp(other)
    }
}

impl PartialOrd<ScoredPlacement> for Placement {
    fn partial_cmp(&self, other: &ScoredPlacement) -> Option<Ordering> {
        self.partial_cmp(&other.placement)
    }
}

#[test]
fn placement_ordering() {
    let ab_down = Placement::new(1, 2, false, Letter::from_word("AB"));
    let ab_across = Placement::new(1, 2, true, Letter::from_word("AB"));
    assert!(ab_down != ab_across);
    assert!(ab_down < ab_across);

    let later = Placement::new(2, 0, false, Letter::from_word("AB"));
    assert!(ab_across < later);
    let lower = Placement::new(1, 3, true, Letter::from_word("AB"));
    assert!(ab_across < lower);
}

#[test]
fn single_letter_ignores_direction() {
    let down = Placement::new(4, 4, false, Letter::from_word("Z"));
    let across = Placement::new(4, 4, true, Letter::from_word("Z"));
    assert_eq!(down, across);
    assert_eq!(down.cmp(&across), Ordering::Equal);
}

#[test]
fn wild_letter_orders_after_plain() {
    let plain = Letter { value: 'E', wild: false };
    let wild = Letter { value: 'E', wild: true };
    assert!(plain < wild);
    assert!(Letter { value: 'D', wild: true } < plain);
}

#[test]
fn scored_placement_compares_with_plain() {
    let placement = Placement::new(3, 7, true, Letter::from_word("CAT"));
    let scored = ScoredPlacement { placement: placement.clone(), score: 12 };
    assert!(scored == placement);
    assert!(placement == scored);

    let other = Placement::new(3, 7, true, Letter::from_word("CAR"));
    assert!(scored != other);
}

#[test]
fn scored_placement_orders_by_score_first() {
    let small = ScoredPlacement {
        placement: Placement::new(9, 9, true, Letter::from_word("ZOO")),
        score: 4,
    };
    let big = ScoredPlacement {
        placement: Placement::new(0, 0, true, Letter::from_word("AA")),
        score: 30,
    };
    assert!(small < big);
}

#[test]
fn serialized_placement_shape() {
    let scored = ScoredPlacement {
        placement: Placement::new(7, 7, true, vec![
            Letter { value: 'Q', wild: false },
            Letter { value: 'I', wild: true },
        ]),
        score: 11,
    };
    let value: serde_json::Value = serde_json::to_value(&scored).unwrap();
    assert_eq!(value["x"], 7);
    assert_eq!(value["y"], 7);
    assert_eq!(value["horizontal"], true);
    assert_eq!(value["score"], 11);
    assert_eq!(value["letters"][0]["value"], "Q");
    assert_eq!(value["letters"][1]["wild"], true);

    let back: ScoredPlacement = serde_json::from_value(value).unwrap();
    assert_eq!(back, scored);
}
