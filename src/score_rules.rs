
use crate::WILD_LETTER;

/// Face value of a letter tile. Blank tiles never reach this, they are
/// worth nothing whatever letter they stand for.
pub fn letter_value(letter: char) -> i32 {
    match letter {
        'A' => 1,
        'B' => 4,
        'C' => 4,
        'D' => 2,
        'E' => 1,
        'F' => 4,
        'G' => 3,
        'H' => 3,
        'I' => 1,
        'J' => 10,
        'K' => 5,
        'L' => 2,
        'M' => 4,
        'N' => 2,
        'O' => 1,
        'P' => 4,
        'Q' => 10,
        'R' => 1,
        'S' => 1,
        'T' => 1,
        'U' => 2,
        'V' => 5,
        'W' => 4,
        'X' => 8,
        'Y' => 3,
        'Z' => 10,
        _ => {
            log::warn!("unrecognized letter for score {}", letter);
            0
        }
    }
}

/// How many copies of each tile a fresh bag holds, 101 tiles in total.
pub const TILE_DISTRIBUTION: &[(char, usize)] = &[
    (WILD_LETTER, 2),
    ('E', 12),
    ('A', 9),
    ('I', 9),
    ('O', 9),
    ('N', 6),
    ('R', 6),
    ('T', 6),
    ('L', 4),
    ('S', 4),
    ('U', 4),
    ('D', 4),
    ('G', 3),
    ('B', 2),
    ('C', 2),
    ('M', 2),
    ('P', 2),
    ('F', 2),
    ('H', 2),
    ('V', 2),
    ('W', 2),
    ('Y', 2),
    ('K', 1),
    ('J', 1),
    ('X', 1),
    ('Q', 1),
    ('Z', 1),
];

#[test]
fn letter_values() {
    assert_eq!(letter_value('A'), 1);
    assert_eq!(letter_value('V'), 5);
    assert_eq!(letter_value('Q'), 10);
    assert_eq!(letter_value('Z'), 10);
}

#[test]
fn unknown_letter_is_worthless() {
    assert_eq!(letter_value('?'), 0);
    assert_eq!(letter_value(WILD_LETTER), 0);
}

#[test]
fn distribution_totals() {
    let total: usize = TILE_DISTRIBUTION.iter().map(|&(_, count)| count).sum();
    assert_eq!(total, 101);
    assert_eq!(TILE_DISTRIBUTION.len(), 27);
}
