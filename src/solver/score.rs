
use crate::grid::{Grid, Premium};
use crate::score_rules::letter_value;
use crate::RACK_LENGTH;

/// Extra points for playing a full rack in one move.
const FULL_RACK_BONUS: i32 = 35;

/// Points earned by the run of letters through `(x, y)`.
///
/// Only the tiles flagged by the latest insertion count as "new": premiums
/// apply under them alone, each of them scores its perpendicular run too,
/// and seven of them in one run earn the full rack bonus. A run without a
/// new tile, or shorter than two letters, is worth nothing.
pub fn score(grid: &Grid, x: usize, y: usize, horizontal: bool) -> i32 {
    score_word(grid, x, y, horizontal, true)
}

fn score_word(grid: &Grid, mut x: usize, mut y: usize, horizontal: bool, recursive: bool) -> i32 {
    // rewind to the start of the run
    if horizontal {
        while x > 0 && grid.tile(x - 1, y).value.is_some() {
            x -= 1;
        }
    } else {
        while y > 0 && grid.tile(x, y - 1).value.is_some() {
            y -= 1;
        }
    }

    let mut adjacent_score = 0;
    let mut new_tile_count = 0;
    let mut tile_count = 0;
    let mut word_multiplier = 1;
    let mut word_score = 0;

    loop {
        let tile = grid.tile(x, y);
        let value = match tile.value {
            Some(value) => value,
            None => break,
        };

        let mut tile_multiplier = 1;
        if tile.cross_check {
            match tile.premium {
                Premium::DoubleLetter => tile_multiplier = 2,
                Premium::TripleLetter => tile_multiplier = 3,
                Premium::DoubleWord => word_multiplier = 2,
                Premium::TripleWord => word_multiplier = 3,
                Premium::Normal | Premium::Start => {}
            }

            if recursive {
                adjacent_score += score_word(grid, x, y, !horizontal, false);
            }
            new_tile_count += 1;
        }

        if !tile.wild {
            word_score += tile_multiplier * letter_value(value);
        }
        tile_count += 1;

        if horizontal {
            x += 1;
            if x >= grid.width() {
                break;
            }
        } else {
            y += 1;
            if y >= grid.height() {
                break;
            }
        }
    }

    if new_tile_count == 0 || tile_count < 2 {
        return 0;
    }
    let mut total = word_score * word_multiplier + adjacent_score;
    if new_tile_count >= RACK_LENGTH {
        total += FULL_RACK_BONUS;
    }
    total
}

#[test]
fn opening_word_with_full_rack() {
    use crate::{Letter, Placement};

    let mut grid = Grid::standard();
    grid.insert(&Placement::new(1, 7, true, Letter::from_word("AVOCADO")));

    // 15 points of letters, doubled on (3, 7), plus the full rack bonus
    assert_eq!(score(&grid, 1, 7, true), 65);
    // any cell of the run gives the same answer
    assert_eq!(score(&grid, 7, 7, true), 65);
    assert_eq!(score(&grid, 4, 7, true), 65);
}

#[test]
fn wild_letters_score_nothing() {
    use crate::{Letter, Placement};

    let mut letters = Letter::from_word("AVOCADO");
    letters[3].wild = true;
    let mut grid = Grid::standard();
    grid.insert(&Placement::new(1, 7, true, letters));

    // the C no longer brings its 4 points
    assert_eq!(score(&grid, 1, 7, true), 57);
}

#[test]
fn start_cell_carries_no_multiplier() {
    use crate::{Letter, Placement};

    let mut grid = Grid::standard();
    grid.insert(&Placement::new(7, 7, true, Letter::from_word("MONKEY")));

    // 16 points of letters, doubled by the E on (11, 7) only
    assert_eq!(score(&grid, 7, 7, true), 32);
}

#[test]
fn letter_and_word_premiums_combine() {
    use crate::{Letter, Placement};

    let mut grid = Grid::standard();
    grid.insert(&Placement::new(2, 1, true, Letter::from_word("DOGS")));

    // D doubled on (2, 1), the word doubled on (5, 1)
    assert_eq!(score(&grid, 2, 1, true), 18);
}

#[test]
fn perpendicular_words_are_added() {
    use crate::{Letter, Placement};

    let mut grid = Grid::standard();
    grid.insert(&Placement::new(7, 7, true, Letter::from_word("MONKEY")));
    grid.insert(&Placement::new(8, 6, false, Letter::from_word("N")));

    // the new N makes "NO" vertically, nothing else
    assert_eq!(score(&grid, 8, 6, false), 3);
    // the same run found from the old O below
    assert_eq!(score(&grid, 8, 7, false), 3);
}

#[test]
fn untouched_runs_score_zero() {
    use crate::{Letter, Placement};

    let mut grid = Grid::standard();
    grid.insert(&Placement::new(7, 7, true, Letter::from_word("MONKEY")));
    grid.insert(&Placement::new(8, 6, false, Letter::from_word("N")));

    // MONKEY holds no freshly placed tile any more
    assert_eq!(score(&grid, 7, 7, true), 0);
    // a lone old letter has no run at all
    assert_eq!(score(&grid, 9, 7, false), 0);
}

#[test]
fn single_new_letter_without_neighbours_scores_zero() {
    use crate::{Letter, Placement};

    let mut grid = Grid::empty(9, 9);
    grid.insert(&Placement::new(0, 0, true, Letter::from_word("Q")));
    assert_eq!(score(&grid, 0, 0, true), 0);
    assert_eq!(score(&grid, 5, 5, true), 0);
}
