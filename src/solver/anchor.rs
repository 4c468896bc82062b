
use crate::grid::Grid;
use crate::trie::Trie;

/// An empty cell next to at least one letter, the seed of the search. For
/// each direction it carries how much room there is to the left/top before
/// another anchor or letter, and the dictionary subtree matching whatever
/// letters immediately precede it.
#[derive(Debug, Copy, Clone)]
pub struct Anchor<'t> {
    pub x: usize,
    pub y: usize,
    pub x_length: usize,
    pub y_length: usize,
    pub x_trie: &'t Trie,
    pub y_trie: &'t Trie,
}

pub fn is_anchor(grid: &Grid, x: usize, y: usize) -> bool {
    if grid.tile(x, y).value.is_some() {
        return false;
    }
    (x > 0 && grid.tile(x - 1, y).value.is_some())
        || (x + 1 < grid.width() && grid.tile(x + 1, y).value.is_some())
        || (y > 0 && grid.tile(x, y - 1).value.is_some())
        || (y + 1 < grid.height() && grid.tile(x, y + 1).value.is_some())
}

fn create_anchor<'t>(grid: &Grid, trie: &'t Trie, x: usize, y: usize) -> Anchor<'t> {
    let mut x_length = 0;
    let mut i = 0;
    for cx in (0..x).rev() {
        i = cx;
        if grid.tile(cx, y).value.is_some() || is_anchor(grid, cx, y) {
            break;
        }
        x_length += 1;
    }

    let mut y_length = 0;
    let mut j = 0;
    for cy in (0..y).rev() {
        j = cy;
        if grid.tile(x, cy).value.is_some() || is_anchor(grid, x, cy) {
            break;
        }
        y_length += 1;
    }

    // no room to build a left part: pick up the letters already there and
    // restart from the root if they do not lead anywhere
    let x_trie = if x_length == 0 {
        let word = grid.get_word(i, y, true);
        trie.find(&word).unwrap_or(trie)
    } else {
        trie
    };
    let y_trie = if y_length == 0 {
        let word = grid.get_word(x, j, false);
        trie.find(&word).unwrap_or(trie)
    } else {
        trie
    };

    Anchor { x, y, x_length, y_length, x_trie, y_trie }
}

/// Every anchor of the board. An untouched board has none, so the center
/// cell is returned instead to bootstrap the first move.
pub fn calculate_anchors<'t>(grid: &Grid, trie: &'t Trie) -> Vec<Anchor<'t>> {
    let mut anchors = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if is_anchor(grid, x, y) {
                anchors.push(create_anchor(grid, trie, x, y));
            }
        }
    }
    if anchors.is_empty() {
        let x = grid.width() / 2;
        let y = grid.height() / 2;
        anchors.push(Anchor { x, y, x_length: x, y_length: y, x_trie: trie, y_trie: trie });
    }
    anchors
}

#[test]
fn empty_board_bootstraps_on_center() {
    let trie = Trie::new();
    let grid = Grid::standard();
    let anchors = calculate_anchors(&grid, &trie);
    assert_eq!(anchors.len(), 1);

    let center = &anchors[0];
    assert_eq!((center.x, center.y), (7, 7));
    assert_eq!((center.x_length, center.y_length), (7, 7));
    assert!(std::ptr::eq(center.x_trie, &trie));
    assert!(std::ptr::eq(center.y_trie, &trie));

    let small = calculate_anchors(&Grid::empty(5, 5), &trie);
    assert_eq!((small[0].x, small[0].y), (2, 2));
    assert_eq!((small[0].x_length, small[0].y_length), (2, 2));
}

#[test]
fn anchors_surround_a_word() {
    use crate::{Letter, Placement};

    let mut trie = Trie::new();
    trie.insert("MONKEY");
    let mut grid = Grid::standard();
    grid.insert(&Placement::new(7, 7, true, Letter::from_word("MONKEY")));

    let anchors = calculate_anchors(&grid, &trie);
    // one on each side plus one above and below every letter
    assert_eq!(anchors.len(), 14);
    assert!(anchors.iter().all(|a| is_anchor(&grid, a.x, a.y)));

    let right = anchors.iter().find(|a| (a.x, a.y) == (13, 7)).unwrap();
    assert_eq!(right.x_length, 0);
    assert!(std::ptr::eq(right.x_trie, trie.find("MONKEY").unwrap()));

    let left = anchors.iter().find(|a| (a.x, a.y) == (6, 7)).unwrap();
    assert_eq!(left.x_length, 6);
    assert_eq!(left.y_length, 7);
    assert!(std::ptr::eq(left.x_trie, &trie));
}

#[test]
fn prefix_not_in_the_tree_falls_back_to_the_root() {
    use crate::{Letter, Placement};

    let mut trie = Trie::new();
    trie.insert("MONKEY");
    let mut grid = Grid::standard();
    grid.insert(&Placement::new(7, 7, true, Letter::from_word("MONKEY")));

    // below the O: the column above spells "O", which is not a prefix here
    let anchors = calculate_anchors(&grid, &trie);
    let below = anchors.iter().find(|a| (a.x, a.y) == (8, 8)).unwrap();
    assert_eq!(below.y_length, 0);
    assert!(std::ptr::eq(below.y_trie, &trie));
    // its backward scan stops right away on the neighbouring anchor
    assert_eq!(below.x_length, 0);
    assert!(std::ptr::eq(below.x_trie, &trie));
}
