
pub mod anchor;
pub mod rack;
pub mod score;

use crate::grid::Grid;
use crate::trie::Trie;
use crate::{Letter, Placement, ScoredPlacement};

use anchor::{calculate_anchors, Anchor};
use rack::Rack;

/// Enumerates every placement a rack allows on a board.
///
/// The search works anchor by anchor: a left part of rack letters grows
/// backwards into the free room before the anchor while the dictionary
/// tree allows it, then the word is extended to the right through rack
/// letters and letters already on the board. Candidates are collected
/// sorted, the best one last.
pub struct SolutionBuilder<'a> {
    grid: &'a Grid,
    trie: &'a Trie,
    placements: Vec<ScoredPlacement>,
}

impl<'a> SolutionBuilder<'a> {
    pub fn new(grid: &'a Grid, trie: &'a Trie) -> Self {
        Self { grid, trie, placements: Vec::new() }
    }

    /// All the legal placements for `rack`, sorted by score then position.
    /// Empty when nothing can be played.
    pub fn solve(&mut self, rack: &Rack) -> Vec<ScoredPlacement> {
        self.placements = Vec::new();
        let anchors = calculate_anchors(self.grid, self.trie);
        for anchor in &anchors {
            for (&letter, child) in anchor.x_trie.children() {
                if let Some((letter, rest)) = rack.take(letter) {
                    self.left_part(&rest, vec![letter], child, anchor, true, anchor.x_length);
                }
            }
            for (&letter, child) in anchor.y_trie.children() {
                if let Some((letter, rest)) = rack.take(letter) {
                    self.left_part(&rest, vec![letter], child, anchor, false, anchor.y_length);
                }
            }
        }
        log::debug!("{} anchors gave {} placements", anchors.len(), self.placements.len());
        std::mem::take(&mut self.placements)
    }

    /// Grows the word backwards from the anchor, one rack letter per level.
    /// The newest letter always sits on the anchor itself, so each level
    /// first tries to extend to the right from there.
    fn left_part(
        &mut self,
        rack: &Rack,
        word: Vec<Letter>,
        segment: &Trie,
        anchor: &Anchor<'_>,
        horizontal: bool,
        limit: usize,
    ) {
        if let Some(value) = segment.value() {
            if self.cross_check(anchor.x, anchor.y, horizontal, value) {
                self.extend_right(rack, &word, segment, anchor, horizontal, anchor.x, anchor.y, limit);
            }
        }
        if limit > 0 {
            for (&letter, child) in segment.children() {
                if let Some((letter, rest)) = rack.take(letter) {
                    let mut word_copy = word.clone();
                    word_copy.push(letter);
                    self.left_part(&rest, word_copy, child, anchor, horizontal, limit - 1);
                }
            }
        }
    }

    /// Walks to the right of `(x, y)`: records the word whenever the next
    /// cell is free and the tree says it is complete, then keeps going with
    /// rack letters on empty cells and board letters on filled ones.
    fn extend_right(
        &mut self,
        rack: &Rack,
        word: &[Letter],
        segment: &Trie,
        anchor: &Anchor<'_>,
        horizontal: bool,
        mut x: usize,
        mut y: usize,
        limit: usize,
    ) {
        let edge = x >= self.grid.width() - 1 || y >= self.grid.height() - 1;
        if !edge {
            if horizontal {
                x += 1;
            } else {
                y += 1;
            }
        }
        match self.grid.tile(x, y).value {
            Some(value) if !edge => {
                // a letter already on the board: the word must go through it
                if let Some(next) = segment.child(value) {
                    self.extend_right(rack, word, next, anchor, horizontal, x, y, limit);
                }
            }
            _ => {
                if segment.is_valid() {
                    self.legal_move(word, anchor, horizontal, limit);
                }
                if edge {
                    return;
                }
                for (&letter, child) in segment.children() {
                    if let Some((letter, rest)) = rack.take(letter) {
                        if self.cross_check(x, y, horizontal, letter.value) {
                            let mut word_copy = word.to_vec();
                            word_copy.push(letter);
                            self.extend_right(&rest, &word_copy, child, anchor, horizontal, x, y, limit);
                        }
                    }
                }
            }
        }
    }

    /// Whether putting `value` on `(x, y)` leaves the perpendicular run
    /// legal: either no run forms at all or it is a dictionary word.
    fn cross_check(&self, x: usize, y: usize, horizontal: bool, value: char) -> bool {
        let mut preview = self.grid.clone();
        preview.tile_mut(x, y).value = Some(value);
        let word = preview.get_word(x, y, !horizontal);
        word.chars().count() == 1 || self.trie.contains(&word)
    }

    /// Scores the word on a copy of the board and files it. `limit` tells
    /// how much left room was not used, which places the first letter.
    fn legal_move(&mut self, word: &[Letter], anchor: &Anchor<'_>, horizontal: bool, limit: usize) {
        let (x, y) = if horizontal {
            debug_assert!(limit <= anchor.x_length);
            (anchor.x - (anchor.x_length - limit), anchor.y)
        } else {
            debug_assert!(limit <= anchor.y_length);
            (anchor.x, anchor.y - (anchor.y_length - limit))
        };
        let placement = Placement::new(x, y, horizontal, word.to_vec());

        let mut preview = self.grid.clone();
        preview.insert(&placement);
        let score = score::score(&preview, anchor.x, anchor.y, horizontal);

        let scored = ScoredPlacement { placement, score };
        let at = match self.placements.binary_search(&scored) {
            Ok(at) | Err(at) => at,
        };
        self.placements.insert(at, scored);
    }
}

#[test]
fn avocado_opening() {
    let mut trie = Trie::new();
    trie.insert("AVOCADO");
    let grid = Grid::standard();

    let placements = SolutionBuilder::new(&grid, &trie).solve(&Rack::new("AVOCADO"));

    // seven alignments per direction, every one through the center
    assert_eq!(placements.len(), 14);
    assert!(placements.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(placements.last().unwrap().score, 65);
    // the alignment reaching neither double word cell comes first
    assert_eq!(placements.first().unwrap().score, 50);
}

#[test]
fn first_move_crosses_the_center() {
    let mut trie = Trie::new();
    trie.insert("AT");
    let grid = Grid::standard();

    let placements = SolutionBuilder::new(&grid, &trie).solve(&Rack::new("AT"));
    assert!(!placements.is_empty());
    for scored in &placements {
        let mut preview = grid.clone();
        preview.insert(&scored.placement);
        assert!(preview.tile(7, 7).value.is_some());
    }
}

#[test]
fn hooks_reuse_board_letters() {
    let mut trie = Trie::new();
    trie.insert("MONKEY");
    trie.insert("NO");
    trie.insert("ON");
    let mut grid = Grid::standard();
    grid.insert(&Placement::new(7, 7, true, Letter::from_word("MONKEY")));

    let placements = SolutionBuilder::new(&grid, &trie).solve(&Rack::new("NO"));

    // NO played above the O, making NO and ON vertically as well
    let hook = placements
        .iter()
        .find(|scored| **scored == Placement::new(8, 6, true, Letter::from_word("NO")))
        .unwrap();
    assert_eq!(hook.score, 9);

    // a lone letter finishing a vertical word is found too
    assert!(placements
        .iter()
        .any(|scored| *scored == Placement::new(8, 6, false, Letter::from_word("N"))));
}

#[test]
fn illegal_crossings_are_rejected() {
    let mut trie = Trie::new();
    trie.insert("MONKEY");
    trie.insert("NO");
    trie.insert("ON");
    let mut grid = Grid::standard();
    grid.insert(&Placement::new(7, 7, true, Letter::from_word("MONKEY")));

    let placements = SolutionBuilder::new(&grid, &trie).solve(&Rack::new("NN"));

    // the only words the two Ns can make are the lone hooks around the O;
    // NN never appears since it is a word nowhere
    assert_eq!(placements.len(), 2);
    for scored in &placements {
        assert_eq!(scored.placement.letters.len(), 1);
        assert_eq!(scored.placement.letters[0].value, 'N');
        assert_eq!(scored.score, 3);
    }
}

#[test]
fn blanks_complete_words_for_free() {
    let mut trie = Trie::new();
    trie.insert("AVOCADO");
    let grid = Grid::standard();

    // no second A: the blank has to stand in for it
    let placements = SolutionBuilder::new(&grid, &trie).solve(&Rack::new("AVOCDO "));

    assert_eq!(placements.len(), 14);
    let best = placements.last().unwrap();
    assert_eq!(best.score, 63);
    assert_eq!(best.placement.letters.iter().filter(|letter| letter.wild).count(), 1);
}

#[test]
fn unplayable_racks_give_nothing() {
    let mut trie = Trie::new();
    trie.insert("MONKEY");
    let grid = Grid::standard();

    assert!(SolutionBuilder::new(&grid, &trie).solve(&Rack::new("QQZZJXV")).is_empty());
    assert!(SolutionBuilder::new(&grid, &trie).solve(&Rack::new("")).is_empty());
}

#[test]
fn repeated_play_keeps_the_engine_consistent() {
    use crate::bag::Bag;
    use rand::SeedableRng;

    let words = [
        "MONKEY", "MONKEYS",
        "AA", "AB", "AD", "AE", "AG", "AH", "AI", "AL", "AM", "AN", "AR", "AS", "AT",
        "AW", "AX", "AY", "BA", "BE", "BI", "BO", "BY", "DA", "DE", "DO", "ED", "EF",
        "EH", "EL", "EM", "EN", "ER", "ES", "ET", "EX", "FA", "GO", "HA", "HE", "HI",
        "HM", "HO", "ID", "IF", "IN", "IS", "IT", "JO", "KA", "KI", "LA", "LI", "LO",
        "MA", "ME", "MI", "MM", "MU", "MY", "NA", "NE", "NO", "NU", "OD", "OE", "OF",
        "OH", "OI", "OM", "ON", "OP", "OR", "OS", "OW", "OX", "OY", "PA", "PE", "PI",
        "QI", "RE", "SH", "SI", "SO", "TA", "TI", "TO", "UH", "UM", "UN", "UP", "US",
        "UT", "WE", "WO", "XI", "XU", "YA", "YE", "YO", "ZA",
        "AGE", "AIR", "ANT", "ARE", "ARM", "ATE", "BAT", "BED", "CAT", "COT", "DEN",
        "DOG", "EAR", "EAT", "FIN", "GEM", "HAT", "HEN", "ICE", "INK", "JAM", "KEY",
        "LIP", "MAP", "NET", "OAK", "OAR", "ONE", "OUT", "OWL", "PEA", "PEN", "RAT",
        "RED", "RUN", "SEA", "SUN", "TAR", "TEA", "TEN", "TIN", "TOE", "URN", "VAN",
        "WAR", "WIG", "YES", "ZOO",
    ];
    let mut trie = Trie::new();
    for word in words.iter() {
        trie.insert(word);
    }

    let mut grid = Grid::standard();
    let mut bag = Bag::standard();
    let mut rack = Rack::new("MONKEYS");
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(322);
    let mut played = 0;

    for round in 0..18 {
        rack.populate(&mut bag, &mut rng);
        let placements = SolutionBuilder::new(&grid, &trie).solve(&rack);
        assert!(placements.windows(2).all(|pair| pair[0] <= pair[1]));

        let best = match placements.last() {
            Some(best) => best.clone(),
            None => break,
        };
        if round == 0 {
            // the whole starting rack goes down, doubled, with the bonus
            assert_eq!(best.score, 69);
        }

        grid.insert(&best.placement);
        // the board agrees with the preview the score came from
        let replayed = score::score(
            &grid,
            best.placement.x,
            best.placement.y,
            best.placement.horizontal,
        );
        assert_eq!(replayed, best.score);
        rack.remove_letters(&best.placement.letters);
        played += 1;
    }

    assert!(played >= 1);
    assert!(grid.tile(7, 7).value.is_some());
}
