
use rand::{Rng, RngCore};

use crate::score_rules::TILE_DISTRIBUTION;

/// The pool of tiles not yet drawn. Tiles come out in random order, so the
/// order they are stored in does not matter.
#[derive(Debug, Clone)]
pub struct Bag(Vec<char>);

impl Bag {
    /// A full bag following the standard distribution.
    pub fn standard() -> Self {
        let mut tiles = Vec::with_capacity(101);
        for &(letter, count) in TILE_DISTRIBUTION.iter() {
            for _ in 0..count {
                tiles.push(letter);
            }
        }
        Bag(tiles)
    }

    /// Removes one random tile, or None once the bag is empty.
    pub fn draw(&mut self, rng: &mut dyn RngCore) -> Option<char> {
        if self.0.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.0.len());
        Some(self.0.swap_remove(index))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[test]
fn full_bag() {
    let bag = Bag::standard();
    assert_eq!(bag.len(), 101);

    let blanks = bag.0.iter().filter(|&&c| c == crate::WILD_LETTER).count();
    assert_eq!(blanks, 2);
    let es = bag.0.iter().filter(|&&c| c == 'E').count();
    assert_eq!(es, 12);
}

#[test]
fn draw_until_empty() {
    use rand::SeedableRng;

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
    let mut bag = Bag::standard();
    for _ in 0..101 {
        assert!(bag.draw(&mut rng).is_some());
    }
    assert!(bag.is_empty());
    assert_eq!(bag.draw(&mut rng), None);
}
