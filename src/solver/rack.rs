
use std::fmt;

use rand::RngCore;

use crate::bag::Bag;
use crate::{Letter, RACK_LENGTH, WILD_LETTER};

/// The letters a player can put down, blanks stored as [`WILD_LETTER`].
/// Taking a letter returns a reduced copy so the search can branch without
/// undoing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack(String);

impl Rack {
    pub fn new(letters: &str) -> Self {
        Rack(letters.to_uppercase())
    }

    /// Takes `letter` out of the rack, spending a blank when the plain
    /// letter is missing. None when neither is available.
    pub fn take(&self, letter: char) -> Option<(Letter, Rack)> {
        if let Some(index) = self.0.find(letter) {
            return Some((Letter { value: letter, wild: false }, self.without(index)));
        }
        self.0
            .find(WILD_LETTER)
            .map(|index| (Letter { value: letter, wild: true }, self.without(index)))
    }

    fn without(&self, index: usize) -> Rack {
        let mut letters = self.0.clone();
        letters.remove(index);
        Rack(letters)
    }

    /// Gives back the rack after a move was played: each played letter is
    /// removed once, blanks count as the blank they were drawn as.
    pub fn remove_letters(&mut self, letters: &[Letter]) {
        for letter in letters {
            let spent = if letter.wild { WILD_LETTER } else { letter.value };
            self.0 = self.0.replacen(spent, "", 1);
        }
    }

    /// Draws from the bag until the rack is full or the bag runs dry.
    pub fn populate(&mut self, bag: &mut Bag, rng: &mut dyn RngCore) {
        while self.0.len() < RACK_LENGTH {
            match bag.draw(rng) {
                Some(tile) => self.0.push(tile),
                None => break,
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn take_plain_letter() {
    let rack = Rack::new("avocado");
    assert_eq!(rack.as_str(), "AVOCADO");

    let (letter, rest) = rack.take('C').unwrap();
    assert_eq!(letter, Letter { value: 'C', wild: false });
    assert_eq!(rest.as_str(), "AVOADO");
    // the source rack is untouched
    assert_eq!(rack.as_str(), "AVOCADO");
}

#[test]
fn take_falls_back_on_blanks() {
    let rack = Rack::new("AB CD");
    let (letter, rest) = rack.take('Z').unwrap();
    assert_eq!(letter, Letter { value: 'Z', wild: true });
    assert_eq!(rest.as_str(), "ABCD");

    assert!(rest.take('Z').is_none());
}

#[test]
fn take_prefers_the_plain_letter() {
    let rack = Rack::new("A B");
    let (letter, rest) = rack.take('B').unwrap();
    assert!(!letter.wild);
    assert_eq!(rest.as_str(), "A ");
}

#[test]
fn remove_played_letters() {
    let mut rack = Rack::new("MONKEY ");
    rack.remove_letters(&[
        Letter { value: 'K', wild: false },
        Letter { value: 'Z', wild: true },
        Letter { value: 'M', wild: false },
    ]);
    assert_eq!(rack.as_str(), "ONEY");
}

#[test]
fn populate_fills_up_to_seven() {
    use rand::SeedableRng;

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let mut bag = Bag::standard();
    let mut rack = Rack::new("AB");
    rack.populate(&mut bag, &mut rng);
    assert_eq!(rack.len(), RACK_LENGTH);
    assert_eq!(bag.len(), 96);

    // an empty bag leaves the rack short
    while bag.draw(&mut rng).is_some() {}
    let mut short = Rack::new("");
    short.populate(&mut bag, &mut rng);
    assert!(short.is_empty());
}
