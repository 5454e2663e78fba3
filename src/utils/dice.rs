//! Dice helpers implementing the external roll contract: two independent
//! six-sided values per turn, with doubles expanded into four usable values
//! before the engine sees them.

use rand::Rng;

pub fn roll_pair<R: Rng>(rng: &mut R) -> (u8, u8) {
    (rng.random_range(1..=6), rng.random_range(1..=6))
}

pub fn expand_roll(pair: (u8, u8)) -> Vec<u8> {
    let (first, second) = pair;
    if first == second {
        vec![first; 4]
    } else {
        vec![first, second]
    }
}
