//! Tools to generate random obstacle layouts.

use std::collections::BTreeSet;

use crate::{Board, Coordinate, Field, Obstacle};
use itertools::Itertools;
use rand::prelude::SliceRandom;
use rand::SeedableRng;

/// An obstacle generator placing obstacles on random free fields of a board.
#[derive(Debug)]
pub struct Generator {
    rng: rand_pcg::Pcg64Mcg,
    reserved_fields: BTreeSet<Field>,
}

impl Generator {
    /// Creates a new generator with a random state.
    pub fn new() -> Self {
        Self {
            rng: rand_pcg::Pcg64Mcg::from_entropy(),
            reserved_fields: BTreeSet::new(),
        }
    }

    /// Creates a new generator initialized with `seed`.
    ///
    /// Generators created with the same seed generate the same obstacles on the same board.
    pub fn from_seed(seed: u128) -> Self {
        Self {
            rng: rand_pcg::Pcg64Mcg::new(seed.wrapping_mul(2)),
            reserved_fields: BTreeSet::new(),
        }
    }

    /// Keeps `field` free of generated obstacles.
    pub fn reserve(mut self, field: Field) -> Self {
        self.reserved_fields.insert(field);
        self
    }

    /// Picks up to `count` distinct fields of `board` which are neither blocked nor reserved.
    ///
    /// Fewer obstacles are returned if the board has less than `count` free fields.
    pub fn generate_obstacles(&mut self, board: &Board, count: usize) -> Vec<Obstacle> {
        let candidates = (0..=board.max_width())
            .cartesian_product(0..=board.max_height())
            .map(Field::from)
            .filter(|&field| board.is_field_free(field))
            .filter(|field| !self.reserved_fields.contains(field))
            .collect::<Vec<_>>();

        let mut obstacles = candidates
            .choose_multiple(&mut self.rng, count)
            .map(|field| Obstacle::new(field.x(), field.y()))
            .collect::<Vec<_>>();
        obstacles.sort();
        obstacles
    }

    /// Creates a new board with the given bounds and `count` generated obstacles.
    pub fn generate_board(
        &mut self,
        max_width: Coordinate,
        max_height: Coordinate,
        count: usize,
    ) -> Board {
        let mut board = Board::new(max_width, max_height);
        let obstacles = self.generate_obstacles(&board, count);
        board.add_obstacles(obstacles);
        board
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
