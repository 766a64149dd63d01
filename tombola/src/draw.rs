use std::iter::FusedIterator;

use rand::Rng;

use crate::{sample_unique, DrawSequenceError, HIGHEST_NUMBER, LOWEST_NUMBER};

/// The order in which numbers are called during one game.
///
/// Every number from 1 to 90 appears at most once, and exactly once in a
/// freshly shuffled sequence. The sequence is fixed
/// when it is created and can only be consumed once, through [`Iterator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawSequence {
    numbers: Vec<u8>,
    next_idx: usize,
}

impl DrawSequence {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let count = usize::from(HIGHEST_NUMBER - LOWEST_NUMBER) + 1;
        let numbers = sample_unique(rng, LOWEST_NUMBER, HIGHEST_NUMBER, count)
            .expect("The full number range always fits");
        Self {
            numbers,
            next_idx: 0,
        }
    }

    /// A predetermined sequence, e.g. the numbers drawn in a recorded game.
    ///
    /// It may stop before all numbers are drawn, but every number must be
    /// between 1 and 90 and appear at most once.
    pub fn from_numbers(numbers: Vec<u8>) -> Result<Self, DrawSequenceError> {
        let mut seen = [false; HIGHEST_NUMBER as usize + 1];
        for &num in &numbers {
            if !(LOWEST_NUMBER..=HIGHEST_NUMBER).contains(&num) {
                return Err(DrawSequenceError::OutOfRange { num });
            }
            if std::mem::replace(&mut seen[usize::from(num)], true) {
                return Err(DrawSequenceError::Repeated { num });
            }
        }
        Ok(Self {
            numbers,
            next_idx: 0,
        })
    }

    /// The numbers drawn so far, in order.
    pub fn drawn(&self) -> &[u8] {
        &self.numbers[..self.next_idx]
    }

    pub fn remaining(&self) -> usize {
        self.numbers.len() - self.next_idx
    }
}

impl Iterator for DrawSequence {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let num = *self.numbers.get(self.next_idx)?;
        self.next_idx += 1;
        Some(num)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for DrawSequence {}

impl FusedIterator for DrawSequence {}
