use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{COLUMNS, ROWS_PER_CARD};

/// The smallest number in the game.
pub const LOWEST_NUMBER: u8 = 1;
/// The largest number in the game.
pub const HIGHEST_NUMBER: u8 = 90;

/// The numbers that may appear in column `col`.
///
/// Column `j` owns `10*j..=10*j+9`, except that the first column starts at 1
/// and the last one ends at 90. Together the columns cover 1 to 90 once.
///
/// Returns `None` if `col` is outside the card.
pub fn column_range(col: usize) -> Option<RangeInclusive<u8>> {
    if col >= COLUMNS {
        return None;
    }
    let decade = 10 * col as u8;
    let low = if col == 0 { LOWEST_NUMBER } else { decade };
    let high = if col == COLUMNS - 1 {
        HIGHEST_NUMBER
    } else {
        decade + 9
    };
    Some(low..=high)
}

/// A single bingo card, a grid of 3 rows and 9 columns.
///
/// Blank cells hold 0. Cards are made by
/// [`generate_tombola()`](crate::generate_tombola), which gives each row five
/// numbers from the column ranges and sorts every column. Deserialized cards
/// are taken as they are; only a card with exactly 15 numbers can win.
///
/// Cards can't be assembled from arbitrary rows outside this crate:
/// ```compile_fail
/// let card = tombola::Card::from_rows([[7; 9]; 3]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    rows: [[u8; COLUMNS]; ROWS_PER_CARD],
}

impl Card {
    /// Does not check any of the card invariants.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [[u8; COLUMNS]; ROWS_PER_CARD]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[[u8; COLUMNS]; ROWS_PER_CARD] {
        &self.rows
    }

    /// Returns `None` if the coordinates are outside the card.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.rows.get(row)?.get(col).copied()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, num: u8) {
        self.rows[row][col] = num;
    }

    /// The numbers on this card in row-major order, skipping blanks.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().flatten().copied().filter(|&num| num != 0)
    }

    /// How many cells of this card show `num`.
    pub fn count_of(&self, num: u8) -> usize {
        self.numbers().filter(|&n| n == num).count()
    }

    pub fn contains(&self, num: u8) -> bool {
        self.count_of(num) > 0
    }
}

/// The cards of a single player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    pub cards: Vec<Card>,
}

impl CardSet {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn get(&self, card_idx: usize) -> Option<&Card> {
        self.cards.get(card_idx)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

/// All card sets of one game, indexed by player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tombola {
    pub players: Vec<CardSet>,
}

impl Tombola {
    pub fn new(players: Vec<CardSet>) -> Self {
        Self { players }
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, player_idx: usize) -> Option<&CardSet> {
        self.players.get(player_idx)
    }

    pub fn card(&self, player_idx: usize, card_idx: usize) -> Option<&Card> {
        self.player(player_idx)?.get(card_idx)
    }

    /// Iterates over `(player_idx, card_idx, card)` for every card in the game.
    pub fn iter_cards(&self) -> impl Iterator<Item = (usize, usize, &Card)> + '_ {
        self.players.iter().enumerate().flat_map(|(player_idx, set)| {
            set.iter()
                .enumerate()
                .map(move |(card_idx, card)| (player_idx, card_idx, card))
        })
    }
}
