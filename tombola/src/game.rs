use serde::{Deserialize, Serialize};

use crate::{GameError, Tombola, NUMBERS_PER_CARD};

/// A card on which every number has been drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Winner {
    pub player_idx: usize,
    pub card_idx: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    Finished,
}

/// Summarizes a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// All cards completed by the last draw, ordered by player and card.
    pub winners: Vec<Winner>,
    /// Every number drawn, in order. The last one completed the winning cards.
    pub drawn: Vec<u8>,
}

/// Marks drawn numbers on all cards of a [`Tombola`] and detects winners.
pub struct GameController<'a> {
    tombola: &'a Tombola,
    /// marks[player_idx][card_idx] is the number of cells marked on that card
    marks: Vec<Vec<usize>>,
    winners: Vec<Winner>,
    drawn: Vec<u8>,
}

impl<'a> GameController<'a> {
    pub fn new(tombola: &'a Tombola) -> Self {
        let marks = tombola
            .players
            .iter()
            .map(|set| vec![0; set.len()])
            .collect();
        Self {
            tombola,
            marks,
            winners: Vec::new(),
            drawn: Vec::new(),
        }
    }

    pub fn state(&self) -> GameState {
        if self.winners.is_empty() {
            GameState::Running
        } else {
            GameState::Finished
        }
    }

    /// How many numbers of a card have been drawn so far.
    pub fn marks(&self, player_idx: usize, card_idx: usize) -> Option<usize> {
        self.marks.get(player_idx)?.get(card_idx).copied()
    }

    pub fn winners(&self) -> &[Winner] {
        &self.winners
    }

    pub fn drawn(&self) -> &[u8] {
        &self.drawn
    }

    /// Marks `num` on every card and returns the winners, if any.
    ///
    /// All cards that are completed by the same number win together. Once the
    /// game is finished, further draws are ignored.
    pub fn draw(&mut self, num: u8) -> &[Winner] {
        if self.state() == GameState::Finished {
            return &self.winners;
        }
        self.drawn.push(num);
        let tombola = self.tombola;
        for (player_idx, card_idx, card) in tombola.iter_cards() {
            self.marks[player_idx][card_idx] += card.count_of(num);
        }
        for (player_idx, card_marks) in self.marks.iter().enumerate() {
            for (card_idx, &marked) in card_marks.iter().enumerate() {
                if marked == NUMBERS_PER_CARD {
                    self.winners.push(Winner {
                        player_idx,
                        card_idx,
                    });
                }
            }
        }
        &self.winners
    }

    /// Draws numbers until at least one card is complete.
    ///
    /// `on_draw` is called with each number before it is marked. Running
    /// out of numbers without a winner is an error.
    pub fn play<I, F>(mut self, draws: I, mut on_draw: F) -> Result<GameOutcome, GameError>
    where
        I: IntoIterator<Item = u8>,
        F: FnMut(u8),
    {
        for num in draws {
            on_draw(num);
            if !self.draw(num).is_empty() {
                return Ok(GameOutcome {
                    winners: self.winners,
                    drawn: self.drawn,
                });
            }
        }
        Err(GameError::DrawPoolExhausted {
            drawn: self.drawn.len(),
        })
    }
}
