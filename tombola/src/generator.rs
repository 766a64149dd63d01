use rand::Rng;

use crate::{
    column_range, sample_unique, Card, CardSet, InvalidRange, Template, Tombola, CARDS_PER_PLAYER,
    COLUMNS, ROWS_PER_CARD, TEMPLATE_ROWS,
};

/// Generates the cards of all players from a template.
///
/// For every player and column, the numbers for all six cards are drawn
/// together from the column's range, so a player never gets the same number
/// twice. They fill the flagged cells of that column from the first card's
/// top row to the last card's bottom row. Numbers sharing a column on the
/// same card are then put in increasing order.
///
/// Fails only if the template flags more cells in a column than its range
/// has numbers.
pub fn generate_tombola<R: Rng + ?Sized>(
    rng: &mut R,
    template: &Template,
    num_players: usize,
) -> Result<Tombola, InvalidRange> {
    let players = (0..num_players)
        .map(|_| generate_card_set(rng, template))
        .collect::<Result<Vec<CardSet>, InvalidRange>>()?;
    Ok(Tombola::new(players))
}

/// Generates the six cards of one player.
pub fn generate_card_set<R: Rng + ?Sized>(
    rng: &mut R,
    template: &Template,
) -> Result<CardSet, InvalidRange> {
    let mut cards = [Card::default(); CARDS_PER_PLAYER];
    for (col, range) in (0..COLUMNS).filter_map(|col| Some((col, column_range(col)?))) {
        // Flagged template rows of this column, first card's top row first
        let flagged: Vec<usize> = (0..TEMPLATE_ROWS)
            .filter(|&row| template.is_flagged(row, col) == Some(true))
            .collect();
        let nums = sample_unique(rng, *range.start(), *range.end(), flagged.len())?;
        debug_assert_eq!(nums.len(), flagged.len());
        for (&template_row, num) in flagged.iter().zip(nums) {
            cards[template_row / ROWS_PER_CARD].set(template_row % ROWS_PER_CARD, col, num);
        }
        for (card_idx, card) in cards.iter_mut().enumerate() {
            let rows: Vec<usize> = flagged
                .iter()
                .filter(|&&template_row| template_row / ROWS_PER_CARD == card_idx)
                .map(|&template_row| template_row % ROWS_PER_CARD)
                .collect();
            sort_column(card, col, &rows);
        }
    }
    Ok(CardSet::new(cards.to_vec()))
}

/// Rewrites the numbers at `rows` of column `col` in increasing order.
fn sort_column(card: &mut Card, col: usize, rows: &[usize]) {
    if rows.len() < 2 {
        return;
    }
    let mut nums: Vec<u8> = rows
        .iter()
        .filter_map(|&row| card.get(row, col))
        .collect();
    nums.sort_unstable();
    for (&row, num) in rows.iter().zip(nums) {
        card.set(row, col, num);
    }
}
