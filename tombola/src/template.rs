use crate::TemplateError;

pub const CARDS_PER_PLAYER: usize = 6;
pub const ROWS_PER_CARD: usize = 3;
pub const COLUMNS: usize = 9;
pub const NUMBERS_PER_ROW: usize = 5;
/// The numbered cells on a single card.
pub const NUMBERS_PER_CARD: usize = ROWS_PER_CARD * NUMBERS_PER_ROW;
pub const TEMPLATE_ROWS: usize = CARDS_PER_PLAYER * ROWS_PER_CARD;

/// Which cells of a player's six cards carry a number.
///
/// Row `r` of the template is row `r % ROWS_PER_CARD` of card `r / ROWS_PER_CARD`.
/// A template is validated on construction and never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    rows: Vec<[bool; COLUMNS]>,
}

const CLASSIC: [[u8; COLUMNS]; TEMPLATE_ROWS] = [
    [0, 0, 1, 1, 1, 1, 0, 0, 1],
    [1, 1, 0, 0, 0, 1, 0, 1, 1],
    [0, 1, 1, 1, 0, 0, 1, 1, 0],
    [1, 0, 1, 0, 1, 1, 0, 1, 0],
    [0, 1, 1, 1, 1, 0, 1, 0, 0],
    [0, 1, 0, 1, 0, 1, 0, 1, 1],
    [1, 1, 0, 0, 0, 1, 1, 1, 0],
    [0, 1, 0, 1, 1, 1, 0, 0, 1],
    [0, 0, 1, 0, 1, 0, 1, 1, 1],
    [1, 0, 1, 0, 0, 1, 1, 0, 1],
    [0, 1, 0, 0, 1, 0, 1, 1, 1],
    [1, 1, 1, 1, 1, 0, 0, 0, 0],
    [0, 1, 0, 1, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 1, 0],
    [1, 0, 0, 1, 0, 1, 0, 1, 1],
    [0, 0, 0, 1, 1, 1, 1, 0, 1],
    [1, 1, 1, 1, 0, 1, 0, 0, 0],
    [1, 0, 1, 0, 0, 0, 1, 1, 1],
];

impl Template {
    /// Creates a template from the first [`TEMPLATE_ROWS`] rows of 0/1 values.
    pub fn new(rows: &[[i64; COLUMNS]]) -> Result<Self, TemplateError> {
        if rows.len() < TEMPLATE_ROWS {
            return Err(TemplateError::InsufficientData {
                expected: TEMPLATE_ROWS * COLUMNS,
                found: rows.len() * COLUMNS,
            });
        }
        let mut flags = Vec::with_capacity(TEMPLATE_ROWS);
        for (row, values) in rows.iter().take(TEMPLATE_ROWS).enumerate() {
            let mut row_flags = [false; COLUMNS];
            for (col, &value) in values.iter().enumerate() {
                row_flags[col] = match value {
                    0 => false,
                    1 => true,
                    _ => return Err(TemplateError::InvalidFlag { row, col, value }),
                };
            }
            let ones = row_flags.iter().filter(|&&flag| flag).count();
            if ones != NUMBERS_PER_ROW {
                return Err(TemplateError::WrongRowDensity { row, ones });
            }
            flags.push(row_flags);
        }
        Ok(Self { rows: flags })
    }

    /// Reads the template row by row from a stream of values.
    ///
    /// Only the first `TEMPLATE_ROWS * COLUMNS` values are consumed.
    pub fn from_values<I: IntoIterator<Item = i64>>(values: I) -> Result<Self, TemplateError> {
        let mut rows = Vec::with_capacity(TEMPLATE_ROWS);
        let mut iter = values.into_iter();
        let mut found = 0;
        while rows.len() < TEMPLATE_ROWS {
            let mut row = [0; COLUMNS];
            for cell in row.iter_mut() {
                *cell = iter.next().ok_or(TemplateError::InsufficientData {
                    expected: TEMPLATE_ROWS * COLUMNS,
                    found,
                })?;
                found += 1;
            }
            rows.push(row);
        }
        Self::new(&rows)
    }

    /// A valid template in which column 0 holds 9 numbers, columns 1 to 7
    /// hold 10 and column 8 holds 11 per player, so that every player's
    /// cards use each number from 1 to 90 exactly once.
    pub fn classic() -> Self {
        Self {
            rows: CLASSIC
                .iter()
                .map(|row| row.map(|value| value == 1))
                .collect(),
        }
    }

    pub fn rows(&self) -> &[[bool; COLUMNS]] {
        &self.rows
    }

    /// Returns `None` if `row` or `col` is out of bounds.
    pub fn is_flagged(&self, row: usize, col: usize) -> Option<bool> {
        self.rows.get(row)?.get(col).copied()
    }

    /// The number of numbered cells in a column, across all cards of a player.
    pub fn column_count(&self, col: usize) -> usize {
        self.rows.iter().filter(|row| row.get(col) == Some(&true)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_values() -> Vec<i64> {
        CLASSIC
            .iter()
            .flat_map(|row| row.iter().map(|&v| i64::from(v)))
            .collect()
    }

    #[test]
    fn classic_template_is_valid() {
        let template = Template::from_values(classic_values()).unwrap();
        assert_eq!(template, Template::classic());
        let counts: Vec<usize> = (0..COLUMNS).map(|col| template.column_count(col)).collect();
        assert_eq!(counts, vec![9, 10, 10, 10, 10, 10, 10, 10, 11]);
    }

    #[test]
    fn bounds_checked_flags() {
        let template = Template::classic();
        assert_eq!(template.is_flagged(0, 2), Some(true));
        assert_eq!(template.is_flagged(17, 1), Some(false));
        assert_eq!(template.is_flagged(TEMPLATE_ROWS, 0), None);
        assert_eq!(template.is_flagged(0, COLUMNS), None);
    }

    #[test]
    fn extra_values_are_ignored() {
        let mut values = classic_values();
        values.extend([7, 7, 7]);
        assert_eq!(Template::from_values(values).unwrap(), Template::classic());
    }

    #[test]
    fn short_input() {
        let mut values = classic_values();
        values.truncate(100);
        assert_eq!(
            Template::from_values(values),
            Err(TemplateError::InsufficientData {
                expected: 162,
                found: 100
            })
        );
        assert_eq!(
            Template::new(&[[1, 1, 1, 1, 1, 0, 0, 0, 0]; 4]),
            Err(TemplateError::InsufficientData {
                expected: 162,
                found: 36
            })
        );
    }

    #[test]
    fn invalid_flag() {
        let mut values = classic_values();
        values[2 * COLUMNS + 4] = 2;
        assert_eq!(
            Template::from_values(values),
            Err(TemplateError::InvalidFlag {
                row: 2,
                col: 4,
                value: 2
            })
        );
    }

    #[test]
    fn wrong_row_density() {
        let mut values = classic_values();
        // Row 0 starts with two blanks
        values[0] = 1;
        assert_eq!(
            Template::from_values(values),
            Err(TemplateError::WrongRowDensity { row: 0, ones: 6 })
        );
    }
}
