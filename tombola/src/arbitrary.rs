use quickcheck::Arbitrary;

use crate::{Template, COLUMNS, NUMBERS_PER_ROW, TEMPLATE_ROWS};

/// A valid [`Template`], not necessarily one whose columns fit their ranges.
#[derive(Clone, Debug)]
pub struct ArbitraryTemplate(pub Template);

fn shuffle<T>(items: &mut [T], g: &mut quickcheck::Gen) {
    for i in (1..items.len()).rev() {
        let j = usize::arbitrary(g) % (i + 1);
        items.swap(i, j);
    }
}

impl Arbitrary for ArbitraryTemplate {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let rows: Vec<[i64; COLUMNS]> = if bool::arbitrary(g) {
            // Moving rows around keeps the column counts of the classic
            // template, but may stack three numbers in one column of a card
            let mut rows: Vec<[i64; COLUMNS]> = Template::classic()
                .rows()
                .iter()
                .map(|row| row.map(i64::from))
                .collect();
            shuffle(&mut rows, g);
            rows
        } else {
            (0..TEMPLATE_ROWS)
                .map(|_| {
                    let mut row = [0; COLUMNS];
                    row[..NUMBERS_PER_ROW].fill(1);
                    shuffle(&mut row, g);
                    row
                })
                .collect()
        };
        let template = Template::new(&rows).expect("Generated an invalid template");
        ArbitraryTemplate(template)
    }
}
