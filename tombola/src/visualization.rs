use crate::{Card, COLUMNS};

/// Renders a card as a box of 3 rows and 9 columns. Blank cells stay empty.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tombola::{generate_tombola, visualize_card, Template};
/// let mut rng = StdRng::seed_from_u64(1);
/// let tombola = generate_tombola(&mut rng, &Template::classic(), 1).unwrap();
/// let text = visualize_card(tombola.card(0, 0).unwrap());
/// assert_eq!(text.lines().count(), 5);
/// assert!(text.lines().nth(1).unwrap().starts_with("│    │    │ 2"));
/// ```
pub fn visualize_card(card: &Card) -> String {
    let border = |left: &str, middle: &str, right: &str| {
        let mut line = String::from(left);
        for col in 0..COLUMNS {
            line += "────";
            line += if col + 1 < COLUMNS { middle } else { right };
        }
        line
    };

    let mut result = border("╭", "┬", "╮");
    for row in card.rows() {
        result += "\n│";
        for &num in row {
            if num == 0 {
                result += "    │";
            } else {
                result += &format!(" {:>2} │", num);
            }
        }
    }
    result += "\n";
    result += &border("╰", "┴", "╯");
    result
}
