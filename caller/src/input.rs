use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use tombola::Template;

/// Everything needed to set up a game, as read from an input file.
///
/// The file holds whitespace-separated integers: first the number of
/// players, then the template, row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameInput {
    pub num_players: usize,
    pub template: Template,
}

impl GameInput {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read input file '{}'", path.display()))?;
        contents
            .parse()
            .with_context(|| format!("Invalid input file '{}'", path.display()))
    }
}

impl FromStr for GameInput {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .enumerate()
            .map(|(idx, token)| {
                token
                    .parse::<i64>()
                    .with_context(|| format!("Value #{} ('{}') is not an integer", idx + 1, token))
            })
            .collect::<anyhow::Result<Vec<i64>>>()?;
        let (&num_players, template_values) = values
            .split_first()
            .context("The number of players is missing")?;
        let num_players = usize::try_from(num_players)
            .with_context(|| format!("Invalid number of players: {}", num_players))?;
        let template = Template::from_values(template_values.iter().copied())?;
        Ok(Self {
            num_players,
            template,
        })
    }
}

#[cfg(test)]
mod tests {
    use tombola::{TemplateError, COLUMNS};

    use super::*;

    fn classic_text(num_players: i64) -> String {
        let mut text = format!("{}\n", num_players);
        for row in Template::classic().rows() {
            let row: Vec<&str> = row.iter().map(|&f| if f { "1" } else { "0" }).collect();
            text += &row.join(" ");
            text += "\n";
        }
        text
    }

    #[test]
    fn parse_classic() {
        let input: GameInput = classic_text(3).parse().unwrap();
        assert_eq!(input.num_players, 3);
        assert_eq!(input.template, Template::classic());
    }

    #[test]
    fn demo_input() {
        let input: GameInput = include_str!("../../demos/input.txt").parse().unwrap();
        assert_eq!(input.num_players, 4);
        assert_eq!(input.template, Template::classic());
    }

    #[test]
    fn negative_players() {
        assert!(classic_text(-2).parse::<GameInput>().is_err());
    }

    #[test]
    fn not_a_number() {
        let err = "2 1 0 x".parse::<GameInput>().unwrap_err();
        assert!(err.to_string().contains("'x'"));
        assert!("".parse::<GameInput>().is_err());
    }

    #[test]
    fn short_template() {
        let text = classic_text(2);
        let short: Vec<&str> = text.split_whitespace().take(1 + 5 * COLUMNS).collect();
        let err = short.join(" ").parse::<GameInput>().unwrap_err();
        assert_eq!(
            err.downcast_ref::<TemplateError>(),
            Some(&TemplateError::InsufficientData {
                expected: 162,
                found: 45
            })
        );
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, classic_text(4)).unwrap();
        assert_eq!(GameInput::load(&path).unwrap().num_players, 4);
        assert!(GameInput::load(&dir.path().join("missing.txt")).is_err());
    }
}
