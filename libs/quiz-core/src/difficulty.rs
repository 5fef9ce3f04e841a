//! Keyword heuristics that assign a difficulty.
//!
//! The two rules belong to different exports and are never combined.

use crate::schema::DifficultyRule;
use crate::types::Difficulty;

const LEVEL_KEYWORDS: &[(&[&str], Difficulty)] = &[
    (&["Advanced"], Difficulty::Advanced),
    (&["Intermediate"], Difficulty::Intermediate),
    (&["Basics"], Difficulty::Basics),
];

const TOPIC_KEYWORDS: &[(&[&str], Difficulty)] = &[
    (&["Hook", "React.Fragment"], Difficulty::Advanced),
    (&["JSX", "props"], Difficulty::Intermediate),
];

/// Map `input` to a difficulty. The first matching row of the table wins.
pub fn determine(rule: DifficultyRule, input: &str) -> Difficulty {
    let table = match rule {
        DifficultyRule::Level => LEVEL_KEYWORDS,
        DifficultyRule::Keyword => TOPIC_KEYWORDS,
    };

    table
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| input.contains(k)))
        .map(|(_, difficulty)| *difficulty)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_rule() {
        assert_eq!(determine(DifficultyRule::Level, "Advanced Topics"), Difficulty::Advanced);
        assert_eq!(determine(DifficultyRule::Level, "Intermediate"), Difficulty::Intermediate);
        assert_eq!(determine(DifficultyRule::Level, "Basics"), Difficulty::Basics);
        assert_eq!(determine(DifficultyRule::Level, "Misc"), Difficulty::Basics);
        assert_eq!(determine(DifficultyRule::Level, ""), Difficulty::Basics);
    }

    #[test]
    fn advanced_wins_over_basics() {
        assert_eq!(
            determine(DifficultyRule::Level, "Basics before Advanced"),
            Difficulty::Advanced
        );
        assert_eq!(
            determine(DifficultyRule::Level, "Intermediate Basics"),
            Difficulty::Intermediate
        );
    }

    #[test]
    fn level_rule_is_case_sensitive() {
        assert_eq!(determine(DifficultyRule::Level, "advanced"), Difficulty::Basics);
    }

    #[test]
    fn keyword_rule() {
        assert_eq!(
            determine(DifficultyRule::Keyword, "Which Hook runs after render?"),
            Difficulty::Advanced
        );
        assert_eq!(
            determine(DifficultyRule::Keyword, "When is React.Fragment useful?"),
            Difficulty::Advanced
        );
        assert_eq!(
            determine(DifficultyRule::Keyword, "How are props passed?"),
            Difficulty::Intermediate
        );
        assert_eq!(determine(DifficultyRule::Keyword, "What is JSX?"), Difficulty::Intermediate);
        assert_eq!(determine(DifficultyRule::Keyword, "Advanced state"), Difficulty::Basics);
    }

    #[test]
    fn rules_are_not_mixed() {
        assert_eq!(determine(DifficultyRule::Level, "useEffect Hook"), Difficulty::Basics);
    }
}
