//! Question records, table parsing, and session sampling.
//!
//! The question pool is parsed once at startup from an embedded delimited
//! table with header `question,A,B,C,D,answer[,feedback]`. Malformed rows are
//! skipped with a warning rather than failing the load.

use std::fmt;

use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

/// One of the four answer slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    /// Parse an option letter, tolerating surrounding whitespace and case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Some(OptionKey::A),
            "B" => Some(OptionKey::B),
            "C" => Some(OptionKey::C),
            "D" => Some(OptionKey::D),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::A => "A",
            OptionKey::B => "B",
            OptionKey::C => "C",
            OptionKey::D => "D",
        }
    }

    /// Index into a question's option array
    pub fn index(&self) -> usize {
        match self {
            OptionKey::A => 0,
            OptionKey::B => 1,
            OptionKey::C => 2,
            OptionKey::D => 3,
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single multiple-choice question, immutable once parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    /// Option texts in A, B, C, D order
    pub options: [String; 4],
    pub correct: OptionKey,
}

impl Question {
    pub fn new(prompt: &str, options: [&str; 4], correct: OptionKey) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.map(str::to_string),
            correct,
        }
    }

    pub fn option(&self, key: OptionKey) -> &str {
        &self.options[key.index()]
    }
}

/// Parse the question table. The first line is a header; each following row
/// needs at least six comma-separated fields (`question,A,B,C,D,answer`); a
/// trailing `feedback` field is accepted and ignored.
pub fn parse_table(text: &str) -> Vec<Question> {
    let mut questions = Vec::new();
    let mut lines = text.lines().enumerate();
    lines.next(); // header

    for (line_no, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 6 {
            log::warn!("skipping row {}: expected 6 columns, got {}", line_no + 1, fields.len());
            continue;
        }
        let Some(correct) = OptionKey::parse(fields[5]) else {
            log::warn!("skipping row {}: bad answer letter {:?}", line_no + 1, fields[5]);
            continue;
        };
        questions.push(Question::new(
            fields[0],
            [fields[1], fields[2], fields[3], fields[4]],
            correct,
        ));
    }

    questions
}

/// Draw `n` questions as a random permutation of the pool. Pools smaller than
/// `n` yield every available question.
pub fn sample(pool: &[Question], n: usize, rng: &mut Pcg32) -> Vec<Question> {
    let mut drawn = pool.to_vec();
    drawn.shuffle(rng);
    drawn.truncate(n);
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn dummy_pool(size: usize) -> Vec<Question> {
        (0..size)
            .map(|i| Question::new(&format!("q{i}"), ["a", "b", "c", "d"], OptionKey::A))
            .collect()
    }

    #[test]
    fn test_option_parse_normalizes() {
        assert_eq!(OptionKey::parse(" a "), Some(OptionKey::A));
        assert_eq!(OptionKey::parse("A"), Some(OptionKey::A));
        assert_eq!(OptionKey::parse("d\n"), Some(OptionKey::D));
        assert_eq!(OptionKey::parse("e"), None);
        assert_eq!(OptionKey::parse(""), None);
        assert_eq!(OptionKey::parse("AB"), None);
    }

    #[test]
    fn test_parse_table_basic() {
        let text = "question,A,B,C,D,answer\n\
                    What is 2+2?,3,4,5,6,b\n\
                    Closest star?,Sirius,Vega,The Sun,Altair, c ,ignored feedback\n";
        let pool = parse_table(text);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0].prompt, "What is 2+2?");
        assert_eq!(pool[0].correct, OptionKey::B);
        assert_eq!(pool[0].option(OptionKey::B), "4");
        // answer normalized, feedback column ignored
        assert_eq!(pool[1].correct, OptionKey::C);
    }

    #[test]
    fn test_parse_table_skips_malformed_rows() {
        let text = "question,A,B,C,D,answer\n\
                    too,few,columns\n\
                    \n\
                    Bad answer,1,2,3,4,X\n\
                    Good,1,2,3,4,A\n";
        let pool = parse_table(text);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].prompt, "Good");
    }

    #[test]
    fn test_parse_table_empty_input() {
        assert!(parse_table("").is_empty());
        assert!(parse_table("question,A,B,C,D,answer\n").is_empty());
    }

    #[test]
    fn test_sample_empty_pool() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(sample(&[], 3, &mut rng).is_empty());
    }

    proptest! {
        #[test]
        fn prop_sample_size_and_membership(pool_size in 0usize..12, seed: u64) {
            let pool = dummy_pool(pool_size);
            let mut rng = Pcg32::seed_from_u64(seed);
            let drawn = sample(&pool, 3, &mut rng);

            prop_assert_eq!(drawn.len(), pool_size.min(3));

            let prompts: HashSet<&str> = drawn.iter().map(|q| q.prompt.as_str()).collect();
            // no duplicates
            prop_assert_eq!(prompts.len(), drawn.len());
            // every drawn question comes from the pool
            for q in &drawn {
                prop_assert!(pool.contains(q));
            }
        }
    }
}
