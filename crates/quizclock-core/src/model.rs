//! Core data model: questions and the question set handed to the collector.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Normalize an answer for comparison: trim surrounding whitespace and lowercase.
///
/// Applied to stored answers when a [`Question`] is built and to user input
/// before comparing, so matching is case- and whitespace-insensitive.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// A single prompt with its normalized expected answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    answer: String,
}

impl Question {
    /// Build a question, normalizing the raw answer text.
    pub fn new(prompt: impl Into<String>, raw_answer: &str) -> Self {
        Self {
            prompt: prompt.into(),
            answer: normalize(raw_answer),
        }
    }

    /// The text shown to the user.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The normalized expected answer.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Whether `input` matches the expected answer after normalization.
    pub fn is_correct(&self, input: &str) -> bool {
        normalize(input) == self.answer
    }
}

/// An ordered, fixed-size sequence of questions.
///
/// The set is consumed by value: iterating it moves each question out exactly
/// once, so only one consumer can ever receive a given question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Apply one uniform random permutation to the whole set.
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.questions.shuffle(rng);
        self
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl IntoIterator for QuestionSet {
    type Item = Question;
    type IntoIter = std::vec::IntoIter<Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.into_iter()
    }
}

impl FromIterator<Question> for QuestionSet {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Where the shuffle's randomness comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleSeed {
    /// Seed from the operating system; differs on every run.
    Entropy,
    /// Reproducible order for a given seed.
    Fixed(u64),
}

impl ShuffleSeed {
    /// Create the generator for this seed.
    pub fn rng(self) -> StdRng {
        match self {
            ShuffleSeed::Entropy => StdRng::from_os_rng(),
            ShuffleSeed::Fixed(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> QuestionSet {
        (0..n)
            .map(|i| Question::new(format!("q{i}"), &i.to_string()))
            .collect()
    }

    fn prompts(set: &QuestionSet) -> Vec<String> {
        set.iter().map(|q| q.prompt().to_string()).collect()
    }

    #[test]
    fn normalize_cases() {
        assert_eq!(normalize("foo"), "foo");
        assert_eq!(normalize("BAR"), "bar");
        assert_eq!(normalize("   BaZ  "), "baz");
        assert_eq!(normalize("\tParis\n"), "paris");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["  BaZ ", "baz", "", "  ", "Ünïcode Ä "] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
        assert_eq!(normalize("  BaZ "), normalize("baz"));
    }

    #[test]
    fn question_stores_normalized_answer() {
        let q = Question::new("Capital of France", " Paris ");
        assert_eq!(q.answer(), "paris");
        assert!(q.is_correct(" paris "));
        assert!(q.is_correct("PARIS"));
        assert!(!q.is_correct("Lyon"));
    }

    #[test]
    fn into_iter_preserves_order() {
        let set = numbered(4);
        let out: Vec<String> = set.into_iter().map(|q| q.prompt().to_string()).collect();
        assert_eq!(out, vec!["q0", "q1", "q2", "q3"]);
    }

    #[test]
    fn shuffle_keeps_every_question() {
        let set = numbered(10);
        let shuffled = set.clone().shuffled(&mut ShuffleSeed::Fixed(7).rng());
        assert_eq!(shuffled.len(), 10);
        let mut a = prompts(&set);
        let mut b = prompts(&shuffled);
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let a = numbered(8).shuffled(&mut ShuffleSeed::Fixed(42).rng());
        let b = numbered(8).shuffled(&mut ShuffleSeed::Fixed(42).rng());
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_changes_order() {
        // A 6-element permutation is the identity with probability 1/720;
        // five tries make a false failure vanishingly unlikely.
        let original = prompts(&numbered(6));
        let changed = (0..5).any(|_| {
            let shuffled = numbered(6).shuffled(&mut ShuffleSeed::Entropy.rng());
            prompts(&shuffled) != original
        });
        assert!(changed, "shuffled questions kept the original order");
    }

    #[test]
    fn shuffle_reaches_every_first_position() {
        let mut seen = [false; 4];
        for seed in 0..200 {
            let first = numbered(4)
                .shuffled(&mut ShuffleSeed::Fixed(seed).rng())
                .into_iter()
                .next()
                .unwrap();
            let idx: usize = first.answer().parse().unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
