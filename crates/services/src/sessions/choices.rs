use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::{CHOICE_COUNT, Question};

/// The four answer strings shown for a question, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceSet([String; CHOICE_COUNT]);

impl ChoiceSet {
    /// Uniformly shuffle the answer and distractors of `question`.
    pub fn shuffled<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Self {
        let mut choices = question.choices();
        choices.shuffle(rng);
        Self(choices)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn position(&self, choice: &str) -> Option<usize> {
        self.0.iter().position(|c| c == choice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn question() -> Question {
        Question::parse("a.png", "A", ["B", "C", "D"]).unwrap()
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let q = question();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let set = ChoiceSet::shuffled(&q, &mut rng);
            let mut sorted: Vec<_> = set.iter().collect();
            sorted.sort_unstable();
            assert_eq!(sorted, ["A", "B", "C", "D"]);
            assert_eq!(set.iter().filter(|c| *c == "A").count(), 1);
        }
    }

    #[test]
    fn answer_lands_in_every_slot() {
        let q = question();
        let mut rng = StdRng::seed_from_u64(3);
        let mut slots: HashMap<usize, usize> = HashMap::new();
        for _ in 0..4000 {
            let set = ChoiceSet::shuffled(&q, &mut rng);
            *slots.entry(set.position("A").unwrap()).or_default() += 1;
        }
        assert_eq!(slots.len(), CHOICE_COUNT);
        // 1000 expected per slot; bounds are far outside sampling noise.
        assert!(slots.values().all(|&n| (800..1200).contains(&n)), "{slots:?}");
    }

    #[test]
    fn lookup_by_index() {
        let set = ChoiceSet::shuffled(&question(), &mut StdRng::seed_from_u64(1));
        let first = set.get(0).unwrap().to_owned();
        assert_eq!(set.position(&first), Some(0));
        assert!(set.get(CHOICE_COUNT).is_none());
        assert_eq!(set.len(), 4);
    }
}
