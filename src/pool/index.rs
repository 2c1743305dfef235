//! The word pool and its letter indices

use super::PoolError;
use crate::core::sets::{difference, intersect, union};
use crate::core::{Feedback, Word};
use rand::Rng;
use rand::seq::IteratorRandom;
use rustc_hash::{FxHashMap, FxHashSet};

type WordSet = FxHashSet<Word>;
type LetterIndex = FxHashMap<char, WordSet>;

/// Admissible words for one puzzle, indexed by letter and by position
///
/// The pool only ever shrinks. Both indices are caches over `words` and are rebuilt
/// together whenever `words` changes.
#[derive(Debug, Clone)]
pub struct WordPool {
    word_length: usize,
    words: WordSet,
    /// `position_index[i][c]`: words with `c` at position `i`
    position_index: Vec<LetterIndex>,
    /// `letter_index[c]`: words containing `c` anywhere
    letter_index: LetterIndex,
    /// Letters confirmed by a present or correct signal
    protected_letters: FxHashSet<char>,
}

impl WordPool {
    /// Build a pool from an initial word list
    ///
    /// Duplicates collapse into one entry. Every word must have the same length as
    /// the first one.
    ///
    /// # Errors
    /// - `EmptyPool` if `words` yields nothing
    /// - `LengthMismatch` if any word differs in length from the first
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::pool::WordPool;
    ///
    /// let mut pool = WordPool::from_strs(&["crane", "slate", "irate"]).unwrap();
    /// pool.process_external_result("crane", "xggxg").unwrap();
    /// assert_eq!(pool.len(), 1);
    /// assert_eq!(pool.words()[0].text(), "irate");
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, PoolError> {
        let words: Vec<Word> = words.into_iter().collect();
        let word_length = words.first().ok_or(PoolError::EmptyPool)?.len();

        if let Some(bad) = words.iter().find(|w| w.len() != word_length) {
            return Err(PoolError::LengthMismatch {
                subject: "Word",
                expected: word_length,
                found: bad.len(),
            });
        }

        let mut pool = Self {
            word_length,
            words: words.into_iter().collect(),
            position_index: Vec::new(),
            letter_index: LetterIndex::default(),
            protected_letters: FxHashSet::default(),
        };
        pool.rebuild_indices();
        Ok(pool)
    }

    /// Build a pool from raw strings, validating each one as a [`Word`]
    ///
    /// # Errors
    /// `InvalidWord` for the first string that is not a word, otherwise as [`WordPool::new`].
    pub fn from_strs<S: AsRef<str>>(words: &[S]) -> Result<Self, PoolError> {
        let words = words
            .iter()
            .map(|w| Word::new(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    /// Number of words still admissible
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True once feedback has excluded every word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length shared by every word in the pool
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Snapshot of the current pool, sorted alphabetically
    #[must_use]
    pub fn words(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self.words.iter().cloned().collect();
        words.sort_unstable();
        words
    }

    /// Snapshot of the letters shielded from pool-wide elimination
    #[must_use]
    pub fn protected_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.protected_letters.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// All words containing `letter` anywhere
    ///
    /// # Errors
    /// `EmptyPool` if the pool is exhausted.
    pub fn contains_any(&self, letter: char) -> Result<WordSet, PoolError> {
        self.ensure_not_empty()?;
        Ok(self.letter_index.get(&letter).cloned().unwrap_or_default())
    }

    /// All words with `letter` at `position`
    ///
    /// # Errors
    /// - `EmptyPool` if the pool is exhausted
    /// - `OutOfRange` if `position >= word_length`
    pub fn contains_at_index(&self, letter: char, position: usize) -> Result<WordSet, PoolError> {
        self.ensure_not_empty()?;
        let slot = self
            .position_index
            .get(position)
            .ok_or(PoolError::OutOfRange {
                position,
                length: self.word_length,
            })?;
        Ok(slot.get(&letter).cloned().unwrap_or_default())
    }

    /// Drop every word that contains `letter`
    ///
    /// # Errors
    /// `EmptyPool` if the pool is already exhausted.
    pub fn remove_letter(&mut self, letter: char) -> Result<(), PoolError> {
        let doomed = self.contains_any(letter)?;
        if !doomed.is_empty() {
            self.words = difference(&[&self.words, &doomed]);
            self.rebuild_indices();
        }
        Ok(())
    }

    /// Apply one round of feedback given as raw strings
    ///
    /// `feedback` uses the symbols accepted by [`Feedback::parse`], one per letter.
    ///
    /// # Errors
    /// - `LengthMismatch` if the feedback or guess length differs from the pool's
    /// - `InvalidSymbol` for an unrecognized feedback symbol
    /// - `InvalidWord` if the guess is not a word
    /// - `EmptyPool` if the pool is already exhausted
    pub fn process_external_result(&mut self, guess: &str, feedback: &str) -> Result<(), PoolError> {
        let symbols = feedback.chars().count();
        if symbols != self.word_length {
            return Err(PoolError::LengthMismatch {
                subject: "Feedback",
                expected: self.word_length,
                found: symbols,
            });
        }
        let feedback = Feedback::parse(feedback)?;

        let guess = Word::new(guess)?;
        self.apply_feedback(&guess, &feedback)
    }

    /// Apply one round of feedback
    ///
    /// Stages run in a fixed order because each relies on what the previous one
    /// protected or removed:
    /// 1. Letters marked present or correct become protected
    /// 2. Absent: unprotected letters are removed pool-wide, and every absent letter
    ///    is removed from its own position
    /// 3. Correct: keep words with each letter at its position
    /// 4. Present: keep words with each letter somewhere other than its position
    ///
    /// Stages 3 and 4 leave the pool alone when their combined constraint matches
    /// nothing. Once the pool is exhausted the remaining stages are skipped.
    ///
    /// # Errors
    /// - `LengthMismatch` if `guess` or `feedback` differs from the pool's word length
    /// - `EmptyPool` if the pool is already exhausted
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &[Feedback]) -> Result<(), PoolError> {
        if feedback.len() != self.word_length {
            return Err(PoolError::LengthMismatch {
                subject: "Feedback",
                expected: self.word_length,
                found: feedback.len(),
            });
        }
        if guess.len() != self.word_length {
            return Err(PoolError::LengthMismatch {
                subject: "Guess",
                expected: self.word_length,
                found: guess.len(),
            });
        }
        self.ensure_not_empty()?;

        let letters = guess.letters();
        let mut absent = Vec::new();
        let mut present = Vec::new();
        let mut correct = Vec::new();
        for (i, &verdict) in feedback.iter().enumerate() {
            match verdict {
                Feedback::Absent => absent.push(i),
                Feedback::Present => present.push(i),
                Feedback::Correct => correct.push(i),
            }
        }
        self.protected_letters
            .extend(present.iter().chain(&correct).map(|&i| letters[i]));

        if !absent.is_empty() {
            self.apply_absent(letters, &absent);
        }
        if !correct.is_empty() && !self.is_empty() {
            self.apply_correct(letters, &correct);
        }
        if !present.is_empty() && !self.is_empty() {
            self.apply_present(letters, &present);
        }
        Ok(())
    }

    fn apply_absent(&mut self, letters: &[char], positions: &[usize]) {
        let unprotected: FxHashSet<char> = positions
            .iter()
            .map(|&i| letters[i])
            .filter(|c| !self.protected_letters.contains(c))
            .collect();

        let mut doomed: Vec<&WordSet> = unprotected
            .iter()
            .filter_map(|c| self.letter_index.get(c))
            .collect();
        // Absent letters never sit at their own position, protected or not
        doomed.extend(
            positions
                .iter()
                .filter_map(|&i| self.position_index[i].get(&letters[i])),
        );
        if doomed.is_empty() {
            return;
        }

        let doomed = union(&doomed);
        let remaining = difference(&[&self.words, &doomed]);
        if remaining.len() != self.words.len() {
            self.words = remaining;
            self.rebuild_indices();
        }
    }

    fn apply_correct(&mut self, letters: &[char], positions: &[usize]) {
        let Some(placed) = positions
            .iter()
            .map(|&i| self.position_index[i].get(&letters[i]))
            .collect::<Option<Vec<_>>>()
        else {
            return;
        };

        let must_have = intersect(&placed);
        self.narrow_to(&must_have);
    }

    fn apply_present(&mut self, letters: &[char], positions: &[usize]) {
        let misplaced: Vec<WordSet> = positions
            .iter()
            .map(|&i| self.elsewhere(letters[i], i))
            .collect();
        let misplaced: Vec<&WordSet> = misplaced.iter().collect();

        let must_have = intersect(&misplaced);
        self.narrow_to(&must_have);
    }

    /// Words containing `letter`, but not at `position`
    fn elsewhere(&self, letter: char, position: usize) -> WordSet {
        let Some(anywhere) = self.letter_index.get(&letter) else {
            return WordSet::default();
        };
        match self.position_index[position].get(&letter) {
            Some(here) => difference(&[anywhere, here]),
            None => anywhere.clone(),
        }
    }

    /// Intersect the pool with `must_have`, unless that would match nothing
    fn narrow_to(&mut self, must_have: &WordSet) {
        if must_have.is_empty() {
            return;
        }
        let narrowed = intersect(&[&self.words, must_have]);
        if narrowed.len() != self.words.len() {
            self.words = narrowed;
            self.rebuild_indices();
        }
    }

    /// Pick a uniformly random word using the thread-local generator
    ///
    /// # Errors
    /// `EmptyPool` if no word qualifies.
    pub fn random_word(&self, must_contain: &[char]) -> Result<Word, PoolError> {
        self.random_word_with(&mut rand::rng(), must_contain)
    }

    /// Pick a uniformly random word containing every letter in `must_contain`
    ///
    /// # Errors
    /// `EmptyPool` if the pool is exhausted or no word contains all the letters.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_filter::pool::WordPool;
    ///
    /// let pool = WordPool::from_strs(&["crane", "toast", "slate"]).unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    ///
    /// let word = pool.random_word_with(&mut rng, &['e']).unwrap();
    /// assert!(word.has_letter('e'));
    /// assert!(pool.random_word_with(&mut rng, &['z']).is_err());
    /// ```
    pub fn random_word_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        must_contain: &[char],
    ) -> Result<Word, PoolError> {
        self.ensure_not_empty()?;

        let chosen = if must_contain.is_empty() {
            self.words.iter().choose(rng).cloned()
        } else {
            must_contain
                .iter()
                .map(|c| self.letter_index.get(c))
                .collect::<Option<Vec<_>>>()
                .and_then(|sets| intersect(&sets).into_iter().choose(rng))
        };

        chosen.ok_or(PoolError::EmptyPool)
    }

    fn ensure_not_empty(&self) -> Result<(), PoolError> {
        if self.words.is_empty() {
            Err(PoolError::EmptyPool)
        } else {
            Ok(())
        }
    }

    /// Recompute both indices from `words`
    fn rebuild_indices(&mut self) {
        self.position_index = vec![LetterIndex::default(); self.word_length];
        self.letter_index = LetterIndex::default();

        for word in &self.words {
            for (slot, &letter) in self.position_index.iter_mut().zip(word.letters()) {
                slot.entry(letter).or_default().insert(word.clone());
                self.letter_index
                    .entry(letter)
                    .or_default()
                    .insert(word.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(words: &[&str]) -> WordPool {
        WordPool::from_strs(words).unwrap()
    }

    fn texts(pool: &WordPool) -> Vec<String> {
        pool.words().iter().map(|w| w.text().to_string()).collect()
    }

    fn word_set(words: &[&str]) -> WordSet {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    /// Indices describe exactly the current pool
    fn assert_consistent(pool: &WordPool) {
        assert_eq!(pool.len(), pool.words.len());
        assert_eq!(pool.position_index.len(), pool.word_length);

        for (i, slot) in pool.position_index.iter().enumerate() {
            let total: usize = slot.values().map(WordSet::len).sum();
            assert_eq!(total, pool.words.len(), "position {i} is not a partition");
            for (letter, words) in slot {
                assert!(words.iter().all(|w| w.letter_at(i) == Some(*letter)));
                assert!(words.iter().all(|w| pool.words.contains(w)));
            }
        }

        for word in &pool.words {
            for letter in word.letters() {
                assert!(pool.letter_index[letter].contains(word));
            }
        }
        for (letter, words) in &pool.letter_index {
            assert!(words.iter().all(|w| w.has_letter(*letter)));
            assert!(words.iter().all(|w| pool.words.contains(w)));
        }
    }

    #[test]
    fn construction_deduplicates_and_indexes() {
        let p = pool(&["crane", "slate", "crane", "irate"]);

        assert_eq!(p.len(), 3);
        assert_eq!(p.word_length(), 5);
        assert_eq!(texts(&p), ["crane", "irate", "slate"]);
        assert_consistent(&p);
    }

    #[test]
    fn construction_round_trips_words() {
        let input = ["beast", "toast", "roast", "crate"];
        let p = pool(&input);

        let mut expected: Vec<String> = input.iter().map(ToString::to_string).collect();
        expected.sort();
        assert_eq!(texts(&p), expected);
    }

    #[test]
    fn construction_rejects_mixed_lengths() {
        let err = WordPool::from_strs(&["crane", "slat", "irate"]).unwrap_err();
        assert_eq!(
            err,
            PoolError::LengthMismatch {
                subject: "Word",
                expected: 5,
                found: 4
            }
        );
    }

    #[test]
    fn construction_rejects_empty_input() {
        let empty: [&str; 0] = [];
        assert_eq!(WordPool::from_strs(&empty).unwrap_err(), PoolError::EmptyPool);
    }

    #[test]
    fn construction_rejects_invalid_words() {
        assert!(matches!(
            WordPool::from_strs(&["crane", "cr4ne"]),
            Err(PoolError::InvalidWord(_))
        ));
    }

    #[test]
    fn contains_any_uses_letter_index() {
        let p = pool(&["crane", "slate", "toast"]);

        assert_eq!(p.contains_any('a').unwrap(), word_set(&["crane", "slate", "toast"]));
        assert_eq!(p.contains_any('t').unwrap(), word_set(&["slate", "toast"]));
        assert!(p.contains_any('z').unwrap().is_empty());
    }

    #[test]
    fn contains_at_index_uses_position_index() {
        let p = pool(&["crane", "slate", "toast"]);

        assert_eq!(
            p.contains_at_index('a', 2).unwrap(),
            word_set(&["crane", "slate", "toast"])
        );
        assert_eq!(p.contains_at_index('t', 0).unwrap(), word_set(&["toast"]));
        assert!(p.contains_at_index('z', 0).unwrap().is_empty());
    }

    #[test]
    fn contains_at_index_rejects_out_of_range() {
        let p = pool(&["crane"]);
        assert_eq!(
            p.contains_at_index('c', 5).unwrap_err(),
            PoolError::OutOfRange {
                position: 5,
                length: 5
            }
        );
    }

    #[test]
    fn returned_sets_do_not_alias_the_pool() {
        let p = pool(&["crane", "slate"]);

        let mut with_a = p.contains_any('a').unwrap();
        with_a.clear();

        assert_eq!(p.len(), 2);
        assert_eq!(p.contains_any('a').unwrap().len(), 2);
    }

    #[test]
    fn remove_letter_drops_words_and_reindexes() {
        let mut p = pool(&["crane", "slate", "toast", "beast"]);

        p.remove_letter('e').unwrap();

        assert_eq!(texts(&p), ["toast"]);
        assert!(p.contains_any('e').unwrap().is_empty());
        assert_consistent(&p);
    }

    #[test]
    fn remove_missing_letter_is_a_no_op() {
        let mut p = pool(&["crane", "slate"]);
        p.remove_letter('z').unwrap();
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn all_correct_feedback_leaves_only_the_guess() {
        let mut p = pool(&["abcde", "abcxy", "zzzzz"]);

        p.process_external_result("abcde", "ggggg").unwrap();

        assert_eq!(texts(&p), ["abcde"]);
        assert_consistent(&p);
    }

    #[test]
    fn confirmed_letter_survives_its_own_absent_signal() {
        // Target "ample": one 'p' is green, the other comes back absent
        let mut p = pool(&["apple", "ample", "maple", "ankle"]);

        p.process_external_result("apple", "gxggg").unwrap();

        assert_eq!(texts(&p), ["ample"]);
        assert_eq!(p.protected_letters(), ['a', 'e', 'l', 'p']);
        assert_consistent(&p);
    }

    #[test]
    fn present_and_absent_for_the_same_letter() {
        // Target "abide": the first 'e' is yellow, the second is absent
        let mut p = pool(&["abide", "oxide", "spend", "cider", "eerie"]);

        p.process_external_result("speed", "xxyxy").unwrap();

        assert_eq!(texts(&p), ["abide", "oxide"]);
        assert_consistent(&p);
    }

    #[test]
    fn unconfirmed_absent_letter_empties_the_pool() {
        // Every word ends in 'e', and 'e' is never confirmed by this guess
        let mut p = pool(&["apple", "angle", "ankle"]);

        p.process_external_result("apple", "gxgyx").unwrap();

        assert!(p.is_empty());
        assert_eq!(p.protected_letters(), ['a', 'l', 'p']);

        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(p.contains_any('a').unwrap_err(), PoolError::EmptyPool);
        assert_eq!(p.contains_at_index('a', 0).unwrap_err(), PoolError::EmptyPool);
        assert_eq!(p.random_word_with(&mut rng, &[]).unwrap_err(), PoolError::EmptyPool);
        assert_eq!(p.random_word_with(&mut rng, &['a']).unwrap_err(), PoolError::EmptyPool);
    }

    #[test]
    fn exhausted_pool_rejects_queries() {
        let mut p = pool(&["crane", "slate"]);
        p.remove_letter('a').unwrap();
        assert!(p.is_empty());

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(p.contains_any('c').unwrap_err(), PoolError::EmptyPool);
        assert_eq!(p.contains_at_index('c', 0).unwrap_err(), PoolError::EmptyPool);
        assert_eq!(p.random_word_with(&mut rng, &[]).unwrap_err(), PoolError::EmptyPool);
        assert_eq!(p.remove_letter('c').unwrap_err(), PoolError::EmptyPool);
        assert_eq!(
            p.process_external_result("crane", "xxxxx").unwrap_err(),
            PoolError::EmptyPool
        );
    }

    #[test]
    fn present_requires_letter_elsewhere() {
        let mut p = pool(&["crane", "react", "trace", "toast"]);

        // 'r' present at position 0: needs an 'r' but not first
        p.process_external_result("rumpy", "yxxxx").unwrap();

        assert_eq!(texts(&p), ["crane", "trace"]);
        assert_consistent(&p);
    }

    #[test]
    fn contradictory_correct_signal_leaves_pool_unchanged() {
        let mut p = pool(&["crane", "slate"]);

        // No word has 'q' at position 0, so the correct stage matches nothing
        p.process_external_result("qwzyx", "gxxxx").unwrap();

        assert_eq!(texts(&p), ["crane", "slate"]);
    }

    #[test]
    fn reapplying_satisfied_feedback_is_idempotent() {
        let mut p = pool(&["abide", "oxide", "spend", "cider", "eerie"]);

        p.process_external_result("speed", "xxyxy").unwrap();
        let after_first = texts(&p);
        p.process_external_result("speed", "xxyxy").unwrap();

        assert_eq!(texts(&p), after_first);
    }

    #[test]
    fn feedback_only_shrinks_the_pool() {
        let mut p = pool(&["crane", "slate", "irate", "toast", "beast", "roast"]);
        let before = p.words();

        p.process_external_result("stare", "yyxxx").unwrap();

        assert!(p.words().iter().all(|w| before.contains(w)));
        assert!(p.len() <= before.len());
        assert_consistent(&p);
    }

    #[test]
    fn scored_feedback_always_keeps_the_target() {
        let words = [
            "crane", "slate", "irate", "toast", "beast", "roast", "apple", "ample", "maple",
            "speed", "abide", "eerie", "geese", "llama",
        ];
        for target in words {
            for guess in words {
                let mut p = pool(&words);
                let target = Word::new(target).unwrap();
                let guess = Word::new(guess).unwrap();

                p.apply_feedback(&guess, &Feedback::score(&guess, &target))
                    .unwrap();

                assert!(p.contains(&target), "{guess} dropped {target}");
                if guess != target {
                    assert!(!p.contains(&guess), "{guess} survived against {target}");
                }
                assert_consistent(&p);
            }
        }
    }

    #[test]
    fn protection_carries_into_later_rounds() {
        let mut p = pool(&["ample", "amble", "ankle", "maple"]);

        // Round 1 confirms 'p'
        p.process_external_result("pwxyz", "yxxxx").unwrap();
        assert!(p.protected_letters().contains(&'p'));
        assert_eq!(texts(&p), ["ample", "maple"]);

        // Round 2 reports 'p' absent at position 0; it must not wipe every 'p' word
        p.process_external_result("pzzzz", "xxxxx").unwrap();
        assert_eq!(texts(&p), ["ample", "maple"]);
    }

    #[test]
    fn feedback_length_mismatch_is_rejected_without_mutation() {
        let mut p = pool(&["crane", "slate"]);

        assert_eq!(
            p.process_external_result("crane", "ggg").unwrap_err(),
            PoolError::LengthMismatch {
                subject: "Feedback",
                expected: 5,
                found: 3
            }
        );
        assert_eq!(p.len(), 2);
        assert!(p.protected_letters().is_empty());
    }

    #[test]
    fn guess_length_mismatch_is_rejected_without_mutation() {
        let mut p = pool(&["crane", "slate"]);

        assert_eq!(
            p.process_external_result("cranes", "ggggg").unwrap_err(),
            PoolError::LengthMismatch {
                subject: "Guess",
                expected: 5,
                found: 6
            }
        );
        assert_eq!(p.len(), 2);
        assert!(p.protected_letters().is_empty());
    }

    #[test]
    fn invalid_symbol_is_rejected_without_mutation() {
        let mut p = pool(&["crane", "slate"]);

        let err = p.process_external_result("crane", "ggqgg").unwrap_err();

        assert!(matches!(
            err,
            PoolError::InvalidSymbol(ref bad) if bad.position == 2 && bad.symbol == 'q'
        ));
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn random_word_comes_from_the_pool() {
        let p = pool(&["crane", "slate", "toast"]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let word = p.random_word_with(&mut rng, &[]).unwrap();
            assert!(p.contains(&word));
        }
    }

    #[test]
    fn random_word_honours_required_letters() {
        let p = pool(&["crane", "slate", "toast", "beast"]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let word = p.random_word_with(&mut rng, &['e']).unwrap();
            assert!(word.has_letter('e'));

            let word = p.random_word_with(&mut rng, &['s', 'e']).unwrap();
            assert!(word.has_letter('s') && word.has_letter('e'));
        }
    }

    #[test]
    fn random_word_reaches_every_candidate() {
        let p = pool(&["crane", "slate", "toast"]);
        let mut rng = StdRng::seed_from_u64(3);

        let seen: FxHashSet<Word> = (0..200)
            .map(|_| p.random_word_with(&mut rng, &[]).unwrap())
            .collect();

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn random_word_without_match_is_empty_pool() {
        let p = pool(&["toast", "roast"]);
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(
            p.random_word_with(&mut rng, &['e']).unwrap_err(),
            PoolError::EmptyPool
        );
        assert_eq!(
            p.random_word_with(&mut rng, &['t', 'c']).unwrap_err(),
            PoolError::EmptyPool
        );
    }

    #[test]
    fn random_word_with_thread_rng() {
        let p = pool(&["crane"]);
        assert_eq!(p.random_word(&[]).unwrap().text(), "crane");
    }
}
