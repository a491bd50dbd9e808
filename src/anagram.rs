//! Word-list loading and anagram counting over an [`OrderedSet`].
//!
//! This is the consumer side of the crate: it only needs the trees' insert
//! and exact-match lookup. The trees normalize nothing; a caller that wants
//! case-insensitive matching lowercases its keys before inserting and before
//! querying, as the `anagrams` binary does.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::OrderedSet;

/// A failure while reading a word list. The trees themselves have no error
/// channel; everything here belongs to the file boundary.
#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("word list not found: {0}")]
    NotFound(String),
    #[error("word list could not be read: {0}")]
    BadInput(#[source] io::Error),
}

/// Reads a line-oriented word list: one word per line, trimmed of
/// surrounding whitespace, blank lines skipped.
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordlistError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            WordlistError::NotFound(path.display().to_string())
        } else {
            WordlistError::BadInput(e)
        }
    })?;

    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(WordlistError::BadInput)?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Bulk-loads a word list into a fresh set and returns the number of words
/// inserted.
pub fn load_words<S, P>(set: &mut S, path: P) -> Result<usize, WordlistError>
where
    S: OrderedSet<String>,
    P: AsRef<Path>,
{
    let words = read_words(path)?;
    let count = words.len();
    for word in words {
        set.insert(word);
    }
    log::debug!("loaded {} words", count);
    Ok(count)
}

/// Counts the distinct permutations of `word` that are present in the set.
///
/// Permutations starting with a letter already tried at the same recursion
/// level are skipped, so repeated letters are not counted twice: "aab" has
/// at most 3 distinct permutations, not 6.
///
/// # Examples
///
/// ```
/// use bbtree::anagram::count_anagrams;
/// use bbtree::AvlSet;
///
/// let mut set = AvlSet::new();
/// for word in ["act", "cat", "tac"] {
///     set.insert(word.to_string());
/// }
///
/// assert_eq!(count_anagrams(&set, "act"), 3);
/// assert_eq!(count_anagrams(&set, "dog"), 0);
/// ```
pub fn count_anagrams<S>(set: &S, word: &str) -> usize
where
    S: OrderedSet<String>,
{
    let letters: Vec<char> = word.chars().collect();
    let mut prefix = String::with_capacity(word.len());
    permutations(set, &letters, &mut prefix)
}

fn permutations<S>(set: &S, rest: &[char], prefix: &mut String) -> usize
where
    S: OrderedSet<String>,
{
    if rest.len() <= 1 {
        let len = prefix.len();
        prefix.extend(rest);
        let hit = set.contains(prefix);
        prefix.truncate(len);
        return hit as usize;
    }

    let mut total = 0;
    for (i, &letter) in rest.iter().enumerate() {
        // A letter already tried at this level would regenerate the same
        // permutations.
        if rest[..i].contains(&letter) {
            continue;
        }
        let remaining: Vec<char> =
            rest[..i].iter().chain(&rest[i + 1..]).copied().collect();
        prefix.push(letter);
        total += permutations(set, &remaining, prefix);
        prefix.pop();
    }
    total
}

/// Returns the word with the most anagrams in the set, along with its count,
/// or `None` if `words` is empty.
pub fn most_anagrams<S, I>(set: &S, words: I) -> Option<(String, usize)>
where
    S: OrderedSet<String>,
    I: IntoIterator<Item = String>,
{
    words
        .into_iter()
        .map(|word| {
            let count = count_anagrams(set, &word);
            (word, count)
        })
        .max_by_key(|&(_, count)| count)
}

#[cfg(test)]
mod test {
    use super::{count_anagrams, most_anagrams};
    use crate::{AvlSet, OrderedSet, RbSet};

    fn sample<S: OrderedSet<String> + Default>(words: &[&str]) -> S {
        let mut set = S::default();
        for word in words {
            set.insert(word.to_string());
        }
        set
    }

    #[test]
    fn counts_every_present_permutation() {
        let set: AvlSet<String> = sample(&["act", "cat", "tac", "unrelated"]);
        assert_eq!(count_anagrams(&set, "act"), 3);
        assert_eq!(count_anagrams(&set, "cat"), 3);
    }

    #[test]
    fn repeated_letters_are_not_double_counted() {
        let set: RbSet<String> = sample(&["aab", "aba", "baa"]);
        assert_eq!(count_anagrams(&set, "aab"), 3);

        let narrow: RbSet<String> = sample(&["aba"]);
        assert_eq!(count_anagrams(&narrow, "aab"), 1);
    }

    #[test]
    fn missing_words_count_zero() {
        let set: AvlSet<String> = sample(&["act"]);
        assert_eq!(count_anagrams(&set, "dog"), 0);
        assert_eq!(count_anagrams(&set, ""), 0);
    }

    #[test]
    fn single_letter_word() {
        let set: AvlSet<String> = sample(&["a"]);
        assert_eq!(count_anagrams(&set, "a"), 1);
        assert_eq!(count_anagrams(&set, "b"), 0);
    }

    #[test]
    fn most_anagrams_picks_the_maximum() {
        let set: AvlSet<String> = sample(&["act", "cat", "tac", "dog"]);
        let words = ["dog", "act"].iter().map(|w| w.to_string());
        assert_eq!(most_anagrams(&set, words), Some(("act".to_string(), 3)));

        let empty: Vec<String> = Vec::new();
        assert_eq!(most_anagrams(&set, empty), None);
    }
}
