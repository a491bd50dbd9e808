//! Interactive anagram counter over a word list.
//!
//! Builds an AVL or red-black tree from a line-oriented word file (argument,
//! default `words.txt`), then answers anagram queries from the console. All
//! matching is case-insensitive: words are lowercased before insertion and
//! before querying, since the trees themselves do no normalization.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use bbtree::anagram::{count_anagrams, most_anagrams, read_words, WordlistError};
use bbtree::{AvlSet, OrderedSet, RbSet};

use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("logger already initialized");

    let path = std::env::args().nth(1).unwrap_or_else(|| "words.txt".to_string());

    if let Err(e) = run(&path) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(path: &str) -> Result<(), WordlistError> {
    println!("Which data structure do you wish to use?");
    println!("1.) AVL tree");
    println!("2.) Red-black tree");
    println!("3.) Exit");

    match prompt_choice(3) {
        1 => {
            let set = build(AvlSet::new(), "AVL tree", path)?;
            menu(&set)
        }
        2 => {
            let set = build(RbSet::new(), "red-black tree", path)?;
            menu(&set)
        }
        _ => Ok(()),
    }
}

/// Bulk-loads the word list, lowercased, reporting the elapsed wall-clock
/// time.
fn build<S: OrderedSet<String>>(
    mut set: S,
    label: &str,
    path: &str,
) -> Result<S, WordlistError> {
    println!("Please wait, the {label} is being built.");
    let start = Instant::now();
    for word in read_words(path)? {
        set.insert(word.to_lowercase());
    }
    info!("{} built with {} words in {:.2?}", label, set.len(), start.elapsed());
    Ok(set)
}

fn menu<S: OrderedSet<String>>(set: &S) -> Result<(), WordlistError> {
    loop {
        println!();
        println!("What would you like to do?");
        println!("1.) Find the number of anagrams for a word");
        println!("2.) Find the word with the most anagrams in a file");
        println!("3.) Exit");

        match prompt_choice(3) {
            1 => {
                println!("Enter the word you want to use:");
                let word = match read_line() {
                    Some(word) => word.to_lowercase(),
                    None => return Ok(()),
                };
                let start = Instant::now();
                let count = count_anagrams(set, &word);
                println!("{word} has {count} anagrams");
                info!("query answered in {:.2?}", start.elapsed());
            }
            2 => {
                println!("Enter the name of the file you want to use:");
                let name = match read_line() {
                    Some(name) => name,
                    None => return Ok(()),
                };
                match read_words(&name) {
                    Ok(words) => {
                        let lowered = words.into_iter().map(|w| w.to_lowercase());
                        match most_anagrams(set, lowered) {
                            Some((word, count)) => {
                                println!("The word with the most anagrams is: {word} ({count})")
                            }
                            None => println!("The file contains no words"),
                        }
                    }
                    Err(e @ WordlistError::NotFound(_)) => println!("Sorry, {e}"),
                    Err(e) => return Err(e),
                }
            }
            _ => return Ok(()),
        }
    }
}

/// Reads menu input until it is a digit within range. End of input counts
/// as the exit choice.
fn prompt_choice(max: u32) -> u32 {
    loop {
        let line = match read_line() {
            Some(line) => line,
            None => return max,
        };
        match line.parse::<u32>() {
            Ok(n) if (1..=max).contains(&n) => return n,
            Ok(_) => println!("Sorry, that is not one of the available choices."),
            Err(_) => println!("Sorry, please enter the digit of the desired choice."),
        }
    }
}

/// Reads one trimmed line from stdin, or `None` at end of input.
fn read_line() -> Option<String> {
    print!("> ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
