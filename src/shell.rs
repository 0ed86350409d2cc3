//! Command interpreter for driving a [`FenwickTree`] interactively.
//!
//! The interpreter is a function from (tree, command) to output: it never
//! reads or writes the console. A driver (see `src/bin/fensum.rs`) owns the
//! read loop and prints whatever [`execute`] returns.
//!
//! Command syntax, one command per line:
//!
//! ```text
//! 1 <value> <index>    add <value> <index>    add value at index
//! 2 <index>            sum <index>            prefix sum up to index
//! 3                    quit                   stop
//!                      range <start> <end>    inclusive range sum
//!                      value <index>          value at index
//!                      print                  dump the tree
//!                      init <size>            reset with `size` positions
//! ```
//!
//! Numbers are signed so that a negative index reaches the validity check
//! and is reported, rather than failing to parse.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::fenwick::FenwickTree;

/// Menu shown by the driver.
pub const MENU: &str = "1. Add a number at an index\n2. Query sum\n3. Quit";

/// A parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reset to `size` zeroed positions (capacity `size + 1`).
    Init {
        /// Number of positions.
        size: i64,
    },
    /// Add `value` at `index`.
    Add {
        /// Target position.
        index: i64,
        /// Amount to add.
        value: i64,
    },
    /// Prefix sum over `1..=index`.
    Sum {
        /// Last position of the prefix.
        index: i64,
    },
    /// Sum over `start..=end`.
    Range {
        /// First position.
        start: i64,
        /// Last position.
        end: i64,
    },
    /// Value stored at `index`.
    Value {
        /// Position to read.
        index: i64,
    },
    /// Dump the tree.
    Print,
    /// Stop the session.
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let Some(head) = tokens.next() else {
            return Err(Error::Parse("empty command".to_string()));
        };
        let mut number = |what: &str| -> Result<i64> {
            let token = tokens
                .next()
                .ok_or_else(|| Error::Parse(format!("{head}: missing {what}")))?;
            token
                .parse()
                .map_err(|_| Error::Parse(format!("{head}: bad {what} '{token}'")))
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "1" | "add" => {
                let value = number("value")?;
                let index = number("index")?;
                Command::Add { index, value }
            }
            "2" | "sum" => Command::Sum {
                index: number("index")?,
            },
            "3" | "quit" | "q" => Command::Quit,
            "range" => {
                let start = number("start")?;
                let end = number("end")?;
                Command::Range { start, end }
            }
            "value" => Command::Value {
                index: number("index")?,
            },
            "print" => Command::Print,
            "init" => Command::Init {
                size: number("size")?,
            },
            _ => return Err(Error::Parse(format!("unknown command '{head}'"))),
        };

        if let Some(extra) = tokens.next() {
            return Err(Error::Parse(format!("{head}: unexpected '{extra}'")));
        }
        Ok(command)
    }
}

/// Result of executing one [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// The tree was reset to `capacity` slots.
    Initialized {
        /// New capacity, sentinel included.
        capacity: usize,
    },
    /// An update was applied.
    Updated,
    /// A prefix or range sum.
    Sum(i64),
    /// A point value.
    Value(i64),
    /// The command named an index outside `[1, capacity)`; nothing changed.
    InvalidIndex(i64),
    /// `init` was given a negative or unallocatable size; nothing changed.
    InvalidSize(i64),
    /// Tree dump.
    Dump(String),
    /// The session should end.
    Quit,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Initialized { capacity } => {
                write!(f, "initialized {} elements", capacity - 1)
            }
            Output::Updated => write!(f, "updated"),
            Output::Sum(sum) => write!(f, "sum = {sum}"),
            Output::Value(value) => write!(f, "value = {value}"),
            Output::InvalidIndex(index) => write!(f, "incorrect index given: {index}"),
            Output::InvalidSize(size) => write!(f, "incorrect size given: {size}"),
            Output::Dump(dump) => f.write_str(dump),
            Output::Quit => write!(f, "bye"),
        }
    }
}

/// Parse the element count the driver asks for before the first command.
pub fn parse_size(line: &str) -> Result<i64> {
    let line = line.trim();
    line.parse()
        .map_err(|_| Error::Parse(format!("bad element count '{line}'")))
}

fn checked_index(tree: &FenwickTree, index: i64) -> Option<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&idx| tree.is_valid_index(idx))
}

/// Apply `command` to `tree`.
///
/// An invalid index produces [`Output::InvalidIndex`] and leaves `tree`
/// unchanged. So does a size that is negative or cannot be allocated, which
/// produces [`Output::InvalidSize`].
pub fn execute(tree: &mut FenwickTree, command: Command) -> Output {
    match command {
        Command::Init { size } => {
            let Some(capacity) = usize::try_from(size)
                .ok()
                .and_then(|size| size.checked_add(1))
            else {
                return Output::InvalidSize(size);
            };
            match tree.try_init(capacity) {
                Ok(()) => Output::Initialized { capacity },
                Err(err) => {
                    log::debug!("init {size}: {err}");
                    Output::InvalidSize(size)
                }
            }
        }
        Command::Add { index, value } => {
            let Ok(idx) = usize::try_from(index) else {
                return Output::InvalidIndex(index);
            };
            match tree.update(idx, value) {
                Ok(()) => Output::Updated,
                Err(_) => Output::InvalidIndex(index),
            }
        }
        Command::Sum { index } => match checked_index(tree, index) {
            Some(idx) => Output::Sum(tree.prefix_sum(idx)),
            None => Output::InvalidIndex(index),
        },
        Command::Range { start, end } => {
            let Some(first) = checked_index(tree, start) else {
                return Output::InvalidIndex(start);
            };
            let Some(last) = checked_index(tree, end) else {
                return Output::InvalidIndex(end);
            };
            Output::Sum(tree.range_sum(first, last))
        }
        Command::Value { index } => match checked_index(tree, index) {
            Some(idx) => Output::Value(tree.point_value(idx)),
            None => Output::InvalidIndex(index),
        },
        Command::Print => Output::Dump(tree.to_string()),
        Command::Quit => Output::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tree: &mut FenwickTree, line: &str) -> Output {
        execute(tree, line.parse().unwrap())
    }

    #[test]
    fn test_parse_menu_choices() {
        assert_eq!(
            "1 10 3".parse::<Command>().unwrap(),
            Command::Add { index: 3, value: 10 }
        );
        assert_eq!(
            "2 4".parse::<Command>().unwrap(),
            Command::Sum { index: 4 }
        );
        assert_eq!("3".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!(
            "  RANGE 2  -4 ".parse::<Command>().unwrap(),
            Command::Range { start: 2, end: -4 }
        );
        assert_eq!("print".parse::<Command>().unwrap(), Command::Print);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<Command>(), Err(Error::Parse(_))));
        assert!(matches!("9".parse::<Command>(), Err(Error::Parse(_))));
        assert!(matches!("1 5".parse::<Command>(), Err(Error::Parse(_))));
        assert!(matches!("2 x".parse::<Command>(), Err(Error::Parse(_))));
        assert!(matches!("2 1 2".parse::<Command>(), Err(Error::Parse(_))));
    }

    #[test]
    fn test_session() {
        let mut tree = FenwickTree::new();
        assert_eq!(
            run(&mut tree, "init 5"),
            Output::Initialized { capacity: 6 }
        );
        for (index, value) in [(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)] {
            assert_eq!(run(&mut tree, &format!("1 {value} {index}")), Output::Updated);
        }
        assert_eq!(run(&mut tree, "2 3"), Output::Sum(6));
        assert_eq!(run(&mut tree, "range 2 4"), Output::Sum(9));
        assert_eq!(run(&mut tree, "add 10 3"), Output::Updated);
        assert_eq!(run(&mut tree, "value 3"), Output::Value(13));
        assert_eq!(run(&mut tree, "sum 5"), Output::Sum(25));
        assert_eq!(run(&mut tree, "quit"), Output::Quit);
    }

    #[test]
    fn test_invalid_indices_leave_tree_untouched() {
        let mut tree = FenwickTree::from_values(&[0, 1, 2, 3]);
        let before = tree.clone();
        assert_eq!(run(&mut tree, "1 5 0"), Output::InvalidIndex(0));
        assert_eq!(run(&mut tree, "1 5 4"), Output::InvalidIndex(4));
        assert_eq!(run(&mut tree, "1 5 -1"), Output::InvalidIndex(-1));
        assert_eq!(run(&mut tree, "2 -3"), Output::InvalidIndex(-3));
        assert_eq!(run(&mut tree, "range 1 9"), Output::InvalidIndex(9));
        assert_eq!(run(&mut tree, "value 0"), Output::InvalidIndex(0));
        assert_eq!(tree, before);
        assert_eq!(run(&mut tree, "2 3"), Output::Sum(6));
    }

    #[test]
    fn test_init_zero_has_no_positions() {
        let mut tree = FenwickTree::from_values(&[0, 4]);
        let output = run(&mut tree, "init 0");
        assert_eq!(output, Output::Initialized { capacity: 1 });
        assert_eq!(output.to_string(), "initialized 0 elements");
        assert_eq!(tree.capacity(), 1);
        assert!(tree.is_empty());
        assert_eq!(run(&mut tree, "1 5 1"), Output::InvalidIndex(1));
        assert_eq!(run(&mut tree, "2 1"), Output::InvalidIndex(1));
    }

    #[test]
    fn test_unallocatable_size_is_rejected() {
        let mut tree = FenwickTree::from_values(&[0, 4]);
        assert_eq!(
            run(&mut tree, "init 9223372036854775806"),
            Output::InvalidSize(9223372036854775806)
        );
        assert_eq!(tree.capacity(), 2);
        assert_eq!(run(&mut tree, "value 1"), Output::Value(4));
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size(" 5\n").unwrap(), 5);
        assert_eq!(parse_size("-2").unwrap(), -2);
        assert!(matches!(parse_size("abc"), Err(Error::Parse(_))));
        assert!(matches!(parse_size(""), Err(Error::Parse(_))));
    }

    #[test]
    fn test_negative_size_is_rejected() {
        let mut tree = FenwickTree::from_values(&[0, 4]);
        assert_eq!(run(&mut tree, "init -1"), Output::InvalidSize(-1));
        assert_eq!(tree.capacity(), 2);
    }

    #[test]
    fn test_output_display() {
        assert_eq!(Output::Sum(25).to_string(), "sum = 25");
        assert_eq!(
            Output::InvalidIndex(-2).to_string(),
            "incorrect index given: -2"
        );
        let mut tree = FenwickTree::from_values(&[0, 1]);
        let Output::Dump(dump) = run(&mut tree, "print") else {
            panic!("expected dump");
        };
        assert!(dump.contains("BIT[ 1]:    1    // + 1"));
    }
}
