use std::fmt;

use crate::pattern::SequentialPattern;

/// Delimiters written around each itemset.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Brackets {
    #[default]
    Parentheses,
    Braces,
}

impl Brackets {
    fn pair(self) -> (char, char) {
        match self {
            Brackets::Parentheses => ('(', ')'),
            Brackets::Braces => ('{', '}'),
        }
    }
}

const TRAILING_PAD: &str = "    ";

/// Renders a pattern as `(1 2 )(3 )    `, with a configurable bracket style
/// and optionally the sequence IDs supporting it.
#[derive(Clone, Copy, Debug)]
pub struct PatternDisplay<'a> {
    pattern: &'a SequentialPattern,
    brackets: Brackets,
    sequence_ids: bool,
}

impl<'a> PatternDisplay<'a> {
    /// Append `  Sequence ID: ` and the IDs after the itemsets, when assigned.
    pub fn with_sequence_ids(mut self) -> Self {
        self.sequence_ids = true;
        self
    }
}

impl<'a> fmt::Display for PatternDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (open, close) = self.brackets.pair();
        for itemset in self.pattern {
            write!(f, "{}{}{}", open, itemset, close)?;
        }

        if self.sequence_ids {
            if let Some(ids) = self.pattern.sequence_ids() {
                write!(f, "  Sequence ID: ")?;
                for id in ids.iter() {
                    write!(f, "{} ", id)?;
                }
            }
        }

        f.write_str(TRAILING_PAD)
    }
}

impl SequentialPattern {
    pub fn display(&self, brackets: Brackets) -> PatternDisplay<'_> {
        PatternDisplay {
            pattern: self,
            brackets,
            sequence_ids: false,
        }
    }

    /// The itemsets wrapped in braces, e.g. `{1 2 }{3 }    `.
    pub fn itemsets_to_string(&self) -> String {
        self.display(Brackets::Braces).to_string()
    }
}

impl fmt::Display for SequentialPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.display(Brackets::Parentheses), f)
    }
}
