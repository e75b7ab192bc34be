use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Category> = {
        let mut map = HashMap::new();
        map.insert("Start", Category::Keyword);
        map.insert("End", Category::Keyword);
        map.insert("checkThis", Category::Keyword);
        map.insert("maybeThis", Category::Keyword);
        map.insert("otherwiseThis", Category::Keyword);
        map.insert("keepDoing", Category::Keyword);
        map.insert("repeatTimes", Category::Keyword);
        map.insert("stopNow", Category::Keyword);
        map.insert("nextRound", Category::Keyword);
        map.insert("show", Category::Keyword);
        map.insert("ask", Category::Keyword);
        map.insert("declare", Category::Keyword);
        map.insert("assign", Category::Keyword);
        map.insert("doThis", Category::Keyword);
        map.insert("runThis", Category::Keyword);
        map.insert("comment", Category::Keyword);
        map.insert("correct", Category::Boolean);
        map.insert("incorrect", Category::Boolean);
        map
    };
}

/// Semantic category of a reserved word.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Keyword,
    Boolean,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Boolean => "boolean",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Looks up a reserved word. Matching is case-sensitive.
pub fn lookup(word: &str) -> Option<Category> {
    RESERVED_LOOKUP.get(word).copied()
}
