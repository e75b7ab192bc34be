use std::fmt::Display;

use serde::{Serialize, Serializer};

use super::{keywords::Category, registry::VariableId};

/// The category tag attached to a token.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ClassPart {
    Keyword(Category),
    Number,
    String,
    Variable(VariableId),
    Operator,
    Symbol,
    Semicolon,
}

impl Display for ClassPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassPart::Keyword(category) => write!(f, "{}", category),
            ClassPart::Number => write!(f, "number"),
            ClassPart::String => write!(f, "string"),
            ClassPart::Variable(id) => write!(f, "{}", id),
            ClassPart::Operator => write!(f, "operator"),
            ClassPart::Symbol => write!(f, "symbol"),
            ClassPart::Semicolon => write!(f, "semicolon"),
        }
    }
}

impl Serialize for ClassPart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub line_number: usize,
    pub class_part: ClassPart,
    pub value_part: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.class_part, self.value_part)
    }
}
