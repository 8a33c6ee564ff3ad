//! Data model for parsed documentation — format-agnostic.

/// A single documented identifier, possibly covering several overloads.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocRecord {
    pub name: String,
    /// One `name(args)` signature per overload, in source order
    pub syntax: Vec<String>,
    pub desc: String,
    pub params: Vec<Param>,
    /// Declared return type and @return text, joined by `<br>`
    pub returns: String,
    /// @see entries
    pub references: Vec<String>,
}

/// A documented parameter.
///
/// `arg` holds the raw declaration text (e.g. `int count`) once the record
/// has been matched against its declaration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Param {
    pub arg: String,
    pub description: String,
}

impl Param {
    /// Argument name: the last token of the declaration text.
    pub fn name(&self) -> &str {
        self.arg.split_whitespace().last().unwrap_or("")
    }

    /// Argument type: the first token of the declaration text.
    pub fn type_name(&self) -> &str {
        self.arg.split_whitespace().next().unwrap_or("")
    }
}
