//! Interpret the logical lines of one comment block as a [`DocRecord`].
//!
//! Tag lines are dispatched through [`TAG_HANDLERS`]; the terminal line of
//! the block is the declaration the comment documents.

use crate::error::BuildError;
use crate::model::{DocRecord, Param};

/// Line break marker used inside table cells.
pub const LINE_BREAK: &str = "<br>";

/// What remains of `*/` once the line prefix is collapsed.
const TERMINATOR: &str = "/";

type TagHandler = fn(&mut Draft, &str);

/// Recognized tags, matched against the first token of a line.
const TAG_HANDLERS: &[(&str, TagHandler)] = &[
    ("@param", on_param),
    ("@return", on_return),
    ("@see", on_see),
];

#[derive(Default)]
struct Draft {
    record: DocRecord,
    declared: bool,
}

fn on_param(draft: &mut Draft, rest: &str) {
    // The name written in the tag is decorative; the declaration supplies it.
    let (placeholder, description) = rest.split_once(' ').unwrap_or((rest, ""));
    draft.record.params.push(Param {
        arg: placeholder.to_string(),
        description: description.trim().to_string(),
    });
}

fn on_return(draft: &mut Draft, rest: &str) {
    draft.record.returns = rest.to_string();
}

fn on_see(draft: &mut Draft, rest: &str) {
    draft.record.references.push(rest.to_string());
}

impl Draft {
    /// Apply a declaration line such as `public float lerp(float a, float b`.
    fn declare(&mut self, line: &str) -> Result<(), BuildError> {
        self.declared = true;

        let head = line.split_once('(').map_or(line, |(head, _)| head);
        let arg_list = line.rsplit('(').next().unwrap_or_default();

        let mut head_tokens = head.split_whitespace();
        let return_type = head_tokens.clone().nth(1).unwrap_or_default();
        let name = head_tokens.next_back().unwrap_or_default().to_string();

        let arguments: Vec<String> = arg_list
            .split(',')
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
            .map(str::to_string)
            .collect();

        self.record.returns = format!("{}{}{}", return_type, LINE_BREAK, self.record.returns);
        self.record.syntax.push(format!("{}({})", name, arg_list));
        self.record.name = name;

        for (param, arg) in self.record.params.iter_mut().zip(&arguments) {
            param.arg = arg.clone();
        }
        if self.record.params.len() > arguments.len() {
            return Err(BuildError::ParamMismatch {
                method: self.record.name.clone(),
                documented: self
                    .record
                    .params
                    .iter()
                    .map(|p| (p.arg.clone(), p.description.clone()))
                    .collect(),
                arguments,
            });
        }
        Ok(())
    }
}

/// Build a record from the lines of one comment block.
///
/// Returns `Ok(None)` when the block has no declaration line, e.g. when the
/// argument list is wrapped over several lines.
pub fn build(lines: &[String]) -> Result<Option<DocRecord>, BuildError> {
    let mut draft = Draft::default();
    let mut lines = lines.iter().peekable();

    while let Some(line) = lines.next() {
        let key = line.split_whitespace().next().unwrap_or_default();

        if let Some((tag, handler)) = TAG_HANDLERS.iter().find(|(tag, _)| *tag == key) {
            handler(&mut draft, line[tag.len()..].trim());
            continue;
        }

        // Unknown tags are dropped
        if line == TERMINATOR || key.starts_with('@') {
            continue;
        }

        let is_terminal = lines.peek().is_none();
        if is_terminal && line.contains('(') {
            draft.declare(line)?;
            continue;
        }

        draft.record.desc.push_str(line);
        draft.record.desc.push(' ');
    }

    if !draft.declared {
        return Ok(None);
    }

    let desc_len = draft.record.desc.trim_end().len();
    draft.record.desc.truncate(desc_len);
    Ok(Some(draft.record))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn builds_full_record() {
        let input = lines(&[
            "Linear interpolation",
            "between two values.",
            "@param start the first value",
            "@param stop the second value",
            "@return the interpolated value",
            "@see PApplet#lerp",
            "public float lerp(float a, float b",
        ]);
        let doc = build(&input).unwrap().unwrap();
        assert_eq!(doc.name, "lerp");
        assert_eq!(doc.desc, "Linear interpolation between two values.");
        assert_eq!(doc.syntax, vec!["lerp(float a, float b)"]);
        assert_eq!(doc.returns, "float<br>the interpolated value");
        assert_eq!(doc.references, vec!["PApplet#lerp"]);
        assert_eq!(
            doc.params,
            vec![
                Param {
                    arg: "float a".to_string(),
                    description: "the first value".to_string(),
                },
                Param {
                    arg: "float b".to_string(),
                    description: "the second value".to_string(),
                },
            ]
        );
    }

    #[test]
    fn param_names_come_from_declaration() {
        let input = lines(&[
            "@param x first",
            "@param y second",
            "returnType functionName(typeA argA, typeB argB",
        ]);
        let doc = build(&input).unwrap().unwrap();
        let names: Vec<&str> = doc.params.iter().map(Param::name).collect();
        assert_eq!(names, vec!["argA", "argB"]);
    }

    #[test]
    fn too_many_params_is_mismatch() {
        let input = lines(&[
            "@param a one",
            "@param b two",
            "@param c three",
            "public void move(int dx, int dy",
        ]);
        let err = build(&input).unwrap_err();
        match &err {
            BuildError::ParamMismatch {
                method, arguments, ..
            } => {
                assert_eq!(method, "move");
                assert_eq!(arguments, &vec!["int dx".to_string(), "int dy".to_string()]);
            }
        }
        assert!(err.diagnostic().contains("'move'"));
    }

    #[test]
    fn empty_argument_list_has_no_arguments() {
        let input = lines(&["@param a one", "public void reset("]);
        assert!(build(&input).is_err());
    }

    #[test]
    fn fewer_params_than_arguments_is_fine() {
        let input = lines(&["@param a one", "public void move(int dx, int dy"]);
        let doc = build(&input).unwrap().unwrap();
        assert_eq!(doc.params.len(), 1);
        assert_eq!(doc.params[0].arg, "int dx");
    }

    #[test]
    fn unknown_tags_and_terminator_skipped() {
        let input = lines(&["Does a thing.", "@deprecated", "/", "public void thing("]);
        let doc = build(&input).unwrap().unwrap();
        assert_eq!(doc.desc, "Does a thing.");
        assert_eq!(doc.returns, "void<br>");
    }

    #[test]
    fn param_without_description() {
        let input = lines(&["@param n", "public int twice(int n"]);
        let doc = build(&input).unwrap().unwrap();
        assert_eq!(doc.params[0].arg, "int n");
        assert_eq!(doc.params[0].description, "");
    }

    #[test]
    fn single_token_head_has_empty_return_type() {
        let input = lines(&["@return nothing", "setup("]);
        let doc = build(&input).unwrap().unwrap();
        assert_eq!(doc.name, "setup");
        assert_eq!(doc.returns, "<br>nothing");
    }

    #[test]
    fn no_declaration_line_yields_none() {
        let input = lines(&["Wrapped arguments", "int b"]);
        assert_eq!(build(&input).unwrap(), None);
    }

    #[test]
    fn declaration_must_be_terminal() {
        let input = lines(&["See max(a, b) for details.", "public int clamp(int v"]);
        let doc = build(&input).unwrap().unwrap();
        assert_eq!(doc.name, "clamp");
        assert_eq!(doc.desc, "See max(a, b) for details.");
    }
}
