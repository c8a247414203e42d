//! Evaluation and message formatting shared by every assertion family.

use std::fmt::{self, Debug};

use eqcheck_equatable::Equatable;
use thiserror::Error;

use crate::reporter::Reporter;

/// What the caller expects the comparison to yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Equal,
    NotEqual,
}

/// A semantic equality mismatch. `Display` renders the failure text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EqualityError {
    #[error("Not equal: \nexpected: {expected}\nactual  : {actual}")]
    NotEqual { expected: String, actual: String },
    #[error("Should not be: {actual}\n")]
    ShouldNotBe { actual: String },
}

/// Evaluates `expected.equal(actual)` against `expectation`.
#[doc(hidden)]
pub fn compare<T>(expectation: Expectation, expected: &T, actual: &T) -> Result<(), EqualityError>
where
    T: Equatable + Debug + ?Sized,
{
    match (expectation, expected.equal(actual)) {
        (Expectation::Equal, true) | (Expectation::NotEqual, false) => Ok(()),
        (Expectation::Equal, false) => {
            log::debug!("semantic equality mismatch: values differ");
            Err(EqualityError::NotEqual {
                expected: format!("{expected:?}"),
                actual: format!("{actual:?}"),
            })
        }
        (Expectation::NotEqual, true) => {
            log::debug!("semantic equality mismatch: values are equal");
            Err(EqualityError::ShouldNotBe {
                actual: format!("{actual:#?}"),
            })
        }
    }
}

/// Records `failure` on `t`, followed by the caller's diagnostics if any.
#[doc(hidden)]
pub fn fail<R>(t: &mut R, failure: &EqualityError, msg: Option<fmt::Arguments<'_>>)
where
    R: Reporter + ?Sized,
{
    let failure = failure.to_string();
    let messages = msg.map(|m| m.to_string()).filter(|m| !m.is_empty());

    let mut content = vec![("Error", failure.as_str())];
    if let Some(messages) = messages.as_deref() {
        content.push(("Messages", messages));
    }
    t.errorf(&labeled_output(&content));
}

/// Lays out `label: text` pairs with the text column aligned. Continuation
/// lines of multi-line text are indented to the same column.
fn labeled_output(content: &[(&str, &str)]) -> String {
    let longest = content.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let indent = " ".repeat(longest + 2);

    let mut lines = Vec::new();
    for (label, text) in content {
        let mut text_lines = text.lines();
        let first = text_lines.next().unwrap_or("");
        let pad = " ".repeat(longest - label.len() + 1);
        lines.push(format!("{label}:{pad}{first}"));
        for line in text_lines {
            lines.push(format!("{indent}{line}"));
        }
    }
    lines.join("\n")
}
