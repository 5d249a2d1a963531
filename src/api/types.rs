//! Request payload types for the set and term endpoints

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A term with its definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub term: String,
    pub definition: String,
}

impl Term {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Parses `TERM=DEFINITION`, splitting on the first `=`
impl FromStr for Term {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((term, definition)) if !term.is_empty() => Ok(Term::new(term, definition)),
            _ => Err(crate::Error::validation(
                "term",
                "expected TERM=DEFINITION",
            )),
        }
    }
}

/// Parameters for creating a set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSet {
    pub title: String,
    pub lang_terms: String,
    pub lang_definitions: String,
    pub terms: Vec<Term>,
}

impl NewSet {
    /// New set with English terms and definitions
    pub fn new(title: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            title: title.into(),
            lang_terms: "en".to_string(),
            lang_definitions: "en".to_string(),
            terms,
        }
    }

    pub fn with_languages(
        mut self,
        lang_terms: impl Into<String>,
        lang_definitions: impl Into<String>,
    ) -> Self {
        self.lang_terms = lang_terms.into();
        self.lang_definitions = lang_definitions.into();
        self
    }

    /// Form body in the order Quizlet documents it
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("title", self.title.as_str()),
            ("lang_definitions", self.lang_definitions.as_str()),
            ("lang_terms", self.lang_terms.as_str()),
        ];
        fields.extend(term_fields(&self.terms));
        fields
    }
}

/// Repeated `terms[]`/`definitions[]` pairs
pub(crate) fn term_fields(terms: &[Term]) -> Vec<(&'static str, &str)> {
    terms
        .iter()
        .flat_map(|t| {
            [
                ("terms[]", t.term.as_str()),
                ("definitions[]", t.definition.as_str()),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hola=hello", "hola", "hello")]
    #[case("a=b=c", "a", "b=c")]
    #[case("empty=", "empty", "")]
    fn test_parse_term(#[case] input: &str, #[case] term: &str, #[case] definition: &str) {
        assert_eq!(input.parse::<Term>().unwrap(), Term::new(term, definition));
    }

    #[rstest]
    #[case("no separator")]
    #[case("=definition only")]
    fn test_parse_term_invalid(#[case] input: &str) {
        assert!(input.parse::<Term>().is_err());
    }

    #[test]
    fn test_new_set_form_fields() {
        let set = NewSet::new(
            "Spanish",
            vec![Term::new("uno", "one"), Term::new("dos", "two")],
        )
        .with_languages("es", "en");

        assert_eq!(
            set.form_fields(),
            vec![
                ("title", "Spanish"),
                ("lang_definitions", "en"),
                ("lang_terms", "es"),
                ("terms[]", "uno"),
                ("definitions[]", "one"),
                ("terms[]", "dos"),
                ("definitions[]", "two"),
            ]
        );
    }
}
