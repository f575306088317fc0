//! Splitting a credited-people list into the primary person and the rest.

use crate::error::{ExtractError, Field};

/// Collapses runs of whitespace to single spaces and trims both ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips a trailing role annotation: everything from the first `(` onward.
fn strip_annotation(s: &str) -> &str {
    s.split('(').next().unwrap_or(s)
}

/// Splits raw names into `(primary_person, supporting_people)`.
///
/// The first entry is the primary person, with its parenthetical role
/// annotation removed. The remaining entries keep their text (parentheses
/// included) and only have whitespace normalized. Order is preserved.
///
/// # Errors
///
/// [`ExtractError::EmptyPeopleList`] when `people` is empty, and a
/// structural failure on [`Field::People`] when the primary entry is blank
/// once the annotation is stripped.
pub fn split_names<S: AsRef<str>>(people: &[S]) -> Result<(String, Vec<String>), ExtractError> {
    let (first, rest) = people.split_first().ok_or(ExtractError::EmptyPeopleList)?;

    let primary = normalize_whitespace(strip_annotation(first.as_ref()));
    if primary.is_empty() {
        return Err(ExtractError::missing(Field::People, "name in first people entry"));
    }

    let supporting = rest
        .iter()
        .map(|name| normalize_whitespace(name.as_ref()))
        .collect();

    Ok((primary, supporting))
}
