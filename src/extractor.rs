//! Pulling a typed [`Record`] out of one candidate row.
//!
//! Each step is a small function returning `Result`; `?` short-circuits the row
//! on the first failure, so no partially filled record can leave this module.
//! Lookups are structural (descendant by tag and class marker, attribute by
//! name) and the year is recovered from free text by pattern matching.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    document::MarkupNode,
    error::{ExtractError, Field},
    names::split_names,
    options::ScrapeOptions,
    record::Record,
};

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit regex"));

/// Extracts a complete record from `row`, or the first reason it can't.
pub fn extract_record<N: MarkupNode>(row: &N, options: &ScrapeOptions) -> Result<Record, ExtractError> {
    let title_cell = row
        .find_descendant(&options.cell_tag, Some(options.title_column.as_str()))
        .ok_or_else(|| ExtractError::missing(Field::Year, "title column cell"))?;

    let year = extract_year(&title_cell, options)?;

    let link = title_cell
        .find_descendant(&options.link_tag, None)
        .ok_or_else(|| ExtractError::missing(Field::Title, "link in title column"))?;
    let title = extract_title(&link)?;

    let score = extract_score(row, options)?;

    let people = extract_people(&link, options)?;
    let (primary_person, supporting_people) = split_names(people.as_slice())?;

    Ok(Record {
        title,
        year,
        score,
        primary_person,
        supporting_people,
    })
}

fn extract_year<N: MarkupNode>(title_cell: &N, options: &ScrapeOptions) -> Result<u32, ExtractError> {
    let info = title_cell
        .find_descendant(&options.secondary_info_tag, Some(options.secondary_info.as_str()))
        .ok_or_else(|| ExtractError::missing(Field::Year, "secondary info"))?;

    let text = info.direct_text();
    let digits = DIGIT_RUN
        .find(&text)
        .ok_or_else(|| ExtractError::parse(Field::Year, text.trim()))?;

    digits
        .as_str()
        .parse()
        .map_err(|_| ExtractError::parse(Field::Year, digits.as_str()))
}

fn extract_title<N: MarkupNode>(link: &N) -> Result<String, ExtractError> {
    let text = link.direct_text();
    let title = text.trim();
    if title.is_empty() {
        return Err(ExtractError::missing(Field::Title, "text in title link"));
    }
    Ok(title.to_string())
}

fn extract_score<N: MarkupNode>(row: &N, options: &ScrapeOptions) -> Result<f64, ExtractError> {
    let cell = row
        .find_descendant(&options.cell_tag, Some(options.rating_column.as_str()))
        .ok_or_else(|| ExtractError::missing(Field::Score, "rating column cell"))?;
    let emphasized = cell
        .find_descendant(&options.rating_tag, None)
        .ok_or_else(|| ExtractError::missing(Field::Score, "emphasized rating"))?;

    let text = emphasized.direct_text();
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(score) if score.is_finite() => Ok(score),
        _ => Err(ExtractError::parse(Field::Score, text)),
    }
}

fn extract_people<N: MarkupNode>(link: &N, options: &ScrapeOptions) -> Result<Vec<String>, ExtractError> {
    let raw = link
        .attr(&options.people_attribute)
        .filter(|raw| !raw.trim().is_empty())
        .ok_or_else(|| {
            ExtractError::missing(Field::People, format!("{} attribute", options.people_attribute))
        })?;

    Ok(raw.split(options.people_separator).map(str::to_string).collect())
}
