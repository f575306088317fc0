//! Bubble chart of score against year, one series per primary person.
//!
//! [`Chart::from_table`] computes everything the plot needs (grouping, hover
//! text, bubble sizes) so rendering is a pure serialization step. Output is a
//! Plotly figure, either as JSON or as a standalone HTML page that loads
//! plotly.js from its CDN.

use std::{fs, path::Path};

use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    error::{Result, ScrapeError},
    record::{Record, Table},
};

const TITLE_MAX_CHARS: usize = 50;
const MAX_BUBBLE_PX: f64 = 20.0;
const BACKGROUND: &str = "rgb(243, 243, 243)";
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// One bubble.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Point {
    pub year: u32,
    pub score: f64,
    /// Marker area, strictly increasing with `score`.
    pub size: f64,
    /// Hover text, `<br>`-separated.
    pub text: String,
}

/// All records sharing one primary person.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Chart {
    pub title: String,
    /// Series in order of each primary person's first appearance.
    pub series: Vec<Series>,
    /// Plotly `sizeref` for area-mode markers.
    pub sizeref: f64,
}

/// Bubble size for `score` given the smallest score in the table.
pub fn bubble_size(score: f64, min_score: f64) -> f64 {
    10.0 * (score - min_score) + 3.0
}

fn short_title(title: &str) -> String {
    title.chars().take(TITLE_MAX_CHARS).collect()
}

fn hover_text(record: &Record) -> String {
    format!(
        "Title: {}<br>Year: {}<br>Director: {}<br>Rating: {}<br>Actors: {}<br>",
        short_title(&record.title),
        record.year,
        record.primary_person,
        record.score,
        record.supporting_people.join(", "),
    )
}

impl Chart {
    /// Builds the chart model.
    ///
    /// # Errors
    ///
    /// [`ScrapeError::EmptyTable`] when there is nothing to plot.
    pub fn from_table(table: &Table) -> Result<Self> {
        let min_score = table
            .iter()
            .map(|r| r.score)
            .reduce(f64::min)
            .ok_or(ScrapeError::EmptyTable)?;

        let mut series: Vec<Series> = Vec::new();
        let mut max_size = 0.0_f64;

        for record in table {
            let size = bubble_size(record.score, min_score);
            max_size = max_size.max(size);

            let point = Point {
                year: record.year,
                score: record.score,
                size,
                text: hover_text(record),
            };

            match series.iter_mut().find(|s| s.name == record.primary_person) {
                Some(existing) => existing.points.push(point),
                None => series.push(Series {
                    name: record.primary_person.clone(),
                    points: vec![point],
                }),
            }
        }

        Ok(Self {
            title: "Release year and rating of movies".to_string(),
            series,
            sizeref: 2.0 * max_size / (MAX_BUBBLE_PX * MAX_BUBBLE_PX),
        })
    }

    /// The chart as a Plotly figure (`{"data": [...], "layout": {...}}`).
    pub fn to_plotly_json(&self) -> Value {
        let data: Vec<Value> = self
            .series
            .iter()
            .map(|s| {
                json!({
                    "type": "scatter",
                    "mode": "markers",
                    "name": s.name,
                    "x": s.points.iter().map(|p| p.year).collect::<Vec<_>>(),
                    "y": s.points.iter().map(|p| p.score).collect::<Vec<_>>(),
                    "text": s.points.iter().map(|p| p.text.as_str()).collect::<Vec<_>>(),
                    "marker": {
                        "size": s.points.iter().map(|p| p.size).collect::<Vec<_>>(),
                        "sizemode": "area",
                        "sizeref": self.sizeref,
                        "line": { "width": 2 },
                    },
                })
            })
            .collect();

        json!({
            "data": data,
            "layout": {
                "title": { "text": self.title },
                "xaxis": { "title": { "text": "year" }, "type": "log", "gridcolor": "white", "gridwidth": 2 },
                "yaxis": { "title": { "text": "rating" }, "gridcolor": "white", "gridwidth": 2 },
                "paper_bgcolor": BACKGROUND,
                "plot_bgcolor": BACKGROUND,
                "height": 700,
                "width": 1500,
            },
        })
    }

    /// A self-contained HTML page rendering the figure.
    pub fn to_html(&self) -> Result<String> {
        let figure = serde_json::to_string(&self.to_plotly_json())?;
        // "</" inside JSON strings would otherwise close the inline script.
        let figure = figure.replace("</", "<\\/");
        Ok(format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
             <script src=\"{cdn}\"></script>\n</head>\n<body>\n<div id=\"chart\"></div>\n\
             <script>\nconst figure = {figure};\nPlotly.newPlot(\"chart\", figure.data, figure.layout);\n</script>\n\
             </body>\n</html>\n",
            title = self.title,
            cdn = PLOTLY_CDN,
            figure = figure,
        ))
    }

    pub fn write_html(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_html()?)?;
        tracing::info!(path = %path.display(), series = self.series.len(), "wrote chart");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, year: u32, score: f64, primary: &str) -> Record {
        Record {
            title: title.to_string(),
            year,
            score,
            primary_person: primary.to_string(),
            supporting_people: vec!["Someone".to_string()],
        }
    }

    fn table() -> Table {
        Table::new(vec![
            record("Seven Samurai", 1954, 8.6, "Akira Kurosawa"),
            record("Psycho", 1960, 8.5, "Alfred Hitchcock"),
            record("Rashomon", 1950, 8.2, "Akira Kurosawa"),
        ])
    }

    #[test]
    fn empty_table_is_an_error() {
        assert!(matches!(
            Chart::from_table(&Table::default()),
            Err(ScrapeError::EmptyTable)
        ));
    }

    #[test]
    fn groups_by_primary_person_in_first_appearance_order() {
        let chart = Chart::from_table(&table()).unwrap();
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Akira Kurosawa", "Alfred Hitchcock"]);
        let years: Vec<u32> = chart.series[0].points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![1954, 1950]);
    }

    #[test]
    fn size_grows_with_score() {
        let chart = Chart::from_table(&table()).unwrap();
        let mut points: Vec<&Point> = chart.series.iter().flat_map(|s| &s.points).collect();
        points.sort_by(|a, b| a.score.total_cmp(&b.score));
        assert!((points[0].size - 3.0).abs() < 1e-9);
        assert!(points.windows(2).all(|w| w[0].size < w[1].size));
        let max = points.last().unwrap().size;
        assert!((chart.sizeref - 2.0 * max / 400.0).abs() < 1e-9);
    }

    #[test]
    fn hover_text_truncates_long_titles() {
        let long = "x".repeat(80);
        let text = hover_text(&record(&long, 2000, 7.0, "P"));
        assert!(text.starts_with(&format!("Title: {}<br>", "x".repeat(50))));
        assert!(text.contains("Director: P<br>"));
    }

    #[test]
    fn plotly_figure_shape() {
        let figure = Chart::from_table(&table()).unwrap().to_plotly_json();
        assert_eq!(figure["data"].as_array().unwrap().len(), 2);
        assert_eq!(figure["data"][0]["x"], json!([1954, 1950]));
        assert_eq!(figure["data"][0]["marker"]["sizemode"], "area");
        assert_eq!(figure["layout"]["xaxis"]["type"], "log");
    }

    #[test]
    fn html_escapes_closing_tags() {
        let t = Table::new(vec![record("</script><b>", 2000, 7.0, "P")]);
        let html = Chart::from_table(&t).unwrap().to_html().unwrap();
        assert_eq!(html.matches("</script>").count(), 2);
    }
}
