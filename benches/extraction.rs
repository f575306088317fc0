use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rankscrape::{assemble, split_names, RankingScraper, ScrapeOptions};
use scraper::Html;
use std::fs;
use std::path::Path;

fn load_fixture(name: &str) -> Option<String> {
    fs::read_to_string(Path::new("tests/fixtures").join(name)).ok()
}

/// A chart of `rows` ranked items, every seventh one missing its rating.
fn synthetic_chart(rows: usize) -> String {
    let mut html = String::from(
        "<html><body><table><thead><tr><th>Rank &amp; Title</th><th>Rating</th></tr></thead><tbody>",
    );
    for i in 0..rows {
        let rating = if i % 7 == 6 {
            String::new()
        } else {
            format!(
                "<td class=\"ratingColumn imdbRating\"><strong>{}.{}</strong></td>",
                8 + i % 2,
                i % 10
            )
        };
        html.push_str(&format!(
            "<tr><td class=\"titleColumn\">{n}. <a href=\"/title/{n}/\" title=\"Director {n} (dir.), Lead {n}, Support {n}\">Movie {n}</a> \
             <span class=\"secondaryInfo\">({year})</span></td>{rating}</tr>",
            n = i + 1,
            year = 1920 + i % 100,
            rating = rating,
        ));
    }
    html.push_str("</tbody></table></body></html>");
    html
}

fn bench_assemble_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    let options = ScrapeOptions::default();

    for rows in [25, 250, 2500] {
        let html = synthetic_chart(rows);
        let doc = Html::parse_document(&html);

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &doc, |b, doc| {
            b.iter(|| std::hint::black_box(assemble(std::hint::black_box(doc), &options)));
        });
    }

    group.finish();
}

fn bench_parse_and_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_and_extract");

    let mut inputs = vec![("synthetic-250".to_string(), synthetic_chart(250))];
    if let Some(html) = load_fixture("top_chart.html") {
        inputs.push(("top_chart".to_string(), html));
    }

    for (name, html) in &inputs {
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("doc", name), html, |b, html| {
            b.iter(|| {
                let scraper = RankingScraper::new(std::hint::black_box(html), None, None).unwrap();
                std::hint::black_box(scraper.parse())
            });
        });
    }

    group.finish();
}

fn bench_split_names(c: &mut Criterion) {
    let people = [
        "Francis Ford Coppola (dir.)",
        " Marlon  Brando",
        "Al Pacino ",
        "James\tCaan",
    ];
    c.bench_function("split_names", |b| {
        b.iter(|| std::hint::black_box(split_names(std::hint::black_box(&people[..]))))
    });
}

criterion_group!(
    benches,
    bench_assemble_by_size,
    bench_parse_and_extract,
    bench_split_names
);
criterion_main!(benches);
