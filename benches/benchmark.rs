//! Performance benchmarks for ngate-fortune.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - The issue fixture used by the integration tests
//! - Synthetic pages with a growing number of stories
//! - Annotation and rendering of an already parsed page

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ngate_fortune::render::render_page;
use ngate_fortune::{parse_page, parse_page_with_options, Options, RenderOptions};

const ISSUE: &str = include_str!("../tests/fixtures/issue.html");

const STORY: &str = r#"<p><span class="storylink"><a href="https://example.com/story">Some Startup Does A Thing</a></span><br>
<span class="small">March 31, 2017 (comments)</span><br>
<span class="small"><a href="https://news.ycombinator.com/item?id=1">comments</a></span><br>
A webshit <a href="https://news.ycombinator.com/item?id=2">announces</a> a thing. Hackernews
<a href="https://news.ycombinator.com/item?id=3">argues</a> about it, then <em>rewrites it in Rust</em>.</p>
"#;

fn synthetic_page(stories: usize) -> String {
    let mut html = String::from("<html><body><p>Intro paragraph.</p>");
    for _ in 0..stories {
        html.push_str(STORY);
    }
    html.push_str("</body></html>");
    html
}

fn bench_parse_issue(c: &mut Criterion) {
    c.bench_function("parse_issue", |b| {
        b.iter(|| parse_page(black_box(ISSUE)));
    });
}

fn bench_parse_without_special_cases(c: &mut Criterion) {
    let options = Options {
        apply_special_cases: false,
        ..Options::default()
    };
    c.bench_function("parse_issue_no_special_cases", |b| {
        b.iter(|| parse_page_with_options(black_box(ISSUE), black_box(&options)));
    });
}

fn bench_parse_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_scaling");
    for stories in [10, 50, 200] {
        let html = synthetic_page(stories);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(stories), &html, |b, html| {
            b.iter(|| parse_page(black_box(html)));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let Ok(page) = parse_page(&synthetic_page(50)) else {
        return;
    };
    let options = RenderOptions::default();
    c.bench_function("render_50_stories", |b| {
        b.iter(|| render_page(black_box(&page.headlines), &options));
    });
}

criterion_group!(
    benches,
    bench_parse_issue,
    bench_parse_without_special_cases,
    bench_parse_scaling,
    bench_render
);
criterion_main!(benches);
