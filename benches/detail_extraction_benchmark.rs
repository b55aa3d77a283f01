//! Detail page extraction throughput

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use roblox_scraper_lib::infrastructure::parsing::{
    DocumentParser, GameDetailParser, HtmlDocumentParser,
};

const DETAIL_PAGE: &str = r#"<html><head><title>Jailbreak</title></head><body>
    <div class="game-main">
        <pre class="game-description">Rob banks, escape the prison and build your criminal empire.</pre>
        <ul class="game-stats">
            <li><span class="genre">Action</span></li>
            <li><span class="sub-genre">Open World</span></li>
            <li><a class="creator-name" href="/groups/1">Badimo</a></li>
            <li><span class="playing-count">25,311</span></li>
            <li><span class="like-count">4.1M</span></li>
            <li><span class="dislike-count">301K</span></li>
        </ul>
    </div>
</body></html>"#;

fn bench_detail_extraction(c: &mut Criterion) {
    let documents = HtmlDocumentParser;
    let details = GameDetailParser::new().unwrap();

    c.bench_function("parse_and_extract_detail_page", |b| {
        b.iter(|| {
            let html = documents.parse(black_box(DETAIL_PAGE.as_bytes())).unwrap();
            black_box(details.extract(&html))
        })
    });

    let html = documents.parse(DETAIL_PAGE.as_bytes()).unwrap();
    c.bench_function("extract_from_parsed_detail_page", |b| {
        b.iter(|| black_box(details.extract(black_box(&html))))
    });
}

criterion_group!(benches, bench_detail_extraction);
criterion_main!(benches);
