use aras::{AnalysisConfig, AnalysisEngine, AnnotatorConfig};

const ARTICLE: &str = include_str!("../data/sample_news.txt");

fn engine(parallel: bool) -> AnalysisEngine {
    AnalysisEngine::load(
        &AnnotatorConfig::default(),
        AnalysisConfig {
            parallel,
            ..Default::default()
        },
    )
    .expect("default engine")
}

#[test]
fn repeated_calls_give_identical_results() {
    let engine = engine(false);

    let first = engine.comprehensive(ARTICLE).expect("first report");
    for _ in 0..5 {
        let again = engine.comprehensive(ARTICLE).expect("repeat report");
        assert_eq!(first, again);
    }
}

#[test]
fn separately_loaded_engines_agree() {
    let a = engine(false);
    let b = engine(false);

    assert_eq!(
        a.sentiment(ARTICLE).unwrap(),
        b.sentiment(ARTICLE).unwrap()
    );
    assert_eq!(
        a.keywords(ARTICLE, 15).unwrap(),
        b.keywords(ARTICLE, 15).unwrap()
    );
    assert_eq!(
        a.summary(ARTICLE, 0.3).unwrap(),
        b.summary(ARTICLE, 0.3).unwrap()
    );
}

#[test]
fn parallel_batches_match_sequential() {
    let paragraphs: Vec<&str> = ARTICLE
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .collect();

    let sequential = engine(false).topics(&paragraphs, 3).unwrap();
    let parallel = engine(true).topics(&paragraphs, 3).unwrap();
    assert_eq!(sequential, parallel);

    let requests: Vec<aras::AnalysisRequest> = paragraphs
        .iter()
        .map(|p| aras::AnalysisRequest::new(*p))
        .collect();
    assert_eq!(
        engine(false).batch_sentiment(&requests).unwrap(),
        engine(true).batch_sentiment(&requests).unwrap()
    );
}

#[test]
fn keyword_tie_order_is_stable() {
    let engine = engine(false);
    let text = "Copper, nickel and zinc traded. Zinc, nickel and copper closed.";
    let terms = |r: &aras::KeywordResult| r.terms().map(str::to_string).collect::<Vec<_>>();

    let first = engine.keywords(text, 10).unwrap().into_value();
    assert_eq!(terms(&first), vec!["copper", "nickel", "zinc"]);
    for _ in 0..10 {
        let again = engine.keywords(text, 10).unwrap().into_value();
        assert_eq!(terms(&again), terms(&first));
    }
}
