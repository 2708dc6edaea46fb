use aras::{
    AnalysisConfig, AnalysisEngine, AnalysisRequest, AnnotatorConfig, BatchItem, SentimentLabel,
};

const ARTICLE: &str = include_str!("../data/sample_news.txt");

fn engine() -> AnalysisEngine {
    AnalysisEngine::load(&AnnotatorConfig::default(), AnalysisConfig::default()).unwrap()
}

#[test]
fn positive_and_negative_reference_sentences() {
    let engine = engine();

    let positive = engine
        .sentiment("This is excellent news! The economy is improving and growth is strong.")
        .unwrap()
        .into_value();
    assert_eq!(positive.label, SentimentLabel::Positive);
    assert!(positive.polarity > 0.0);
    assert!(positive.confidence > 0.5);

    let negative = engine
        .sentiment("This is terrible news. The crisis is worsening and the situation is bad.")
        .unwrap()
        .into_value();
    assert_eq!(negative.label, SentimentLabel::Negative);
    assert!(negative.polarity < 0.0);
}

#[test]
fn stop_words_only_produce_no_keywords() {
    let keywords = engine().keywords("the and or is", 10).unwrap();
    assert!(!keywords.is_degraded());
    assert!(keywords.value().is_empty());
}

#[test]
fn article_keywords_are_ranked_and_normalised() {
    let keywords = engine().keywords(ARTICLE, 10).unwrap().into_value();
    assert!(!keywords.is_empty());
    assert!(keywords.len() <= 10);
    assert_eq!(keywords.keywords[0].score, 1.0);
    for pair in keywords.keywords.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for keyword in &keywords.keywords {
        assert!(keyword.score > 0.0 && keyword.score <= 1.0);
        assert_eq!(keyword.term, keyword.term.to_lowercase());
        assert!(keyword.term.chars().count() > 2);
    }
}

#[test]
fn article_summary_keeps_original_order() {
    let summary = engine().summary(ARTICLE, 0.3).unwrap().into_value();
    assert!(summary.compressed);
    assert!(summary.total_sentences > 2);
    assert_eq!(
        summary.sentence_indices.len(),
        ((summary.total_sentences as f64 * 0.3).floor() as usize).max(1)
    );
    assert!(summary.sentence_indices.windows(2).all(|w| w[0] < w[1]));
    assert!(summary.text.len() < ARTICLE.len());
}

#[test]
fn short_text_summary_is_identity() {
    let text = "Only one sentence here. And another.";
    let summary = engine().summary(text, 0.3).unwrap().into_value();
    assert_eq!(summary.text, text);
}

#[test]
fn article_entities() {
    let entities = engine().entities(ARTICLE).unwrap().into_value();
    let find = |label: &str| {
        entities
            .iter()
            .filter(|e| e.label == label)
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
    };

    assert!(find("ORG").contains(&"Federal Reserve"));
    assert!(find("ORG").contains(&"Apple Inc."));
    assert!(find("PERSON").contains(&"Tim Cook"));
    assert!(find("GPE").contains(&"Washington"));
    assert!(find("PERCENT").contains(&"0.4%"));
    for entity in &entities {
        assert!(entity.start < entity.end);
        assert!(entity.description.is_some(), "{} has no description", entity.label);
    }
}

#[test]
fn topics_over_paragraphs() {
    let paragraphs: Vec<&str> = ARTICLE
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .collect();
    let topics = engine().topics(&paragraphs, 3).unwrap();
    assert!(!topics.is_degraded());
    let topics = topics.into_value();
    assert!(topics.len() <= 3);
    assert!(!topics.is_empty());
    for band in &topics.topics {
        assert_eq!(band.len(), 5);
    }
}

#[test]
fn empty_corpus_has_no_topics() {
    let topics = engine().topics::<String>(&[], 5).unwrap();
    assert!(topics.value().is_empty());
}

#[test]
fn comprehensive_report_serializes() {
    let report = engine().comprehensive(ARTICLE).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert!(json["sentiment"]["computed"]["label"].is_string());
    assert!(json["entities"]["computed"].is_array());
    assert!(json["keywords"]["computed"]["keywords"].is_array());
    assert!(json["summary"]["computed"]["text"].is_string());
}

#[test]
fn batch_sentiment_mixed_languages() {
    let requests = vec![
        AnalysisRequest::new("Outstanding results and a brilliant quarter."),
        AnalysisRequest::new("Resultados excelentes.").with_language("es"),
        AnalysisRequest::new("A scandal and a collapse."),
    ];
    let items = engine().batch_sentiment(&requests).unwrap();
    assert!(matches!(&items[0], BatchItem::Ok(r) if r.label == SentimentLabel::Positive));
    assert!(matches!(&items[1], BatchItem::Failed { index: 1, .. }));
    assert!(matches!(&items[2], BatchItem::Ok(r) if r.label == SentimentLabel::Negative));
}
