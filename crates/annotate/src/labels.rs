//! Entity label glossary.

/// Human-readable description for an entity label, if the label is known.
pub fn explain_label(label: &str) -> Option<&'static str> {
    let description = match label {
        "PERSON" => "People, including fictional",
        "NORP" => "Nationalities or religious or political groups",
        "FAC" => "Buildings, airports, highways, bridges, etc.",
        "ORG" => "Companies, agencies, institutions, etc.",
        "GPE" => "Countries, cities, states",
        "LOC" => "Non-GPE locations, mountain ranges, bodies of water",
        "PRODUCT" => "Objects, vehicles, foods, etc. (not services)",
        "EVENT" => "Named hurricanes, battles, wars, sports events, etc.",
        "WORK_OF_ART" => "Titles of books, songs, etc.",
        "LAW" => "Named documents made into laws.",
        "LANGUAGE" => "Any named language",
        "DATE" => "Absolute or relative dates or periods",
        "TIME" => "Times smaller than a day",
        "PERCENT" => "Percentage, including \"%\"",
        "MONEY" => "Monetary values, including unit",
        "QUANTITY" => "Measurements, as of weight or distance",
        "ORDINAL" => "\"first\", \"second\", etc.",
        "CARDINAL" => "Numerals that do not fall under another type",
        "MISC" => "Miscellaneous entities, e.g. events, nationalities, products or works of art",
        _ => return None,
    };
    Some(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels() {
        assert_eq!(explain_label("GPE"), Some("Countries, cities, states"));
        assert!(explain_label("MONEY").is_some());
    }

    #[test]
    fn unknown_label() {
        assert_eq!(explain_label("SPACESHIP"), None);
    }
}
