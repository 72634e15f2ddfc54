/// Label keywords that count as a certification.
const CERTIFICATION_KEYWORDS: &[&str] = &["organic", "fair-trade", "recyclable"];

/// Strip the language prefix from an Open Food Facts tag: "en:organic" -> "organic".
pub fn strip_language_prefix(tag: &str) -> &str {
    tag.strip_prefix("en:").unwrap_or(tag)
}

/// Turn label tags into display certifications.
///
/// "en:eu-organic" -> "Eu Organic", "en:fair-trade" -> "Fair Trade".
/// Tags without a certification keyword are dropped.
pub fn certifications(labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .map(|tag| strip_language_prefix(tag))
        .filter(|tag| CERTIFICATION_KEYWORDS.iter().any(|kw| tag.contains(kw)))
        .map(title_case)
        .collect()
}

/// Capitalize each `-`-separated word and join with spaces.
fn title_case(tag: &str) -> String {
    tag.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_certifications_filtered_and_titled() {
        let certs = certifications(&tags(&[
            "en:organic",
            "en:fair-trade",
            "en:no-gluten",
            "en:eu-organic",
            "fr:recyclable-packaging",
        ]));
        assert_eq!(
            certs,
            vec!["Organic", "Fair Trade", "Eu Organic", "Fr:recyclable Packaging"]
        );
    }

    #[test]
    fn test_no_labels() {
        assert!(certifications(&[]).is_empty());
    }

    #[test]
    fn test_strip_prefix_only_english() {
        assert_eq!(strip_language_prefix("en:local"), "local");
        assert_eq!(strip_language_prefix("de:bio"), "de:bio");
        assert_eq!(strip_language_prefix("fr:en:organic"), "fr:en:organic");
    }
}
