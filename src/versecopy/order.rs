use crate::model::Verse;

/// Translations in the order they are listed by default.
pub const DEFAULT_TRANSLATION_ORDER: &[&str] = &[
    "NIV84", "NIV11", "RSV", "NRSV", "ESVUS16", "NET08", "GNTD", "CEVUS06", "NLT96", "NLT04",
    "GW", "REB89", "NASB", "NJPS2017", "KJV", "EASY", "NIrV", "T4T",
];

/// Translation priority list.
///
/// Sorting is stable: translations missing from the list go after every listed
/// one, and equal keys keep the order the API returned them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOrder {
    codes: Vec<String>,
}

impl Default for TranslationOrder {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSLATION_ORDER.iter().copied())
    }
}

impl TranslationOrder {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    fn rank(&self, translation: &str) -> usize {
        self.codes
            .iter()
            .position(|code| code == translation)
            .unwrap_or(self.codes.len())
    }

    pub fn order(&self, mut verses: Vec<Verse>) -> Vec<Verse> {
        verses.sort_by_key(|v| self.rank(&v.translation));
        verses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verses(codes: &[&str]) -> Vec<Verse> {
        codes
            .iter()
            .map(|c| Verse::new(*c, format!("text of {}", c)))
            .collect()
    }

    fn translations(verses: &[Verse]) -> Vec<&str> {
        verses.iter().map(|v| v.translation.as_str()).collect()
    }

    #[test]
    fn test_priority_then_unlisted() {
        let ordered =
            TranslationOrder::default().order(verses(&["KJV", "NIV84", "UNKNOWN", "RSV"]));
        assert_eq!(translations(&ordered), vec!["NIV84", "RSV", "KJV", "UNKNOWN"]);
    }

    #[test]
    fn test_unlisted_keep_input_order() {
        let ordered = TranslationOrder::default().order(verses(&["ZZZ", "KJV", "AAA", "NIV11"]));
        assert_eq!(translations(&ordered), vec!["NIV11", "KJV", "ZZZ", "AAA"]);
    }

    #[test]
    fn test_duplicates_keep_input_order() {
        let input = vec![
            Verse::new("KJV", "first"),
            Verse::new("RSV", "only"),
            Verse::new("KJV", "second"),
        ];
        let ordered = TranslationOrder::default().order(input);
        let texts: Vec<_> = ordered.iter().map(|v| v.text.as_str()).collect();
        assert_eq!(texts, vec!["only", "first", "second"]);
    }

    #[test]
    fn test_custom_order() {
        let order = TranslationOrder::new(["KJV", "RSV"]);
        let ordered = order.order(verses(&["NIV84", "RSV", "KJV"]));
        assert_eq!(translations(&ordered), vec!["KJV", "RSV", "NIV84"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(TranslationOrder::default().order(Vec::new()).is_empty());
    }
}
