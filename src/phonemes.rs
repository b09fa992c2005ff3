//! Japanese phoneme table
//!
//! Sixteen fixed pages of kana: the vowels, each consonant row, the
//! standalone ん, and the voiced/semi-voiced rows.

/// Title shown when no page matches the current page number
pub const FALLBACK_PAGE_TITLE: &str = "音素";

/// A named group of kana shown together on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhonemePage {
    /// Page label (e.g. "か行")
    pub name: &'static str,
    /// Single-character kana in display order
    pub phonemes: &'static [&'static str],
}

impl PhonemePage {
    const fn new(name: &'static str, phonemes: &'static [&'static str]) -> Self {
        Self { name, phonemes }
    }
}

/// All phoneme pages, in pagination order
pub static JAPANESE_PHONEME_PAGES: [PhonemePage; 16] = [
    PhonemePage::new("元音", &["あ", "い", "う", "え", "お"]),
    PhonemePage::new("か行", &["か", "き", "く", "け", "こ"]),
    PhonemePage::new("さ行", &["さ", "し", "す", "せ", "そ"]),
    PhonemePage::new("た行", &["た", "ち", "つ", "て", "と"]),
    PhonemePage::new("な行", &["な", "に", "ぬ", "ね", "の"]),
    PhonemePage::new("は行", &["は", "ひ", "ふ", "へ", "ほ"]),
    PhonemePage::new("ま行", &["ま", "み", "む", "め", "も"]),
    PhonemePage::new("や行", &["や", "ゆ", "よ"]),
    PhonemePage::new("ら行", &["ら", "り", "る", "れ", "ろ"]),
    PhonemePage::new("わ行", &["わ", "を"]),
    PhonemePage::new("ん", &["ん"]),
    PhonemePage::new("が行", &["が", "ぎ", "ぐ", "げ", "ご"]),
    PhonemePage::new("ざ行", &["ざ", "じ", "ず", "ぜ", "ぞ"]),
    PhonemePage::new("だ行", &["だ", "ぢ", "づ", "で", "ど"]),
    PhonemePage::new("ば行", &["ば", "び", "ぶ", "べ", "ぼ"]),
    PhonemePage::new("ぱ行", &["ぱ", "ぴ", "ぷ", "ぺ", "ぽ"]),
];

/// Number of pages in the phoneme table
pub fn page_count() -> usize {
    JAPANESE_PHONEME_PAGES.len()
}

/// Look up a page by its 1-based page number
pub fn page(number: usize) -> Option<&'static PhonemePage> {
    number
        .checked_sub(1)
        .and_then(|index| JAPANESE_PHONEME_PAGES.get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixteen_pages() {
        assert_eq!(page_count(), 16);
    }

    #[test]
    fn test_pages_hold_one_to_five_single_characters() {
        for page in &JAPANESE_PHONEME_PAGES {
            assert!(
                (1..=5).contains(&page.phonemes.len()),
                "page {} has {} phonemes",
                page.name,
                page.phonemes.len()
            );
            for phoneme in page.phonemes {
                assert_eq!(phoneme.chars().count(), 1, "{} is not one character", phoneme);
            }
        }
    }

    #[test]
    fn test_page_lookup_is_one_based() {
        assert_eq!(page(1).map(|p| p.name), Some("元音"));
        assert_eq!(page(11).map(|p| p.phonemes), Some(&["ん"][..]));
        assert_eq!(page(16).map(|p| p.name), Some("ぱ行"));
        assert!(page(0).is_none());
        assert!(page(17).is_none());
    }
}
