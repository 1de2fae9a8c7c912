//! Name-to-code tables for the service's category search parameters.
//!
//! The service only speaks numeric codes (`subject_cat`, `sense_cat`).
//! Names below cover the documented top-level categories, in Korean
//! and with an English alias; a bare numeric code always passes
//! through unchanged, so the long tail of sub-categories stays
//! reachable.

/// Subject (situation) categories.
const SUBJECT_CATEGORIES: &[(u32, &str, &str)] = &[
    (1, "인사하기", "greeting"),
    (2, "소개하기 (자기소개)", "introducing oneself"),
    (3, "소개하기 (가족)", "introducing family"),
    (4, "개인 정보 교환하기", "exchanging personal information"),
    (5, "위치 표현하기", "describing location"),
    (6, "길찾기", "directions"),
    (7, "교통 이용하기", "using transportation"),
    (8, "물건 사기", "purchasing goods"),
    (9, "음식 주문하기", "ordering food"),
    (10, "요리 설명하기", "describing a dish"),
    (11, "시간 표현하기", "expressing time"),
    (12, "날짜 표현하기", "expressing dates"),
    (13, "요일 표현하기", "expressing days of the week"),
    (14, "날씨와 계절", "weather and seasons"),
    (15, "하루 생활", "daily life"),
    (16, "학교생활", "school life"),
    (17, "한국 생활", "life in korea"),
    (18, "건강", "health"),
    (19, "전화하기", "making phone calls"),
    (20, "약속하기", "making appointments"),
];

/// Top-level meaning (sense) categories.
const MEANING_CATEGORIES: &[(u32, &str, &str)] = &[
    (1, "인간", "human"),
    (2, "삶", "life"),
    (3, "식생활", "dietary life"),
    (4, "의생활", "clothing habits"),
    (5, "주생활", "housing life"),
    (6, "사회 생활", "social life"),
    (7, "경제 생활", "economic activities"),
    (8, "교육", "education"),
    (9, "종교", "religion"),
    (10, "문화", "culture"),
    (11, "정치와 행정", "politics and administration"),
    (12, "자연", "nature"),
    (13, "동식물", "animals and plants"),
    (14, "개념", "concepts"),
];

/// Resolve a subject category name (or bare numeric code) to its
/// service code.
pub fn subject_category_code(name: &str) -> Option<u32> {
    lookup(SUBJECT_CATEGORIES, name)
}

/// Resolve a meaning category name (or bare numeric code) to its
/// service code.
pub fn meaning_category_code(name: &str) -> Option<u32> {
    lookup(MEANING_CATEGORIES, name)
}

fn lookup(table: &[(u32, &str, &str)], name: &str) -> Option<u32> {
    let name = name.trim();
    if let Ok(code) = name.parse::<u32>() {
        return Some(code);
    }
    let lowered = name.to_lowercase();
    table
        .iter()
        .find(|(_, korean, english)| *korean == name || *english == lowered)
        .map(|(code, _, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_korean_names() {
        assert_eq!(subject_category_code("인사하기"), Some(1));
        assert_eq!(meaning_category_code("동식물"), Some(13));
    }

    #[test]
    fn resolves_english_aliases_case_insensitively() {
        assert_eq!(subject_category_code("Greeting"), Some(1));
        assert_eq!(meaning_category_code("NATURE"), Some(12));
    }

    #[test]
    fn numeric_codes_pass_through() {
        assert_eq!(subject_category_code("37"), Some(37));
        assert_eq!(meaning_category_code("153"), Some(153));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(subject_category_code("없는 범주"), None);
        assert_eq!(meaning_category_code("unknown"), None);
    }
}
