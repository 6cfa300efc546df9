//! Fixed lookup tables used by the location and title sub-scores.

/// Known city keywords. Order matters: the first keyword found in a location
/// string is that location's city.
pub const CITY_KEYWORDS: &[&str] = &[
    "jakarta",
    "surabaya",
    "bandung",
    "medan",
    "semarang",
    "makassar",
    "palembang",
    "tangerang",
    "depok",
    "bekasi",
    "bogor",
    "malang",
    "yogyakarta",
    "solo",
    "bali",
    "denpasar",
    "balikpapan",
    "samarinda",
    "pontianak",
    "banjarmasin",
    "cikarang",
    "karawang",
    "pekanbaru",
    "batam",
    "manado",
];

/// Region → member city keywords.
pub const REGIONS: &[(&str, &[&str])] = &[
    ("jakarta", &["jakarta", "dki", "jabodetabek"]),
    (
        "jawa barat",
        &["bandung", "bekasi", "bogor", "depok", "cikarang", "karawang", "cikupa"],
    ),
    ("jawa timur", &["surabaya", "malang", "sidoarjo", "gresik"]),
    ("jawa tengah", &["semarang", "solo", "surakarta"]),
    ("banten", &["tangerang", "serang", "cilegon"]),
    ("bali", &["bali", "denpasar", "badung", "gianyar", "ubud", "kuta"]),
];

/// Tokens ignored when extracting title keywords: role levels, English and
/// Indonesian connectors, company suffixes, placement words.
pub const STOP_WORDS: &[&str] = &[
    "staff",
    "officer",
    "specialist",
    "associate",
    "assistant",
    "junior",
    "senior",
    "lead",
    "head",
    "chief",
    "executive",
    "intern",
    "trainee",
    "coordinator",
    "administrator",
    "dan",
    "and",
    "or",
    "the",
    "a",
    "an",
    "di",
    "untuk",
    "with",
    "pt",
    "cv",
    "tbk",
    "indonesia",
    "-",
    "&",
    "/",
    "(",
    ")",
    "penempatan",
    "area",
    "cabang",
    "wilayah",
];

/// Characters that split a title into keyword candidates.
pub const TITLE_DELIMITERS: &[char] = &[' ', '-', '_', '/', '&', '(', ')', ','];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.iter().any(|w| *w == token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_region_city_is_lowercase() {
        for (region, cities) in REGIONS {
            for city in *cities {
                assert_eq!(*city, city.to_lowercase(), "region {region}");
            }
        }
    }

    #[test]
    fn test_stop_words_cover_role_levels() {
        assert!(is_stop_word("senior"));
        assert!(is_stop_word("staff"));
        assert!(is_stop_word("untuk"));
        assert!(!is_stop_word("accounting"));
    }
}
