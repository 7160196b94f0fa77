//! School and institute codes used to group appeals by the free-text
//! `institute` field.

use serde::Serialize;

/// Bucket for appeals whose institute is empty or missing.
pub const OTHER_SCHOOL: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct School {
    pub code: &'static str,
    pub full_name: &'static str,
}

/// Known schools and institutes, in match priority order.
///
/// Order matters: substring matching returns the first entry that matches,
/// so e.g. "ПИ" is tried before "ПИШ".
pub static SCHOOLS: &[School] = &[
    School {
        code: "ИМО",
        full_name: "Институт Мирового Океана",
    },
    School {
        code: "ПИ",
        full_name: "Политехнический институт",
    },
    School {
        code: "ИМКТ",
        full_name: "Институт математики и компьютерных технологий",
    },
    School {
        code: "ИНТиПМ",
        full_name: "Институт наукоёмких технологий и передовых материалов",
    },
    School {
        code: "ИНЖиБ",
        full_name: "Институт наук о жизни и биомедицины",
    },
    School {
        code: "ВИ-ШРМИ",
        full_name: "Восточный институт – Школа региональных и международных исследований",
    },
    School {
        code: "ЮШ",
        full_name: "Юридическая школа",
    },
    School {
        code: "ШЭМ",
        full_name: "Школа экономики и менеджмента",
    },
    School {
        code: "ШИГН",
        full_name: "Школа искусств и гуманитарных наук",
    },
    School {
        code: "ШП",
        full_name: "Школа педагогики",
    },
    School {
        code: "ПИШ",
        full_name: "Передовая инженерная школа «Институт биотехнологий, биоинженерии и пищевых систем»",
    },
    School {
        code: "ИФКС",
        full_name: "Институт физической культуры и спорта",
    },
];

/// Look up a school by its exact code.
pub fn find_school(code: &str) -> Option<&'static School> {
    SCHOOLS.iter().find(|school| school.code == code)
}

pub fn is_known_school(code: &str) -> bool {
    find_school(code).is_some()
}

/// Map a free-text institute name onto a school code.
///
/// Returns `None` for empty (or whitespace-only) input. Matching is
/// case-insensitive on the trimmed input:
/// 1. an exact code match returns that code;
/// 2. otherwise the first school whose code occurs inside the input, or whose
///    full name contains the input, wins;
/// 3. otherwise the trimmed input itself is returned.
pub fn normalize_school_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let needle = trimmed.to_lowercase();

    if let Some(school) = SCHOOLS
        .iter()
        .find(|school| school.code.to_lowercase() == needle)
    {
        return Some(school.code.to_string());
    }

    if let Some(school) = SCHOOLS.iter().find(|school| {
        needle.contains(&school.code.to_lowercase())
            || school.full_name.to_lowercase().contains(&needle)
    }) {
        return Some(school.code.to_string());
    }

    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_twelve_unique_codes() {
        let mut codes: Vec<_> = SCHOOLS.iter().map(|s| s.code).collect();
        assert_eq!(codes.len(), 12);
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 12);
    }

    #[test]
    fn exact_code_returns_itself() {
        assert_eq!(normalize_school_name("ИМО").as_deref(), Some("ИМО"));
    }

    #[test]
    fn exact_match_is_case_insensitive_and_trimmed() {
        assert_eq!(normalize_school_name("  имкт ").as_deref(), Some("ИМКТ"));
        assert_eq!(normalize_school_name("интипм").as_deref(), Some("ИНТиПМ"));
    }

    #[test]
    fn exact_match_wins_over_earlier_substring_match() {
        // "ПИ" precedes "ПИШ" and is a substring of it.
        assert_eq!(normalize_school_name("ПИШ").as_deref(), Some("ПИШ"));
    }

    #[test]
    fn code_inside_longer_text_is_found() {
        assert_eq!(
            normalize_school_name("Студент ШЭМ, 3 курс").as_deref(),
            Some("ШЭМ")
        );
    }

    #[test]
    fn fragment_of_full_name_is_found() {
        assert_eq!(
            normalize_school_name("мирового океана").as_deref(),
            Some("ИМО")
        );
    }

    #[test]
    fn empty_input_is_none() {
        assert_eq!(normalize_school_name(""), None);
        assert_eq!(normalize_school_name("   "), None);
    }

    #[test]
    fn unknown_name_is_returned_trimmed() {
        assert_eq!(
            normalize_school_name("  Some Unknown College ").as_deref(),
            Some("Some Unknown College")
        );
    }

    #[test]
    fn find_school_requires_exact_code() {
        assert_eq!(
            find_school("ЮШ").map(|s| s.full_name),
            Some("Юридическая школа")
        );
        assert!(!is_known_school("юш"));
    }
}
