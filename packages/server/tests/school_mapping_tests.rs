//! School normalization over the whole school table.

use appeals_core::domains::schools::{find_school, normalize_school_name, OTHER_SCHOOL, SCHOOLS};

#[test]
fn every_code_normalizes_to_itself() {
    for school in SCHOOLS {
        assert_eq!(
            normalize_school_name(school.code).as_deref(),
            Some(school.code),
            "code {}",
            school.code
        );
    }
}

#[test]
fn every_full_name_normalizes_to_its_code() {
    for school in SCHOOLS {
        let normalized = normalize_school_name(school.full_name).unwrap();
        assert!(
            find_school(&normalized).is_some(),
            "{} normalized to unknown {}",
            school.full_name,
            normalized
        );
    }
}

#[test]
fn lowercase_codes_normalize_to_canonical_case() {
    for school in SCHOOLS {
        assert_eq!(
            normalize_school_name(&school.code.to_lowercase()).as_deref(),
            Some(school.code)
        );
    }
}

#[test]
fn normalization_is_idempotent() {
    for raw in ["ИМО", "Студент ИМКТ", "мирового океана", "Some Unknown College"] {
        let once = normalize_school_name(raw).unwrap();
        assert_eq!(normalize_school_name(&once).as_deref(), Some(once.as_str()));
    }
}

#[test]
fn other_bucket_is_not_a_school_code() {
    assert!(find_school(OTHER_SCHOOL).is_none());
}
