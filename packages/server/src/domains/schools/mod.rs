//! Canonical school codes for the free-text `institute` field of appeals.

pub mod mapping;

pub use mapping::{
    find_school, is_known_school, normalize_school_name, School, OTHER_SCHOOL, SCHOOLS,
};
