#![deny(unsafe_code)]

use std::collections::BTreeSet;

/// Fixed 0-based column indices for the semantic roster fields.
///
/// The roster export carries no usable header row, so fields are addressed
/// purely by position. The configuration is immutable for a run and threaded
/// explicitly through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColumnConfig {
    /// "Alumno/Alumne" flag column.
    pub student_flag: usize,
    /// Group code column.
    pub group: usize,
    /// Given name.
    pub given_name: usize,
    /// First surname.
    pub surname1: usize,
    /// Second surname.
    pub surname2: usize,
    /// National identity document (DNI).
    pub national_id: usize,
    /// Corporate email address.
    pub email: usize,
}

impl Default for ColumnConfig {
    /// Column layout of the reference roster export.
    fn default() -> Self {
        Self {
            student_flag: 1,
            group: 47,
            given_name: 6,
            surname1: 7,
            surname2: 8,
            national_id: 9,
            email: 11,
        }
    }
}

impl ColumnConfig {
    /// Every configured index, in semantic field order. Schema validation
    /// reports violations in this order.
    pub fn required_indices(&self) -> [usize; 7] {
        [
            self.student_flag,
            self.group,
            self.given_name,
            self.surname1,
            self.surname2,
            self.national_id,
            self.email,
        ]
    }
}

/// The set of group codes accepted as a valid assignment.
///
/// Membership is exact and case-sensitive: "G2a" and "G2A" are different
/// codes, and the reference set deliberately mixes cases (In3c vs IN3b).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GroupCodeSet(BTreeSet<String>);

/// Group codes of the reference deployment.
const REFERENCE_GROUPS: [&str; 25] = [
    "G1A", "G1B", "G2a", "G2b", "G3a", "G3b", "G4a", "G4b", "IN1a", "IN1b", "IN2a", "IN2b",
    "IN3a", "IN3b", "In3c", "IN4a", "IN4b", "M1", "M2", "M3", "M4", "P1", "P2", "P3", "P4",
];

impl Default for GroupCodeSet {
    fn default() -> Self {
        REFERENCE_GROUPS.iter().copied().collect()
    }
}

impl GroupCodeSet {
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for GroupCodeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
