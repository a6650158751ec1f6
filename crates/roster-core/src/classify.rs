#![deny(unsafe_code)]

use std::sync::LazyLock;

use regex::Regex;

use roster_model::{ColumnConfig, GroupCodeSet, RosterTable};

/// Whole-word match on "alumno"/"alumne", case-insensitive. Word boundaries
/// keep longer tokens like "alumnet" from matching while still accepting
/// compound cells such as "Alumne/a".
static STUDENT_FLAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:alumno|alumne)\b").expect("static regex"));

/// Row-aligned boolean vectors for the two classification predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub is_student: Vec<bool>,
    pub has_valid_group: Vec<bool>,
}

impl Classification {
    /// Rows whose student-flag cell matched.
    pub fn student_count(&self) -> usize {
        self.is_student.iter().filter(|&&flag| flag).count()
    }

    /// Rows whose group cell is a valid code.
    pub fn valid_group_count(&self) -> usize {
        self.has_valid_group.iter().filter(|&&flag| flag).count()
    }

    /// Student rows with a valid group (the principal candidates).
    pub fn principal_count(&self) -> usize {
        self.pairs().filter(|&(student, valid)| student && valid).count()
    }

    /// Student rows without a valid group (the secondary candidates).
    pub fn secondary_count(&self) -> usize {
        self.pairs().filter(|&(student, valid)| student && !valid).count()
    }

    fn pairs(&self) -> impl Iterator<Item = (bool, bool)> + '_ {
        self.is_student
            .iter()
            .copied()
            .zip(self.has_valid_group.iter().copied())
    }
}

/// True when the trimmed cell contains the student flag as a whole word.
pub fn is_student_flag(cell: &str) -> bool {
    STUDENT_FLAG_RE.is_match(cell.trim())
}

/// True when the trimmed cell is an exact, case-sensitive group code.
pub fn has_valid_group(cell: &str, groups: &GroupCodeSet) -> bool {
    groups.contains(cell.trim())
}

/// Evaluate both predicates over every row of the table.
pub fn classify(
    table: &RosterTable,
    columns: &ColumnConfig,
    groups: &GroupCodeSet,
) -> Classification {
    let mut classification = Classification {
        is_student: Vec::with_capacity(table.row_count()),
        has_valid_group: Vec::with_capacity(table.row_count()),
    };
    for row in table.rows() {
        classification
            .is_student
            .push(is_student_flag(row.cell(columns.student_flag)));
        classification
            .has_valid_group
            .push(has_valid_group(row.cell(columns.group), groups));
    }
    classification
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_flag_matches_whole_words_only() {
        assert!(is_student_flag("alumne"));
        assert!(is_student_flag("Alumne"));
        assert!(is_student_flag("ALUMNO"));
        assert!(is_student_flag("  alumno  "));
        assert!(is_student_flag("Alumne/a"));

        assert!(!is_student_flag("Alumnet"));
        assert!(!is_student_flag("exalumne"));
        assert!(!is_student_flag("professor"));
        assert!(!is_student_flag(""));
    }

    #[test]
    fn group_membership_is_exact() {
        let groups = GroupCodeSet::default();
        assert!(has_valid_group("G1A", &groups));
        assert!(has_valid_group("  M3 ", &groups));
        assert!(!has_valid_group("g1a", &groups));
        assert!(!has_valid_group("ZZZ", &groups));
        assert!(!has_valid_group("", &groups));
    }
}
