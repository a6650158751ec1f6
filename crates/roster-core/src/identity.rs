#![deny(unsafe_code)]

use roster_model::RosterRecord;

/// Derive the canonical student identity key for a record.
///
/// DNI-based when the trimmed DNI is non-empty, name-based otherwise. The
/// key is deterministic and total: a record with every identity field empty
/// yields `NOM:|C1:|C2:`, so fully blank rows coalesce into one identity.
pub fn student_key(record: &RosterRecord) -> String {
    let dni = record.dni.trim();
    if !dni.is_empty() {
        return format!("DNI:{dni}");
    }
    format!(
        "NOM:{}|C1:{}|C2:{}",
        record.given_name.trim(),
        record.surname1.trim(),
        record.surname2.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(given_name: &str, surname1: &str, surname2: &str, dni: &str) -> RosterRecord {
        RosterRecord {
            given_name: given_name.to_string(),
            surname1: surname1.to_string(),
            surname2: surname2.to_string(),
            dni: dni.to_string(),
            email: String::new(),
            group: String::new(),
            verification: String::new(),
            position: 0,
        }
    }

    #[test]
    fn dni_takes_precedence_over_names() {
        let key = student_key(&record("Anna", "Puig", "Serra", "12345678"));
        assert_eq!(key, "DNI:12345678");
    }

    #[test]
    fn blank_dni_falls_back_to_names() {
        let key = student_key(&record("Anna", "Puig", "", "   "));
        assert_eq!(key, "NOM:Anna|C1:Puig|C2:");
    }

    #[test]
    fn all_empty_fields_coalesce() {
        let key = student_key(&record("", "", "", ""));
        assert_eq!(key, "NOM:|C1:|C2:");
    }
}
