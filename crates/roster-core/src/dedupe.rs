#![deny(unsafe_code)]

use std::collections::BTreeMap;

use roster_model::RosterRecord;

use crate::identity::student_key;

/// Collapse records sharing an identity key to the earliest occurrence.
///
/// Exactly one record survives per distinct key: the one with the smallest
/// original position. The output is ordered ascending by that position, so
/// first-seen order is preserved. Idempotent.
pub fn dedupe_first_occurrence(records: Vec<RosterRecord>) -> Vec<RosterRecord> {
    let mut earliest: BTreeMap<String, RosterRecord> = BTreeMap::new();
    for record in records {
        let key = student_key(&record);
        match earliest.get(&key) {
            Some(kept) if kept.position <= record.position => {}
            _ => {
                earliest.insert(key, record);
            }
        }
    }
    let mut kept: Vec<RosterRecord> = earliest.into_values().collect();
    kept.sort_by_key(|record| record.position);
    kept
}
