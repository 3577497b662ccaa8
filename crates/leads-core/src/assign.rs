//! Staff distribution over cleaned batches.
//!
//! Two distinct policies: cyclic assignment interleaves staff across rows
//! (`names[i mod k]`), balanced-remainder distribution hands out contiguous
//! blocks whose sizes differ by at most one. They order the same inputs
//! differently on purpose; callers pick by context.

use leads_model::{AssignedRecord, Record, StaffRoster};

fn pick(names: &[String], index: usize) -> String {
    if names.is_empty() {
        String::new()
    } else {
        names[index % names.len()].clone()
    }
}

/// Round-robin both staff categories over the records, independently.
///
/// An empty roster leaves that category's name empty on every row.
pub fn assign_cyclic(records: Vec<Record>, roster: &StaffRoster) -> Vec<AssignedRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| AssignedRecord {
            advisor: pick(&roster.advisors, index),
            care: pick(&roster.care, index),
            record,
        })
        .collect()
}

/// Distribute `count` items across `names` in contiguous, balanced blocks.
///
/// Every name receives `count / names.len()` items; the first
/// `count % names.len()` names receive one extra. The output keeps each
/// name's items adjacent rather than interleaving them.
pub fn distribute_balanced(count: usize, names: &[String]) -> Vec<String> {
    if names.is_empty() || count == 0 {
        return Vec::new();
    }
    let base = count / names.len();
    let extra = count % names.len();
    let mut out = Vec::with_capacity(count);
    for (index, name) in names.iter().enumerate() {
        let share = base + usize::from(index < extra);
        for _ in 0..share {
            out.push(name.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    fn records(count: u32) -> Vec<Record> {
        (1..=count).map(Record::new).collect()
    }

    #[test]
    fn cyclic_round_robins_each_role() {
        let roster = StaffRoster::new(names(&["X", "Y"]), names(&["P", "Q", "R"]));
        let assigned = assign_cyclic(records(5), &roster);
        let advisors: Vec<&str> = assigned.iter().map(|a| a.advisor.as_str()).collect();
        let care: Vec<&str> = assigned.iter().map(|a| a.care.as_str()).collect();
        assert_eq!(advisors, vec!["X", "Y", "X", "Y", "X"]);
        assert_eq!(care, vec!["P", "Q", "R", "P", "Q"]);
    }

    #[test]
    fn cyclic_with_empty_roster_leaves_blanks() {
        let roster = StaffRoster::new(Vec::new(), names(&["P"]));
        let assigned = assign_cyclic(records(2), &roster);
        assert_eq!(assigned[0].advisor, "");
        assert_eq!(assigned[0].care, "P");
    }

    #[test]
    fn balanced_groups_are_contiguous() {
        let out = distribute_balanced(10, &names(&["A", "B", "C"]));
        assert_eq!(
            out,
            vec!["A", "A", "A", "A", "B", "B", "B", "C", "C", "C"]
        );
    }

    #[test]
    fn balanced_exact_division() {
        let out = distribute_balanced(6, &names(&["A", "B", "C"]));
        assert_eq!(out, vec!["A", "A", "B", "B", "C", "C"]);
    }

    #[test]
    fn balanced_fewer_items_than_names() {
        let out = distribute_balanced(2, &names(&["A", "B", "C"]));
        assert_eq!(out, vec!["A", "B"]);
    }

    #[test]
    fn balanced_edge_cases() {
        assert!(distribute_balanced(0, &names(&["A"])).is_empty());
        assert!(distribute_balanced(5, &[]).is_empty());
    }
}
