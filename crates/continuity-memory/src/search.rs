//! Substring lookup over knowledge records.

use crate::model::MemoryRecord;

/// Return the most recently appended record whose issue occurs inside `needle`.
///
/// Comparison is case-insensitive and one-directional: a stored issue of
/// `"wifi"` matches the question `"my wifi is down"`, but a long stored issue
/// never matches a shorter question it merely contains.
pub fn find_newest_match<'a>(records: &'a [MemoryRecord], needle: &str) -> Option<&'a MemoryRecord> {
    let needle = needle.to_lowercase();
    records
        .iter()
        .rev()
        .find(|record| needle.contains(&record.issue.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::find_newest_match;
    use crate::MemoryRecord;
    use pretty_assertions::assert_eq;

    #[test]
    fn stored_issue_must_be_inside_the_question() {
        let records = vec![MemoryRecord::new("wifi", "toggle the adapter")];
        let hit = find_newest_match(&records, "my wifi is down").expect("match");
        assert_eq!(hit.solution, "toggle the adapter");

        let records = vec![MemoryRecord::new(
            "my wifi is completely down and unreachable",
            "call the ISP",
        )];
        assert_eq!(find_newest_match(&records, "wifi"), None);
    }

    #[test]
    fn match_ignores_case() {
        let records = vec![MemoryRecord::new("Outlook Crash", "repair the profile")];
        let hit = find_newest_match(&records, "OUTLOOK CRASH on startup").expect("match");
        assert_eq!(hit.issue, "Outlook Crash");
    }

    #[test]
    fn newest_record_wins() {
        let records = vec![
            MemoryRecord::new("disk full", "empty the trash"),
            MemoryRecord::new("printer", "restart spooler"),
            MemoryRecord::new("disk full", "extend the volume"),
        ];
        let hit = find_newest_match(&records, "disk full").expect("match");
        assert_eq!(hit.solution, "extend the volume");
    }

    #[test]
    fn no_records_means_no_match() {
        assert_eq!(find_newest_match(&[], "anything"), None);
    }
}
