use crate::domain::Record;

/// Distinct author names in first-seen order.
///
/// Records without an author contribute nothing.
pub fn distinct_authors(records: &[Record]) -> Vec<String> {
    let mut authors: Vec<String> = Vec::new();
    for author in records.iter().filter_map(|r| r.author.as_deref()) {
        if !authors.iter().any(|seen| seen == author) {
            authors.push(author.to_string());
        }
    }
    authors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by(id: i64, author: Option<&str>) -> Record {
        Record {
            author: author.map(String::from),
            ..Record::new(id)
        }
    }

    #[test]
    fn test_first_seen_order_not_alphabetical() {
        let records = vec![by(1, Some("Zed")), by(2, Some("Amy")), by(3, Some("Zed")), by(4, Some("Bo"))];
        assert_eq!(distinct_authors(&records), vec!["Zed", "Amy", "Bo"]);
    }

    #[test]
    fn test_case_sensitive_and_skips_missing() {
        let records = vec![by(1, Some("amy")), by(2, None), by(3, Some("Amy"))];
        assert_eq!(distinct_authors(&records), vec!["amy", "Amy"]);
    }

    #[test]
    fn test_empty() {
        assert!(distinct_authors(&[]).is_empty());
    }
}
