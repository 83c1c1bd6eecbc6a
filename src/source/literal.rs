use async_trait::async_trait;

use crate::domain::Record;
use crate::source::{FetchError, ItemSource};

/// A record list compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct LiteralSource {
    records: Vec<Record>,
}

impl LiteralSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The sample deck shipped with the binary.
    pub fn builtin() -> Self {
        Self::new(vec![
            Record {
                id: 1,
                title: Some("On simplicity".into()),
                author: Some("Edsger W. Dijkstra".into()),
                link: Some("https://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD896.html".into()),
                content: Some(
                    "Simplicity is prerequisite for reliability.".into(),
                ),
                platform: Some("EWD".into()),
                date: Some("1975-06-18".into()),
            },
            Record {
                id: 2,
                title: Some("Programs are for people".into()),
                author: Some("Harold Abelson".into()),
                link: None,
                content: Some(
                    "Programs must be written for people to read, and only incidentally for machines to execute."
                        .into(),
                ),
                platform: Some("SICP".into()),
                date: Some("1985-07-01".into()),
            },
            Record {
                id: 3,
                title: Some("Premature optimization".into()),
                author: Some("Donald Knuth".into()),
                link: None,
                content: Some(
                    "Premature optimization is the root of all evil.".into(),
                ),
                platform: Some("Computing Surveys".into()),
                date: Some("1974-12-01".into()),
            },
            Record {
                id: 4,
                title: Some("Debugging".into()),
                author: Some("Edsger W. Dijkstra".into()),
                link: None,
                content: Some(
                    "If debugging is the process of removing bugs, then programming must be the process of putting them in."
                        .into(),
                ),
                platform: None,
                date: None,
            },
        ])
    }
}

#[async_trait]
impl ItemSource for LiteralSource {
    async fn load(&self) -> Result<Vec<Record>, FetchError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("built-in list ({} records)", self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_unique() {
        let records = tokio_test::block_on(LiteralSource::builtin().load()).unwrap();
        let mut ids: Vec<_> = records.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }
}
