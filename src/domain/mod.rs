pub mod criteria;
pub mod favorites;
pub mod record;

pub use criteria::{AuthorFilter, FilterCriteria, SearchScope};
pub use favorites::FavoriteSet;
pub use record::{parse_calendar_date, Record, RecordId};
