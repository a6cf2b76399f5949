mod common;
pub use self::common::{PageQuery, Query, QueryCommon, SortDirection};

mod job;
pub use self::job::JobQuery;

mod object;
pub use self::object::{ObjectQuery, ObjectSortBy};
