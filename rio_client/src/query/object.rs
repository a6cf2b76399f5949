use super::{
    common::{QueryCommon, SortDirection},
    Query,
};

/// Filters for a broker's object list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectQuery {
    pub common: QueryCommon,
    pub prefix: Option<String>,
    pub filename: Option<String>,
    pub sort_by: Option<ObjectSortBy>,
    pub sort_direction: Option<SortDirection>,
    pub include_internal_metadata: bool,
}

impl Query for ObjectQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_params(&self) -> Vec<(String, Option<String>)> {
        let mut params = self.common.to_params();
        params.push(("prefix".to_string(), self.prefix.clone()));
        params.push(("filename".to_string(), self.filename.clone()));
        params.push((
            "sort_by".to_string(),
            self.sort_by.map(|s| s.to_string()),
        ));
        params.push((
            "sort_order".to_string(),
            self.sort_direction.map(|d| d.as_str().to_string()),
        ));
        params.push((
            "internal_metadata".to_string(),
            self.include_internal_metadata.then(|| "true".to_string()),
        ));
        params
    }
}

impl ObjectQuery {
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    pub fn with_filename(mut self, filename: &str) -> Self {
        self.filename = Some(filename.to_string());
        self
    }

    pub fn with_sort_by(mut self, sort_by: ObjectSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self {
        self.sort_direction = Some(sort_direction);
        self
    }

    pub fn with_internal_metadata(mut self) -> Self {
        self.include_internal_metadata = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectSortBy {
    Name,
    Size,
    CreationDate,
}

impl std::fmt::Display for ObjectSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ObjectSortBy::Name => "name",
                ObjectSortBy::Size => "size",
                ObjectSortBy::CreationDate => "creationDate",
            }
        )
    }
}
