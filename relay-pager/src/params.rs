// 2022-2026 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use crate::cursor::decode_cursor;
use crate::error::PaginationError;
use crate::record::RecordId;
use crate::store::IdFilter;
use crate::store::RangeQuery;
use crate::store::SortDirection;

/// A validated pagination request.
///
/// Pages are presented newest first: records "after" a cursor have smaller
/// ids, records "before" it have larger ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageQuerySpec {
    /// First page, starting from the newest record.
    FirstOnly { num_rows: usize },
    /// Forward page strictly after `after`.
    AfterFirst { after: RecordId, num_rows: usize },
    /// Backward page strictly before `before`.
    BeforeLast { before: RecordId, num_rows: usize },
}

impl PageQuerySpec {
    /// Accepts `{first}`, `{after, first}` or `{before, last}`, nothing else.
    pub fn validate(
        after: Option<RecordId>,
        before: Option<RecordId>,
        first: Option<usize>,
        last: Option<usize>,
    ) -> Result<Self, PaginationError> {
        match (after, before, first, last) {
            (None, None, Some(num_rows), None) => Ok(Self::FirstOnly { num_rows }),
            (Some(after), None, Some(num_rows), None) => Ok(Self::AfterFirst { after, num_rows }),
            (None, Some(before), None, Some(num_rows)) => Ok(Self::BeforeLast { before, num_rows }),
            _ => {
                tracing::debug!(?after, ?before, ?first, ?last, "rejected pagination arguments");
                Err(PaginationError::InvalidPaginationArguments)
            }
        }
    }

    pub fn use_after(&self) -> bool {
        matches!(self, Self::AfterFirst { .. })
    }

    pub fn use_before(&self) -> bool {
        matches!(self, Self::BeforeLast { .. })
    }

    pub fn after(&self) -> Option<RecordId> {
        match self {
            Self::AfterFirst { after, .. } => Some(*after),
            _ => None,
        }
    }

    pub fn before(&self) -> Option<RecordId> {
        match self {
            Self::BeforeLast { before, .. } => Some(*before),
            _ => None,
        }
    }

    pub fn num_rows(&self) -> usize {
        match self {
            Self::FirstOnly { num_rows }
            | Self::AfterFirst { num_rows, .. }
            | Self::BeforeLast { num_rows, .. } => *num_rows,
        }
    }

    /// Storage order of the page query.
    pub fn direction(&self) -> SortDirection {
        match self {
            Self::BeforeLast { .. } => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }

    fn page_filter(&self) -> IdFilter {
        match self {
            Self::FirstOnly { .. } => IdFilter::unbounded(),
            Self::AfterFirst { after, .. } => IdFilter::less_than(*after),
            Self::BeforeLast { before, .. } => IdFilter::greater_than(*before),
        }
    }

    /// Selects the page itself, in storage order.
    pub fn page_query(&self) -> RangeQuery {
        RangeQuery::new(self.page_filter(), self.direction()).limit(self.num_rows())
    }

    /// Selects the first row past the page in the paging direction.
    pub fn additional_row_query(&self) -> RangeQuery {
        RangeQuery::new(self.page_filter(), self.direction()).offset(self.num_rows())
    }

    /// Selects the cursor and anything beyond it on the side the page did not
    /// consume. `None` without a cursor.
    pub fn behind_row_query(&self) -> Option<RangeQuery> {
        match self {
            Self::FirstOnly { .. } => None,
            Self::AfterFirst { after, .. } => {
                Some(RangeQuery::new(IdFilter::at_least(*after), SortDirection::Ascending))
            }
            Self::BeforeLast { before, .. } => {
                Some(RangeQuery::new(IdFilter::at_most(*before), SortDirection::Descending))
            }
        }
    }
}

/// Caller-facing pagination arguments with opaque cursors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationArgs {
    pub first: Option<usize>,
    pub after: Option<String>,
    pub last: Option<usize>,
    pub before: Option<String>,
}

impl PaginationArgs {
    pub fn into_spec(self) -> Result<PageQuerySpec, PaginationError> {
        let after = self.after.as_deref().map(decode_cursor).transpose()?;
        let before = self.before.as_deref().map(decode_cursor).transpose()?;
        PageQuerySpec::validate(after, before, self.first, self.last)
    }
}

impl TryFrom<PaginationArgs> for PageQuerySpec {
    type Error = PaginationError;

    fn try_from(args: PaginationArgs) -> Result<Self, Self::Error> {
        args.into_spec()
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Bound;

    use super::*;
    use crate::cursor::encode_cursor;

    #[test]
    fn test_validate_accepted_shapes() {
        assert_eq!(
            PageQuerySpec::validate(None, None, Some(5), None).unwrap(),
            PageQuerySpec::FirstOnly { num_rows: 5 }
        );
        assert_eq!(
            PageQuerySpec::validate(Some(3), None, Some(5), None).unwrap(),
            PageQuerySpec::AfterFirst { after: 3, num_rows: 5 }
        );
        assert_eq!(
            PageQuerySpec::validate(None, Some(4), None, Some(2)).unwrap(),
            PageQuerySpec::BeforeLast { before: 4, num_rows: 2 }
        );
    }

    #[test]
    fn test_validate_all_subsets() {
        let mut accepted = 0;
        for mask in 0u8..16 {
            let after = (mask & 1 != 0).then_some(3);
            let before = (mask & 2 != 0).then_some(4);
            let first = (mask & 4 != 0).then_some(5);
            let last = (mask & 8 != 0).then_some(2);

            match PageQuerySpec::validate(after, before, first, last) {
                Ok(_) => accepted += 1,
                Err(err) => assert!(
                    matches!(err, PaginationError::InvalidPaginationArguments),
                    "mask {mask:04b}: unexpected {err:?}"
                ),
            }
        }
        assert_eq!(accepted, 3);
    }

    #[test]
    fn test_accessors() {
        let spec = PageQuerySpec::FirstOnly { num_rows: 5 };
        assert!(!spec.use_after());
        assert!(!spec.use_before());
        assert_eq!(spec.direction(), SortDirection::Descending);

        let spec = PageQuerySpec::AfterFirst { after: 3, num_rows: 5 };
        assert!(spec.use_after());
        assert_eq!(spec.after(), Some(3));
        assert_eq!(spec.before(), None);
        assert_eq!(spec.direction(), SortDirection::Descending);

        let spec = PageQuerySpec::BeforeLast { before: 4, num_rows: 2 };
        assert!(spec.use_before());
        assert_eq!(spec.before(), Some(4));
        assert_eq!(spec.num_rows(), 2);
        assert_eq!(spec.direction(), SortDirection::Ascending);
    }

    #[test]
    fn test_queries() {
        let spec = PageQuerySpec::AfterFirst { after: 4, num_rows: 2 };
        let page = spec.page_query();
        assert_eq!(page.filter.upper, Bound::Excluded(4));
        assert_eq!(page.limit, Some(2));
        assert_eq!(spec.additional_row_query().offset, 2);
        assert_eq!(spec.behind_row_query().unwrap().filter.lower, Bound::Included(4));

        let spec = PageQuerySpec::BeforeLast { before: 1, num_rows: 2 };
        assert_eq!(spec.page_query().filter.lower, Bound::Excluded(1));
        assert_eq!(spec.page_query().order, SortDirection::Ascending);
        assert_eq!(spec.behind_row_query().unwrap().filter.upper, Bound::Included(1));

        assert!(PageQuerySpec::FirstOnly { num_rows: 3 }.behind_row_query().is_none());
    }

    #[test]
    fn test_pagination_args() {
        let args = PaginationArgs { first: Some(2), after: Some(encode_cursor(4)), ..Default::default() };
        assert_eq!(args.into_spec().unwrap(), PageQuerySpec::AfterFirst { after: 4, num_rows: 2 });

        let args = PaginationArgs { last: Some(2), before: Some(encode_cursor(1)), ..Default::default() };
        assert_eq!(
            PageQuerySpec::try_from(args).unwrap(),
            PageQuerySpec::BeforeLast { before: 1, num_rows: 2 }
        );

        let args = PaginationArgs { first: Some(2), after: Some("garbage".to_string()), ..Default::default() };
        assert!(matches!(args.into_spec(), Err(PaginationError::InvalidCursor(_))));

        let args = PaginationArgs { first: Some(2), last: Some(2), ..Default::default() };
        assert!(matches!(args.into_spec(), Err(PaginationError::InvalidPaginationArguments)));
    }
}
