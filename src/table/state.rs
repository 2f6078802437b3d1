//! The UI state of the transaction table and its query string encoding.
//!
//! The browser keeps no state of its own: every request for the table carries
//! the full [TableState] as query parameters, and every link or button in the
//! rendered table encodes the state it leads to.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::pagination::{PageSize, PaginationConfig};

/// A column of the transaction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    /// When the transaction happened.
    Date,
    /// The category badge.
    Category,
    /// Who was paid.
    Vendor,
    /// How much was spent.
    Amount,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 4] = [
        Column::Date,
        Column::Category,
        Column::Vendor,
        Column::Amount,
    ];

    /// The name of the column in query strings.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::Category => "category",
            Column::Vendor => "vendor",
            Column::Amount => "amount",
        }
    }

    /// Parse a column name from a query string.
    pub fn from_query_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_query_value() == value.trim())
    }

    /// The column header text.
    pub fn label(self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::Category => "Category",
            Column::Vendor => "Vendor",
            Column::Amount => "Amount",
        }
    }

    /// The date column opens the transaction details, so it is always shown.
    pub fn can_hide(self) -> bool {
        self != Column::Date
    }

    /// Numbers sort largest first on the first click, text sorts A to Z.
    pub fn first_sort_direction(self) -> SortDirection {
        match self {
            Column::Amount => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }
}

/// The direction to sort a column in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Sort in order of increasing value.
    Ascending,
    /// Sort in order of decreasing value.
    Descending,
}

impl SortDirection {
    /// "asc" or "desc".
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sort the table by `column` in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    /// The column to compare.
    pub column: Column,
    /// The order to put the values in.
    pub direction: SortDirection,
}

impl SortDirective {
    /// Parse a directive like "amount:desc". A missing direction means ascending.
    fn parse(text: &str) -> Option<Self> {
        let (column, direction) = match text.split_once(':') {
            Some((column, direction)) => (column, direction.trim()),
            None => (text, "asc"),
        };

        let direction = match direction {
            "asc" => SortDirection::Ascending,
            "desc" => SortDirection::Descending,
            _ => return None,
        };

        Some(Self {
            column: Column::from_query_value(column)?,
            direction,
        })
    }

    fn to_query_value(self) -> String {
        format!(
            "{}:{}",
            self.column.as_query_value(),
            self.direction.as_query_value()
        )
    }
}

/// Which columns are hidden. Hiding a column never changes which rows are shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
    hidden: BTreeSet<Column>,
}

impl ColumnVisibility {
    /// Whether `column` is rendered.
    pub fn is_visible(&self, column: Column) -> bool {
        !self.hidden.contains(&column)
    }

    /// Hide `column`. Columns that cannot be hidden are left visible.
    pub fn hide(&mut self, column: Column) {
        if column.can_hide() {
            self.hidden.insert(column);
        }
    }

    /// Show `column` again.
    pub fn show(&mut self, column: Column) {
        self.hidden.remove(&column);
    }

    /// The visible columns in display order.
    pub fn visible_columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|column| self.is_visible(*column))
            .collect()
    }
}

/// The query parameters that encode a [TableState].
///
/// All fields are optional so that a bare request gets the default table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableQuery {
    /// Text to search for in transaction dates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Comma separated sort directives, e.g. "amount:desc,date:asc".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Comma separated names of hidden columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<String>,
    /// The 0-based page index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    /// The number of rows per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
}

/// Everything that controls which transactions the table shows and how.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    /// Only transactions whose date contains this text are shown.
    pub filter: String,
    /// Sort directives in priority order, the first being the primary key.
    pub sorting: Vec<SortDirective>,
    /// Which columns are rendered.
    pub visibility: ColumnVisibility,
    /// The 0-based index of the page to show.
    pub page_index: usize,
    /// The number of rows per page.
    pub page_size: PageSize,
}

impl TableState {
    /// Build the table state from query parameters.
    ///
    /// Malformed sort directives, unknown column names and unsupported page
    /// sizes are ignored in favour of the defaults.
    pub fn from_query(query: TableQuery, config: &PaginationConfig) -> Self {
        let sorting = query
            .sort
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter(|directive| !directive.trim().is_empty())
            .filter_map(SortDirective::parse)
            .collect();

        let mut visibility = ColumnVisibility::default();
        query
            .hidden
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter_map(Column::from_query_value)
            .for_each(|column| visibility.hide(column));

        let page_size = query
            .size
            .and_then(PageSize::from_rows)
            .unwrap_or(config.default_page_size);

        Self {
            filter: query.filter.unwrap_or_default(),
            sorting,
            visibility,
            page_index: query.page.unwrap_or(0),
            page_size,
        }
    }

    /// Encode the state as query parameters, leaving out default values.
    pub fn to_query(&self) -> TableQuery {
        let sort = self
            .sorting
            .iter()
            .map(|directive| directive.to_query_value())
            .collect::<Vec<_>>()
            .join(",");

        let hidden = Column::ALL
            .into_iter()
            .filter(|column| !self.visibility.is_visible(*column))
            .map(Column::as_query_value)
            .collect::<Vec<_>>()
            .join(",");

        TableQuery {
            filter: (!self.filter.is_empty()).then(|| self.filter.clone()),
            sort: (!sort.is_empty()).then_some(sort),
            hidden: (!hidden.is_empty()).then_some(hidden),
            page: (self.page_index != 0).then_some(self.page_index),
            size: Some(self.page_size.get()),
        }
    }

    /// Encode the state as a URL query string, without the leading '?'.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self.to_query()).unwrap_or_default()
    }

    /// Append the encoded state to `route`.
    pub fn to_url(&self, route: &str) -> String {
        format!("{route}?{}", self.to_query_string())
    }

    /// Search for `filter`, going back to the first page.
    pub fn with_filter(&self, filter: &str) -> Self {
        Self {
            filter: filter.to_owned(),
            page_index: 0,
            ..self.clone()
        }
    }

    /// Cycle the sort on `column`: first direction, then the reverse, then unsorted.
    ///
    /// Sorting by a new column replaces any existing directives, and the
    /// table goes back to the first page.
    pub fn with_sort_toggled(&self, column: Column) -> Self {
        let current = self
            .sorting
            .iter()
            .find(|directive| directive.column == column)
            .map(|directive| directive.direction);

        let first = column.first_sort_direction();
        let sorting = match current {
            None => vec![SortDirective {
                column,
                direction: first,
            }],
            Some(direction) if direction == first => vec![SortDirective {
                column,
                direction: first.reversed(),
            }],
            Some(_) => Vec::new(),
        };

        Self {
            sorting,
            page_index: 0,
            ..self.clone()
        }
    }

    /// Show or hide `column`.
    pub fn with_column_toggled(&self, column: Column) -> Self {
        let mut visibility = self.visibility.clone();

        if visibility.is_visible(column) {
            visibility.hide(column);
        } else {
            visibility.show(column);
        }

        Self {
            visibility,
            ..self.clone()
        }
    }

    /// Go to the 0-based page `page_index`.
    pub fn with_page(&self, page_index: usize) -> Self {
        Self {
            page_index,
            ..self.clone()
        }
    }

    /// Change the page size, staying on the page that holds the current top row.
    pub fn with_page_size(&self, page_size: PageSize) -> Self {
        let top_row = self.page_index.saturating_mul(self.page_size.get());

        Self {
            page_size,
            page_index: top_row / page_size.get(),
            ..self.clone()
        }
    }

    /// The direction `column` is sorted in, if it is sorted.
    pub fn sort_direction(&self, column: Column) -> Option<SortDirection> {
        self.sorting
            .iter()
            .find(|directive| directive.column == column)
            .map(|directive| directive.direction)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        pagination::{PageSize, PaginationConfig},
        table::state::{Column, SortDirection, SortDirective, TableQuery, TableState},
    };

    #[test]
    fn empty_query_gives_default_state() {
        let state = TableState::from_query(TableQuery::default(), &PaginationConfig::default());

        assert_eq!(state, TableState::default());
    }

    #[test]
    fn parses_full_query() {
        let query: TableQuery = serde_urlencoded::from_str(
            "filter=2025-03&sort=amount:desc,date&hidden=vendor,category&page=2&size=10",
        )
        .unwrap();

        let state = TableState::from_query(query, &PaginationConfig::default());

        assert_eq!(state.filter, "2025-03");
        assert_eq!(
            state.sorting,
            vec![
                SortDirective {
                    column: Column::Amount,
                    direction: SortDirection::Descending
                },
                SortDirective {
                    column: Column::Date,
                    direction: SortDirection::Ascending
                },
            ]
        );
        assert!(!state.visibility.is_visible(Column::Vendor));
        assert!(!state.visibility.is_visible(Column::Category));
        assert!(state.visibility.is_visible(Column::Amount));
        assert_eq!(state.page_index, 2);
        assert_eq!(state.page_size, PageSize::Ten);
    }

    #[test]
    fn ignores_malformed_values() {
        let query = TableQuery {
            sort: Some("colour:asc,amount:sideways,,vendor:desc".to_owned()),
            hidden: Some("date,nonsense".to_owned()),
            size: Some(7),
            ..Default::default()
        };

        let state = TableState::from_query(query, &PaginationConfig::default());

        assert_eq!(
            state.sorting,
            vec![SortDirective {
                column: Column::Vendor,
                direction: SortDirection::Descending
            }]
        );
        assert!(state.visibility.is_visible(Column::Date));
        assert_eq!(state.page_size, PageSize::Five);
    }

    #[test]
    fn query_string_round_trips() {
        let state = TableState::default()
            .with_filter("2025")
            .with_sort_toggled(Column::Vendor)
            .with_column_toggled(Column::Amount)
            .with_page_size(PageSize::Fifteen)
            .with_page(1);

        let query: TableQuery = serde_urlencoded::from_str(&state.to_query_string()).unwrap();

        assert_eq!(
            TableState::from_query(query, &PaginationConfig::default()),
            state
        );
    }

    #[test]
    fn sort_toggle_cycles_text_column() {
        let state = TableState::default().with_sort_toggled(Column::Vendor);
        assert_eq!(
            state.sort_direction(Column::Vendor),
            Some(SortDirection::Ascending)
        );

        let state = state.with_sort_toggled(Column::Vendor);
        assert_eq!(
            state.sort_direction(Column::Vendor),
            Some(SortDirection::Descending)
        );

        let state = state.with_sort_toggled(Column::Vendor);
        assert!(state.sorting.is_empty());
    }

    #[test]
    fn amount_sorts_descending_first() {
        let state = TableState::default().with_sort_toggled(Column::Amount);

        assert_eq!(
            state.sort_direction(Column::Amount),
            Some(SortDirection::Descending)
        );
    }

    #[test]
    fn sorting_a_new_column_replaces_the_old_one() {
        let state = TableState::default()
            .with_sort_toggled(Column::Vendor)
            .with_page(3)
            .with_sort_toggled(Column::Date);

        assert_eq!(state.sort_direction(Column::Vendor), None);
        assert_eq!(
            state.sort_direction(Column::Date),
            Some(SortDirection::Ascending)
        );
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn filtering_resets_page() {
        let state = TableState::default().with_page(4).with_filter("05");

        assert_eq!(state.page_index, 0);
        assert_eq!(state.filter, "05");
    }

    #[test]
    fn page_size_change_keeps_top_row_in_view() {
        let state = TableState::default().with_page(3);

        let state = state.with_page_size(PageSize::Ten);

        // Row 15 was at the top of page 3 with five rows per page.
        assert_eq!(state.page_index, 1);
    }

    #[test]
    fn page_size_change_on_largest_page_index() {
        let state = TableState::default().with_page(usize::MAX);

        let state = state.with_page_size(PageSize::Fifteen);

        assert_eq!(state.page_index, usize::MAX / 15);
        assert_eq!(state.page_size, PageSize::Fifteen);
    }

    #[test]
    fn date_column_cannot_be_hidden() {
        let state = TableState::default().with_column_toggled(Column::Date);

        assert!(state.visibility.is_visible(Column::Date));
        assert_eq!(state.visibility.visible_columns(), Column::ALL.to_vec());
    }
}
