//! Client-side re-ordering of an already rendered report table.
//!
//! The engine works on plain cell text snapshots (`TableRow`) and returns the
//! new row order as indices, so the browser adapter only has to read the
//! cells out of the DOM and re-append the `<tr>` nodes in that order.
//!
//! Comparison rules for a clicked column:
//! - the performance column compares by the fixed `PerformanceTag` rank;
//! - any other column compares numerically when *both* cells parse as numbers
//!   (see `parse_numeric`), and falls back to a text comparison as soon as
//!   either side does not. Text compares by lowercased code point, not by a
//!   locale collation; for Hangul syllables and ASCII that is dictionary
//!   order.
//!
//! Summary rows are pinned: they keep their relative order and always come
//! before every sorted row. A row is a summary row when it carries the
//! summary class or when its ad-name cell holds a summary sentinel; other
//! cells are never inspected for the sentinel.

use std::cmp::Ordering;

use crate::model::report::{PerformanceTag, is_summary_marker};

/// Header labels of the performance-tag column.
pub const PERFORMANCE_HEADERS: [&str; 2] = ["광고 성과", "Performance"];

/// Header labels of the ad-name column, the one carrying the summary sentinel.
pub const AD_NAME_HEADERS: [&str; 3] = ["소재명", "광고명", "Ad name"];

/// Index of the ad-name column among `headers`, if the table has one.
pub fn ad_name_column<S: AsRef<str>>(headers: &[S]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.as_ref().trim();
        AD_NAME_HEADERS.iter().any(|h| h.eq_ignore_ascii_case(header))
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Class put on the header currently driving the sort.
    pub fn css_class(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Which header was clicked last and in which direction it sorts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    column: Option<usize>,
    direction: SortDirection,
}

impl SortState {
    /// Registers a click on `column` and returns the direction to sort in:
    /// ascending on the first click, flipping on each repeated click of the
    /// same column, and back to ascending when another column is clicked.
    pub fn click(&mut self, column: usize) -> SortDirection {
        self.direction = match self.column {
            Some(current) if current == column => self.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        self.column = Some(column);
        self.direction
    }

    /// Indicator to show on `column`'s header; only the last clicked header has one.
    pub fn indicator(&self, column: usize) -> Option<SortDirection> {
        (self.column == Some(column)).then_some(self.direction)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// How cells of a column are turned into sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    PerformanceTag,
    Value,
}

impl ColumnKind {
    pub fn from_header(label: &str) -> Self {
        let label = label.trim();
        if PERFORMANCE_HEADERS
            .iter()
            .any(|h| h.eq_ignore_ascii_case(label))
        {
            ColumnKind::PerformanceTag
        } else {
            ColumnKind::Value
        }
    }
}

/// Text snapshot of one rendered body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub pinned: bool,
}

impl TableRow {
    /// `marked_summary` is whether the row carries the summary CSS class; a
    /// row is also pinned when the cell at `name_column` holds a summary
    /// sentinel.
    pub fn new(cells: Vec<String>, marked_summary: bool, name_column: Option<usize>) -> Self {
        let cells: Vec<String> = cells.into_iter().map(|c| c.trim().to_string()).collect();
        let named_summary = name_column
            .and_then(|i| cells.get(i))
            .is_some_and(|c| is_summary_marker(c));
        Self {
            pinned: marked_summary || named_summary,
            cells,
        }
    }

    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Parses a formatted cell such as `"$1,200.50"`, `"12,000 ₩"` or `"1.61%"`.
///
/// Every character other than ASCII digits, `-` and `.` is dropped before
/// parsing; cells without a single digit are not numeric.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Ascending comparison of two cells of a column of the given kind.
pub fn compare_cells(a: &str, b: &str, kind: ColumnKind) -> Ordering {
    match kind {
        ColumnKind::PerformanceTag => PerformanceTag::parse(a).cmp(&PerformanceTag::parse(b)),
        ColumnKind::Value => match (parse_numeric(a), parse_numeric(b)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => compare_text(a, b),
        },
    }
}

/// Lowercased code-point order, raw text as the tie-breaker.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Returns the display order of `rows` after sorting by `column`.
///
/// The result is a permutation of `0..rows.len()`: pinned rows first in their
/// current order, then the remaining rows stably sorted. Descending order
/// reverses the comparison, not the result, so rows with equal keys keep the
/// relative order they had before the sort.
pub fn sorted_order(
    rows: &[TableRow],
    column: usize,
    kind: ColumnKind,
    direction: SortDirection,
) -> Vec<usize> {
    let (pinned, mut sortable): (Vec<usize>, Vec<usize>) =
        (0..rows.len()).partition(|&i| rows[i].pinned);

    let mut compare = |a: &usize, b: &usize| {
        let ordering = compare_cells(rows[*a].cell(column), rows[*b].cell(column), kind);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    };
    merge_sort_by(&mut sortable, &mut compare);

    pinned.into_iter().chain(sortable).collect()
}

// Mixed numeric/text comparison is not a total order, which `slice::sort_by`
// may panic on. A plain top-down merge sort is stable and never does.
fn merge_sort_by<T: Copy>(items: &mut [T], compare: &mut impl FnMut(&T, &T) -> Ordering) {
    let len = items.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    merge_sort_by(&mut items[..mid], compare);
    merge_sort_by(&mut items[mid..], compare);

    let mut merged = Vec::with_capacity(len);
    let (mut left, mut right) = (0, mid);
    while left < mid && right < len {
        if compare(&items[right], &items[left]) == Ordering::Less {
            merged.push(items[right]);
            right += 1;
        } else {
            merged.push(items[left]);
            left += 1;
        }
    }
    merged.extend_from_slice(&items[left..mid]);
    merged.extend_from_slice(&items[right..]);
    items.copy_from_slice(&merged);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[&str]) -> Vec<TableRow> {
        values
            .iter()
            .map(|v| TableRow::new(vec![v.to_string()], false, None))
            .collect()
    }

    fn apply(rows: &[TableRow], order: &[usize]) -> Vec<TableRow> {
        order.iter().map(|&i| rows[i].clone()).collect()
    }

    fn column(rows: &[TableRow], column: usize) -> Vec<String> {
        rows.iter().map(|r| r.cell(column).to_string()).collect()
    }

    #[test]
    fn performance_tags_sort_by_rank() {
        let table = rows(&[
            "needs improvement",
            "winning content",
            "",
            "high performance content",
        ]);
        let order = sorted_order(&table, 0, ColumnKind::PerformanceTag, SortDirection::Ascending);
        assert_eq!(
            column(&apply(&table, &order), 0),
            vec![
                "winning content",
                "high performance content",
                "needs improvement",
                "",
            ]
        );
    }

    #[test]
    fn korean_tags_sort_by_rank_descending() {
        let table = rows(&["위닝 콘텐츠", "개선 필요!", "성과 콘텐츠", "고성과 콘텐츠"]);
        let order = sorted_order(&table, 0, ColumnKind::PerformanceTag, SortDirection::Descending);
        assert_eq!(
            column(&apply(&table, &order), 0),
            vec!["개선 필요!", "성과 콘텐츠", "고성과 콘텐츠", "위닝 콘텐츠"]
        );
    }

    #[test]
    fn formatted_numbers_compare_numerically() {
        assert_eq!(parse_numeric("$1,200.50"), Some(1200.5));
        assert_eq!(parse_numeric("12,000 ₩"), Some(12000.0));
        assert_eq!(parse_numeric("1.61%"), Some(1.61));
        assert_eq!(parse_numeric("-3"), Some(-3.0));
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("-"), None);
        assert_eq!(parse_numeric("2026-10-17"), None);

        // Text order would put "$1,200.50" first.
        assert_eq!(
            compare_cells("$99.00", "$1,200.50", ColumnKind::Value),
            Ordering::Less
        );
    }

    #[test]
    fn text_fallback_triggers_when_either_side_is_not_numeric() {
        // Numerically 100 > 20; once one side is text the comparison is textual.
        assert_eq!(compare_cells("100", "20", ColumnKind::Value), Ordering::Greater);
        assert_eq!(compare_cells("100", "abc", ColumnKind::Value), Ordering::Less);
        assert_eq!(compare_cells("abc", "$99.00", ColumnKind::Value), Ordering::Greater);

        let table = rows(&["$1,200.50", "$99.00", "abc"]);
        let order = sorted_order(&table, 0, ColumnKind::Value, SortDirection::Ascending);
        assert_eq!(
            column(&apply(&table, &order), 0),
            vec!["$99.00", "$1,200.50", "abc"]
        );
    }

    #[test]
    fn text_comparison_ignores_case() {
        assert_eq!(compare_cells("apple", "Banana", ColumnKind::Value), Ordering::Less);
        assert_eq!(compare_cells("가방", "나무", ColumnKind::Value), Ordering::Less);
    }

    #[test]
    fn summary_row_stays_first_in_both_directions() {
        let table = vec![
            TableRow::new(vec!["캠페인 B".into(), "300".into()], false, Some(0)),
            TableRow::new(vec!["".into(), "900".into()], true, Some(0)),
            TableRow::new(vec!["캠페인 A".into(), "100".into()], false, Some(0)),
            TableRow::new(vec!["합계".into(), "400".into()], false, Some(0)),
        ];
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            for col in 0..2 {
                let order = sorted_order(&table, col, ColumnKind::Value, direction);
                assert_eq!(&order[..2], &[1, 3]);
            }
        }
        let order = sorted_order(&table, 1, ColumnKind::Value, SortDirection::Descending);
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn equal_keys_keep_previous_relative_order() {
        let table = vec![
            TableRow::new(vec!["b".into(), "10".into()], false, None),
            TableRow::new(vec!["a".into(), "5".into()], false, None),
            TableRow::new(vec!["c".into(), "10".into()], false, None),
            TableRow::new(vec!["d".into(), "5".into()], false, None),
        ];
        let asc = apply(
            &table,
            &sorted_order(&table, 1, ColumnKind::Value, SortDirection::Ascending),
        );
        assert_eq!(column(&asc, 0), vec!["a", "d", "b", "c"]);

        let desc = apply(
            &asc,
            &sorted_order(&asc, 1, ColumnKind::Value, SortDirection::Descending),
        );
        assert_eq!(column(&desc, 0), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn third_click_matches_first_click() {
        let mut state = SortState::default();
        let table = vec![
            TableRow::new(vec!["x".into(), "7".into()], false, Some(0)),
            TableRow::new(vec!["y".into(), "7".into()], false, Some(0)),
            TableRow::new(vec!["z".into(), "abc".into()], false, Some(0)),
            TableRow::new(vec!["w".into(), "1".into()], false, Some(0)),
            TableRow::new(vec!["Total".into(), "15".into()], false, Some(0)),
        ];

        let mut shown = table.clone();
        let mut snapshots = Vec::new();
        for _ in 0..3 {
            let direction = state.click(1);
            let order = sorted_order(&shown, 1, ColumnKind::Value, direction);
            shown = apply(&shown, &order);
            snapshots.push(shown.clone());
        }
        assert_eq!(snapshots[0], snapshots[2]);
        assert_ne!(snapshots[0], snapshots[1]);
        assert_eq!(column(&snapshots[0], 0), vec!["Total", "w", "x", "y", "z"]);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let table = rows(&["3", "1", "abc", "2", "1"]);
        let once = apply(
            &table,
            &sorted_order(&table, 0, ColumnKind::Value, SortDirection::Ascending),
        );
        let twice = apply(
            &once,
            &sorted_order(&once, 0, ColumnKind::Value, SortDirection::Ascending),
        );
        assert_eq!(once, twice);
    }

    #[test]
    fn direction_resets_on_other_column() {
        let mut state = SortState::default();
        assert_eq!(state.click(2), SortDirection::Ascending);
        assert_eq!(state.click(2), SortDirection::Descending);
        assert_eq!(state.click(4), SortDirection::Ascending);
        assert_eq!(state.click(2), SortDirection::Ascending);
        assert_eq!(state.indicator(2), Some(SortDirection::Ascending));
        assert_eq!(state.indicator(4), None);
    }

    #[test]
    fn missing_cells_sort_as_empty_text() {
        let table = vec![
            TableRow::new(vec!["b".into()], false, None),
            TableRow::new(Vec::new(), false, None),
        ];
        let order = sorted_order(&table, 0, ColumnKind::Value, SortDirection::Ascending);
        assert_eq!(order, vec![1, 0]);
    }

    #[test]
    fn sentinel_outside_ad_name_column_is_not_pinned() {
        let headers = ["캠페인명", "광고세트명", "소재명", "FB 광고비용"];
        let name_column = ad_name_column(&headers);
        assert_eq!(name_column, Some(2));

        let table = vec![
            TableRow::new(
                vec!["Spring".into(), "a".into(), "ad-1".into(), "300".into()],
                false,
                name_column,
            ),
            TableRow::new(
                vec!["Total".into(), "b".into(), "ad-2".into(), "100".into()],
                false,
                name_column,
            ),
        ];
        assert!(!table[1].pinned);
        let order = sorted_order(&table, 3, ColumnKind::Value, SortDirection::Descending);
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn performance_header_is_detected() {
        assert_eq!(ColumnKind::from_header(" 광고 성과 "), ColumnKind::PerformanceTag);
        assert_eq!(ColumnKind::from_header("performance"), ColumnKind::PerformanceTag);
        assert_eq!(ColumnKind::from_header("CPC"), ColumnKind::Value);
    }
}
