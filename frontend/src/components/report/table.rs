//! DOM adapter for client-side sorting of the rendered report table.
//!
//! The report markup is inserted as-is, so the rows only exist in the DOM.
//! This module reads them into `common::sort::TableRow` snapshots, asks the
//! sort engine for the new order and re-appends the `<tr>` nodes in that
//! order. Header sort indicators are `asc` / `desc` classes on the `<th>`.

use common::model::report::SUMMARY_ROW_CLASS;
use common::sort::{ad_name_column, sorted_order, ColumnKind, SortDirection, TableRow};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlTableCellElement, MouseEvent};
use yew::NodeRef;

/// Column index of the header cell a click landed on, if any.
pub fn header_column(event: &MouseEvent) -> Option<usize> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let header = target.closest("th").ok()??;
    let index = header.dyn_into::<HtmlTableCellElement>().ok()?.cell_index();
    usize::try_from(index).ok()
}

/// Re-orders the body rows of the table inside `container` by `column`.
pub fn sort_rendered_table(container: &NodeRef, column: usize, direction: SortDirection) {
    let Some(table) = container
        .cast::<Element>()
        .and_then(|c| c.query_selector("table").ok().flatten())
    else {
        return;
    };
    let Some((header, body)) = split_rows(&table) else {
        return;
    };

    let labels = cell_texts(&header);
    let kind = labels
        .get(column)
        .map(|label| ColumnKind::from_header(label))
        .unwrap_or(ColumnKind::Value);
    let name_column = ad_name_column(&labels);
    let snapshots: Vec<TableRow> = body.iter().map(|row| snapshot_row(row, name_column)).collect();
    let order = sorted_order(&snapshots, column, kind, direction);

    if let Some(parent) = body.first().and_then(|row| row.parent_node()) {
        for index in order {
            parent.append_child(&body[index]).ok();
        }
    }
    mark_headers(&header, column, direction);
}

/// First row holding `<th>` cells, and every row without any.
fn split_rows(table: &Element) -> Option<(Element, Vec<Element>)> {
    let rows = table.query_selector_all("tr").ok()?;
    let mut header = None;
    let mut body = Vec::new();
    for i in 0..rows.length() {
        let Some(row) = rows.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if row.query_selector("th").ok().flatten().is_some() {
            header.get_or_insert(row);
        } else {
            body.push(row);
        }
    }
    header.map(|h| (h, body))
}

fn cell_texts(row: &Element) -> Vec<String> {
    let cells = row.children();
    (0..cells.length())
        .filter_map(|i| cells.item(i))
        .map(|cell| cell.text_content().unwrap_or_default())
        .collect()
}

fn snapshot_row(row: &Element, name_column: Option<usize>) -> TableRow {
    TableRow::new(
        cell_texts(row),
        row.class_list().contains(SUMMARY_ROW_CLASS),
        name_column,
    )
}

fn mark_headers(header: &Element, column: usize, direction: SortDirection) {
    let cells = header.children();
    for i in 0..cells.length() {
        let Some(cell) = cells.item(i) else {
            continue;
        };
        let classes = cell.class_list();
        classes.remove_2("asc", "desc").ok();
        if i as usize == column {
            classes.add_1(direction.css_class()).ok();
        }
    }
}
