//! Turns a report payload into something the page can display.
//!
//! Three shapes are accepted, in order of preference:
//! 1. a server-built `html_table` fragment, shown verbatim;
//! 2. a structured `data` array, rendered into a table here;
//! 3. anything else, pretty-printed as JSON (error and debug payloads).

use num_format::{Locale, ToFormattedString};

use crate::model::report::{Metric, ReportRow, SUMMARY_ROW_CLASS};
use crate::requests::ReportPayload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportView {
    /// Markup to insert as HTML.
    Table(String),
    /// Text to show inside a `<pre>`.
    Raw(String),
}

pub const COLUMN_HEADERS: [&str; 14] = [
    "캠페인명",
    "광고세트명",
    "소재명",
    "FB 광고비용",
    "노출",
    "Click",
    "CTR",
    "CPC",
    "CVR",
    "구매 수",
    "구매당 비용",
    "광고 성과",
    "콘텐츠 유형",
    "광고 콘텐츠",
];

pub fn report_view(payload: &ReportPayload) -> ReportView {
    if let Some(html) = &payload.html_table {
        return ReportView::Table(html.clone());
    }
    if !payload.rows.is_empty() {
        return ReportView::Table(rows_table(&payload.rows));
    }
    let raw = serde_json::to_string_pretty(&payload.raw).unwrap_or_else(|_| payload.raw.to_string());
    ReportView::Raw(raw)
}

/// Renders structured rows with the same columns and classes the report
/// service uses, summary rows first.
pub fn rows_table(rows: &[ReportRow]) -> String {
    let mut html = String::from("<table class=\"report-table\"><thead><tr>");
    for header in COLUMN_HEADERS {
        html.push_str(&format!("<th>{}</th>", header));
    }
    html.push_str("</tr></thead><tbody>");

    let (summary, body): (Vec<&ReportRow>, Vec<&ReportRow>) =
        rows.iter().partition(|r| r.is_summary());
    for row in summary.into_iter().chain(body) {
        html.push_str(&row_html(row));
    }

    html.push_str("</tbody></table>");
    html
}

fn row_html(row: &ReportRow) -> String {
    let summary = row.is_summary();
    let tag = row.performance_tag();

    let mut cells: Vec<String> = [&row.campaign_name, &row.adset_name, &row.ad_name]
        .iter()
        .map(|text| cell(text, ""))
        .collect();
    for (metric, format) in [
        (&row.spend, MetricFormat::Currency),
        (&row.impressions, MetricFormat::Count),
        (&row.clicks, MetricFormat::Count),
        (&row.ctr, MetricFormat::Percent),
        (&row.cpc, MetricFormat::Currency),
        (&row.cvr, MetricFormat::Percent),
        (&row.purchases, MetricFormat::Count),
        (&row.cost_per_purchase, MetricFormat::Currency),
    ] {
        cells.push(cell(&format.apply(metric.as_ref()), ""));
    }
    cells.push(cell(&row.performance, tag.css_class()));
    cells.push(cell(&row.content_type, ""));

    let content = match row.image_url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => format!(
            "<img src=\"{}\" class=\"ad-content-thumbnail\" alt=\"광고 콘텐츠\">",
            escape_html(url)
        ),
        None if summary => String::new(),
        None => "-".to_string(),
    };
    cells.push(format!("<td class=\"ad-content-cell\">{}</td>", content));

    let class = if summary { SUMMARY_ROW_CLASS } else { "" };
    format!("<tr class=\"{}\">{}</tr>", class, cells.concat())
}

fn cell(text: &str, class: &str) -> String {
    if class.is_empty() {
        format!("<td>{}</td>", escape_html(text))
    } else {
        format!("<td class=\"{}\">{}</td>", class, escape_html(text))
    }
}

/// How a metric column is printed. Numbers are truncated to whole units and
/// grouped by thousands; text the service already formatted is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetricFormat {
    /// `12,000 ₩`
    Currency,
    /// `5,400`
    Count,
    /// `1.61%`, sent preformatted by the service.
    Percent,
}

impl MetricFormat {
    fn apply(self, metric: Option<&Metric>) -> String {
        let whole = match metric {
            Some(Metric::Text(text)) => return text.clone(),
            Some(Metric::Integer(v)) => *v,
            Some(Metric::Float(v)) if v.is_finite() => v.trunc() as i64,
            Some(Metric::Float(_)) | None => 0,
        };
        match self {
            MetricFormat::Currency => format!("{} ₩", whole.to_formatted_string(&Locale::en)),
            MetricFormat::Count => whole.to_formatted_string(&Locale::en),
            MetricFormat::Percent => match metric {
                Some(Metric::Float(v)) if v.is_finite() => format!("{}%", v),
                _ => format!("{}%", whole),
            },
        }
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'` for safe interpolation into markup.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
