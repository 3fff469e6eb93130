use serde::{Deserialize, Serialize};
use std::fmt;

/// Ad-name values that mark the aggregate row of a report.
pub const SUMMARY_SENTINELS: [&str; 2] = ["합계", "Total"];

/// CSS class the report service puts on the aggregate row.
pub const SUMMARY_ROW_CLASS: &str = "total-row";

/// Returns `true` when `value` is one of the summary-row sentinels.
pub fn is_summary_marker(value: &str) -> bool {
    let value = value.trim();
    SUMMARY_SENTINELS.iter().any(|s| *s == value)
}

/// A single metric cell as emitted by the report service.
///
/// The service mixes raw numbers (`12000`, `1.5`) with preformatted strings
/// (`"1.23%"`), so the value is kept in whichever form it arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Integer(v) => write!(f, "{}", v),
            Metric::Float(v) => write!(f, "{}", v),
            Metric::Text(v) => f.write_str(v),
        }
    }
}

/// One row of the structured `data` array of a report.
///
/// Field names follow the report service's Korean column keys; English
/// aliases are accepted so fixtures and other producers can use either.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "소재명", alias = "ad_name", default)]
    pub ad_name: String,
    #[serde(rename = "캠페인명", alias = "campaign_name", default)]
    pub campaign_name: String,
    #[serde(rename = "광고세트명", alias = "adset_name", default)]
    pub adset_name: String,
    #[serde(rename = "FB 광고비용", alias = "spend", default)]
    pub spend: Option<Metric>,
    #[serde(rename = "노출", alias = "impressions", default)]
    pub impressions: Option<Metric>,
    #[serde(rename = "Click", alias = "clicks", default)]
    pub clicks: Option<Metric>,
    #[serde(rename = "CTR", alias = "ctr", default)]
    pub ctr: Option<Metric>,
    #[serde(rename = "CPC", alias = "cpc", default)]
    pub cpc: Option<Metric>,
    #[serde(rename = "CVR", alias = "cvr", default)]
    pub cvr: Option<Metric>,
    #[serde(rename = "구매 수", alias = "purchase_count", default)]
    pub purchases: Option<Metric>,
    #[serde(rename = "구매당 비용", alias = "cost_per_purchase", default)]
    pub cost_per_purchase: Option<Metric>,
    #[serde(rename = "광고 성과", alias = "performance", default)]
    pub performance: String,
    #[serde(rename = "콘텐츠 유형", alias = "content_type", default)]
    pub content_type: String,
    #[serde(alias = "display_url", default)]
    pub image_url: Option<String>,
}

impl ReportRow {
    pub fn is_summary(&self) -> bool {
        is_summary_marker(&self.ad_name)
    }

    pub fn performance_tag(&self) -> PerformanceTag {
        PerformanceTag::parse(&self.performance)
    }
}

/// Categorical performance label attached to an ad.
///
/// The declaration order is the sort rank: `Winning` sorts first and `Unset`
/// last, regardless of how the labels compare as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PerformanceTag {
    Winning,
    HighPerformance,
    Performing,
    NeedsImprovement,
    Unset,
}

impl PerformanceTag {
    /// Parses a rendered label. Korean and English spellings are recognised;
    /// anything else (including the empty string) is `Unset`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "위닝 콘텐츠" | "winning content" => PerformanceTag::Winning,
            "고성과 콘텐츠" | "high performance content" => PerformanceTag::HighPerformance,
            "성과 콘텐츠" | "performing content" => PerformanceTag::Performing,
            "개선 필요!" | "개선 필요" | "needs improvement" => PerformanceTag::NeedsImprovement,
            _ => PerformanceTag::Unset,
        }
    }

    /// CSS class used to colour the tag cell.
    pub fn css_class(self) -> &'static str {
        match self {
            PerformanceTag::Winning => "winning-content",
            PerformanceTag::HighPerformance => "medium-performance",
            PerformanceTag::Performing => "third-performance",
            PerformanceTag::NeedsImprovement => "needs-improvement",
            PerformanceTag::Unset => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_rank_in_fixed_order() {
        let mut tags = vec![
            PerformanceTag::parse("needs improvement"),
            PerformanceTag::parse("위닝 콘텐츠"),
            PerformanceTag::parse(""),
            PerformanceTag::parse("High Performance Content"),
            PerformanceTag::parse("성과 콘텐츠"),
        ];
        tags.sort();
        assert_eq!(
            tags,
            vec![
                PerformanceTag::Winning,
                PerformanceTag::HighPerformance,
                PerformanceTag::Performing,
                PerformanceTag::NeedsImprovement,
                PerformanceTag::Unset,
            ]
        );
    }

    #[test]
    fn unknown_label_is_unset() {
        assert_eq!(PerformanceTag::parse("great"), PerformanceTag::Unset);
    }

    #[test]
    fn row_deserializes_from_service_keys() {
        let json = r#"{
            "캠페인명": "봄 세일",
            "광고세트명": "리타겟팅",
            "소재명": "합계",
            "FB 광고비용": 120000,
            "노출": 5400,
            "Click": 87,
            "CTR": "1.61%",
            "CPC": 1379,
            "광고 성과": ""
        }"#;
        let row: ReportRow = serde_json::from_str(json).unwrap();
        assert!(row.is_summary());
        assert_eq!(row.spend, Some(Metric::Integer(120000)));
        assert_eq!(row.ctr, Some(Metric::Text("1.61%".to_string())));
        assert_eq!(row.performance_tag(), PerformanceTag::Unset);
        assert_eq!(row.image_url, None);
    }

    #[test]
    fn summary_marker_ignores_padding() {
        assert!(is_summary_marker(" Total "));
        assert!(!is_summary_marker("Totals"));
    }
}
