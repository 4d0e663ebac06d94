// admin-console/src/domain/dashboard_model.rs

//! ダッシュボードの各パネルが受け取るペイロード

use serde::{Deserialize, Serialize};

// --- ヘッダー ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeFilter {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    pub time_filters: Vec<TimeFilter>,
}

// --- 左カラム ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerStat {
    pub label: String,
    pub value: u64,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatsResponse {
    pub total_servers: u64,
    pub events: Vec<ServerStat>,
}

/// 名前付きの数値系列（棒グラフ・折れ線グラフ共通）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub data: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficBarResponse {
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffStatusType {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffItem {
    pub name: String,
    pub dept: String,
    pub phone: String,
    pub status: String,
    pub status_type: StaffStatusType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffListResponse {
    pub list: Vec<StaffItem>,
}

// --- 中央カラム ---

/// 数値または文字列の識別子
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Number(i64),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeRef>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_style: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyLink {
    pub source: NodeRef,
    pub target: NodeRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyResponse {
    pub center_node: TopologyNode,
    pub nodes: Vec<TopologyNode>,
    pub connections: Vec<TopologyLink>,
}

impl TopologyResponse {
    /// 接続先がすべて既知のノードを指しているか
    pub fn links_are_resolvable(&self) -> bool {
        self.connections.iter().all(|link| {
            self.resolves(&link.source) && self.resolves(&link.target)
        })
    }

    fn resolves(&self, node_ref: &NodeRef) -> bool {
        match node_ref {
            NodeRef::Name(name) if *name == self.center_node.name => true,
            _ => self
                .nodes
                .iter()
                .any(|node| node.id.as_ref() == Some(node_ref)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartItem {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPieResponse {
    pub data: Vec<PieChartItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTrendResponse {
    pub x_axis: Vec<String>,
    pub series: Vec<ChartSeries>,
}

// --- 右カラム ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceDetail {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceOverviewResponse {
    pub total_devices: u64,
    pub details: Vec<DeviceDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizationStat {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizationProgress {
    pub total: u64,
    pub current: u64,
    pub label: String,
    pub percentage: f64,
}

impl LocalizationProgress {
    /// current / total を小数第1位までのパーセントで作る
    pub fn new(label: &str, current: u64, total: u64) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            (current as f64 / total as f64 * 1000.0).round() / 10.0
        };
        Self {
            total,
            current,
            label: label.to_string(),
            percentage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizationResponse {
    pub stat1: LocalizationStat,
    pub stat2: LocalizationStat,
    pub progress: LocalizationProgress,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub list: Vec<NotificationItem>,
}
