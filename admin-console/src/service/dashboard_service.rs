// admin-console/src/service/dashboard_service.rs

//! ダッシュボード用のモック分析データ
//!
//! 各パネルは固定データを返す。実 API と同じタイミングになるよう、
//! パネルごとに決まった遅延を入れている。

use crate::domain::dashboard_model::*;
use crate::service::latency::MockLatency;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn series(name: &str, data: &[u64]) -> ChartSeries {
    ChartSeries {
        name: name.to_string(),
        data: data.to_vec(),
    }
}

fn titled(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("タイトル{}", i)).collect()
}

pub struct DashboardService {
    latency: MockLatency,
}

impl DashboardService {
    pub fn new(latency: MockLatency) -> Self {
        Self { latency }
    }

    pub async fn header_config(&self) -> HeaderConfig {
        self.latency.wait(200).await;
        let filter = |label: &str, value: &str| TimeFilter {
            label: label.to_string(),
            value: value.to_string(),
        };
        HeaderConfig {
            time_filters: vec![
                filter("直近1か月", "last_month"),
                filter("直近1週間", "last_week"),
                filter("直近1年", "last_year"),
            ],
        }
    }

    pub async fn server_stats(&self) -> ServerStatsResponse {
        self.latency.wait(300).await;
        let event = |value: u64, id: &str| ServerStat {
            label: "違反イベント総数".to_string(),
            value,
            id: id.to_string(),
        };
        ServerStatsResponse {
            total_servers: 198,
            events: vec![
                event(1234, "event_1"),
                event(567, "event_2"),
                event(4568, "event_3"),
            ],
        }
    }

    pub async fn traffic_bar(&self) -> TrafficBarResponse {
        self.latency.wait(400).await;
        TrafficBarResponse {
            categories: titled(7),
            series: vec![
                series("データ1", &[30, 80, 50, 90, 40, 60, 85]),
                series("データ2", &[20, 60, 40, 70, 30, 50, 75]),
            ],
        }
    }

    pub async fn staff_list(&self) -> StaffListResponse {
        self.latency.wait(350).await;
        let staff = |name: &str, dept: &str, phone: &str, status_type: StaffStatusType| {
            let status = match status_type {
                StaffStatusType::Success => "処理済み",
                StaffStatusType::Warning => "処理中",
                StaffStatusType::Danger => "未処理",
            };
            StaffItem {
                name: name.to_string(),
                dept: dept.to_string(),
                phone: phone.to_string(),
                status: status.to_string(),
                status_type,
            }
        };
        StaffListResponse {
            list: vec![
                staff("佐藤 健", "製品研究センター", "15080001340", StaffStatusType::Success),
                staff("鈴木 花子", "人事リソースセンター", "--", StaffStatusType::Danger),
                staff("鈴木 花子", "製品開発センター", "15400030400", StaffStatusType::Warning),
                staff("佐藤 翔", "デジタル交流", "1540030400", StaffStatusType::Success),
                staff("高橋 勇", "技術成果展示", "15080001340", StaffStatusType::Danger),
                staff("鈴木 花子", "デジタル技術", "15080001340", StaffStatusType::Success),
            ],
        }
    }

    pub async fn topology(&self) -> TopologyResponse {
        self.latency.wait(500).await;
        let center = "XXXXX";
        TopologyResponse {
            center_node: TopologyNode {
                name: center.to_string(),
                status: Some("active".to_string()),
                ..Default::default()
            },
            nodes: vec![
                TopologyNode {
                    id: Some(NodeRef::Number(1)),
                    name: "機関総数(社)".to_string(),
                    value: Some(18),
                    ip: Some("1.1.1.94".to_string()),
                    ..Default::default()
                },
                TopologyNode {
                    id: Some(NodeRef::Number(2)),
                    name: "機関総数(社)".to_string(),
                    value: Some(22),
                    ..Default::default()
                },
                TopologyNode {
                    id: Some(NodeRef::Number(3)),
                    name: "ネットワーク攻撃(3件)".to_string(),
                    details: Some(strings(&["1.1.1.94", "172.160.0.1", "1567.87.5"])),
                    ..Default::default()
                },
                TopologyNode {
                    id: Some(NodeRef::Number(4)),
                    name: "異常アクセス(5件)".to_string(),
                    details: Some(strings(&["172.160.0.1", "172.1620.0.1"])),
                    ..Default::default()
                },
            ],
            connections: (1..=4)
                .map(|target| TopologyLink {
                    source: NodeRef::Name(center.to_string()),
                    target: NodeRef::Number(target),
                })
                .collect(),
        }
    }

    pub async fn category_pie(&self) -> CategoryPieResponse {
        self.latency.wait(300).await;
        CategoryPieResponse {
            data: ["極秘", "機密", "秘密", "社内"]
                .iter()
                .map(|name| PieChartItem {
                    name: name.to_string(),
                    value: 213,
                })
                .collect(),
        }
    }

    pub async fn access_trend(&self) -> AccessTrendResponse {
        self.latency.wait(400).await;
        AccessTrendResponse {
            x_axis: titled(9),
            series: vec![
                series("データ1", &[15, 60, 30, 80, 50, 60, 50, 45, 30]),
                series("データ2", &[10, 50, 20, 40, 60, 30, 25, 35, 20]),
                series("データ3", &[5, 20, 10, 15, 40, 15, 20, 25, 15]),
            ],
        }
    }

    pub async fn device_overview(&self) -> DeviceOverviewResponse {
        self.latency.wait(300).await;
        let detail = |label: &str, value: u64| DeviceDetail {
            label: label.to_string(),
            value,
        };
        DeviceOverviewResponse {
            total_devices: 3452,
            details: vec![
                detail("アプリケーション", 30),
                detail("スイッチ", 46),
                detail("ファイアウォール", 12),
                detail("ルーター", 155),
            ],
        }
    }

    pub async fn localization(&self) -> LocalizationResponse {
        self.latency.wait(350).await;
        LocalizationResponse {
            stat1: LocalizationStat {
                label: "ここはテキストです".to_string(),
                value: 548,
            },
            stat2: LocalizationStat {
                label: "ここはテキストです".to_string(),
                value: 456,
            },
            progress: LocalizationProgress::new("国産化", 80, 112),
        }
    }

    pub async fn notifications(&self) -> NotificationResponse {
        self.latency.wait(300).await;
        NotificationResponse {
            list: (0..3)
                .map(|_| NotificationItem {
                    title: "ここはタイトルです".to_string(),
                    content: "ここは本文です。ここは本文です。ここは本文です。".to_string(),
                })
                .collect(),
        }
    }
}
