// admin-console/src/service/latency.rs

use std::time::Duration;

/// モック API の疑似ネットワーク遅延
#[derive(Debug, Clone, Copy)]
pub struct MockLatency {
    enabled: bool,
}

impl MockLatency {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// 指定ミリ秒待つ（無効時は即座に戻る）
    pub async fn wait(&self, millis: u64) {
        if self.enabled {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}
