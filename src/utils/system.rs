use serde::Serialize;
use sysinfo::System;

/// 主機資訊快照，附加在每個分析事件上
#[derive(Debug, Clone, Serialize)]
pub struct SystemSnapshot {
    pub os_name: String,
    pub os_version: String,
    pub kernel_version: String,
    pub host_name: String,
    pub cpu_count: usize,
    pub total_memory: u64,
}

impl SystemSnapshot {
    pub fn capture() -> Self {
        let system = System::new_all();

        Self {
            os_name: System::name().unwrap_or_default(),
            os_version: System::os_version().unwrap_or_default(),
            kernel_version: System::kernel_version().unwrap_or_default(),
            host_name: System::host_name().unwrap_or_default(),
            cpu_count: system.cpus().len(),
            total_memory: system.total_memory(),
        }
    }

    /// 轉成事件 properties 可以直接合併的 JSON 物件
    pub fn to_properties(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }
}
