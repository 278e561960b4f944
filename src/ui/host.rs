//! Host information printed above the results

use serde::Serialize;
use sysinfo::System;

/// Description of the machine the benchmark ran on
#[derive(Debug, Clone, Serialize)]
pub struct HostInfo {
    pub os: String,
    pub cpu: String,
    pub logical_cpus: usize,
    pub total_memory_bytes: u64,
}

impl HostInfo {
    pub fn collect() -> Self {
        let os = os_info::get();
        let sys = System::new_all();

        let cpu = sys
            .cpus()
            .first()
            .map(|c| c.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            os: format!("{} {} ({})", os.os_type(), os.version(), os.bitness()),
            cpu,
            logical_cpus: sys.cpus().len(),
            total_memory_bytes: sys.total_memory(),
        }
    }

    pub fn memory_gib(&self) -> f64 {
        self.total_memory_bytes as f64 / (1024.0 * 1024.0 * 1024.0)
    }
}
