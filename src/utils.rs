use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// 当前 Unix 时间戳（秒），用于记录卷的创建时间
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// 生成一个随机卷标
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}
