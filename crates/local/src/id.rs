use chrono::{DateTime, Utc};
use uuid::Uuid;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 生成记忆 id：毫秒时间戳 (base36) + 随机后缀 (base36)
///
/// 时间部分让 id 大致按创建顺序排列，随机部分保证同一毫秒内不冲突
pub fn generate_id(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().max(0) as u128;
    let random = Uuid::new_v4().as_u128() as u64 as u128;

    let mut id = to_base36(millis);
    id.push_str(&to_base36(random));
    id
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
