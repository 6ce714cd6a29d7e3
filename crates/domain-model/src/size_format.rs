const UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const STEP: f64 = 1000.0;

/// 将字节数格式化为十进制单位的可读字符串（如 `1.5 kB`），最多两位小数
pub fn format_size(bytes: u64) -> String {
    if bytes < 1000 {
        return format!("{} B", bytes);
    }
    let num = bytes as f64;
    let mut exponent = ((num.ln() / STEP.ln()).floor() as usize).min(UNITS.len() - 1);
    let mut rendered = format!("{:.2}", num / STEP.powi(exponent as i32));
    // 四舍五入进位到 1000 时升一级单位，例如 999_999 -> "1 MB"
    if rendered.starts_with("1000") && exponent < UNITS.len() - 1 {
        exponent += 1;
        rendered = format!("{:.2}", num / STEP.powi(exponent as i32));
    }
    format!("{} {}", trim_decimals(&rendered), UNITS[exponent])
}

fn trim_decimals(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
