//! 日志脱敏工具
//! 密钥、签名、钱包地址写入日志前统一经过这里

/// 处理商错误响应写入日志的最大长度
pub const MAX_LOGGED_BODY_CHARS: usize = 512;

/// 脱敏密钥（只保留长度信息）
pub fn redact_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "<empty>".to_string();
    }
    format!("***({} chars)", secret.chars().count())
}

/// 脱敏十六进制字符串（显示前后各 show_chars 个字符）
pub fn redact_hex_string(hex: &str, show_chars: usize) -> String {
    let chars: Vec<char> = hex.chars().collect();
    if chars.len() <= show_chars * 2 {
        return "*".repeat(chars.len());
    }

    let prefix: String = chars[..show_chars].iter().collect();
    let suffix: String = chars[chars.len() - show_chars..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// 脱敏地址（显示前6位和后4位）
pub fn redact_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < 10 {
        return "*".repeat(chars.len());
    }

    let prefix: String = chars[..6].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// 截断上游响应体，按字符截断，不会切断 UTF-8
pub fn truncate_body(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(MAX_LOGGED_BODY_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...(truncated)", head)
    } else {
        head
    }
}
