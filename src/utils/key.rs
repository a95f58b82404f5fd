use uuid::Uuid;

/// 生成新的对象键：随机 UUID v4 加上原始扩展名
///
/// # 参数
///
/// * `extension` - 带前导点的扩展名
pub fn new_object_key(extension: &str) -> String {
    format!("{}{}", Uuid::new_v4(), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_object_key_format() {
        let key = new_object_key(".JPG");

        assert!(key.ends_with(".JPG"));
        let id = key.trim_end_matches(".JPG");
        let parsed = Uuid::parse_str(id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_new_object_key_unique() {
        let keys: HashSet<String> = (0..1000).map(|_| new_object_key(".txt")).collect();
        assert_eq!(keys.len(), 1000);
    }
}
