/// 从文件名中获取带前导点的扩展名，保留原始大小写
///
/// 取最后一个 `.` 之后的部分；文件名中没有 `.` 时整个文件名被当作扩展名。
///
/// # 参数
///
/// * `filename` - 客户端提交的文件名
///
/// # 返回值
///
/// 以 `.` 开头的扩展名字符串
///
/// # 示例
///
/// ```
/// use presign_server::utils::path::extension_with_dot;
///
/// assert_eq!(extension_with_dot("photo.JPG"), ".JPG");
/// assert_eq!(extension_with_dot("archive.tar.gz"), ".gz");
/// assert_eq!(extension_with_dot("README"), ".README");
/// ```
pub fn extension_with_dot(filename: &str) -> String {
    let ext = filename.rsplit_once('.').map_or(filename, |(_, ext)| ext);
    format!(".{}", ext)
}
