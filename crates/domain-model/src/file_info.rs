use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// 扫描结果中的单个文件
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileInfo {
    /// 文件名（不含目录）
    pub name: String,
    /// 字节数
    pub size: u64,
    /// 扫描根路径拼接相对路径后的完整路径
    pub path: String,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size: u64, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            path: path.into(),
        }
    }
}

/// 排名顺序：越"大"排名越靠前。先比大小，大小相同时路径字典序较小者更大，
/// 这样保留的前 N 个集合与遍历顺序无关。
impl Ord for FileInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size
            .cmp(&other.size)
            .then_with(|| other.path.cmp(&self.path))
            .then_with(|| other.name.cmp(&self.name))
    }
}

impl PartialOrd for FileInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 按输出顺序排序：大小降序，同大小按路径升序
pub fn sort_for_output(files: &mut [FileInfo]) {
    files.sort_by(|a, b| b.cmp(a));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_larger_size_ranks_higher() {
        let big = FileInfo::new("a", 200, "/r/a");
        let small = FileInfo::new("b", 100, "/r/b");
        assert!(big > small);
    }

    #[test]
    fn test_tie_broken_by_path() {
        let a = FileInfo::new("x", 10, "/r/a/x");
        let b = FileInfo::new("x", 10, "/r/b/x");
        // 路径较小者排名更高
        assert!(a > b);

        let mut v = vec![b.clone(), a.clone()];
        sort_for_output(&mut v);
        assert_eq!(v, vec![a, b]);
    }

    #[test]
    fn test_sort_for_output_descending() {
        let mut v = vec![
            FileInfo::new("a", 100, "/r/a"),
            FileInfo::new("b", 50, "/r/b"),
            FileInfo::new("c", 200, "/r/c"),
        ];
        sort_for_output(&mut v);
        let sizes: Vec<u64> = v.iter().map(|f| f.size).collect();
        assert_eq!(sizes, vec![200, 100, 50]);
    }

    #[test]
    fn test_json_shape() {
        let f = FileInfo::new("c", 200, "/r/c");
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, r#"{"name":"c","size":200,"path":"/r/c"}"#);
    }
}
