use dir_analyzer_common::AppConfig;

/// 扫描过滤器
#[derive(Debug, Clone)]
pub struct ScanFilters {
    /// 按名称精确匹配跳过的文件或目录
    pub exclude_names: Vec<String>,
    /// 根目录深度为 0；超过此深度的目录不再进入
    pub max_depth: Option<usize>,
    pub include_hidden: bool,
}

impl Default for ScanFilters {
    fn default() -> Self {
        Self {
            exclude_names: vec![],
            max_depth: None,
            include_hidden: true,
        }
    }
}

impl ScanFilters {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            exclude_names: config.exclude_names.clone(),
            max_depth: config.max_depth,
            include_hidden: config.include_hidden,
        }
    }

    pub fn allows_name(&self, name: &str) -> bool {
        if !self.include_hidden && name.starts_with('.') {
            return false;
        }
        !self.exclude_names.iter().any(|n| n == name)
    }

    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_everything() {
        let f = ScanFilters::default();
        assert!(f.allows_name(".git"));
        assert!(f.allows_name("a.txt"));
        assert!(f.allows_depth(1000));
    }

    #[test]
    fn test_exclude_and_hidden() {
        let f = ScanFilters {
            exclude_names: vec!["node_modules".into()],
            max_depth: Some(2),
            include_hidden: false,
        };
        assert!(!f.allows_name("node_modules"));
        assert!(!f.allows_name(".cache"));
        assert!(f.allows_name("src"));
        assert!(f.allows_depth(2));
        assert!(!f.allows_depth(3));
    }
}
