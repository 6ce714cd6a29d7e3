//! 前 N 大文件的有界累加器：最小堆只保留排名最高的 `capacity` 个条目，内存 O(N)。

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use dir_analyzer_domain::FileInfo;

#[derive(Debug, Clone)]
pub struct TopK {
    capacity: usize,
    heap: BinaryHeap<Reverse<FileInfo>>,
}

impl TopK {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1).min(1_000_000)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// 当前保留条目中最小的大小；堆为空时为 None
    pub fn min_size(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(f)| f.size)
    }

    /// 尝试放入一个文件，返回是否被保留
    pub fn offer(&mut self, file: FileInfo) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(file));
            return true;
        }
        match self.heap.peek() {
            Some(Reverse(worst)) if file > *worst => {
                self.heap.pop();
                self.heap.push(Reverse(file));
                true
            }
            _ => false,
        }
    }

    /// 合并另一个累加器（并行遍历时各 worker 的结果）
    pub fn merge(&mut self, other: TopK) {
        for Reverse(file) in other.heap {
            self.offer(file);
        }
    }

    /// 按大小降序（同大小按路径升序）输出
    pub fn into_sorted_vec(self) -> Vec<FileInfo> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(f)| f)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64) -> FileInfo {
        FileInfo::new(name, size, format!("/root/{}", name))
    }

    #[test]
    fn test_keeps_largest() {
        let mut top = TopK::new(2);
        assert!(top.offer(file("a", 100)));
        assert!(top.offer(file("b", 50)));
        assert!(top.offer(file("c", 200)));
        assert!(!top.offer(file("d", 10)));
        assert_eq!(top.len(), 2);
        assert_eq!(top.min_size(), Some(100));

        let names: Vec<_> = top.into_sorted_vec().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["c", "a"]);
    }

    #[test]
    fn test_equal_to_minimum_not_retained_unless_path_ranks_higher() {
        let mut top = TopK::new(1);
        top.offer(file("m", 10));
        // 同大小，路径更大 -> 排名更低
        assert!(!top.offer(file("z", 10)));
        // 同大小，路径更小 -> 排名更高
        assert!(top.offer(file("a", 10)));
        assert_eq!(top.into_sorted_vec()[0].name, "a");
    }

    #[test]
    fn test_zero_capacity_retains_nothing() {
        let mut top = TopK::new(0);
        assert!(!top.offer(file("a", 1)));
        assert!(top.is_empty());
        assert_eq!(top.min_size(), None);
    }

    #[test]
    fn test_merge_is_order_independent() {
        let files: Vec<_> = (0..20u64).map(|i| file(&format!("f{:02}", i), (i * 7) % 11)).collect();

        let mut whole = TopK::new(5);
        for f in &files {
            whole.offer(f.clone());
        }

        let mut left = TopK::new(5);
        let mut right = TopK::new(5);
        for (i, f) in files.iter().enumerate() {
            if i % 2 == 0 {
                left.offer(f.clone());
            } else {
                right.offer(f.clone());
            }
        }
        right.merge(left);

        assert_eq!(whole.into_sorted_vec(), right.into_sorted_vec());
    }
}
