/// Disjoint sets over node indices, without path compression or ranks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    pub fn find(&self, x: usize) -> usize {
        let parent = self.parent[x];
        if parent == x {
            x
        } else {
            self.find(parent)
        }
    }

    /// Joins the sets of `a` and `b`; false if they were already one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }

    /// Number of distinct sets.
    pub fn set_count(&self) -> usize {
        (0..self.parent.len()).filter(|&x| self.find(x) == x).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_and_find() {
        let mut sets = UnionFind::new(4);
        assert_eq!(sets.set_count(), 4);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.union(1, 0));
        assert_eq!(sets.set_count(), 2);
        assert!(sets.union(1, 3));
        assert_eq!(sets.find(0), sets.find(2));
        assert_eq!(sets.set_count(), 1);
    }
}
