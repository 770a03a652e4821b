/// Union-Find (Disjoint Sets) over a fixed universe of labels `0..len`
///
/// Only two operations are exposed: `union` and `connected`. Linking is by
/// rank, so no tree is ever deeper than log2(len); `union` additionally
/// compresses the paths it walks.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Create a new UnionFind with `len` singleton sets
    pub fn new(len: usize) -> Self {
        let parent = (0..len).collect();
        let rank = vec![0; len];
        UnionFind { parent, rank }
    }

    /// Union the sets containing `x` and `y`. No-op if they are already joined.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is not a label of this structure.
    pub fn union(&mut self, x: usize, y: usize) {
        self.validate(x);
        self.validate(y);

        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return;
        }

        // Union by rank
        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] = self.rank[root_x].saturating_add(1);
        }
    }

    /// Check if two labels are in the same set
    ///
    /// # Panics
    ///
    /// If `x` or `y` is not a label of this structure.
    pub fn connected(&self, x: usize, y: usize) -> bool {
        self.validate(x);
        self.validate(y);

        self.root(x) == self.root(y)
    }

    /// Find the root of `x`, pointing every node on the way directly at it
    fn find(&mut self, mut x: usize) -> usize {
        let root = self.root(x);

        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }

        root
    }

    /// Find the root of `x` without touching the forest
    fn root(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    fn validate(&self, x: usize) {
        assert!(
            x < self.parent.len(),
            "label {x} is out of range for a union-find of {} elements",
            self.parent.len()
        );
    }
}
