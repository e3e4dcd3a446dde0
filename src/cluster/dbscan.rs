use crate::error::{Error, Result};
use crate::linalg::euclidean_distance;
use crate::Matrix;
use tracing::debug;

/// Final label for points that belong to no cluster.
pub const NOISE: i32 = -2;

/// Transient label for points the scan has not reached yet. Never present in
/// the labels returned by [`DBSCAN::fit`].
const UNVISITED: i32 = -1;

/// Density-based clustering with noise detection.
///
/// Clusters are grown from core points (points with at least `min_samples`
/// neighbors within `eps`, strict inequality); points reachable from a core
/// point but not core themselves become border points of that cluster; the
/// rest is noise.
#[derive(Clone, Debug)]
pub struct DBSCAN {
    eps: f64,
    min_samples: usize,
}

/// Result of one DBSCAN run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DbscanFit {
    /// Per-point label in input order: `0..n_clusters` or [`NOISE`].
    pub labels: Vec<i32>,
    pub n_clusters: usize,
    pub n_noise: usize,
}

impl DBSCAN {
    pub fn new(eps: f64, min_samples: usize) -> Self {
        Self { eps, min_samples }
    }

    /// Cluster the given points.
    ///
    /// Scans points in input order. An unvisited point with too few neighbors
    /// is provisionally marked noise; it may still be claimed later as a
    /// border point of some core point's expansion. Expansion runs over an
    /// explicit work-queue of point indices, so the noise-to-border transition
    /// and the already-queued de-duplication are both label checks, not
    /// recursion.
    pub fn fit(&self, x: &Matrix) -> Result<DbscanFit> {
        if self.eps <= 0.0 {
            return Err(Error::invalid(
                "eps",
                format!("must be > 0, got {}", self.eps),
            ));
        }
        if self.min_samples == 0 {
            return Err(Error::invalid("min_samples", "must be > 0, got 0"));
        }
        if x.nrows() == 0 {
            return Err(Error::degenerate("empty point set"));
        }

        let n_samples = x.nrows();
        let mut labels = vec![UNVISITED; n_samples];
        let mut cluster_id: i32 = 0;

        for i in 0..n_samples {
            if labels[i] != UNVISITED {
                continue;
            }

            let neighbors = self.region_query(x, i);
            if neighbors.len() < self.min_samples {
                // Provisional: may be relabeled as a border point below.
                labels[i] = NOISE;
                continue;
            }

            labels[i] = cluster_id;
            let mut queue = neighbors;
            let mut cursor = 0;

            while cursor < queue.len() {
                let q = queue[cursor];
                cursor += 1;

                if labels[q] == NOISE {
                    // Border point: joins the cluster but is not expanded.
                    labels[q] = cluster_id;
                    continue;
                }
                if labels[q] != UNVISITED {
                    continue;
                }

                labels[q] = cluster_id;
                let q_neighbors = self.region_query(x, q);
                if q_neighbors.len() >= self.min_samples {
                    queue.extend(q_neighbors);
                }
            }

            cluster_id += 1;
        }

        let n_noise = labels.iter().filter(|&&l| l == NOISE).count();
        debug!(
            n_clusters = cluster_id,
            n_noise,
            n_samples,
            "dbscan finished"
        );

        Ok(DbscanFit {
            labels,
            n_clusters: cluster_id as usize,
            n_noise,
        })
    }

    /// Indices of all points strictly within `eps` of point `i`, including
    /// `i` itself. Brute force over the whole set.
    fn region_query(&self, x: &Matrix, i: usize) -> Vec<usize> {
        let target = x.row(i);
        (0..x.nrows())
            .filter(|&j| euclidean_distance(target, x.row(j)) < self.eps)
            .collect()
    }
}
