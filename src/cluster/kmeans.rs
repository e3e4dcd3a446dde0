use crate::error::{Error, Result};
use crate::linalg::euclidean_distance;
use crate::Matrix;
use ndarray::Axis;
use ndarray_rand::{RandomExt, SamplingStrategy};
use rand::Rng;
use tracing::debug;

/// Centroid clustering by Lloyd iterations.
///
/// One iteration is a pure [`KMeans::step`]: assign every point to its nearest
/// centroid, then move each centroid to the mean of its points. [`KMeans::fit`]
/// repeats steps until the largest centroid movement drops to `tolerance` or
/// `max_iter` is exhausted. Callers animating the process can hold the centroid
/// matrix themselves and call `step` directly.
#[derive(Clone, Debug)]
pub struct KMeans {
    n_clusters: usize,
    max_iter: usize,
    tolerance: f64,
}

/// Result of one assignment + update round.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KMeansStep {
    /// Updated centroids, one row per cluster.
    pub centroids: Matrix,
    /// Assignment of each point to the centroids the step started from.
    pub labels: Vec<usize>,
    /// Largest distance any centroid moved during the update.
    pub shift: f64,
}

/// Result of a full training run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KMeansFit {
    pub centroids: Matrix,
    /// Per-point cluster id in `0..k`, assigned against the final centroids.
    pub labels: Vec<usize>,
    /// Sum of squared distances from each point to its assigned centroid.
    pub inertia: f64,
    pub iterations_run: usize,
    /// False when `max_iter` was reached before the centroids settled; the
    /// result is still the best one seen.
    pub converged: bool,
}

impl KMeans {
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            max_iter: 300,
            tolerance: 1e-4,
        }
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Run to convergence. Initial centroids are `k` distinct points drawn
    /// uniformly without replacement from the input using the caller's `rng`.
    pub fn fit<R: Rng + ?Sized>(&self, x: &Matrix, rng: &mut R) -> Result<KMeansFit> {
        let mut centroids = self.init_centroids(x, rng)?;

        let mut iterations_run = 0;
        let mut converged = false;
        for _ in 0..self.max_iter {
            let step = self.step(x, &centroids);
            centroids = step.centroids;
            iterations_run += 1;

            if step.shift <= self.tolerance {
                converged = true;
                break;
            }
        }

        // Final assignment against the settled centroids; inertia is computed
        // over this assignment.
        let labels = Self::assign(x, &centroids);
        let inertia = Self::inertia(x, &centroids, &labels);

        debug!(
            k = self.n_clusters,
            iterations_run, converged, inertia, "kmeans finished"
        );

        Ok(KMeansFit {
            centroids,
            labels,
            inertia,
            iterations_run,
            converged,
        })
    }

    /// Draw `k` distinct input rows as starting centroids.
    pub fn init_centroids<R: Rng + ?Sized>(&self, x: &Matrix, rng: &mut R) -> Result<Matrix> {
        if self.n_clusters == 0 {
            return Err(Error::invalid("n_clusters", "must be > 0, got 0"));
        }
        if x.nrows() == 0 {
            return Err(Error::degenerate("empty point set"));
        }
        if x.nrows() < self.n_clusters {
            return Err(Error::invalid(
                "n_clusters",
                format!(
                    "n_samples={} should be >= n_clusters={}",
                    x.nrows(),
                    self.n_clusters
                ),
            ));
        }

        Ok(x.sample_axis_using(
            Axis(0),
            self.n_clusters,
            SamplingStrategy::WithoutReplacement,
            rng,
        ))
    }

    /// One assignment + update round against the given centroids. Pure: the
    /// same points and centroids always produce the same step.
    pub fn step(&self, x: &Matrix, centroids: &Matrix) -> KMeansStep {
        let labels = Self::assign(x, centroids);

        let k = centroids.nrows();
        let mut new_centroids = centroids.clone();
        for cluster in 0..k {
            let members: Vec<usize> = labels
                .iter()
                .enumerate()
                .filter(|&(_, &label)| label == cluster)
                .map(|(i, _)| i)
                .collect();

            // An empty cluster keeps its previous centroid.
            if members.is_empty() {
                continue;
            }

            for col in 0..x.ncols() {
                let sum: f64 = members.iter().map(|&i| x[[i, col]]).sum();
                new_centroids[[cluster, col]] = sum / members.len() as f64;
            }
        }

        let shift = (0..k)
            .map(|i| euclidean_distance(centroids.row(i), new_centroids.row(i)))
            .fold(0.0, f64::max);

        KMeansStep {
            centroids: new_centroids,
            labels,
            shift,
        }
    }

    /// Label every point with the index of its nearest centroid. On a tie the
    /// first centroid wins.
    pub fn assign(x: &Matrix, centroids: &Matrix) -> Vec<usize> {
        (0..x.nrows())
            .map(|i| {
                let mut min_distance = f64::INFINITY;
                let mut closest = 0;
                for (k, centroid) in centroids.axis_iter(Axis(0)).enumerate() {
                    let distance = euclidean_distance(x.row(i), centroid);
                    if distance < min_distance {
                        min_distance = distance;
                        closest = k;
                    }
                }
                closest
            })
            .collect()
    }

    fn inertia(x: &Matrix, centroids: &Matrix, labels: &[usize]) -> f64 {
        labels
            .iter()
            .enumerate()
            .map(|(i, &label)| {
                let d = euclidean_distance(x.row(i), centroids.row(label));
                d * d
            })
            .sum()
    }
}
