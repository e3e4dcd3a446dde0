use ml_playground::{dataset, DBSCAN, KMeans, Matrix};
use ndarray::concatenate;
use ndarray::Axis;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Clustering Algorithms Comparison ===\n");

    let mut rng = StdRng::seed_from_u64(42);

    // Three dense regions of different shapes plus scattered noise, the
    // layout the playground draws for its density-clustering page.
    let x = concatenate![
        Axis(0),
        dataset::disc_cluster(&mut rng, [25.0, 25.0], 8.0, 30),
        dataset::segment_cluster(&mut rng, [50.0, 50.0], [30.0, 20.0], 2.0, 25),
        dataset::disc_cluster(&mut rng, [70.0, 25.0], 6.0, 20),
        dataset::uniform_noise(&mut rng, 10, 100.0, 80.0)
    ];

    println!("Dataset: {} samples, {} features", x.nrows(), x.ncols());
    println!("Expected: 3 dense regions + some noise points\n");

    println!("=== K-Means ===");
    for &k in &[2, 3, 4, 5] {
        let fit = KMeans::new(k).max_iter(100).fit(&x, &mut rng)?;
        println!(
            "K-Means(k={}): inertia {:.2} after {} iterations ({})",
            k,
            fit.inertia,
            fit.iterations_run,
            if fit.converged { "converged" } else { "hit max_iter" }
        );
    }

    let best = KMeans::new(3).max_iter(100).fit(&x, &mut rng)?;
    println!("\nK-Means (k=3) centroids:");
    for (i, centroid) in best.centroids.rows().into_iter().enumerate() {
        let size = best.labels.iter().filter(|&&l| l == i).count();
        println!(
            "  cluster {}: ({:.2}, {:.2}), {} points",
            i, centroid[0], centroid[1], size
        );
    }

    println!("\n=== DBSCAN ===");
    let configs = [
        (3.0, 4, "tight neighborhoods"),
        (5.0, 4, "medium neighborhoods"),
        (8.0, 4, "loose neighborhoods"),
        (5.0, 8, "higher density requirement"),
    ];

    for &(eps, min_samples, description) in &configs {
        let fit = DBSCAN::new(eps, min_samples).fit(&x)?;
        println!(
            "DBSCAN(eps={}, min_samples={}): {} clusters, {} noise points - {}",
            eps, min_samples, fit.n_clusters, fit.n_noise, description
        );
    }

    let fit = DBSCAN::new(5.0, 4).fit(&x)?;
    println!("\nDBSCAN (eps=5, min_samples=4) cluster sizes:");
    print_cluster_sizes(&x, &fit.labels);

    Ok(())
}

fn print_cluster_sizes(x: &Matrix, labels: &[i32]) {
    let n_clusters = labels.iter().copied().max().unwrap_or(-1) + 1;
    for cluster in 0..n_clusters {
        let count = labels.iter().filter(|&&l| l == cluster).count();
        println!("  cluster {}: {} points", cluster, count);
    }
    let noise = labels.iter().filter(|&&l| l == ml_playground::cluster::NOISE).count();
    println!("  noise: {} of {} points", noise, x.nrows());
}
