use ml_playground::{dataset, PCA};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Principal Component Analysis ===\n");

    let mut rng = StdRng::seed_from_u64(7);
    let x = dataset::correlated_3d(&mut rng, 100);

    println!("Dataset: {} correlated 3D points", x.nrows());

    // 3D -> 1D: the cloud is built around a single direction, so one
    // component should capture most of the variance.
    let fit = PCA::new(1).fit(&x)?;

    let direction = fit.components.row(0);
    println!("\nFirst principal component:");
    println!("  direction: ({:.3}, {:.3}, {:.3})", direction[0], direction[1], direction[2]);
    println!(
        "  variance explained: {:.1}%",
        fit.explained_variance_ratio[0] * 100.0
    );

    println!("\nFirst five projections:");
    for (i, row) in fit.transformed.rows().into_iter().take(5).enumerate() {
        println!("  point {}: {:.2}", i, row[0]);
    }

    // 3D -> 2D for comparison.
    let fit = PCA::new(2).fit(&x)?;
    let total: f64 = fit.explained_variance_ratio.iter().sum();
    println!("\nWith two components:");
    for (i, ratio) in fit.explained_variance_ratio.iter().enumerate() {
        println!("  component {}: {:.1}% of variance", i, ratio * 100.0);
    }
    println!("  combined: {:.1}%", total * 100.0);

    Ok(())
}
