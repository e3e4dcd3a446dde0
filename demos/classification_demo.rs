use ml_playground::{dataset, LogisticRegression};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Logistic Regression ===\n");

    let mut rng = StdRng::seed_from_u64(13);
    let (x, y) = dataset::binary_classes(&mut rng, 30);

    println!("Dataset: {} points in two bands", x.nrows());

    let fit = LogisticRegression::new(0.01, 1000).fit(&x, &y)?;

    println!("\nFitted weights:");
    println!("  w0 = {:.4}", fit.weights[0]);
    println!("  w1 = {:.4}", fit.weights[1]);
    println!("  w2 = {:.4}", fit.weights[2]);
    println!("Training accuracy: {:.1}%", fit.accuracy * 100.0);

    println!("\nDecision boundary (w0 + w1·x + w2·y = 0):");
    for probe in [10.0, 35.0, 60.0] {
        match fit.decision_boundary_y(probe) {
            Some(boundary) => println!("  x = {probe}: y = {boundary:.2}"),
            None => println!("  x = {probe}: boundary is vertical"),
        }
    }

    println!("\nSample classifications:");
    for (px, py) in [(20.0, 10.0), (30.0, 45.0), (50.0, 25.0), (40.0, 50.0)] {
        let prediction = fit.predict(px, py);
        println!(
            "  ({:.0}, {:.0}) -> class {} (p = {:.3})",
            px, py, prediction.class, prediction.probability
        );
    }

    Ok(())
}
