use ml_playground::{dataset, PolynomialRegression};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Linear and Polynomial Regression ===\n");

    let mut rng = StdRng::seed_from_u64(21);

    // Straight line: y = 2.5x + 10 with noise.
    let (x, y) = dataset::polynomial_points(&mut rng, 50, &[10.0, 2.5], 100.0, 15.0);

    let fit = PolynomialRegression::new(1).fit(&x, &y)?;
    println!("Linear fit over {} noisy samples of y = 2.5x + 10:", x.len());
    println!(
        "  y = {:.3} + {:.3}x, R² = {:.4}",
        fit.coefficients[0], fit.coefficients[1], fit.r2
    );
    for probe in [25.0, 50.0, 75.0] {
        println!("  prediction at x = {}: {:.2}", probe, fit.predict(probe));
    }

    // Curve: y = 0.5x² - 2x + 5 with noise; compare degrees.
    let (x, y) = dataset::polynomial_points(&mut rng, 50, &[5.0, -2.0, 0.5], 10.0, 2.5);

    println!("\nPolynomial fits over 50 noisy samples of y = 0.5x² - 2x + 5:");
    for degree in 1..=4 {
        let fit = PolynomialRegression::new(degree).fit(&x, &y)?;
        let coeffs: Vec<String> = fit
            .coefficients
            .iter()
            .map(|c| format!("{c:.3}"))
            .collect();
        println!(
            "  degree {}: R² = {:.4}, coefficients [{}]",
            degree,
            fit.r2,
            coeffs.join(", ")
        );
    }

    Ok(())
}
