//! Quickstart example showing overflow-free, accurate norms

use accunorm::arrays::{lane_norms, NormExt};
use accunorm::{euclidean, sum, Norm};
use ndarray::{array, Axis};

fn main() {
    println!("Accunorm Quickstart Demo\n");

    // Squares of these values overflow f64
    let big = [1e300, 1e300];
    let naive = big.iter().map(|x| x * x).sum::<f64>().sqrt();
    println!("Euclidean norm of {:?}", big);
    println!("   naive:    {:e}", naive);
    println!("   accunorm: {:e}\n", euclidean(&big));

    // Squares of these values underflow to zero
    let tiny = [1e-320, 1e-320];
    let naive = tiny.iter().map(|x| x * x).sum::<f64>().sqrt();
    println!("Euclidean norm of {:?}", tiny);
    println!("   naive:    {:e}", naive);
    println!("   accunorm: {:e}\n", euclidean(&tiny));

    // Cancellation
    let v = [1e100, 1.0, -1e100];
    println!("Sum of {:?}", v);
    println!("   naive:    {}", v.iter().sum::<f64>());
    println!("   accunorm: {}\n", sum(&v));

    // Arrays
    let m = array![[3.0, 4.0], [-6.0, 8.0]];
    let norm: Norm = "l2".parse().unwrap();
    println!("Row {} norms of {:?}", norm, m);
    println!("   {:?}", lane_norms(&m, Axis(1), norm).unwrap());
    println!("   whole array: {}", m.norm(norm));
}
