use bencher::{benchmark_group, benchmark_main, black_box, Bencher};
use fixpoint::{from_fixed_point, multiply, to_fixed_point, FixedPoint};
use rand::{rngs::SmallRng, FromEntropy, Rng};

//----

fn to_fixed_point_1000_values(bench: &mut Bencher) {
    let mut rng = SmallRng::from_entropy();
    bench.iter(|| {
        let x = (rng.gen::<f32>() - 0.5) * 1000.0;
        for _ in 0..1000 {
            black_box(to_fixed_point(black_box(x)));
        }
    });
}

fn from_fixed_point_1000_values(bench: &mut Bencher) {
    let mut rng = SmallRng::from_entropy();
    bench.iter(|| {
        let fp = FixedPoint::new(rng.gen::<i32>(), rng.gen_range(0, 31));
        for _ in 0..1000 {
            black_box(from_fixed_point(black_box(fp)));
        }
    });
}

fn multiply_1000_values(bench: &mut Bencher) {
    let mut rng = SmallRng::from_entropy();
    bench.iter(|| {
        let a = to_fixed_point(rng.gen::<f32>() * 100.0);
        let b = to_fixed_point(rng.gen::<f32>() * 100.0);
        for _ in 0..1000 {
            black_box(multiply(black_box(a), black_box(b)));
        }
    });
}

//----

benchmark_group!(
    benches,
    to_fixed_point_1000_values,
    from_fixed_point_1000_values,
    multiply_1000_values,
);
benchmark_main!(benches);
