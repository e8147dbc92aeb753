use criterion::{Criterion, black_box, criterion_group, criterion_main};
use faer::Mat;
use graphpc::{BlockJacobiPreconditioner, Damping, GaussianFactorGraph, JacobianFactor, KeyInfo, Preconditioner, init_logger};

/// Chain of 6-dof poses with unary and between factors, like a pose graph.
fn pose_chain(n: u64) -> (GaussianFactorGraph, KeyInfo) {
    let d = 6;
    let block = |seed: u64| Mat::from_fn(d, d, |i, j| ((seed as usize * 31 + i * 7 + j) as f64).sin() + if i == j { 3.0 } else { 0.0 });
    let mut graph = GaussianFactorGraph::new();
    for k in 0..n {
        graph.push(JacobianFactor::new(vec![(k, block(k))], vec![0.0; d]).unwrap());
        if k + 1 < n {
            graph.push(JacobianFactor::new(vec![(k, block(2 * k)), (k + 1, block(2 * k + 1))], vec![0.0; d]).unwrap());
        }
    }
    let info = KeyInfo::from_graph(&graph).unwrap();
    (graph, info)
}

fn bench_block_jacobi(c: &mut Criterion) {
    init_logger();
    let (graph, info) = pose_chain(500);
    let lambda: Damping = info.ordering().iter().map(|&k| (k, vec![1e-3; 6])).collect();
    let n = info.total_dim();
    let y: Vec<f64> = (0..n).map(|i| (i as f64).cos()).collect();
    let mut x = vec![0.0; n];

    c.bench_function("block-jacobi build", |ben| {
        let mut pc = BlockJacobiPreconditioner::new();
        ben.iter(|| pc.build(black_box(&graph), black_box(&info), black_box(&lambda)).unwrap())
    });

    let mut pc = BlockJacobiPreconditioner::new();
    pc.build(&graph, &info, &lambda).unwrap();
    c.bench_function("block-jacobi solve", |ben| {
        ben.iter(|| pc.solve(black_box(&y), black_box(&mut x)).unwrap())
    });
    c.bench_function("block-jacobi full solve", |ben| {
        ben.iter(|| pc.full_solve(black_box(&y), black_box(&mut x)).unwrap())
    });
}

criterion_group!(benches, bench_block_jacobi);
criterion_main!(benches);
