use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wall_bond::{generate, BondName};
use wall_core::WallGeometry;

fn generate_bonds_bench(c: &mut Criterion) {
    let geometry = WallGeometry::standard().unwrap();
    for bond in BondName::ALL {
        c.bench_function(&format!("generate_{bond}"), |b| {
            b.iter(|| {
                let courses = generate(bond, 42, &geometry);
                black_box(courses).ok();
            });
        });
    }
}

criterion_group!(benches, generate_bonds_bench);
criterion_main!(benches);
