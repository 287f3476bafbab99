//! Benchmarks for accessor dispatch.
//!
//! Measures the cost of a get/set through `Arc<dyn AttributeAccessor>` for each
//! binding shape, plus the failure paths that stop at a downcast.
//!
//! ```bash
//! cargo bench --bench accessor_benchmarks
//! ```

use attribute_accessor::{
    Accessor, DoubleValue, IntegerValue, Object, checked_setter, field, getter, make_accessor,
    make_accessor_pair, setter,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

#[derive(Object, Default)]
struct Node {
    x: f64,
}

#[derive(Object, Default)]
struct Mobility {
    #[object(base)]
    node: Node,
    speed: f64,
}

impl Mobility {
    fn speed(&self) -> f64 {
        self.speed
    }

    fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    fn try_set_speed(&mut self, speed: f64) -> bool {
        if speed < 0.0 {
            return false;
        }
        self.speed = speed;
        true
    }
}

fn shapes() -> Vec<(&'static str, Accessor)> {
    vec![
        ("field", make_accessor::<DoubleValue, _>(field!(Mobility, speed))),
        (
            "combined_unit",
            make_accessor_pair::<DoubleValue, _, _>(
                getter(Mobility::speed),
                setter(Mobility::set_speed),
            ),
        ),
        (
            "combined_checked",
            make_accessor_pair::<DoubleValue, _, _>(
                getter(Mobility::speed),
                checked_setter(Mobility::try_set_speed),
            ),
        ),
    ]
}

fn bench_set_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_get");
    for (name, accessor) in shapes() {
        group.bench_function(name, |b| {
            let mut object = Mobility::default();
            let mut out = DoubleValue::default();
            b.iter(|| {
                accessor.set(&mut object, black_box(&DoubleValue(3.5)));
                accessor.get(&object, &mut out);
                black_box(out.0)
            });
        });
    }
    group.finish();
}

fn bench_base_chain(c: &mut Criterion) {
    let x = make_accessor::<DoubleValue, _>(field!(Node, x));
    c.bench_function("base_chain_set", |b| {
        let mut object = Mobility::default();
        b.iter(|| x.set(&mut object, black_box(&DoubleValue(1.0))));
    });
}

fn bench_failures(c: &mut Criterion) {
    let speed = make_accessor::<DoubleValue, _>(field!(Mobility, speed));
    let mut group = c.benchmark_group("failure");

    group.bench_function("value_mismatch", |b| {
        let mut object = Mobility::default();
        b.iter(|| speed.set(&mut object, black_box(&IntegerValue(1))));
    });

    group.bench_function("object_mismatch", |b| {
        let mut object = Node::default();
        b.iter(|| speed.set(&mut object, black_box(&DoubleValue(1.0))));
    });

    group.finish();
}

criterion_group!(benches, bench_set_get, bench_base_chain, bench_failures);
criterion_main!(benches);
