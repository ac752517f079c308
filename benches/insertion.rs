use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cursor_list::insert::{back_inserter, front_inserter, inserter};
use cursor_list::List;
use std::iter::FromIterator;

const NUM_ELEMENTS: i32 = 10_000;

fn bench_back_inserter(c: &mut Criterion) {
    c.bench_function("back_inserter_10k", |b| {
        b.iter(|| {
            let mut list: List<i32> = List::new();
            back_inserter(&mut list).extend(0..NUM_ELEMENTS);
            black_box(list.len())
        })
    });
}

fn bench_front_and_positional(c: &mut Criterion) {
    c.bench_function("front_inserter_10k", |b| {
        b.iter(|| {
            let mut list: List<i32> = List::new();
            front_inserter(&mut list).extend(0..NUM_ELEMENTS);
            black_box(list.len())
        })
    });

    c.bench_function("inserter_at_begin_10k", |b| {
        b.iter(|| {
            let mut list: List<i32> = List::new();
            for x in 0..NUM_ELEMENTS {
                let begin = list.begin();
                inserter(&mut list, begin).extend(Some(x));
            }
            black_box(list.len())
        })
    });
}

fn bench_traversal(c: &mut Criterion) {
    let mut list = List::from_iter(0..NUM_ELEMENTS);

    c.bench_function("cursor_walk_10k", |b| {
        b.iter(|| {
            let mut sum = 0_i64;
            list.go_to_begin();
            loop {
                sum += i64::from(*list.get().unwrap());
                if !list.go_next().unwrap() {
                    break;
                }
            }
            black_box(sum)
        })
    });

    c.bench_function("iter_10k", |b| {
        b.iter(|| black_box(list.iter().map(|&x| i64::from(x)).sum::<i64>()))
    });
}

fn bench_delete_current(c: &mut Criterion) {
    c.bench_function("clear_10k", |b| {
        b.iter(|| {
            let mut list = List::from_iter(0..NUM_ELEMENTS);
            list.go_to_begin();
            list.clear();
            black_box(list.is_empty())
        })
    });
}

criterion_group!(
    benches,
    bench_back_inserter,
    bench_front_and_positional,
    bench_traversal,
    bench_delete_current
);
criterion_main!(benches);
