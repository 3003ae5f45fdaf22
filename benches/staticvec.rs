use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use staticarr::StaticVec;
use smallvec::SmallVec;
use arrayvec::ArrayVec;


pub fn benchmark(c: &mut Criterion) {

    let mut group = c.benchmark_group("StaticVec Perf");
    group.sample_size(1000);
    group.bench_function(
        BenchmarkId::new("StaticVec", "push"),
        |b| b.iter_batched_ref(
            || StaticVec::<u8, 16>::new(),
            |v| { black_box({ v.push(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "push"),
        |b| b.iter_batched_ref(
            || Vec::<u8>::with_capacity(16),
            |vec| { black_box({ vec.push(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "push"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u8; 16]>::new(),
            |vec| { black_box({ vec.push(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("ArrayVec", "push"),
        |b| b.iter_batched_ref(
            || ArrayVec::<u8, 16>::new(),
            |vec| { black_box({ vec.push(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("StaticVec", "pop"),
        |b| b.iter_batched_ref(
            || StaticVec::<u8, 16>::from([0, 1, 2, 3]),
            |v| black_box({ let _ = v.pop(); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "pop"),
        |b| b.iter_batched_ref(
            || { let mut vec: Vec<u8> = vec![0, 1, 2, 3]; vec.reserve_exact(12); vec },
            |vec| black_box({ let _ = vec.pop(); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "pop"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u8; 16]>::from_vec(vec![0, 1, 2, 3]),
            |vec| black_box({ let _ = vec.pop(); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("ArrayVec", "pop"),
        |b| b.iter_batched_ref(
            || { let mut vec = ArrayVec::<u8, 16>::new(); (0..4).for_each(|v| vec.push(v)); vec },
            |vec| black_box({ let _ = vec.pop(); }),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("StaticVec", "insert"),
        |b| b.iter_batched_ref(
            || StaticVec::<u8, 16>::from([0, 1, 2, 3]),
            |v| black_box({ v.insert(1, black_box(9)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "insert"),
        |b| b.iter_batched_ref(
            || { let mut vec: Vec<u8> = vec![0, 1, 2, 3]; vec.reserve_exact(12); vec },
            |vec| black_box({ vec.insert(1, black_box(9)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "insert"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u8; 16]>::from_vec(vec![0, 1, 2, 3]),
            |vec| black_box({ vec.insert(1, black_box(9)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("ArrayVec", "insert"),
        |b| b.iter_batched_ref(
            || { let mut vec = ArrayVec::<u8, 16>::new(); (0..4).for_each(|v| vec.push(v)); vec },
            |vec| black_box({ vec.insert(1, black_box(9)); }),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("StaticVec", "remove"),
        |b| b.iter_batched_ref(
            || StaticVec::<u8, 16>::from([0, 1, 2, 3]),
            |v| black_box({ let _ = v.remove(1); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "remove"),
        |b| b.iter_batched_ref(
            || { let mut vec: Vec<u8> = vec![0, 1, 2, 3]; vec.reserve_exact(12); vec },
            |vec| black_box({ let _ = vec.remove(1); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "remove"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u8; 16]>::from_vec(vec![0, 1, 2, 3]),
            |vec| black_box({ let _ = vec.remove(1); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("ArrayVec", "remove"),
        |b| b.iter_batched_ref(
            || { let mut vec = ArrayVec::<u8, 16>::new(); (0..4).for_each(|v| vec.push(v)); vec },
            |vec| black_box({ let _ = vec.remove(1); }),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("StaticVec", "erase"),
        |b| b.iter_batched_ref(
            || StaticVec::<u8, 16>::from([0, 1, 2, 3, 4, 5, 6, 7]),
            |v| black_box({ let _ = v.erase(black_box(2..5)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "erase"),
        |b| b.iter_batched_ref(
            || { let mut vec: Vec<u8> = (0..8).collect(); vec.reserve_exact(8); vec },
            |vec| black_box({ vec.drain(black_box(2..5)); }),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("StaticVec", "clone_from"),
        |b| b.iter_batched_ref(
            || (StaticVec::<u32, 16>::from([1; 8]), StaticVec::<u32, 16>::from([2; 12])),
            |(dst, src)| black_box(dst.clone_from(src)),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("StaticVec", "swap_with"),
        |b| b.iter_batched_ref(
            || (StaticVec::<u32, 16>::from([1; 4]), StaticVec::<u32, 16>::from([2; 12])),
            |(a, z)| black_box(a.swap_with(z)),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("StaticVec", "slice"),
        |b| b.iter_batched_ref(
            || StaticVec::<u32, 16>::from(black_box([32; 8])),
            |v| black_box({
                let s = &v[..];
                s[0];
            }),
            BatchSize::SmallInput
        )
    );

    group.bench_function(
        "iter",
        |b| b.iter_batched_ref(
            || StaticVec::<u32, 16>::from(black_box([32; 8])),
            |v| black_box(for x in v.iter() { black_box(x); }),
            BatchSize::SmallInput
        )
    );

    group.finish();

}

criterion_group!(benches, benchmark);
criterion_main!(benches);
