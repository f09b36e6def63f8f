use criterion::{Criterion, black_box, criterion_group, criterion_main};
use equate::value::Value;
use equate::{Options, parse};

/// A balanced tree of objects `depth` levels deep with `width` keys per
/// level, in literal notation.
fn object_tree(depth: usize, width: usize) -> String {
    match depth {
        0 => "[1, 'leaf', null]".to_string(),
        _ => {
            let fields: Vec<String> = (0..width)
                .map(|idx| format!("k{}: {}", idx, object_tree(depth - 1, width)))
                .collect();
            format!("{{ {} }}", fields.join(", "))
        }
    }
}

fn number_array(len: usize) -> String {
    let elements: Vec<String> = (0..len).map(|idx| format!("{}", idx)).collect();
    format!("[{}]", elements.join(", "))
}

/// A set of `len` single element arrays.
fn set_of_arrays(len: usize, reverse: bool) -> String {
    let elements: Vec<String> = match reverse {
        true => (0..len).rev().map(|idx| format!("[{}]", idx)).collect(),
        false => (0..len).map(|idx| format!("[{}]", idx)).collect(),
    };
    format!("new Set([{}])", elements.join(", "))
}

fn pair(text: &str) -> (Value, Value) {
    (parse!(text), parse!(text))
}

fn criterion_benchmark(c: &mut Criterion) {
    let deep = Options::new().deep(true);

    let (a, b) = pair(&object_tree(4, 4));
    c.bench_function("deep object 4x4", |bench| {
        bench.iter(|| assert!(equate::equals(black_box(&a), black_box(&b), &deep)))
    });

    let (a, b) = pair(&number_array(10000));
    c.bench_function("array 10000", |bench| {
        bench.iter(|| assert!(equate::equals(black_box(&a), black_box(&b), &deep)))
    });

    // opposite orders make the matching search
    let a = parse!(&set_of_arrays(200, false));
    let b = parse!(&set_of_arrays(200, true));
    c.bench_function("deep set 200", |bench| {
        bench.iter(|| assert!(equate::equals(black_box(&a), black_box(&b), &deep)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
