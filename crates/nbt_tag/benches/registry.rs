use std::hint::black_box;

use divan::Bencher;
use nbt_tag::TagKind;

fn main() {
    divan::main();
}

#[divan::bench]
fn code_to_kind(bencher: Bencher) {
    bencher.bench_local(|| {
        for code in 0..=u8::MAX {
            let _ = black_box(TagKind::from_code(black_box(code)));
        }
    });
}

#[divan::bench]
fn kind_to_name(bencher: Bencher) {
    bencher.bench_local(|| {
        for kind in TagKind::ALL {
            black_box(black_box(kind).name());
        }
    });
}

#[divan::bench]
fn name_to_kind(bencher: Bencher) {
    bencher.bench_local(|| {
        for kind in TagKind::ALL {
            let _ = black_box(TagKind::from_name(black_box(kind.name())));
        }
    });
}
