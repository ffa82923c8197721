// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use rand::{thread_rng, Rng};

use bigdec::{Decimal, Rounding};

fn random_decimal(rng: &mut impl Rng) -> Decimal {
    let n: i64 = rng.gen();
    let d = Decimal::from(n);
    d.divide(&Decimal::from(1000i64), Some(3)).unwrap()
}

fn bench_parse(s: String, b: &mut Bencher) {
    b.iter(|| s.parse::<Decimal>().unwrap())
}

fn bench_add(x: Decimal, y: Decimal, b: &mut Bencher) {
    b.iter_with_setup(|| (x.clone(), y.clone()), |(x, y)| x.add(&y, None))
}

fn bench_multiply(x: Decimal, y: Decimal, b: &mut Bencher) {
    b.iter_with_setup(|| (x.clone(), y.clone()), |(x, y)| x.multiply(&y, None))
}

fn bench_divide(x: Decimal, y: Decimal, b: &mut Bencher) {
    b.iter_with_setup(
        || (x.clone(), y.clone()),
        |(x, y)| x.divide(&y, Some(20)).unwrap(),
    )
}

fn bench_quantize(x: Decimal, b: &mut Bencher) {
    b.iter_with_setup(|| x.clone(), |x| x.quantize(-2, Rounding::HalfEven))
}

pub fn bench_ops(c: &mut Criterion) {
    let mut rng = thread_rng();

    let s = random_decimal(&mut rng).to_string();
    c.bench_function("parse", |b| bench_parse(s.clone(), b));

    let x = random_decimal(&mut rng);
    let y = random_decimal(&mut rng);
    c.bench_function("add", |b| bench_add(x.clone(), y.clone(), b));
    c.bench_function("multiply", |b| bench_multiply(x.clone(), y.clone(), b));
    c.bench_function("divide", |b| bench_divide(x.clone(), y.clone(), b));
    c.bench_function("quantize", |b| bench_quantize(x.clone(), b));
}

criterion_group!(benches, bench_ops);
criterion_main!(benches);
