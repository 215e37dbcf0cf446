use criterion::{criterion_group, criterion_main};

mod phone_classifier_benchmark {
    use criterion::Criterion;
    use ie_validate::validators::phone_number;

    pub fn criterion_benchmark(c: &mut Criterion) {
        let numbers = vec![
            "+353 1 213 4567",
            "00353868123456",
            "0851234567",
            "08651234567",
            "1800123456",
            "021 1234567",
            "04812345678",
            "0505 12345",
            "not a number",
        ];
        c.bench_function("phone-classifier", |b| {
            b.iter(|| {
                for number in numbers.clone().into_iter() {
                    phone_number::is_valid(number, true);
                }
            })
        });
    }
}

mod checksum_benchmark {
    use criterion::Criterion;
    use ie_validate::{validate, IrishIdentifier, ValidationOptions};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let options = ValidationOptions::default();
        let identifiers = vec![
            (IrishIdentifier::PpsNumber, "1234567FA"),
            (IrishIdentifier::VatNumber, "IE6433435F"),
            (IrishIdentifier::LicensePlate, "141-T-12345"),
            (IrishIdentifier::Iban, "IE29AIBK93115212345678"),
        ];
        c.bench_function("checksum-validators", |b| {
            b.iter(|| {
                for (kind, input) in identifiers.clone().into_iter() {
                    let _ = validate(kind, input, &options);
                }
            })
        });
    }
}

criterion_group!(
    benches,
    phone_classifier_benchmark::criterion_benchmark,
    checksum_benchmark::criterion_benchmark
);
criterion_main!(benches);
