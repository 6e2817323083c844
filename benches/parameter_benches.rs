use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use paramdio::{AudioParameter, AutomationRate, BlockClock, Timestamp};

struct Fixture {
    clock: Arc<BlockClock>,
    parameter: AudioParameter,
}

impl Fixture {
    fn new(rate: AutomationRate) -> Self {
        let clock = Arc::new(BlockClock::new(48_000));
        let parameter =
            AudioParameter::new(clock.clone(), 1.0, rate).expect("finite default value");

        Self { clock, parameter }
    }

    fn process_block(&mut self) {
        self.parameter.tick();
        self.clock.advance_block();
    }
}

fn parameter_benchmarks(c: &mut Criterion) {
    c.benchmark_group("Parameter");

    c.bench_function("render constant blocks", |b| {
        let mut fixture = Fixture::new(AutomationRate::PerSample);
        b.iter(|| fixture.process_block());
    });

    c.bench_function("render a linear ramp per sample", |b| {
        let mut fixture = Fixture::new(AutomationRate::PerSample);
        fixture
            .parameter
            .linear_ramp_to_value_at_time(0.0, Timestamp::from_seconds(3_600.0));
        b.iter(|| fixture.process_block());
    });

    c.bench_function("render an exponential ramp per sample", |b| {
        let mut fixture = Fixture::new(AutomationRate::PerSample);
        fixture
            .parameter
            .exponential_ramp_to_value_at_time(1e-3, Timestamp::from_seconds(3_600.0))
            .expect("positive endpoints");
        b.iter(|| fixture.process_block());
    });

    c.bench_function("render a linear ramp per block", |b| {
        let mut fixture = Fixture::new(AutomationRate::PerBlock);
        fixture
            .parameter
            .linear_ramp_to_value_at_time(0.0, Timestamp::from_seconds(3_600.0));
        b.iter(|| fixture.process_block());
    });
}

criterion_group!(benches, parameter_benchmarks);
criterion_main!(benches);
