use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Default)]
pub struct Counter {
    pub hits: Arc<AtomicUsize>,
}

pub mod counter_configuration {
    use super::Counter;

    ordconf::ordered_configuration!(Counter);
}

use counter_configuration::{Configuration, external_configuration_example, new_config, new_configuration};

fn main() {
    let counter = Counter::default();
    let hits = Arc::clone(&counter.hits);

    let mut configuration = new_configuration(counter, vec![external_configuration_example()]);
    configuration.add(vec![new_config(5, |counter: Counter| {
        counter.hits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    })]);
    configuration.configure().unwrap();

    assert!(configuration.configured());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
