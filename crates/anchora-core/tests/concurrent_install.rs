use std::sync::{Arc, Barrier};

use anchora_core::coords::ScaleContext;

#[test]
fn racing_installs_all_succeed() {
    const THREADS: usize = 8;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (1..=THREADS)
        .map(|i| {
            let barrier = barrier.clone();
            std::thread::spawn(move || {
                barrier.wait();
                ScaleContext::default().with_world_scale(i as f64).install()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }

    let scale = ScaleContext::current().world_scale;
    assert!((1..=THREADS).any(|i| i as f64 == scale), "unexpected scale {scale}");
}
