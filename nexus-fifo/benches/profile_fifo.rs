// benches/profile_fifo.rs
//! Per-operation latency profile for nexus_fifo with a VecDeque baseline
//!
//! Keeps a steady backlog in the queue so every sample pays its share of
//! compaction. Reports cycle histograms for enqueue+dequeue pairs.
//!
//! Run: cargo build --release --bench profile_fifo
//! Profile: sudo taskset -c 2 ./target/release/deps/profile_fifo-*

use std::collections::VecDeque;
use std::hint::black_box;
use std::thread;
use std::time::{Duration, Instant};

use hdrhistogram::Histogram;
use nexus_fifo::Queue;

const WARMUP: usize = 100_000;
const SAMPLES: usize = 1_000_000;
const BACKLOG: u64 = 256;

#[cfg(target_arch = "x86_64")]
#[inline]
fn rdtscp() -> u64 {
    unsafe {
        let mut aux: u32 = 0;
        core::arch::x86_64::__rdtscp(&mut aux)
    }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn rdtscp() -> u64 {
    use std::sync::OnceLock;
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_nanos() as u64
}

fn estimate_cpu_freq_ghz() -> f64 {
    let start_cycles = rdtscp();
    let start_time = Instant::now();
    thread::sleep(Duration::from_millis(10));
    let end_cycles = rdtscp();
    let elapsed = start_time.elapsed();
    end_cycles.wrapping_sub(start_cycles) as f64 / elapsed.as_nanos() as f64
}

// ============================================================================
// nexus_fifo
// ============================================================================

fn bench_nexus_fifo() -> Histogram<u64> {
    let mut q = Queue::<u64>::new();
    q.enqueue_all(0..BACKLOG);

    for i in 0..WARMUP {
        q.enqueue(i as u64);
        black_box(q.dequeue());
    }

    let mut hist = Histogram::<u64>::new_with_max(1_000_000, 3).unwrap();

    for i in 0..SAMPLES {
        let start = rdtscp();
        q.enqueue(black_box(i as u64));
        black_box(q.dequeue());
        let elapsed = rdtscp().wrapping_sub(start);
        let _ = hist.record(elapsed.min(1_000_000));
    }

    hist
}

// ============================================================================
// VecDeque baseline
// ============================================================================

fn bench_vecdeque() -> Histogram<u64> {
    let mut q = VecDeque::<u64>::new();
    q.extend(0..BACKLOG);

    for i in 0..WARMUP {
        q.push_back(i as u64);
        black_box(q.pop_front());
    }

    let mut hist = Histogram::<u64>::new_with_max(1_000_000, 3).unwrap();

    for i in 0..SAMPLES {
        let start = rdtscp();
        q.push_back(black_box(i as u64));
        black_box(q.pop_front());
        let elapsed = rdtscp().wrapping_sub(start);
        let _ = hist.record(elapsed.min(1_000_000));
    }

    hist
}

// ============================================================================
// Main
// ============================================================================

fn print_histogram(name: &str, hist: &Histogram<u64>, cpu_ghz: f64) {
    println!("{}:", name);
    println!("  Cycles:");
    println!("    min:   {:>7}", hist.min());
    println!("    p50:   {:>7}", hist.value_at_quantile(0.50));
    println!("    p99:   {:>7}", hist.value_at_quantile(0.99));
    println!("    p999:  {:>7}", hist.value_at_quantile(0.999));
    println!("    max:   {:>7}", hist.max());
    println!("  Nanoseconds:");
    println!(
        "    p50:   {:>7.1} ns",
        hist.value_at_quantile(0.50) as f64 / cpu_ghz
    );
    println!(
        "    p99:   {:>7.1} ns",
        hist.value_at_quantile(0.99) as f64 / cpu_ghz
    );
    println!(
        "    p999:  {:>7.1} ns",
        hist.value_at_quantile(0.999) as f64 / cpu_ghz
    );
    println!();
}

fn main() {
    println!("nexus-fifo Benchmark");
    println!("====================");
    println!();
    println!("Warmup:  {}", WARMUP);
    println!("Samples: {}", SAMPLES);
    println!("Backlog: {}", BACKLOG);
    println!();

    let cpu_ghz = estimate_cpu_freq_ghz();
    println!("Estimated CPU freq: {:.2} GHz", cpu_ghz);
    println!();

    println!("=== enqueue + dequeue ===");
    println!();

    let nexus_hist = bench_nexus_fifo();
    print_histogram("nexus_fifo", &nexus_hist, cpu_ghz);

    let vecdeque_hist = bench_vecdeque();
    print_histogram("std VecDeque", &vecdeque_hist, cpu_ghz);
}
