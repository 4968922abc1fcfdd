use fixed_ringbuf::RingBuf;
use tracing::info;

/// Keep the last few log lines of a noisy stream, the tail -n shape this
/// container is built for.
fn main() {
    tracing_subscriber::fmt::init();

    let mut tail: RingBuf<String> = RingBuf::new(5);

    for step in 0..32u32 {
        let checksum = step.wrapping_mul(2654435761);
        tail.push_back(format!("step {step}: checksum {checksum:08x}"));
    }

    info!("kept {} of 32 lines", tail.len());
    for line in &tail {
        info!("tail: {}", line);
    }

    // The two physical segments behind the ring, for the curious.
    let (first, second) = tail.as_slices();
    info!(
        "segments: {} contiguous + {} wrapped",
        first.len(),
        second.len()
    );
}
