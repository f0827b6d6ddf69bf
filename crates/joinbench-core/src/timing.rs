use std::future::Future;
use std::time::Instant;

/// Runs `op` and reports its wall-clock duration in fractional milliseconds.
/// A failed operation produces no measurement; its error is returned as-is.
pub async fn measure<T, F, Fut>(op: F) -> anyhow::Result<(T, f64)>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let started = Instant::now();
    let value = op().await?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    Ok((value, elapsed_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn reports_elapsed_wall_clock_in_ms() {
        let (value, ms) = measure(|| async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok::<_, anyhow::Error>(7)
        })
        .await
        .unwrap();
        assert_eq!(value, 7);
        assert!(ms >= 19.0, "slept 20ms but measured {ms}ms");
    }

    #[tokio::test]
    async fn failed_operations_produce_no_measurement() {
        let res = measure(|| async { Err::<(), _>(anyhow::anyhow!("boom")) }).await;
        assert!(res.is_err());
    }
}
