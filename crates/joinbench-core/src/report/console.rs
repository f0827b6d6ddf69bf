use crate::model::{JoinMethod, TrialResult};

pub fn print_summary(results: &[TrialResult]) {
    // Group repetitions of the same (scenario, method) pair, keeping the
    // order trials were produced in.
    let mut groups: Vec<((u32, u32, JoinMethod), Vec<f64>)> = Vec::new();
    for r in results {
        let key = (r.num_posts, r.num_users, r.method);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, times)) => times.push(r.time_ms),
            None => groups.push((key, vec![r.time_ms])),
        }
    }

    for ((posts, users, method), times) in &groups {
        let mean = times.iter().sum::<f64>() / times.len() as f64;
        let min = times.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = times.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        eprintln!(
            "{:>7} posts x {:>7} users  {:<6} runs={} mean={:.2}ms min={:.2}ms max={:.2}ms",
            posts,
            users,
            method.as_str(),
            times.len(),
            mean,
            min,
            max
        );
    }
    eprintln!("Trials: {}", results.len());
}
