use votes_token::checkpoints::{isqrt, recent_upper_bound, upper_bound};

fn linear_upper_bound(timepoints: &[u64], timepoint: u64) -> usize {
    timepoints.iter().take_while(|t| **t <= timepoint).count()
}

#[test]
fn test_upper_bound_empty_history() {
    let timepoints: [u64; 0] = [];
    assert_eq!(upper_bound(0, 0, 10, |i| timepoints[i]), 0);
    assert_eq!(recent_upper_bound(0, 10, |i| timepoints[i]), 0);
}

#[test]
fn test_upper_bound_before_first_entry() {
    let timepoints = [5u64, 8, 12];
    assert_eq!(upper_bound(0, timepoints.len(), 4, |i| timepoints[i]), 0);
}

#[test]
fn test_upper_bound_exact_and_between() {
    let timepoints = [5u64, 8, 12];
    let at = |t| upper_bound(0, timepoints.len(), t, |i| timepoints[i]);

    assert_eq!(at(5), 1);
    assert_eq!(at(7), 1);
    assert_eq!(at(8), 2);
    assert_eq!(at(11), 2);
    assert_eq!(at(12), 3);
    assert_eq!(at(1_000), 3);
}

#[test]
fn test_recent_upper_bound_matches_linear_scan() {
    // long enough to take the recent-split branch
    let timepoints: Vec<u64> = (1..=40u64).map(|n| n * 3).collect();

    for timepoint in 0..=130u64 {
        assert_eq!(
            recent_upper_bound(timepoints.len(), timepoint, |i| timepoints[i]),
            linear_upper_bound(&timepoints, timepoint),
            "timepoint {timepoint}"
        );
    }
}

#[test]
fn test_recent_upper_bound_short_histories() {
    for len in 0..=6usize {
        let timepoints: Vec<u64> = (0..len as u64).map(|n| 10 + n * 10).collect();
        for timepoint in 0..=80u64 {
            assert_eq!(
                recent_upper_bound(len, timepoint, |i| timepoints[i]),
                linear_upper_bound(&timepoints, timepoint),
                "len {len}, timepoint {timepoint}"
            );
        }
    }
}

#[test]
fn test_isqrt() {
    assert_eq!(isqrt(0), 0);
    assert_eq!(isqrt(1), 1);
    assert_eq!(isqrt(3), 1);
    assert_eq!(isqrt(4), 2);
    assert_eq!(isqrt(6), 2);
    assert_eq!(isqrt(99), 9);
    assert_eq!(isqrt(100), 10);
    assert_eq!(isqrt(1_000_000), 1_000);
}
