use std::cell::Cell;
use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;

pub fn pin_thread_to_core() {
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    if !AFFINITY_ALREADY_SET.with(|already_set| already_set.get()) {
        if let Some(core_id) = core_affinity::get_core_ids()
            .as_ref()
            .and_then(|ids| ids.get(pin_core_id))
        {
            core_affinity::set_for_current(*core_id);
        }

        AFFINITY_ALREADY_SET.with(|already_set| already_set.set(true));
    }
}

/// Upper bound for benchmarked input lengths, configurable with `BENCH_MAX_LEN`, default
/// 1_000.
pub fn max_len() -> usize {
    static MAX_LEN: OnceCell<usize> = OnceCell::new();

    *MAX_LEN.get_or_init(|| match env::var("BENCH_MAX_LEN") {
        Ok(val) => usize::from_str(&val).expect("BENCH_MAX_LEN must be a usize"),
        Err(_) => 1_000,
    })
}
