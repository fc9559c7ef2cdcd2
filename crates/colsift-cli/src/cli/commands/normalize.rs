//! `colsift normalize <label>...` – print canonical keys.

use colsift_core::config::ColsiftConfig;
use colsift_core::normalize_with;

pub fn run_normalize(cfg: &ColsiftConfig, labels: &[String]) {
    for label in labels {
        let key = normalize_with(label, cfg.normalization);
        if key.is_empty() {
            println!("{label:?}\t(empty)");
        } else {
            println!("{label:?}\t{key}");
        }
    }
}
