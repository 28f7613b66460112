use equiz_common::config::Config;
use equiz_common::{success, warn};
use equiz_core::generator;

use crate::commands::session_rng;
use crate::qprint;
use crate::terminal::{format, print};

/// Prints `count` freshly generated systems, worksheet style. With
/// `reveal`, the solution follows each entry.
pub fn generate(count: u32, reveal: bool, cfg: &Config) -> anyhow::Result<()> {
    let mut rng = session_rng(cfg);
    let mut produced: u32 = 0;

    for idx in 1..=count {
        match generator::generate(&mut rng) {
            Ok(system) => {
                let [first, second] = format::system_lines(&system);
                print::tree_head(idx as usize, &first);
                print::print(&format!("    {second}"));
                if reveal {
                    print::print_status(format::solution_line(&system));
                }
                if idx != count {
                    qprint!();
                }
                produced += 1;
            }
            Err(e) => warn!("skipping entry {idx}: {e}"),
        }
    }

    qprint!();
    success!("{produced} of {count} systems generated");
    Ok(())
}
