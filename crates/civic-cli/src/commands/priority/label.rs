use civic_core::priority::label_for_score;

use crate::cli::GlobalFlags;
use crate::output::output;

pub fn run(score: u8, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&label_for_score(score), flags.format)
}
