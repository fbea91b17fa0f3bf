//! Sequential composition of block stages.

use smallvec::SmallVec;
use tracing::{debug, debug_span, info};

use crate::Options;
use crate::block::Stage;

/// An ordered set of stages applied one after another.
///
/// Stages always run in canonical order regardless of how the pipeline was
/// built, since later stages rely on earlier ones having consumed their
/// marker lines.
///
/// # Example
/// ```
/// use linemark::{Options, Pipeline};
///
/// let options = Options {
///     paragraphs: false,
///     ..Options::default()
/// };
/// let out = Pipeline::from_options(&options).run(vec!["# Hi\n".to_string()]);
/// assert_eq!(out, ["<h1>Hi</h1>\n"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: SmallVec<[Stage; 4]>,
}

impl Pipeline {
    /// Pipeline with every stage enabled.
    pub fn new() -> Self {
        Self {
            stages: Stage::ALL.into_iter().collect(),
        }
    }

    /// Pipeline with only the stages enabled in `options`.
    pub fn from_options(options: &Options) -> Self {
        Self {
            stages: Stage::ALL
                .into_iter()
                .filter(|&stage| options.enables(stage))
                .collect(),
        }
    }

    /// Stages that will run, in order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Thread a Line Sequence through every stage.
    pub fn run(&self, lines: Vec<String>) -> Vec<String> {
        let _span = debug_span!("pipeline", stages = self.stages.len()).entered();
        let lines_in = lines.len();

        let lines = self.stages.iter().fold(lines, |lines, &stage| {
            let before = lines.len();
            let after = stage.apply(lines);
            debug!(
                stage = stage.name(),
                lines_in = before,
                lines_out = after.len(),
                "stage complete"
            );
            after
        });

        info!(lines_in, lines_out = lines.len(), "converted");
        lines
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
