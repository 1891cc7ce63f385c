// Display labels for stat slots. The table is supplied by the embedding
// application; none are built in.

use crate::defs::MAX_CL_STATS;
use crate::error::StatError;

pub trait StatLabels {
    fn label(&self, index: usize) -> Option<&str>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    pub fn new(labels: Vec<String>) -> Result<Self, StatError> {
        if labels.len() < MAX_CL_STATS {
            return Err(StatError::LabelTableTooShort {
                len: labels.len(),
                required: MAX_CL_STATS,
            });
        }
        Ok(Self { labels })
    }
}

impl StatLabels for LabelTable {
    /// Empty entries count as unlabelled.
    fn label(&self, index: usize) -> Option<&str> {
        self.labels
            .get(index)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }

    fn len(&self) -> usize {
        self.labels.len()
    }
}
