pub mod ranked;

pub use ranked::{
    Metric, Rank, RankedEntry, RankedRow, RankedTableBuilder,
    SeasonAnnotation,
};
