pub mod backup;
pub mod chart;
pub mod discover;
pub mod error;
pub mod export;
pub mod processor;
pub mod simfile;
pub mod transform;

pub use backup::backup_file;
pub use chart::{ChartSelector, Difficulty};
pub use discover::find_chart_files;
pub use error::{Error, Result};
pub use export::ExtractedChart;
pub use processor::{
    Action, BatchSummary, backup_directory, extract_directory, extract_file, process_directory,
    process_file,
};
pub use simfile::{Section, SectionKind, locate_body, segment};
pub use transform::{InsertSide, build_block, find_lines, insert_block, replace_lines, simplify};
