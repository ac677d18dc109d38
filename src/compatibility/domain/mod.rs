pub mod bottleneck_analysis;
pub mod category;
pub mod compatibility_result;
pub mod component_option;
pub mod power_analysis;
pub mod selection;

pub use bottleneck_analysis::{BottleneckAnalysis, BottleneckDetails, DetailValue};
pub use category::ComponentCategory;
pub use compatibility_result::{CompatibilityResult, Verdict};
pub use component_option::ComponentOption;
pub use power_analysis::PowerAnalysis;
pub use selection::Selection;
