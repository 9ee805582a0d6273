mod page_vm;
mod results_vm;
mod time_fmt;

pub use page_vm::{PageAction, PageItemVm, PageVm, map_page};
pub use results_vm::{DimensionSummaryVm, ResultRowVm, ResultsVm, map_results};
