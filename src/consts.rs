/// Date format used for all input, display, and storage: "06/15/1990"
pub(crate) const DATE_FORMAT: &str = "%m/%d/%Y";

/// Length of a complete MM/DD/YYYY entry; shorter input is still being typed
pub(crate) const INPUT_LEN: usize = 10;
