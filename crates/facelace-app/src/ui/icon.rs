pub(crate) const ARROW_LEFT: &str = "\u{2b05}";
pub(crate) const ARROW_RIGHT: &str = "\u{27a1}";
pub(crate) const CHECK: &str = "\u{2714}";
pub(crate) const CROSS: &str = "\u{274c}";
pub(crate) const GEAR: &str = "\u{2699}";
pub(crate) const HOURGLASS: &str = "\u{23f3}";
pub(crate) const INFO: &str = "\u{2139}";
pub(crate) const RESET: &str = "\u{21ba}";
pub(crate) const WARNING: &str = "\u{26a0}";
