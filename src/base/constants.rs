/// Defines the bond influence weight (uniform, non-decaying)
///
/// The influence function is constant over the whole horizon. The kernels
/// that need a per-bond weight take it as an explicit argument so that a
/// decaying function can be probed; everywhere else this default applies.
pub const OMEGA: f64 = 1.0;
