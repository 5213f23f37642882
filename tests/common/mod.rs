pub mod log_capture;
pub mod tree_helpers;

/// Whether the test process runs with root privileges
///
/// Root bypasses permission checks, so permission-obstruction tests return
/// early when this is true.
#[allow(dead_code)]
pub fn running_as_root() -> bool {
    nix::unistd::geteuid().is_root()
}
