pub mod registry;
pub mod types;

pub use registry::DepartmentRegistry;
pub use types::*;

/// Percentage of `total` that is `solved`, rounded half up. Zero when `total` is zero.
pub fn efficiency(solved: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (solved, total) = (u64::from(solved), u64::from(total));
    // round(100 * s / t) == floor((200 * s + t) / (2 * t))
    ((200 * solved + total) / (2 * total)) as u32
}
