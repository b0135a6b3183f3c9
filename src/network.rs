//! Backend base-path resolution.
//!
//! The panel pages are served either from inside the panel mount directory
//! or from the deployment root, and the backend directory sits next to the
//! mount directory. The relative base path therefore depends on where the
//! hosting page lives — the only environment-sensing logic in the SDK.

/// Directory segment the panel pages are mounted under.
pub const PANEL_MOUNT_SEGMENT: &str = "/user-panel-v2/";

/// Base path for pages served from inside the panel mount directory.
pub const PARENT_RELATIVE_BASE: &str = "../backend";

/// Base path for pages served next to the backend directory.
pub const SIBLING_RELATIVE_BASE: &str = "backend";

/// Resolve the backend base path from the hosting page's path.
pub fn resolve_base_path(page_path: &str) -> &'static str {
    if page_path.contains(PANEL_MOUNT_SEGMENT) {
        PARENT_RELATIVE_BASE
    } else {
        SIBLING_RELATIVE_BASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mounted_page_uses_parent_relative_base() {
        assert_eq!(
            resolve_base_path("/panel/user-panel-v2/index.html"),
            PARENT_RELATIVE_BASE
        );
        assert_eq!(
            resolve_base_path("/user-panel-v2/trading.html"),
            PARENT_RELATIVE_BASE
        );
    }

    #[test]
    fn test_root_page_uses_sibling_relative_base() {
        assert_eq!(resolve_base_path("/index.html"), SIBLING_RELATIVE_BASE);
        assert_eq!(resolve_base_path("/"), SIBLING_RELATIVE_BASE);
        assert_eq!(resolve_base_path(""), SIBLING_RELATIVE_BASE);
    }

    #[test]
    fn test_segment_must_match_exactly() {
        // A different versioned mount is not the panel mount.
        assert_eq!(
            resolve_base_path("/panel/user-panel-v3/index.html"),
            SIBLING_RELATIVE_BASE
        );
    }
}
