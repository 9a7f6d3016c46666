//! Active-route detection for menu links.

const SEPARATOR: char = '/';

/// Returns true when `current_path` is `target_path` or lies underneath it.
///
/// Matching is done on whole path segments, so `/super-admin/dashboard` stays
/// active on `/super-admin/dashboard/field` but not on `/super-admin/dashboard2`.
/// Trailing separators are ignored on both sides.
pub fn is_active(current_path: &str, target_path: &str) -> bool {
    let current = trim_trailing(current_path);
    let target = trim_trailing(target_path);

    if target.is_empty() {
        // Root only matches root.
        return current.is_empty();
    }

    match current.strip_prefix(target) {
        Some(rest) => rest.is_empty() || rest.starts_with(SEPARATOR),
        None => false,
    }
}

fn trim_trailing(path: &str) -> &str {
    path.trim_end_matches(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(is_active("/super-admin/leads", "/super-admin/leads"));
    }

    #[test]
    fn test_descendant_keeps_parent_active() {
        assert!(is_active("/super-admin/dashboard/field", "/super-admin/dashboard"));
    }

    #[test]
    fn test_sibling_sharing_prefix_is_not_active() {
        assert!(!is_active("/super-admin/dashboard2", "/super-admin/dashboard"));
        assert!(!is_active("/roles-archive", "/roles"));
        assert!(!is_active("/dashboard", "/dash"));
    }

    #[test]
    fn test_parent_is_not_active_for_child_target() {
        assert!(!is_active("/super-admin/dashboard", "/super-admin/dashboard/field"));
    }

    #[test]
    fn test_trailing_separator_ignored() {
        assert!(is_active("/super-admin/leads/", "/super-admin/leads"));
        assert!(is_active("/super-admin/leads/7", "/super-admin/leads/"));
    }

    #[test]
    fn test_root_target() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/super-admin", "/"));
    }

    #[test]
    fn test_malformed_paths_do_not_panic() {
        assert!(!is_active("", "/leads"));
        assert!(is_active("leads/1", "leads"));
        assert!(!is_active("//", "/x"));
    }
}
