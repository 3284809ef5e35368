//! Splitting of url paths into route parameters.
//!
//! Segments are separated by `/`. No case or slash normalization is done
//! here; callers prepare the path first.

/// Number of `/`-separated segments in `path`.
///
/// An empty path is a single empty segment.
pub fn segment_count(path: &str) -> usize {
    path.split('/').count()
}

/// Segments of `path` from `index` to the end.
///
/// Returns an empty list if `index` is past the last segment.
pub fn by_index(path: &str, index: usize) -> Vec<&str> {
    path.split('/').skip(index).collect()
}

/// Segments of `path` starting at the first segment equal to `token`.
///
/// Returns an empty list if `token` does not occur.
pub fn by_breakpoint<'a>(path: &'a str, token: &str) -> Vec<&'a str> {
    path.split('/').skip_while(|segment| *segment != token).collect()
}

/// Prepare a `location.hash` value for parameter extraction.
///
/// Strips a single leading `#` and lower-cases the rest.
pub fn normalize_hash(hash: &str) -> String {
    hash.strip_prefix('#').unwrap_or(hash).to_lowercase()
}

/// Route parameters for a `location.hash` value.
///
/// `#/code/rust` yields `["code", "rust"]`; an empty hash yields `[]`.
pub fn hash_params(hash: &str) -> Vec<String> {
    let path = normalize_hash(hash);
    by_index(&path, 1).into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LSS_PATH: &str = "Akrck02.com/#/lss/app/maker/4/u/akrck02/z/100";

    #[test]
    fn test_by_index_example() {
        assert_eq!(
            by_index(LSS_PATH, 5),
            vec!["4", "u", "akrck02", "z", "100"]
        );
    }

    #[test]
    fn test_by_index_lengths_and_tail() {
        for path in [LSS_PATH, "a/b/c", "", "/", "/code/", "x"] {
            let count = segment_count(path);
            for i in 0..=count {
                let tail = by_index(path, i);
                assert_eq!(tail.len(), count - i, "path={:?} index={}", path, i);

                if i < count {
                    let joined = tail.join("/");
                    assert!(path.ends_with(&joined), "path={:?} index={}", path, i);
                }
            }
        }
    }

    #[test]
    fn test_by_index_past_end() {
        assert!(by_index("a/b", 3).is_empty());
        assert!(by_index("a/b", 100).is_empty());
    }

    #[test]
    fn test_by_breakpoint() {
        assert_eq!(by_breakpoint("a/b/c", "b"), vec!["b", "c"]);
        assert_eq!(by_breakpoint(LSS_PATH, "maker"), vec!["maker", "4", "u", "akrck02", "z", "100"]);
        assert_eq!(by_breakpoint("a/b/c", "a")[0], "a");
    }

    #[test]
    fn test_by_breakpoint_uses_first_occurrence() {
        assert_eq!(by_breakpoint("x/t/y/t/z", "t"), vec!["t", "y", "t", "z"]);
    }

    #[test]
    fn test_by_breakpoint_absent() {
        assert!(by_breakpoint("a/b/c", "z").is_empty());
        assert!(by_breakpoint("", "z").is_empty());
    }

    #[test]
    fn test_no_normalization() {
        assert!(by_breakpoint("a/B/c", "b").is_empty());
        assert_eq!(by_index("/a/", 0), vec!["", "a", ""]);
    }

    #[test]
    fn test_hash_params() {
        assert_eq!(hash_params("#/code/Rust"), vec!["code", "rust"]);
        assert_eq!(hash_params("#/"), vec![""]);
        assert!(hash_params("").is_empty());
        assert!(hash_params("#").is_empty());
        assert_eq!(hash_params("#/Error/404"), vec!["error", "404"]);
    }
}
