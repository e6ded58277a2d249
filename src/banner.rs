use std::fs;
use std::path::Path;

pub const FALLBACK_NOTICE: &str = "Banner file not found";

/// Reads the optional ASCII-art asset shown while the launcher starts.
/// Decorative only; absence falls back to a plain notice.
pub fn load_banner(path: &Path) -> Option<String> {
    let art = fs::read_to_string(path).ok()?;
    if art.trim().is_empty() {
        return None;
    }
    Some(art)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_dir;
    use std::fs;

    #[test]
    fn test_missing_banner_is_none() {
        let (_guard, dir) = test_dir("banner-missing");
        assert_eq!(load_banner(&dir.join("banner.txt")), None);
    }

    #[test]
    fn test_blank_banner_is_none() {
        let (_guard, dir) = test_dir("banner-blank");
        let path = dir.join("banner.txt");
        fs::write(&path, "  \n\n").unwrap();
        assert_eq!(load_banner(&path), None);
    }

    #[test]
    fn test_banner_contents_pass_through() {
        let (_guard, dir) = test_dir("banner-art");
        let path = dir.join("banner.txt");
        fs::write(&path, "RED2NET\n=======\n").unwrap();
        assert_eq!(load_banner(&path).as_deref(), Some("RED2NET\n=======\n"));
    }
}
