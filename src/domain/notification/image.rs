//! Image option classification for growlnotify

use std::fmt;

/// Extensions growlnotify accepts as a raw image file
const IMAGE_EXTENSIONS: &[&str] = &["png", "gif", "jpg", "jpeg"];

/// The growlnotify flag an image option maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFlag {
    /// `--iconpath`: path to an `.icns` file
    IconPath,
    /// `--appIcon`: name of an installed application
    AppIcon,
    /// `--image`: path to a bitmap image
    Image,
    /// `--icon`: file type whose system icon is shown
    Icon,
}

impl ImageFlag {
    /// Get the command-line flag
    pub const fn as_flag(&self) -> &'static str {
        match self {
            Self::IconPath => "--iconpath",
            Self::AppIcon => "--appIcon",
            Self::Image => "--image",
            Self::Icon => "--icon",
        }
    }
}

impl fmt::Display for ImageFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_flag())
    }
}

/// Lowercase extension of the last path component, without the dot.
///
/// Names with a single leading dot (`.hidden`) and names ending in a dot
/// have no extension.
pub fn extension(image: &str) -> Option<String> {
    let file_name = image.rsplit('/').next().unwrap_or(image);
    match file_name.rfind('.') {
        Some(0) | None => None,
        Some(idx) => {
            let ext = &file_name[idx + 1..];
            (!ext.is_empty()).then(|| ext.to_lowercase())
        }
    }
}

/// Pick the growlnotify flag and value for an image option.
///
/// Rules are tried in order and the first match wins. Note that a file with
/// an unrecognized extension yields the bare extension as the value, not the
/// original path.
pub fn classify(image: &str) -> (ImageFlag, String) {
    let ext = extension(image);

    if ext.as_deref() == Some("icns") {
        return (ImageFlag::IconPath, image.to_string());
    }
    if image.starts_with(|c: char| c.is_ascii_uppercase()) {
        return (ImageFlag::AppIcon, image.to_string());
    }
    match ext {
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => {
            (ImageFlag::Image, image.to_string())
        }
        Some(ext) => (ImageFlag::Icon, ext),
        None => (ImageFlag::Icon, image.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_of_simple_names() {
        assert_eq!(extension("shot.png"), Some("png".to_string()));
        assert_eq!(extension("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(extension("/tmp/a.b/photo.JPG"), Some("jpg".to_string()));
    }

    #[test]
    fn extension_missing() {
        assert_eq!(extension("noext"), None);
        assert_eq!(extension(".hidden"), None);
        assert_eq!(extension("trailing."), None);
        assert_eq!(extension("/tmp/a.b/noext"), None);
    }

    #[test]
    fn icns_wins_over_capitalized_name() {
        assert_eq!(
            classify("Photo.icns"),
            (ImageFlag::IconPath, "Photo.icns".to_string())
        );
        assert_eq!(
            classify("photo.icns"),
            (ImageFlag::IconPath, "photo.icns".to_string())
        );
    }

    #[test]
    fn capitalized_name_is_app_icon() {
        assert_eq!(classify("Dock"), (ImageFlag::AppIcon, "Dock".to_string()));
        assert_eq!(
            classify("Safari.png"),
            (ImageFlag::AppIcon, "Safari.png".to_string())
        );
    }

    #[test]
    fn bitmap_extensions_are_images() {
        for image in ["shot.png", "anim.gif", "pic.jpg", "pic.jpeg"] {
            assert_eq!(classify(image), (ImageFlag::Image, image.to_string()));
        }
    }

    #[test]
    fn other_extension_is_replaced_by_extension() {
        assert_eq!(classify("file.txt"), (ImageFlag::Icon, "txt".to_string()));
    }

    #[test]
    fn no_extension_keeps_value() {
        assert_eq!(classify("noext"), (ImageFlag::Icon, "noext".to_string()));
    }

    #[test]
    fn flag_strings() {
        assert_eq!(ImageFlag::IconPath.to_string(), "--iconpath");
        assert_eq!(ImageFlag::AppIcon.to_string(), "--appIcon");
        assert_eq!(ImageFlag::Image.to_string(), "--image");
        assert_eq!(ImageFlag::Icon.to_string(), "--icon");
    }
}
