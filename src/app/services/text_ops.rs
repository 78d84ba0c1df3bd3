use std::path::{Path, PathBuf};

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Decode `%XX` escapes. Malformed escapes are kept literally and invalid
/// UTF-8 in the result is replaced.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2]))
        {
            out.push((hi << 4) | lo);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Turn one line of a drop payload into a path. Accepts plain paths and
/// `file://` URIs (with or without a host part).
pub fn path_from_drop_line(line: &str) -> Option<PathBuf> {
    let line = line.trim_end_matches(['\r', '\0']).trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let Some(rest) = line.strip_prefix("file://") else {
        return Some(PathBuf::from(line));
    };

    // file://host/path -> /path; file:///path -> /path
    let path = match rest.find('/') {
        Some(0) => rest,
        Some(idx) => &rest[idx..],
        None => return None,
    };
    let decoded = percent_decode(path);

    // file:///C:/dir -> C:/dir
    #[cfg(target_os = "windows")]
    let decoded = match decoded.strip_prefix('/') {
        Some(stripped) if stripped.as_bytes().get(1) == Some(&b':') => stripped.to_string(),
        _ => decoded,
    };

    Some(PathBuf::from(decoded))
}
