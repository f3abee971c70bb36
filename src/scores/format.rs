/// Render seconds as `MM:SS`.
///
/// ```
/// use rust_mahjong::scores::format_time;
///
/// assert_eq!(format_time(0), "00:00");
/// assert_eq!(format_time(75), "01:15");
/// assert_eq!(format_time(6000), "100:00");
/// ```
#[must_use]
pub fn format_time(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(9), "00:09");
        assert_eq!(format_time(60), "01:00");
        assert_eq!(format_time(599), "09:59");
        assert_eq!(format_time(5999), "99:59");
    }
}
