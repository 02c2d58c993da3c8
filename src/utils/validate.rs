use once_cell::sync::Lazy;
use regex::Regex;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex"));

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("Invalid year regex"));

pub fn validate_hex_color(color: &str) -> Result<(), &'static str> {
    // 颜色格式校验：#RRGGBB
    if !HEX_COLOR_RE.is_match(color) {
        return Err("Color must be a hex value like #4F46E5");
    }
    Ok(())
}

pub fn validate_year(year: &str) -> Result<(), &'static str> {
    if !YEAR_RE.is_match(year) {
        return Err("Year must be a four-digit number");
    }
    Ok(())
}

pub fn validate_course_code(code: &str) -> Result<(), &'static str> {
    let code = code.trim();
    if code.is_empty() {
        return Err("Course code must not be empty");
    }
    if code.chars().count() > 20 {
        return Err("Course code must be at most 20 characters");
    }
    Ok(())
}

pub fn validate_course_name(name: &str) -> Result<(), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Course name must not be empty");
    }
    if name.chars().count() > 255 {
        return Err("Course name must be at most 255 characters");
    }
    Ok(())
}

/// 满分必须为非负有限数
pub fn validate_points_possible(points: f64) -> Result<(), &'static str> {
    if !points.is_finite() {
        return Err("Points possible must be a finite number");
    }
    if points < 0.0 {
        return Err("Points possible must not be negative");
    }
    Ok(())
}

/// 得分必须落在 [0, points] 区间内
pub fn validate_earned_points(earned: f64, points: f64) -> Result<(), &'static str> {
    if !earned.is_finite() {
        return Err("Earned points must be a finite number");
    }
    if earned < 0.0 {
        return Err("Earned points must not be negative");
    }
    if earned > points {
        return Err("Earned points must not exceed points possible");
    }
    Ok(())
}

pub fn validate_percentage(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert!(validate_hex_color("#4F46E5").is_ok());
        assert!(validate_hex_color("#10b981").is_ok());
        assert!(validate_hex_color("4F46E5").is_err());
        assert!(validate_hex_color("#4F46E").is_err());
        assert!(validate_hex_color("#GGGGGG").is_err());
    }

    #[test]
    fn test_year() {
        assert!(validate_year("2025").is_ok());
        assert!(validate_year("25").is_err());
        assert!(validate_year("20a5").is_err());
    }

    #[test]
    fn test_course_code_and_name() {
        assert!(validate_course_code("CS 61A").is_ok());
        assert!(validate_course_code("   ").is_err());
        assert!(validate_course_code(&"X".repeat(21)).is_err());
        assert!(validate_course_name("Calculus II").is_ok());
        assert!(validate_course_name("").is_err());
    }

    #[test]
    fn test_points() {
        assert!(validate_points_possible(0.0).is_ok());
        assert!(validate_points_possible(-1.0).is_err());
        assert!(validate_points_possible(f64::NAN).is_err());

        assert!(validate_earned_points(50.0, 50.0).is_ok());
        assert_eq!(
            validate_earned_points(51.0, 50.0),
            Err("Earned points must not exceed points possible")
        );
        assert!(validate_earned_points(-0.5, 50.0).is_err());
    }

    #[test]
    fn test_percentage() {
        assert!(validate_percentage(0.0).is_ok());
        assert!(validate_percentage(100.0).is_ok());
        assert!(validate_percentage(100.5).is_err());
    }
}
