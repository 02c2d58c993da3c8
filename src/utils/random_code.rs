use rand::Rng;

use crate::models::courses::entities::Season;

// 去掉容易混淆的 0/O/1/I
const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// 生成指定长度的随机码
pub fn generate_random_code(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// 生成选课码，形如 `CS61A-SP25-7X9K`
pub fn generate_enrollment_code(course_code: &str, season: Season, year: &str) -> String {
    let prefix: String = course_code
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let short_year = year.get(year.len().saturating_sub(2)..).unwrap_or(year);
    format!(
        "{prefix}-{}{short_year}-{}",
        season.short_code(),
        generate_random_code(4)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_code_charset() {
        let code = generate_random_code(32);
        assert_eq!(code.len(), 32);
        assert!(code.bytes().all(|b| CHARSET.contains(&b)));
    }

    #[test]
    fn test_enrollment_code_shape() {
        let code = generate_enrollment_code("CS 150", Season::Spring, "2025");
        assert!(code.starts_with("CS150-SP25-"));
        assert_eq!(code.len(), "CS150-SP25-".len() + 4);

        let code = generate_enrollment_code("PSYC 101", Season::Fall, "2026");
        assert!(code.starts_with("PSYC101-FA26-"));
    }
}
