use chrono::{Datelike, Utc};
use rand::Rng;

/// 由自增 id 派生 RFQ 编号: RFQ + 5 位零填充 id
pub fn format_rfq_number(id: i64) -> String {
    format!("RFQ{:05}", id)
}

/// 由自增 id 和创建年份派生员工编号: AMS{yy}S{100+id}
/// 入库后派生一次，之后不变
pub fn format_staff_code(id: i64, year: i32) -> String {
    format!("AMS{:02}S{}", year % 100, 100 + id)
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// 生成 6 位数字 OTP
pub fn generate_otp() -> String {
    let mut rng = rand::thread_rng();
    format!("{:06}", rng.gen_range(100000..=999999))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rfq_number() {
        assert_eq!(format_rfq_number(1), "RFQ00001");
        assert_eq!(format_rfq_number(42), "RFQ00042");
        assert_eq!(format_rfq_number(99999), "RFQ99999");
        // 超过 5 位时不截断
        assert_eq!(format_rfq_number(123456), "RFQ123456");
    }

    #[test]
    fn test_rfq_number_shape() {
        let re = regex::Regex::new(r"^RFQ\d{5}$").unwrap();
        for id in [1, 7, 420, 4242, 99999] {
            assert!(re.is_match(&format_rfq_number(id)), "id={id}");
        }
    }

    #[test]
    fn test_format_staff_code() {
        assert_eq!(format_staff_code(1, 2026), "AMS26S101");
        assert_eq!(format_staff_code(23, 2025), "AMS25S123");
        // 同样输入始终得到同样编号
        assert_eq!(format_staff_code(5, 2026), format_staff_code(5, 2026));
    }

    #[test]
    fn test_generate_otp() {
        let otp = generate_otp();
        assert_eq!(otp.len(), 6);
        assert!(otp.chars().all(|c| c.is_ascii_digit()));
    }
}
