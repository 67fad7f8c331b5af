/// Integer with `.` thousands separators, as the de_DE locale prints it.
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    out
}

pub fn format_two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(3292679), "3.292.679");
    }

    #[test]
    fn test_format_two_decimals() {
        assert_eq!(format_two_decimals(15.5), "15.50");
        assert_eq!(format_two_decimals(-3.14159), "-3.14");
    }
}
