/// Decimal rendering for support ratios.
///
/// Defaults reproduce the legacy output: no forced fraction digits, at most
/// five, trailing zeros trimmed and the integer part grouped by thousands.
/// The separators are fixed to `.` and `,`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SupportFormat {
    pub min_fraction_digits: usize,
    pub max_fraction_digits: usize,
    pub grouping: bool,
}

impl Default for SupportFormat {
    fn default() -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 5,
            grouping: true,
        }
    }
}

impl SupportFormat {
    pub fn format(&self, value: f64) -> String {
        let max = self.max_fraction_digits.max(self.min_fraction_digits);
        // std rounds on the exact binary value, ties to even
        let fixed = format!("{:.*}", max, value.abs());

        let (int_part, frac_part) = match fixed.find('.') {
            Some(dot) => (&fixed[..dot], &fixed[dot + 1..]),
            None => (fixed.as_str(), ""),
        };

        let mut frac = frac_part.trim_end_matches('0');
        if frac.len() < self.min_fraction_digits {
            frac = &frac_part[..self.min_fraction_digits];
        }

        let mut result = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            result.push('-');
        }
        if self.grouping {
            push_grouped(&mut result, int_part);
        } else {
            result.push_str(int_part);
        }
        if !frac.is_empty() {
            result.push('.');
            result.push_str(frac);
        }
        result
    }
}

fn push_grouped(out: &mut String, digits: &str) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
}
