// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Formats a position in seconds as `M:SS`.
///
/// Minutes carry no leading zero and are not folded into hours. Anything that
/// is not a finite, non-negative number of seconds formats as `0:00`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// ```
pub(crate) fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total_seconds = seconds.floor() as u64;
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(5.0), "0:05");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn unknown_time_formats_as_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }
}
