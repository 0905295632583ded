/*
 * ==========================================================================
 * KOALCODE - Code that Clings!
 * ==========================================================================
 *
 * License:
 * This file is part of the KoalCode programming language project.
 *
 * KoalCode is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

/// Formats a number the way `print` shows it: six significant digits,
/// trailing zeros trimmed, scientific notation outside 1e-4 .. 1e6.
///
/// Examples:
///   14.0        → "14"
///   0.5         → "0.5"
///   1.0 / 3.0   → "0.333333"
///   2e20        → "2e+20"
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let exp = value.abs().log10().floor() as i32;

    if !(-4..6).contains(&exp) {
        let mantissa = value / 10f64.powi(exp);
        let mut m = format!("{:.5}", mantissa);
        trim_trailing_zeros(&mut m);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", m, sign, exp.abs())
    } else {
        let precision = (5 - exp).max(0) as usize;
        let mut s = format!("{:.*}", precision, value);
        trim_trailing_zeros(&mut s);
        s
    }
}

fn trim_trailing_zeros(s: &mut String) {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
}
