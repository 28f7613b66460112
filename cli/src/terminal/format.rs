//! Plain-text rendering of equation systems.
//!
//! Produces lines like `2x + 3y = 11` or `-x - 4y = 2`, folding signs into
//! the operators and dropping unit coefficients and zero terms the way a
//! textbook would.

use equiz_common::algebra::system::EquationSystem;

pub fn system_lines(system: &EquationSystem) -> [String; 2] {
    [
        format_equation(system.eq1_coeffs, system.eq1_const),
        format_equation(system.eq2_coeffs, system.eq2_const),
    ]
}

pub fn solution_line(system: &EquationSystem) -> String {
    format!("x = {}, y = {}", system.solution_x, system.solution_y)
}

pub fn format_equation(coeffs: (i32, i32), constant: i32) -> String {
    let (a, b) = coeffs;
    let mut lhs = String::new();

    if a != 0 {
        lhs.push_str(&leading_term(a, 'x'));
    }
    if b != 0 {
        if lhs.is_empty() {
            lhs.push_str(&leading_term(b, 'y'));
        } else {
            lhs.push_str(if b < 0 { " - " } else { " + " });
            lhs.push_str(&unsigned_term(b, 'y'));
        }
    }
    // Generated systems never have an all-zero row.
    if lhs.is_empty() {
        lhs.push('0');
    }

    format!("{lhs} = {constant}")
}

fn leading_term(coeff: i32, var: char) -> String {
    match coeff {
        1 => var.to_string(),
        -1 => format!("-{var}"),
        _ => format!("{coeff}{var}"),
    }
}

fn unsigned_term(coeff: i32, var: char) -> String {
    match coeff.abs() {
        1 => var.to_string(),
        magnitude => format!("{magnitude}{var}"),
    }
}
