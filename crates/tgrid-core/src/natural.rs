//! Natural-order comparator.
//!
//! A deterministic, case-insensitive, numeric-substring-aware ordering:
//! `"Item 2"` sorts before `"Item 10"`, and `"a"` ties with `"A"` up to a
//! final case tie-break that keeps the order total. The sort stage relies on
//! this instead of a host-locale collator so results are identical on every
//! platform.

use std::cmp::Ordering;

/// Compare two strings in natural order.
///
/// Digit runs compare by numeric value (longer stripped run wins, then
/// lexical), non-digit runs compare case-insensitively character by
/// character. Equal-up-to-case inputs fall back to a byte comparison so the
/// ordering is total.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => break,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let ord = compare_digit_runs(&mut ca, &mut cb);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let ord = fold(x).cmp(&fold(y));
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    ca.next();
                    cb.next();
                }
            }
        }
    }

    // Case-insensitively equal. Tie-break on raw bytes for a total order.
    a.cmp(b)
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Consume the digit runs at the head of both iterators and compare them
/// numerically. Leading zeros are ignored for magnitude; a difference in the
/// number of leading zeros is not significant here (the caller's final
/// tie-break handles it).
fn compare_digit_runs(
    a: &mut std::iter::Peekable<std::str::Chars<'_>>,
    b: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Ordering {
    let run_a = take_digits(a);
    let run_b = take_digits(b);

    let sig_a = run_a.trim_start_matches('0');
    let sig_b = run_b.trim_start_matches('0');

    sig_a
        .len()
        .cmp(&sig_b.len())
        .then_with(|| sig_a.cmp(sig_b))
}

fn take_digits(it: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = it.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        it.next();
    }
    run
}
