//! # Published Number Tests
//!
//! Checks `CasNumber` against real registry numbers: the check-digit table
//! for well-known substances and the numeric ordering of the 18 octane
//! isomers.

use casrn_core::{CasErrorKind, CasNumber};

fn octane_isomers() -> Vec<CasNumber> {
    [
        111659_u64, 592278, 589811, 589537, 590738, 584941, 589435, 592132, 563166, 583482,
        619998, 564023, 540841, 560214, 565753, 609267, 1067089, 594821,
    ]
    .into_iter()
    .map(|n| CasNumber::new(n).unwrap_or_else(|e| panic!("{n} should be valid: {e}")))
    .collect()
}

// ---------------------------------------------------------------------------
// Octane isomers
// ---------------------------------------------------------------------------

#[test]
fn test_octane_isomers_sort_numerically() {
    let mut octanes = octane_isomers();
    octanes.sort();

    let sorted: Vec<&str> = octanes.iter().map(CasNumber::as_str).collect();
    assert_eq!(
        sorted,
        vec![
            "111-65-9", "540-84-1", "560-21-4", "563-16-6", "564-02-3", "565-75-3",
            "583-48-2", "584-94-1", "589-43-5", "589-53-7", "589-81-1", "590-73-8",
            "592-13-2", "592-27-8", "594-82-1", "609-26-7", "619-99-8", "1067-08-9",
        ]
    );
}

#[test]
fn test_octane_isomers_sort_unstable_agrees() {
    let mut stable = octane_isomers();
    let mut unstable = octane_isomers();
    stable.sort();
    unstable.sort_unstable();
    assert_eq!(stable, unstable);
}

#[test]
fn test_octane_isomers_binary_search() {
    let mut octanes = octane_isomers();
    octanes.sort();
    let target: CasNumber = "589-53-7".parse().unwrap();
    assert_eq!(octanes.binary_search(&target), Ok(9));
}

#[test]
fn test_octane_isomers_right_aligned_layout() {
    let mut octanes = octane_isomers();
    octanes.sort();
    let first_row: Vec<String> = octanes[..6].iter().map(|c| format!("{c:>9}")).collect();
    assert_eq!(
        first_row.join(", "),
        " 111-65-9,  540-84-1,  560-21-4,  563-16-6,  564-02-3,  565-75-3"
    );
}

// ---------------------------------------------------------------------------
// Known substances
// ---------------------------------------------------------------------------

#[test]
fn test_known_substances() {
    let table = [
        ("58-08-2", 58082_u64, 2_u8),      // caffeine
        ("7732-18-5", 7732185, 5),         // water
        ("64-17-5", 64175, 5),             // ethanol
        ("50-00-0", 50000, 0),             // formaldehyde
        ("79-33-4", 79334, 4),             // L-lactic acid
        ("10326-41-7", 10326417, 7),       // D-lactic acid
        ("7440-44-0", 7440440, 0),         // carbon
        ("1067-08-9", 1067089, 9),         // 3-ethyl-3-methylpentane
    ];
    for (text, value, check) in table {
        let from_str: CasNumber = text.parse().unwrap();
        let from_int = CasNumber::new(value).unwrap();
        assert_eq!(from_str, from_int, "{text}");
        assert_eq!(from_int.as_str(), text);
        assert_eq!(from_str.value(), value);
        assert_eq!(from_str.check_digit(), check);
    }
}

#[test]
fn test_error_kinds_are_distinct() {
    let cases = [
        (CasNumber::parse("64 - 17 - 5"), CasErrorKind::Format),
        (CasNumber::new(100), CasErrorKind::Range),
        (CasNumber::parse("64-17-6"), CasErrorKind::Checksum),
        (
            CasNumber::from_json(&serde_json::json!(6417.5)),
            CasErrorKind::UnsupportedType,
        ),
    ];
    for (result, expected) in cases {
        assert_eq!(result.unwrap_err().kind(), expected);
    }
}
