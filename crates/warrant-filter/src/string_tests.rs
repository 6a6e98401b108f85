use super::*;

#[test]
fn empty_and_not_empty_are_complements() {
    assert_eq!(EmptyString.filter(""), FilterState::Kept);
    assert_eq!(EmptyString.filter("x"), FilterState::Discarded);
    assert_eq!(NotEmptyString.filter(""), FilterState::Discarded);
    assert_eq!(NotEmptyString.filter("x"), FilterState::Kept);
}

#[test]
fn excludes_spaces_rejects_any_whitespace() {
    assert_eq!(ExcludesSpaces.filter("no_spaces"), FilterState::Kept);
    assert_eq!(ExcludesSpaces.filter("has space"), FilterState::Discarded);
    assert_eq!(ExcludesSpaces.filter("tab\there"), FilterState::Discarded);
    // Vacuously kept: nothing to exclude.
    assert_eq!(ExcludesSpaces.filter(""), FilterState::Kept);
}

#[test]
fn contains_non_spaces_needs_at_least_one() {
    assert_eq!(ContainsNonSpaces.filter("  a "), FilterState::Kept);
    assert_eq!(ContainsNonSpaces.filter("    "), FilterState::Discarded);
    assert_eq!(ContainsNonSpaces.filter(""), FilterState::Discarded);
}

#[test]
fn character_class_filters() {
    assert_eq!(ContainsOnlyNumerics.filter("0123"), FilterState::Kept);
    assert_eq!(ContainsOnlyNumerics.filter("12a"), FilterState::Discarded);
    assert_eq!(ContainsOnlyAlpha.filter("abcXYZ"), FilterState::Kept);
    assert_eq!(ContainsOnlyAlpha.filter("abc1"), FilterState::Discarded);
    assert_eq!(ContainsOnlyAlphaNumerics.filter("abc123"), FilterState::Kept);
    assert_eq!(
        ContainsOnlyAlphaNumerics.filter("abc-123"),
        FilterState::Discarded
    );
    assert_eq!(ContainsOnlyPrintable.filter("hello world"), FilterState::Kept);
    assert_eq!(
        ContainsOnlyPrintable.filter("bell\u{7}"),
        FilterState::Discarded
    );
}

#[test]
fn contains_only_families_vacuous_on_empty() {
    assert_eq!(ContainsOnlyNumerics.filter(""), FilterState::Kept);
    assert_eq!(ContainsOnlyAlpha.filter(""), FilterState::Kept);
    assert_eq!(ContainsOnlyAlphaNumerics.filter(""), FilterState::Kept);
}

#[test]
fn string_id_shape() {
    assert_eq!(StringId.filter("valid_id1"), FilterState::Kept);
    assert_eq!(StringId.filter("_leading"), FilterState::Kept);
    assert_eq!(StringId.filter("1leading"), FilterState::Discarded);
    assert_eq!(StringId.filter("has space"), FilterState::Discarded);
    assert_eq!(StringId.filter(""), FilterState::Discarded);
}

#[test]
fn string_length_counts_chars_not_bytes() {
    let three = StringLength::exactly(3);
    assert_eq!(three.filter("abc"), FilterState::Kept);
    // Three chars, more than three bytes.
    assert_eq!(three.filter("héé"), FilterState::Kept);
    assert_eq!(three.filter("ab"), FilterState::Discarded);

    let ranged = StringLength::new(1, 4);
    assert_eq!(ranged.filter(""), FilterState::Discarded);
    assert_eq!(ranged.filter("abcd"), FilterState::Kept);
    assert_eq!(ranged.filter("abcde"), FilterState::Discarded);
}

#[test]
fn pattern_matches_regex() {
    let hex = Pattern::new(Regex::new("^[0-9a-f]+$").unwrap());
    assert_eq!(hex.filter("deadbeef"), FilterState::Kept);
    assert_eq!(hex.filter("not hex"), FilterState::Discarded);
}
