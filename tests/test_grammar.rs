use platewatch::GrammarMatcher;

#[test]
fn wrong_length_never_matches() {
    let matcher = GrammarMatcher::new();
    for text in ["", "A", "ABC123", "ABC1234D", "AB1234DE"] {
        assert_eq!(matcher.find_match(text), None, "{:?} should not match", text);
    }
}

#[test]
fn type_a_match() {
    let matcher = GrammarMatcher::new();
    let m = matcher.find_match("ABC123D").expect("Type A text should match");
    assert_eq!(m.formatted, "ABC-123-D");
    assert_eq!(m.category, "Automóvil");
    assert_eq!(m.prefix, "AB");
}

#[test]
fn type_b_match() {
    let matcher = GrammarMatcher::new();
    let m = matcher.find_match("AB1234D").expect("Type B text should match");
    assert_eq!(m.formatted, "AB-1234-D");
    assert_eq!(m.category, "Camioneta");
    assert_eq!(m.prefix, "AB");
}

#[test]
fn type_b_allows_zero_digits() {
    let matcher = GrammarMatcher::new();
    let m = matcher.find_match("XY0000Z").expect("all-zero digits are valid Type B");
    assert_eq!(m.formatted, "XY-0000-Z");
    assert_eq!(m.category, "Camioneta");
}

#[test]
fn zero_digit_breaks_type_a_and_falls_through() {
    // 0 is outside Type A's 1-9 digit class; the text then gets tested
    // against Type B, whose layout (letter at position 2) also rejects it.
    let matcher = GrammarMatcher::new();
    assert_eq!(matcher.find_match("ABC120D"), None);
}

#[test]
fn lowercase_and_symbols_rejected() {
    let matcher = GrammarMatcher::new();
    assert_eq!(matcher.find_match("abc123d"), None);
    assert_eq!(matcher.find_match("ABC-123"), None);
}

#[test]
fn evaluation_order_is_type_a_first() {
    // Both grammars require length 7 and differ in digit layout, so no
    // single text satisfies both; order still shows in the table.
    let matcher = GrammarMatcher::new();
    let names: Vec<&str> = matcher.grammars().iter().map(|g| g.name).collect();
    assert_eq!(names, vec!["Type A", "Type B"]);
}
