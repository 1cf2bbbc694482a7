//! Smush rule engine: decides whether a touching pair of non-space
//! characters collapses into a single character.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Characters that absorb an underscore (rule 2).
const UNDERSCORE_PARTNERS: &str = "|/\\[]{}()";

/// Matching bracket pairs for rule 4, both orders.
static OPPOSITE_PAIRS: Lazy<HashMap<char, char>> = Lazy::new(|| {
    HashMap::from([
        ('[', ']'),
        (']', '['),
        ('{', '}'),
        ('}', '{'),
        ('(', ')'),
        (')', '('),
    ])
});

/// Hierarchy class rank for rule 3. Members of a rank are grouped; a pair
/// from different ranks collapses to the higher-ranked character.
fn hierarchy_rank(c: char) -> Option<u8> {
    match c {
        '|' => Some(0),
        '/' | '\\' => Some(1),
        '[' | ']' => Some(2),
        '{' | '}' => Some(3),
        '(' | ')' => Some(4),
        '<' | '>' => Some(5),
        _ => None,
    }
}

/// Attempt to smush `a` (tail of the accumulated output) with `b` (head of
/// the incoming glyph). Both must be non-space; space handling is the
/// layout engine's job. Rules are tried in strict order, first match wins.
/// `None` means the pair cannot be smushed at this overlap.
pub fn smush(a: char, b: char, hardblank: char) -> Option<char> {
    // rule 1: equal character smushing (hardblanks are handled by rule 6)
    if a == b && a != hardblank {
        return Some(a);
    }

    // rule 2: underscore smushing
    if a == '_' && UNDERSCORE_PARTNERS.contains(b) {
        return Some(b);
    }
    if b == '_' && UNDERSCORE_PARTNERS.contains(a) {
        return Some(a);
    }

    // rule 3: hierarchy smushing
    if let (Some(rank_a), Some(rank_b)) = (hierarchy_rank(a), hierarchy_rank(b)) {
        if rank_a != rank_b {
            return Some(if rank_a > rank_b { a } else { b });
        }
    }

    // rule 4: opposite pair smushing
    if OPPOSITE_PAIRS.get(&a) == Some(&b) {
        return Some('|');
    }

    // rule 5: big X smushing
    match (a, b) {
        ('/', '\\') => return Some('|'),
        ('\\', '/') => return Some('Y'),
        ('>', '<') => return Some('X'),
        _ => {}
    }

    // rule 6: hardblank smushing
    if a == hardblank && b == hardblank {
        return Some(hardblank);
    }

    None
}
