//! Slug Derivation
//!
//! Most articles carry no explicit slug field, so URL slugs are derived from
//! titles. The rule here must match the one used wherever article links are
//! generated: lowercase, runs of non-alphanumerics collapse to one hyphen,
//! no leading or trailing hyphen.

/// Derive a URL slug from a title.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Fall Festival"), "fall-festival");
    }

    #[test]
    fn test_punctuation_collapses() {
        assert_eq!(slugify("Fall Festival Success!"), "fall-festival-success");
        assert_eq!(slugify("Back -- to School?!"), "back-to-school");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(slugify("  Bake Sale  "), "bake-sale");
        assert_eq!(slugify("!!Big News!!"), "big-news");
    }

    #[test]
    fn test_case_and_digits() {
        assert_eq!(slugify("PTO Meeting 2026"), "pto-meeting-2026");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!?!"), "");
    }
}
