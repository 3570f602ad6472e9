//! Tashkeel Stripper
//!
//! Removes Arabic diacritical marks while leaving every other code point
//! in place and in order.

use std::borrow::Cow;

/// Arabic diacritics removed by [`strip_tashkeel`]:
/// - U+0617..=U+061A: small high marks (sallallahou, alayhe, rahmatullah, small fatha)
/// - U+064B..=U+0652: tanween, harakat, shadda, sukun
#[inline]
pub fn is_tashkeel(c: char) -> bool {
    matches!(c, '\u{0617}'..='\u{061A}' | '\u{064B}'..='\u{0652}')
}

/// Strip tashkeel from `text`.
///
/// Borrows the input when there is nothing to remove.
pub fn strip_tashkeel(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(is_tashkeel) else {
        return Cow::Borrowed(text);
    };

    let mut result = String::with_capacity(text.len());
    result.push_str(&text[..first]);
    result.extend(text[first..].chars().filter(|c| !is_tashkeel(*c)));
    Cow::Owned(result)
}

/// Number of marks [`strip_tashkeel`] would remove.
pub fn count_tashkeel(text: &str) -> usize {
    text.chars().filter(|c| is_tashkeel(*c)).count()
}
