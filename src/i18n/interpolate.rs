// SPDX-License-Identifier: MPL-2.0
//! `{name}` placeholder substitution.
//!
//! Substitution is a single left-to-right pass: replacement values are copied
//! verbatim and never scanned for further placeholders. A placeholder with no
//! matching parameter, or a `{` without a closing `}`, is left as written.

/// Replaces every `{name}` in `template` with the value paired with `name`.
///
/// When a name appears more than once in `params`, the first pair wins.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() || !template.contains('{') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after_open[..close];
        // A nested `{` means this brace was not the start of a placeholder.
        if let Some(nested) = name.rfind('{') {
            out.push_str(&rest[open..open + 1 + nested]);
            rest = &after_open[nested..];
            continue;
        }

        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after_open[close + 1..];
    }

    out.push_str(rest);
    out
}
