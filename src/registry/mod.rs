// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static locale metadata.
//!
//! Flag and display-name lookups for the locale codes the automation
//! knows about, with graceful fallbacks for everything else: unknown
//! codes get a generic globe flag and the raw code as the display name,
//! so a run never fails on metadata alone.
//!
//! Codes are ISO 639-1 two-letter identifiers. `is_known_code` covers
//! the full ISO 639-1 set and is used only for a soft warning on
//! caller-supplied codes.

use crate::types::LocaleRequest;

/// Flag emoji for a locale code, falling back to a generic globe.
pub fn flag_for(code: &str) -> &'static str {
    match code {
        "en" => "🇺🇸",
        "zh" => "🇨🇳",
        "es" => "🇪🇸",
        "ar" => "🇸🇦",
        "pt" => "🇧🇷",
        "id" => "🇮🇩",
        "fr" => "🇫🇷",
        "ja" => "🇯🇵",
        "ru" => "🇷🇺",
        "de" => "🇩🇪",
        "it" => "🇮🇹",
        "hi" => "🇮🇳",
        _ => "🌐",
    }
}

/// English display name for a locale code.
///
/// Returns `None` for codes outside the lookup table; callers fall back
/// to the raw code.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "zh" => Some("Chinese"),
        "es" => Some("Spanish"),
        "ar" => Some("Arabic"),
        "pt" => Some("Portuguese"),
        "id" => Some("Indonesian"),
        "fr" => Some("French"),
        "ja" => Some("Japanese"),
        "ru" => Some("Russian"),
        "de" => Some("German"),
        "it" => Some("Italian"),
        "hi" => Some("Hindi"),
        _ => None,
    }
}

/// Build a request for a caller-supplied code, applying the fallbacks.
pub fn request_for(code: &str) -> LocaleRequest {
    let name = language_name(code).unwrap_or(code);
    LocaleRequest::new(code, flag_for(code), name)
}

/// The 11 most used languages on the Internet after English, in the
/// order they are added by `--add-most-used`.
pub fn most_used() -> Vec<LocaleRequest> {
    [
        ("zh", "Chinese"),
        ("es", "Spanish"),
        ("ar", "Arabic"),
        ("pt", "Portuguese"),
        ("id", "Indonesian"),
        ("fr", "French"),
        ("ja", "Japanese"),
        ("ru", "Russian"),
        ("de", "German"),
        ("it", "Italian"),
        ("hi", "Hindi"),
    ]
    .iter()
    .map(|(code, name)| LocaleRequest::new(code, flag_for(code), name))
    .collect()
}

/// Whether a string is a known ISO 639-1 two-letter language code.
pub fn is_known_code(code: &str) -> bool {
    matches!(
        code,
        "aa" | "ab" | "af" | "ak" | "am" | "an" | "ar" | "as" | "av" | "ay" | "az"
            | "ba" | "be" | "bg" | "bh" | "bi" | "bm" | "bn" | "bo" | "br" | "bs"
            | "ca" | "ce" | "ch" | "co" | "cr" | "cs" | "cu" | "cv" | "cy"
            | "da" | "de" | "dv" | "dz"
            | "ee" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "ff" | "fi" | "fj" | "fo" | "fr" | "fy"
            | "ga" | "gd" | "gl" | "gn" | "gu" | "gv"
            | "ha" | "he" | "hi" | "ho" | "hr" | "ht" | "hu" | "hy" | "hz"
            | "ia" | "id" | "ie" | "ig" | "ii" | "ik" | "io" | "is" | "it" | "iu"
            | "ja" | "jv"
            | "ka" | "kg" | "ki" | "kj" | "kk" | "kl" | "km" | "kn" | "ko" | "kr" | "ks" | "ku" | "kv" | "kw" | "ky"
            | "la" | "lb" | "lg" | "li" | "ln" | "lo" | "lt" | "lu" | "lv"
            | "mg" | "mh" | "mi" | "mk" | "ml" | "mn" | "mr" | "ms" | "mt" | "my"
            | "na" | "nb" | "nd" | "ne" | "ng" | "nl" | "nn" | "no" | "nr" | "nv" | "ny"
            | "oc" | "oj" | "om" | "or" | "os"
            | "pa" | "pi" | "pl" | "ps" | "pt"
            | "qu"
            | "rm" | "rn" | "ro" | "ru" | "rw"
            | "sa" | "sc" | "sd" | "se" | "sg" | "si" | "sk" | "sl" | "sm" | "sn" | "so" | "sq" | "sr" | "ss" | "st" | "su" | "sv" | "sw"
            | "ta" | "te" | "tg" | "th" | "ti" | "tk" | "tl" | "tn" | "to" | "tr" | "ts" | "tt" | "tw" | "ty"
            | "ug" | "uk" | "ur" | "uz"
            | "ve" | "vi" | "vo"
            | "wa" | "wo"
            | "xh"
            | "yi" | "yo"
            | "za" | "zh" | "zu"
    )
}
