//! Attribution and terms of use required by the OS OpenSpace licence.

pub mod terms;

use chrono::Datelike;

use crate::sources::Attribution;

/// Viewports of this width (in logical pixels) or narrower get the short attribution.
pub const NARROW_VIEWPORT: f32 = 320.;

pub const ORDNANCE_SURVEY_URL: &str = "https://www.ordnancesurvey.co.uk/";

/// Copyright notice for the given viewport width. Narrow screens get a shorter form, so that it
/// does not cover the map.
pub fn attribution_text(viewport_width: f32, year: i32) -> String {
    if viewport_width > NARROW_VIEWPORT {
        format!("© Crown copyright and database rights {year} Ordnance Survey.")
    } else {
        format!("© Crown copyright {year}.")
    }
}

/// Year in the local time zone.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Attribution of the current year, linking to the terms of use.
pub fn attribution(viewport_width: f32) -> Attribution {
    Attribution {
        text: attribution_text(viewport_width, current_year()),
        url: ORDNANCE_SURVEY_URL,
        terms: true,
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
