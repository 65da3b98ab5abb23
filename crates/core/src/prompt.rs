//! Upstream prompt assembly.
//!
//! The prompt sent to the image-generation backend is the base description
//! followed by up to three optional clauses in a fixed order: camera angle,
//! lighting, color palette. The order and omission rules live here so they
//! can be tested in isolation from the HTTP layer.

/// Optional clause values for [`assemble_description`].
///
/// `None` means the clause is omitted entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescriptionClauses<'a> {
    pub camera_angle: Option<&'a str>,
    pub lighting: Option<&'a str>,
    pub color_palette: Option<&'a str>,
}

/// Assemble the upstream prompt from a base description and optional
/// clauses.
///
/// Clauses are folded left-to-right in fixed order:
///
/// ```text
/// {base} ({angle} angle), {lighting} lighting, {palette} palette
/// ```
///
/// each appended only when its value is present.
pub fn assemble_description(base: &str, clauses: &DescriptionClauses<'_>) -> String {
    let templates: [(Option<&str>, fn(&str) -> String); 3] = [
        (clauses.camera_angle, |v| format!(" ({v} angle)")),
        (clauses.lighting, |v| format!(", {v} lighting")),
        (clauses.color_palette, |v| format!(", {v} palette")),
    ];

    templates
        .into_iter()
        .fold(base.to_string(), |mut acc, (value, template)| {
            if let Some(v) = value {
                acc.push_str(&template(v));
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_clauses_returns_base_unchanged() {
        let out = assemble_description("a meadow", &DescriptionClauses::default());
        assert_eq!(out, "a meadow");
    }

    #[test]
    fn all_clauses_in_fixed_order() {
        let clauses = DescriptionClauses {
            camera_angle: Some("wide"),
            lighting: Some("dramatic"),
            color_palette: Some("vibrant"),
        };
        let out = assemble_description("a forest", &clauses);
        assert_eq!(out, "a forest (wide angle), dramatic lighting, vibrant palette");
    }

    #[test]
    fn missing_middle_clause_is_skipped() {
        let clauses = DescriptionClauses {
            camera_angle: Some("top"),
            lighting: None,
            color_palette: Some("noir"),
        };
        let out = assemble_description("a chessboard", &clauses);
        assert_eq!(out, "a chessboard (top angle), noir palette");
    }

    #[test]
    fn lighting_only() {
        let clauses = DescriptionClauses {
            lighting: Some("warm"),
            ..Default::default()
        };
        let out = assemble_description("a kitchen", &clauses);
        assert_eq!(out, "a kitchen, warm lighting");
    }

    #[test]
    fn empty_base_still_gets_clauses() {
        let clauses = DescriptionClauses {
            color_palette: Some("cinematic"),
            ..Default::default()
        };
        assert_eq!(assemble_description("", &clauses), ", cinematic palette");
    }
}
