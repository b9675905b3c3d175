//! css2 query formatting (made by FontLab https://www.fontlab.com/)

use std::cmp::Ordering;

use crate::catalog::{FontAxis, FontRecord};

/// Stylesheet endpoint of the Google Fonts delivery service.
pub const CSS2_ENDPOINT: &str = "https://fonts.googleapis.com/css2";

/// Render a catalog record as a ready-to-use css2 stylesheet URL.
///
/// Deterministic: the same record always formats to byte-identical output.
/// A record with axes is formatted as a variable font regardless of its
/// `variants` content; otherwise the discrete variant tokens drive the
/// query. The record itself is never mutated.
pub fn stylesheet_url(record: &FontRecord) -> String {
    let family = record.family.replace(' ', "+");
    let selector = if record.axes.is_empty() {
        variant_selector(&record.variants)
    } else {
        axis_selector(&record.axes, &record.variants)
    };

    format!("{CSS2_ENDPOINT}?family={family}{selector}&display=swap")
}

/// Axis ordering required by the delivery service: lowercase-initial tags
/// before everything else, byte order within a class.
fn axis_order(a: &FontAxis, b: &FontAxis) -> Ordering {
    let a_lower = a.tag.starts_with(|c: char| c.is_ascii_lowercase());
    let b_lower = b.tag.starts_with(|c: char| c.is_ascii_lowercase());

    b_lower.cmp(&a_lower).then_with(|| a.tag.cmp(&b.tag))
}

fn axis_selector(axes: &[FontAxis], variants: &[String]) -> String {
    let mut sorted: Vec<&FontAxis> = axes.iter().collect();
    sorted.sort_by(|a, b| axis_order(a, b));

    let tags: Vec<&str> = sorted.iter().map(|axis| axis.tag.as_str()).collect();
    let ranges: Vec<String> = sorted
        .iter()
        .map(|axis| format!("{}..{}", axis.start, axis.end))
        .collect();

    let tags = tags.join(",");
    let ranges = ranges.join(",");

    // Italic instances share the same axis ranges as the upright ones.
    if variants.iter().any(|v| v == "italic") {
        format!(":ital,{tags}@0,{ranges};1,{ranges}")
    } else {
        format!(":{tags}@{ranges}")
    }
}

fn variant_selector(variants: &[String]) -> String {
    if variants.is_empty() {
        return String::new();
    }

    let has_italic = variants
        .iter()
        .any(|v| v.to_ascii_lowercase().contains("italic"));

    // Weight tokens with the italic marker stripped, deduplicated in
    // first-seen order. "regular" collapses to the empty string and is
    // dropped; anything else is used verbatim.
    let mut weights: Vec<String> = Vec::new();
    for variant in variants {
        let weight = variant.replace("italic", "").trim().to_string();
        if weight.is_empty() || weight == "regular" || weights.contains(&weight) {
            continue;
        }
        weights.push(weight);
    }

    if !weights.is_empty() {
        let upright: Vec<String> = weights.iter().map(|w| format!("0,{w}")).collect();
        let mut selector = format!(":ital,wght@{}", upright.join(";"));

        if has_italic {
            let italic: Vec<String> = weights.iter().map(|w| format!("1,{w}")).collect();
            selector.push(';');
            selector.push_str(&italic.join(";"));
        }

        selector
    } else if has_italic {
        ":ital@0;1".to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(tag: &str, start: f64, end: f64) -> FontAxis {
        FontAxis {
            tag: tag.to_string(),
            start,
            end,
        }
    }

    fn static_record(family: &str, variants: &[&str]) -> FontRecord {
        FontRecord {
            family: family.to_string(),
            variants: variants.iter().map(|v| v.to_string()).collect(),
            axes: Vec::new(),
        }
    }

    #[test]
    fn discrete_weights_pair_with_italics() {
        let record = static_record("Roboto", &["regular", "700", "italic", "700italic"]);

        assert_eq!(
            stylesheet_url(&record),
            "https://fonts.googleapis.com/css2?family=Roboto:ital,wght@0,700;1,700&display=swap"
        );
    }

    #[test]
    fn empty_variants_emit_no_selector() {
        let record = static_record("Open Sans", &[]);

        assert_eq!(
            stylesheet_url(&record),
            "https://fonts.googleapis.com/css2?family=Open+Sans&display=swap"
        );
    }

    #[test]
    fn mixed_case_axes_sort_lowercase_first() {
        let record = FontRecord {
            family: "Recursive".to_string(),
            variants: vec!["regular".to_string()],
            axes: vec![axis("wght", 300.0, 1000.0), axis("CASL", 0.0, 1.0)],
        };

        assert_eq!(
            stylesheet_url(&record),
            "https://fonts.googleapis.com/css2?family=Recursive:wght,CASL@300..1000,0..1&display=swap"
        );
    }

    #[test]
    fn axes_sort_within_case_class_by_byte_order() {
        let mut axes = vec![axis("wght", 0.0, 1.0), axis("ital", 0.0, 1.0)];
        axes.sort_by(|a, b| axis_order(a, b));
        let tags: Vec<&str> = axes.iter().map(|a| a.tag.as_str()).collect();
        assert_eq!(tags, ["ital", "wght"]);

        let mut axes = vec![axis("wght", 0.0, 1.0), axis("WDTH", 0.0, 1.0)];
        axes.sort_by(|a, b| axis_order(a, b));
        let tags: Vec<&str> = axes.iter().map(|a| a.tag.as_str()).collect();
        assert_eq!(tags, ["WDTH", "wght"]);
    }

    #[test]
    fn italic_token_doubles_axis_ranges() {
        let record = FontRecord {
            family: "Lora".to_string(),
            variants: vec!["regular".to_string(), "italic".to_string()],
            axes: vec![axis("wght", 400.0, 700.0)],
        };

        assert_eq!(
            stylesheet_url(&record),
            "https://fonts.googleapis.com/css2?family=Lora:ital,wght@0,400..700;1,400..700&display=swap"
        );
    }

    #[test]
    fn axes_take_precedence_over_weight_variants() {
        let record = FontRecord {
            family: "Oswald".to_string(),
            variants: vec!["200".to_string(), "regular".to_string(), "700".to_string()],
            axes: vec![axis("wght", 200.0, 700.0)],
        };

        assert_eq!(
            stylesheet_url(&record),
            "https://fonts.googleapis.com/css2?family=Oswald:wght@200..700&display=swap"
        );
    }

    #[test]
    fn fractional_and_negative_ranges_render_verbatim() {
        let record = FontRecord {
            family: "Noto Sans".to_string(),
            variants: Vec::new(),
            axes: vec![axis("wdth", 62.5, 100.0), axis("slnt", -10.0, 0.0)],
        };

        assert_eq!(
            stylesheet_url(&record),
            "https://fonts.googleapis.com/css2?family=Noto+Sans:slnt,wdth@-10..0,62.5..100&display=swap"
        );
    }

    #[test]
    fn italic_only_family_selects_both_slants() {
        let record = static_record("Molle", &["italic"]);

        assert_eq!(
            stylesheet_url(&record),
            "https://fonts.googleapis.com/css2?family=Molle:ital@0;1&display=swap"
        );
    }

    #[test]
    fn upright_weights_skip_the_italic_set() {
        let record = static_record("Fira Sans", &["500", "700"]);

        assert_eq!(
            stylesheet_url(&record),
            "https://fonts.googleapis.com/css2?family=Fira+Sans:ital,wght@0,500;0,700&display=swap"
        );
    }

    #[test]
    fn duplicate_weights_collapse_in_first_seen_order() {
        let record = static_record("Karla", &["700italic", "700", "300", "300italic"]);

        assert_eq!(
            stylesheet_url(&record),
            "https://fonts.googleapis.com/css2?family=Karla:ital,wght@0,700;0,300;1,700;1,300&display=swap"
        );
    }

    #[test]
    fn formatting_is_idempotent() {
        let record = FontRecord {
            family: "Recursive".to_string(),
            variants: vec!["regular".to_string()],
            axes: vec![
                axis("MONO", 0.0, 1.0),
                axis("wght", 300.0, 1000.0),
                axis("CASL", 0.0, 1.0),
                axis("slnt", -15.0, 0.0),
                axis("CRSV", 0.0, 1.0),
            ],
        };

        let first = stylesheet_url(&record);
        let second = stylesheet_url(&record);
        assert_eq!(first, second);
        assert_eq!(
            first,
            "https://fonts.googleapis.com/css2?family=Recursive:slnt,wght,CASL,CRSV,MONO@-15..0,300..1000,0..1,0..1,0..1&display=swap"
        );
    }
}
