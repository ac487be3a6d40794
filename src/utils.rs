/// Utility groups where a later class replaces an earlier one
const GROUPS: &[&str] = &[
    "px", "py", "pt", "pb", "pl", "pr", "p", "mx", "my", "mt", "mb", "ml", "mr", "m", "w", "h",
    "min-h", "max-w", "gap", "rounded", "opacity", "z", "leading", "tracking", "grid-cols",
    "duration",
];

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];

const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];

const BORDER_WIDTHS: &[&str] = &["0", "2", "4", "8"];
const BORDER_SIDES: &[&str] = &["x", "y", "t", "r", "b", "l", "s", "e"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

const BG_SIZES: &[&str] = &["auto", "cover", "contain"];
const BG_POSITIONS: &[&str] = &[
    "bottom", "center", "left", "left-bottom", "left-top", "right", "right-bottom", "right-top",
    "top",
];
const BG_ATTACHMENTS: &[&str] = &["fixed", "local", "scroll"];

/// Prefixes whose values mean different properties, e.g. `text-sm` is a size
/// and `text-white` a colour
fn split_group(utility: &str) -> Option<String> {
    if let Some(rest) = utility.strip_prefix("text-") {
        let group = if TEXT_SIZES.contains(&rest) {
            "text-size"
        } else {
            "text-color"
        };
        return Some(group.to_string());
    }

    if let Some(rest) = utility.strip_prefix("font-") {
        let group = if FONT_WEIGHTS.contains(&rest) {
            "font-weight"
        } else {
            "font-family"
        };
        return Some(group.to_string());
    }

    if utility == "shadow" {
        return Some("shadow-size".to_string());
    }
    if let Some(rest) = utility.strip_prefix("shadow-") {
        let group = if SHADOW_SIZES.contains(&rest) {
            "shadow-size"
        } else {
            "shadow-color"
        };
        return Some(group.to_string());
    }

    if utility == "border" {
        return Some("border-width".to_string());
    }
    if let Some(rest) = utility.strip_prefix("border-") {
        let group = if BORDER_WIDTHS.contains(&rest) {
            "border-width".to_string()
        } else if BORDER_STYLES.contains(&rest) {
            "border-style".to_string()
        } else if let Some(side) = BORDER_SIDES.iter().find(|side| {
            rest == **side
                || rest
                    .strip_prefix(**side)
                    .and_then(|w| w.strip_prefix('-'))
                    .is_some_and(|w| BORDER_WIDTHS.contains(&w))
        }) {
            format!("border-{side}-width")
        } else {
            "border-color".to_string()
        };
        return Some(group);
    }

    if let Some(rest) = utility.strip_prefix("bg-") {
        let group = if BG_SIZES.contains(&rest) {
            "bg-size"
        } else if BG_POSITIONS.contains(&rest) {
            "bg-position"
        } else if BG_ATTACHMENTS.contains(&rest) {
            "bg-attachment"
        } else if rest.starts_with("repeat") || rest.starts_with("no-repeat") {
            "bg-repeat"
        } else if rest == "none" || rest.starts_with("gradient-") {
            "bg-image"
        } else {
            "bg-color"
        };
        return Some(group.to_string());
    }

    None
}

/// Merges class fragments into one `class` attribute value.
///
/// Empty fragments and exact duplicates are dropped; for conflicting
/// utilities (`px-2` then `px-4`) the last one wins and takes its position.
pub fn cn(fragments: &[&str]) -> String {
    let mut kept: Vec<(Option<String>, &str)> = Vec::new();

    for class in fragments.iter().flat_map(|f| f.split_whitespace()) {
        let key = conflict_key(class);
        kept.retain(|(k, c)| *c != class && (key.is_none() || *k != key));
        kept.push((key, class));
    }

    kept.iter()
        .map(|(_, class)| *class)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `hover:px-4` -> `hover:px`; `None` for classes outside the known groups
fn conflict_key(class: &str) -> Option<String> {
    let (variant, utility) = match class.rfind(':') {
        Some(i) => (&class[..=i], &class[i + 1..]),
        None => ("", class),
    };

    if let Some(group) = split_group(utility) {
        return Some(format!("{variant}{group}"));
    }

    GROUPS
        .iter()
        .find(|group| {
            utility == **group
                || utility
                    .strip_prefix(**group)
                    .is_some_and(|rest| rest.starts_with('-'))
        })
        .map(|group| format!("{variant}{group}"))
}

/// Suspends the current task; tokio on the server, browser timers on the web
pub async fn sleep(duration: std::time::Duration) {
    #[cfg(feature = "server")]
    tokio::time::sleep(duration).await;
    #[cfg(not(feature = "server"))]
    gloo_timers::future::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_skips_empty_and_duplicates() {
        assert_eq!(cn(&["tile", "", "tile", " active "]), "tile active");
    }

    #[test]
    fn test_cn_last_conflicting_class_wins() {
        assert_eq!(cn(&["px-2 py-1", "px-4"]), "py-1 px-4");
        assert_eq!(cn(&["bg-red-500", "bg-black"]), "bg-black");
        assert_eq!(cn(&["p-2", "px-4"]), "p-2 px-4");
    }

    #[test]
    fn test_cn_text_size_and_color_do_not_conflict() {
        assert_eq!(cn(&["text-sm text-white", "text-lg"]), "text-white text-lg");
    }

    #[test]
    fn test_cn_border_width_and_color_do_not_conflict() {
        assert_eq!(cn(&["border", "border-gray-200"]), "border border-gray-200");
        assert_eq!(
            cn(&["border-2 border-red-500", "border-4"]),
            "border-red-500 border-4"
        );
        assert_eq!(cn(&["border border-dashed", "border-0"]), "border-dashed border-0");
        assert_eq!(cn(&["border-b border", "border-t-2"]), "border-b border border-t-2");
    }

    #[test]
    fn test_cn_font_family_and_weight_do_not_conflict() {
        assert_eq!(cn(&["font-sans", "font-bold"]), "font-sans font-bold");
        assert_eq!(cn(&["font-sans font-bold", "font-medium"]), "font-sans font-medium");
        assert_eq!(cn(&["font-sans", "font-mono"]), "font-mono");
    }

    #[test]
    fn test_cn_shadow_size_and_color_do_not_conflict() {
        assert_eq!(cn(&["shadow", "shadow-black"]), "shadow shadow-black");
        assert_eq!(cn(&["shadow shadow-black", "shadow-lg"]), "shadow-black shadow-lg");
    }

    #[test]
    fn test_cn_background_parts_do_not_conflict() {
        assert_eq!(
            cn(&["bg-white bg-cover bg-center", "bg-black"]),
            "bg-cover bg-center bg-black"
        );
        assert_eq!(cn(&["bg-cover", "bg-contain"]), "bg-contain");
    }

    #[test]
    fn test_cn_variants_are_separate_groups() {
        assert_eq!(
            cn(&["bg-white hover:bg-gray-100", "hover:bg-black"]),
            "bg-white hover:bg-black"
        );
    }

    #[test]
    fn test_cn_unknown_classes_are_kept() {
        assert_eq!(cn(&["hero", "hero-title"]), "hero hero-title");
    }
}
