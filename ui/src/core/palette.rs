//! Ordinal category → fill color assignment.

/// The ten fill colors, assigned to categories in first-seen order.
pub const COLOR_LIST: [&str; 10] = [
    "#F77F00", "#D62828", "#FCBF49", "#EAE2B7", "#003049", "#588157", "#38A3A5", "#6D597A",
    "#F07167", "#DDA15E",
];

/// Fill for an eleventh-or-later (or unknown) category.
pub const FALLBACK_COLOR: &str = "#8B8C89";

/// Category names paired with their assigned colors, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPalette {
    assigned: Vec<(String, &'static str)>,
}

impl CategoryPalette {
    /// Assign colors in first-seen order. Duplicates are ignored; entries
    /// past the color list get the fallback gray.
    pub fn from_categories<'a>(categories: impl Iterator<Item = &'a str>) -> Self {
        let mut assigned: Vec<(String, &'static str)> = Vec::new();
        for category in categories {
            if assigned.iter().any(|(name, _)| name == category) {
                continue;
            }
            let color = COLOR_LIST
                .get(assigned.len())
                .copied()
                .unwrap_or(FALLBACK_COLOR);
            assigned.push((category.to_string(), color));
        }
        Self { assigned }
    }

    pub fn color_of(&self, category: &str) -> &'static str {
        self.assigned
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, color)| *color)
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Distinct categories seen, uncapped.
    pub fn category_count(&self) -> usize {
        self.assigned.len()
    }

    /// Colors drawn from the fixed list, capped at its length.
    pub fn color_count(&self) -> usize {
        self.assigned.len().min(COLOR_LIST.len())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.assigned
            .iter()
            .map(|(name, color)| (name.as_str(), *color))
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
