//! Route stroke colors.

/// Color used when the palette is empty.
pub const FALLBACK_COLOR: &str = "#00bcd4";

/// Colors assigned to vehicle routes, cycling by vehicle position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(["#e91e63", "#3f51b5", "#4caf50", "#ff9800"])
    }
}

impl Palette {
    /// Creates a palette from a list of CSS colors.
    pub fn new<S: Into<String>>(colors: impl IntoIterator<Item = S>) -> Self {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the palette holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Palette index and color for the `vehicle_index`-th route.
    pub fn pick(&self, vehicle_index: usize) -> (usize, &str) {
        if self.colors.is_empty() {
            return (0, FALLBACK_COLOR);
        }
        let i = vehicle_index % self.colors.len();
        (i, self.colors[i].as_str())
    }
}
