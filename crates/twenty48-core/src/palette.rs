//! Tile background colors as CSS hex strings.

/// Background of an empty cell.
pub const EMPTY_COLOR: &str = "#cdc1b4";

/// Used for any value past the end of [`TILE_COLORS`].
pub const FALLBACK_COLOR: &str = "#3c3a32";

pub const TILE_COLORS: [(u64, &str); 11] = [
    (2, "#eee4da"),
    (4, "#ede0c8"),
    (8, "#f2b179"),
    (16, "#f59563"),
    (32, "#f67c5f"),
    (64, "#f65e3b"),
    (128, "#edcf72"),
    (256, "#edcc61"),
    (512, "#edc850"),
    (1024, "#edc53f"),
    (2048, "#edc22e"),
];

pub fn tile_color(value: u64) -> &'static str {
    if value == 0 {
        return EMPTY_COLOR;
    }
    TILE_COLORS
        .iter()
        .find(|(v, _)| *v == value)
        .map_or(FALLBACK_COLOR, |&(_, color)| color)
}
