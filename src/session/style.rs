//! Tile styling keyed by value.

/// CSS-style class for a cell: `square-0`, `square-2`, `square-4`, ...
#[must_use]
pub fn tile_class(value: u32) -> String {
    format!("square-{}", value)
}

/// Text shown in a cell. Empty cells render blank.
#[must_use]
pub fn tile_label(value: u32) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}
