// Bundled keyboard grids.
//
// Each grid is a list of rows, top row first. Rows are ragged; the column of
// a key is its index within its row, so staggered physical rows are treated
// as left-aligned.

/// US QWERTY, unshifted.
pub const QWERTY_UNSHIFTED: &[&[char]] = &[
    &['`', '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '-', '='],
    &['q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p', '[', ']', '\\'],
    &['a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l', ';', '\''],
    &['z', 'x', 'c', 'v', 'b', 'n', 'm', ',', '.', '/'],
];

/// US QWERTY, shifted.
pub const QWERTY_SHIFTED: &[&[char]] = &[
    &['~', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+'],
    &['Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P', '{', '}', '|'],
    &['A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L', ':', '"'],
    &['Z', 'X', 'C', 'V', 'B', 'N', 'M', '<', '>', '?'],
];

/// US Dvorak, unshifted.
pub const DVORAK_UNSHIFTED: &[&[char]] = &[
    &['`', '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '[', ']'],
    &['\'', ',', '.', 'p', 'y', 'f', 'g', 'c', 'r', 'l', '/', '=', '\\'],
    &['a', 'o', 'e', 'u', 'i', 'd', 'h', 't', 'n', 's', '-'],
    &[';', 'q', 'j', 'k', 'x', 'b', 'm', 'w', 'v', 'z'],
];

/// US Dvorak, shifted.
pub const DVORAK_SHIFTED: &[&[char]] = &[
    &['~', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '{', '}'],
    &['"', '<', '>', 'P', 'Y', 'F', 'G', 'C', 'R', 'L', '?', '+', '|'],
    &['A', 'O', 'E', 'U', 'I', 'D', 'H', 'T', 'N', 'S', '_'],
    &[':', 'Q', 'J', 'K', 'X', 'B', 'M', 'W', 'V', 'Z'],
];

/// Every bundled layout as `(name, unshifted, shifted)`.
pub const BUILTIN_LAYOUTS: &[(&str, &[&[char]], &[&[char]])] = &[
    ("QWERTY", QWERTY_UNSHIFTED, QWERTY_SHIFTED),
    ("DVORAK", DVORAK_UNSHIFTED, DVORAK_SHIFTED),
];

/// Copy a compile-time grid into the owned form used by `KeyboardLayout`.
pub fn to_grid(rows: &[&[char]]) -> Vec<Vec<char>> {
    rows.iter().map(|row| row.to_vec()).collect()
}
