//! 5x7 bitmap font covering the Russian alphabet.
//!
//! Each glyph is seven rows; bit 4 of a row is the leftmost dot.

pub(crate) const GLYPH_WIDTH: u32 = 5;
pub(crate) const GLYPH_HEIGHT: u32 = 7;
/// Horizontal distance between glyph origins, in dots.
pub(crate) const ADVANCE: u32 = GLYPH_WIDTH + 1;

const MISSING: [u8; 7] = [
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
];

/// Glyph rows for a character; case is ignored.
pub(crate) fn glyph(c: char) -> [u8; 7] {
    let upper = c.to_uppercase().next().unwrap_or(c);
    match upper {
        'А' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'Б' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b11110],
        'В' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'Г' => [0b11111, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000],
        'Д' => [0b00110, 0b01010, 0b01010, 0b01010, 0b01010, 0b11111, 0b10001],
        'Е' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'Ё' => [0b01010, 0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'Ж' => [0b10101, 0b10101, 0b10101, 0b01110, 0b10101, 0b10101, 0b10101],
        'З' => [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
        'И' => [0b10001, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b10001],
        'Й' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b10001],
        'К' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'Л' => [0b00111, 0b01001, 0b01001, 0b01001, 0b01001, 0b01001, 0b10001],
        'М' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'Н' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'О' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'П' => [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001],
        'Р' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'С' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'Т' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'У' => [0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b10001, 0b01110],
        'Ф' => [0b00100, 0b01110, 0b10101, 0b10101, 0b10101, 0b01110, 0b00100],
        'Х' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Ц' => [0b10010, 0b10010, 0b10010, 0b10010, 0b10010, 0b11111, 0b00001],
        'Ч' => [0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b00001],
        'Ш' => [0b10101, 0b10101, 0b10101, 0b10101, 0b10101, 0b10101, 0b11111],
        'Щ' => [0b10101, 0b10101, 0b10101, 0b10101, 0b10101, 0b11111, 0b00001],
        'Ъ' => [0b11000, 0b01000, 0b01000, 0b01110, 0b01001, 0b01001, 0b01110],
        'Ы' => [0b10001, 0b10001, 0b10001, 0b11101, 0b10011, 0b10011, 0b11101],
        'Ь' => [0b10000, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b11110],
        'Э' => [0b01110, 0b10001, 0b00001, 0b00111, 0b00001, 0b10001, 0b01110],
        'Ю' => [0b10010, 0b10101, 0b10101, 0b11101, 0b10101, 0b10101, 0b10010],
        'Я' => [0b01111, 0b10001, 0b10001, 0b01111, 0b00101, 0b01001, 0b10001],
        _ => MISSING,
    }
}

/// Size in dots of a word set in this font.
pub(crate) fn measure(word: &str) -> (u32, u32) {
    let chars = word.chars().count() as u32;
    if chars == 0 {
        return (0, 0);
    }
    (chars * ADVANCE - 1, GLYPH_HEIGHT)
}

/// Positions of lit dots for a word, relative to its top-left corner.
pub(crate) fn dots(word: &str) -> impl Iterator<Item = (u32, u32)> + '_ {
    word.chars().enumerate().flat_map(|(index, c)| {
        let rows = glyph(c);
        let origin = index as u32 * ADVANCE;
        (0..GLYPH_HEIGHT).flat_map(move |row| {
            (0..GLYPH_WIDTH).filter_map(move |col| {
                let lit = (rows[row as usize] >> (GLYPH_WIDTH - 1 - col)) & 1 == 1;
                lit.then_some((origin + col, row))
            })
        })
    })
}
